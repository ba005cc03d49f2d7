//! Create job form component.

use api::{HttpJobsClient, JobsApi};
use dioxus::prelude::*;
use tracker_core::{CreateOutcome, CreateWorkflow, JobId, SubmitRejected};

use super::{JobFields, Notifier};

/// Props for CreateJobForm component.
#[derive(Props, Clone, PartialEq)]
pub struct CreateJobFormProps {
    /// Callback with the new record's id once it is stored.
    pub on_created: EventHandler<JobId>,
}

/// Form component for adding a job application.
#[component]
pub fn CreateJobForm(props: CreateJobFormProps) -> Element {
    let client = use_context::<HttpJobsClient>();
    let notifier = use_context::<Notifier>();
    let mut workflow = use_signal(CreateWorkflow::new);
    let on_created = props.on_created;

    let submit = move |e: FormEvent| {
        e.prevent_default();

        let payload = match workflow.write().begin_submit() {
            Ok(payload) => payload,
            Err(SubmitRejected::Busy) => return,
            Err(SubmitRejected::Invalid(errors)) => {
                tracing::debug!(invalid = errors.0.len(), "create form rejected");
                return;
            }
        };

        let client = client.clone();
        spawn(async move {
            let result = client.create_job(&payload).await;
            let outcome = workflow.write().finish_submit(result);
            notifier.push(outcome.notification());
            if let CreateOutcome::Created(job) = outcome {
                on_created.call(job.id);
            }
        });
    };

    let submitting = workflow.read().is_submitting();
    let form = workflow.read().form.clone();
    let errors = workflow.read().errors().clone();

    rsx! {
        form { class: "create-job-form",
            onsubmit: submit,

            h3 { "Add Job" }

            JobFields {
                form,
                errors,
                id_prefix: "create",
                disabled: submitting,
                on_change: move |form| workflow.write().form = form,
            }

            div { class: "form-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting,
                    if submitting { "Saving..." } else { "Add Job" }
                }
            }
        }
    }
}
