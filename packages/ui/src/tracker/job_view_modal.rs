//! Detail modal: view a job, switch to editing, save or cancel.

use api::{HttpJobsClient, JobsApi};
use dioxus::prelude::*;
use tracker_core::{DetailWorkflow, Job, JobId, SaveRejected, display_date, format_salary};

use super::{JobFields, Notifier, StatusBadge};

/// Props for JobViewModal component.
#[derive(Props, Clone, PartialEq)]
pub struct JobViewModalProps {
    /// Workflow owned by the list.
    pub detail: Signal<DetailWorkflow>,
    /// Callback with the id of a successfully saved job.
    pub on_saved: EventHandler<JobId>,
}

/// Modal over the selected job. Renders nothing while closed.
#[component]
pub fn JobViewModal(props: JobViewModalProps) -> Element {
    let client = use_context::<HttpJobsClient>();
    let notifier = use_context::<Notifier>();
    let mut detail = props.detail;
    let on_saved = props.on_saved;

    let save = move |_| {
        let request = match detail.write().begin_save() {
            Ok(request) => request,
            Err(SaveRejected::Invalid(errors)) => {
                tracing::debug!(invalid = errors.0.len(), "edit form rejected");
                return;
            }
            Err(_) => return,
        };

        let client = client.clone();
        spawn(async move {
            let result = client.update_job(request.id, &request.payload).await;
            let outcome = detail.write().finish_save(&request, result);
            notifier.push(outcome.notification());
            if let Some(id) = outcome.updated_id() {
                on_saved.call(id);
            }
        });
    };

    let workflow = detail.read().clone();
    let Some(job) = workflow.selected().cloned() else {
        return rsx! {};
    };
    let saving = workflow.is_saving();

    rsx! {
        div { class: "modal-backdrop",
            onclick: move |_| {
                detail.write().close();
            },

            div { class: "modal job-view-modal",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h2 { "{job.title}" }
                    span { class: "modal-subtitle", "{job.company}" }
                    button {
                        class: "btn-close",
                        onclick: move |_| {
                            detail.write().close();
                        },
                        "×"
                    }
                }

                if workflow.is_editing() {
                    div { class: "modal-body",
                        JobFields {
                            form: workflow.form.clone(),
                            errors: workflow.errors().clone(),
                            id_prefix: "edit-{job.id}",
                            disabled: saving,
                            on_change: move |form| detail.write().form = form,
                        }
                    }
                    div { class: "form-actions",
                        button {
                            class: "btn btn-primary",
                            disabled: saving,
                            onclick: save,
                            if saving { "Saving..." } else { "Save" }
                        }
                        button {
                            class: "btn btn-secondary",
                            disabled: saving,
                            onclick: move |_| {
                                detail.write().cancel();
                            },
                            "Cancel"
                        }
                    }
                } else {
                    JobSummary { job: job.clone() }
                    div { class: "form-actions",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                detail.write().edit();
                            },
                            "Edit"
                        }
                    }
                }
            }
        }
    }
}

/// Read-only view of one job's fields.
#[component]
fn JobSummary(job: Job) -> Element {
    let salary = match job.salary {
        Some(s) if s != 0.0 => format_salary(s),
        _ => "—".to_string(),
    };
    let place = job.place.clone().filter(|s| !s.is_empty());
    let source = job.source.clone().filter(|s| !s.is_empty());
    let notes = job.notes.clone().filter(|s| !s.is_empty());
    let applied = job
        .date_applied
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(display_date);

    rsx! {
        dl { class: "job-summary",
            dt { "Status" }
            dd { StatusBadge { status: job.status } }

            if let Some(place) = place {
                dt { "Place" }
                dd { "{place}" }
            }

            dt { "Salary" }
            dd { "{salary}" }

            if let Some(source) = source {
                dt { "Source" }
                dd { "{source}" }
            }

            if let Some(applied) = applied {
                dt { "Date applied" }
                dd { "{applied}" }
            }

            if let Some(notes) = notes {
                dt { "Notes" }
                dd { class: "job-notes", "{notes}" }
            }
        }
    }
}
