//! Job list: owns the collection, the delete flow and the detail modal.

use api::{HttpJobsClient, JobsApi};
use dioxus::prelude::*;
use tracker_core::{CollectionStore, DeleteFlow, DetailWorkflow, RefetchToken};

use super::{ConfirmDialog, JobRow, JobViewModal, Notifier};

const DELETE_PROMPT: &str = "Are you sure you want to delete this job?";

/// Props for JobList component.
#[derive(Props, Clone, PartialEq)]
pub struct JobListProps {
    /// Reloads the list whenever it moves. Bumped here after edits and deletes.
    pub refetch: Signal<RefetchToken>,
}

/// Lists every job and reloads it on mount and on each refetch.
#[component]
pub fn JobList(props: JobListProps) -> Element {
    let client = use_context::<HttpJobsClient>();
    let notifier = use_context::<Notifier>();
    let mut refetch = props.refetch;
    let mut store = use_signal(CollectionStore::new);
    let mut detail = use_signal(DetailWorkflow::new);
    let mut deletes = use_signal(DeleteFlow::new);

    let load_client = client.clone();
    use_effect(move || {
        let token = refetch();
        let client = load_client.clone();
        spawn(async move {
            let ticket = store.write().begin_load();
            tracing::debug!(refetch = token.0, "loading jobs");
            let result = client.list_jobs().await;
            let outcome = store.write().finish_load(ticket, result);
            detail.write().after_load(&outcome, store.read().jobs());
        });
    });

    let confirm_delete = move |_| {
        let Some(id) = deletes.write().confirm() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            let result = client.delete_job(id).await;
            let outcome = deletes.write().finish(id, result);
            notifier.push(outcome.notification());
            if outcome.is_deleted() {
                refetch.write().bump();
            }
        });
    };

    let loading = store.read().is_loading();
    let jobs = store.read().jobs().to_vec();
    let pending = deletes.read().pending();

    rsx! {
        div { class: "job-list",
            h3 { class: "job-list-title", "Jobs" }

            if loading {
                div { class: "loading", "Loading jobs..." }
            } else if jobs.is_empty() {
                div { class: "empty-state",
                    p { "No jobs yet" }
                }
            } else {
                ul { class: "job-rows",
                    for job in jobs {
                        JobRow {
                            key: "{job.id}",
                            deleting: deletes.read().is_deleting(job.id),
                            job: job.clone(),
                            on_select: move |job| detail.write().open(job),
                            on_delete: move |id| {
                                deletes.write().request(id);
                            },
                        }
                    }
                }
            }
        }

        if pending.is_some() {
            ConfirmDialog {
                message: DELETE_PROMPT.to_string(),
                on_confirm: confirm_delete,
                on_cancel: move |_| deletes.write().dismiss(),
            }
        }

        JobViewModal {
            detail,
            on_saved: move |_| refetch.write().bump(),
        }
    }
}
