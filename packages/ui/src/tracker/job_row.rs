//! Job row component for displaying a single job in the list.

use dioxus::prelude::*;
use tracker_core::{Job, JobId, JobRowView};

use super::StatusBadge;

/// Props for JobRow component.
#[derive(Props, Clone, PartialEq)]
pub struct JobRowProps {
    /// The job to display.
    pub job: Job,
    /// Whether a delete for this job is in flight.
    #[props(default = false)]
    pub deleting: bool,
    /// Callback when the row is clicked.
    pub on_select: EventHandler<Job>,
    /// Callback when delete is clicked.
    pub on_delete: EventHandler<JobId>,
}

/// One list entry: title and company, then the status line.
#[component]
pub fn JobRow(props: JobRowProps) -> Element {
    let view = JobRowView::new(&props.job);
    let job = props.job.clone();
    let id = job.id;

    rsx! {
        li {
            class: "job-row",
            onclick: move |_| props.on_select.call(job.clone()),

            div { class: "job-row-text",
                span { class: "job-primary", "{view.primary}" }
                span { class: "job-secondary", "{view.secondary}" }
            }
            StatusBadge { status: props.job.status }
            button {
                class: "btn btn-small btn-danger",
                disabled: props.deleting,
                onclick: move |e| {
                    e.stop_propagation();
                    props.on_delete.call(id);
                },
                if props.deleting { "Deleting..." } else { "Delete" }
            }
        }
    }
}
