//! Status badge component.

use dioxus::prelude::*;
use tracker_core::JobStatus;

/// Badge for displaying an application's status, or a dash when unset.
#[component]
pub fn StatusBadge(status: Option<JobStatus>) -> Element {
    let bg_class = match status {
        Some(JobStatus::Applied) => "badge-applied",
        Some(JobStatus::Pending) => "badge-pending",
        Some(JobStatus::Interviewing) => "badge-interviewing",
        Some(JobStatus::Offer) => "badge-offer",
        Some(JobStatus::Rejected) => "badge-rejected",
        Some(JobStatus::NotApplied) => "badge-not-applied",
        None => "badge-default",
    };
    let text = status.map(|s| s.label()).unwrap_or("—");

    rsx! {
        span {
            class: "status-badge {bg_class}",
            {text}
        }
    }
}
