//! Job tracker components.

mod confirm_dialog;
mod create_job_form;
mod job_fields;
mod job_list;
mod job_row;
mod job_tracker;
mod job_view_modal;
mod status_badge;
mod toasts;

pub use confirm_dialog::ConfirmDialog;
pub use create_job_form::CreateJobForm;
pub use job_fields::JobFields;
pub use job_list::JobList;
pub use job_row::JobRow;
pub use job_tracker::JobTracker;
pub use job_view_modal::JobViewModal;
pub use status_badge::StatusBadge;
pub use toasts::{Notifier, Toasts};
