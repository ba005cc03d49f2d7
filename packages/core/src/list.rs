//! View-models for the job list: row text and the delete confirmation flow.

use crate::date::display_date;
use crate::error::RequestError;
use crate::job::{Job, JobId};
use crate::notify::Notification;

const PLACEHOLDER: &str = "—";
const SEPARATOR: &str = " • ";

/// Text shown for one job in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub id: JobId,
    pub primary: String,
    pub secondary: String,
}

impl JobRowView {
    pub fn new(job: &Job) -> Self {
        Self {
            id: job.id,
            primary: primary_line(job),
            secondary: secondary_line(job),
        }
    }
}

/// `"{title} @ {company}"` with a dash standing in for blanks.
pub fn primary_line(job: &Job) -> String {
    let or_dash = |s: &str| {
        if s.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            s.to_string()
        }
    };
    format!("{} @ {}", or_dash(&job.title), or_dash(&job.company))
}

/// Status, source and applied date joined with bullets, then the notes.
pub fn secondary_line(job: &Job) -> String {
    let mut parts = Vec::new();
    if let Some(status) = job.status {
        parts.push(status.as_str().to_string());
    }
    if let Some(source) = job.source.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("Source: {}", source));
    }
    if let Some(date) = job.date_applied.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("Applied: {}", display_date(date)));
    }

    let mut line = parts.join(SEPARATOR);
    if let Some(notes) = job.notes.as_deref().filter(|s| !s.is_empty()) {
        line.push_str(" — ");
        line.push_str(notes);
    }
    line
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteState {
    #[default]
    Idle,
    Confirming(JobId),
    Deleting(JobId),
}

/// How a delete request settled.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted(JobId),
    Failed(RequestError),
}

impl DeleteOutcome {
    pub fn notification(&self) -> Notification {
        match self {
            DeleteOutcome::Deleted(_) => Notification::success("Job Deleted!"),
            DeleteOutcome::Failed(e) => Notification::request_failed("Delete failed", e),
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted(_))
    }
}

/// Confirmation gate in front of delete. Nothing is sent until `confirm`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteFlow {
    state: DeleteState,
}

impl DeleteFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DeleteState {
        self.state
    }

    /// The job the confirmation prompt is asking about.
    pub fn pending(&self) -> Option<JobId> {
        match self.state {
            DeleteState::Confirming(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_deleting(&self, id: JobId) -> bool {
        self.state == DeleteState::Deleting(id)
    }

    /// Ask for confirmation. Ignored while another delete is in flight.
    pub fn request(&mut self, id: JobId) -> bool {
        if matches!(self.state, DeleteState::Deleting(_)) {
            return false;
        }
        self.state = DeleteState::Confirming(id);
        true
    }

    /// Close the prompt without deleting.
    pub fn dismiss(&mut self) {
        if matches!(self.state, DeleteState::Confirming(_)) {
            self.state = DeleteState::Idle;
        }
    }

    /// Confirm the prompt; returns the id to delete.
    pub fn confirm(&mut self) -> Option<JobId> {
        let id = self.pending()?;
        self.state = DeleteState::Deleting(id);
        Some(id)
    }

    /// Settle the delete request for `id`.
    pub fn finish(&mut self, id: JobId, result: Result<(), RequestError>) -> DeleteOutcome {
        if self.state == DeleteState::Deleting(id) {
            self.state = DeleteState::Idle;
        }
        match result {
            Ok(()) => {
                tracing::info!(%id, "job deleted");
                DeleteOutcome::Deleted(id)
            }
            Err(error) => {
                tracing::warn!(%id, status = error.status, error = %error, "delete job failed");
                DeleteOutcome::Failed(error)
            }
        }
    }
}
