//! Workflow behind the "new job" form.

use thiserror::Error;

use crate::error::{FormErrors, RequestError};
use crate::form::JobForm;
use crate::job::{Job, JobPayload};
use crate::notify::Notification;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CreateState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateEvent {
    Submit,
    Succeeded,
    Failed,
    Settle,
}

impl CreateState {
    /// Transition table. `None` means the event is not allowed here.
    pub fn on(self, event: CreateEvent) -> Option<CreateState> {
        use CreateEvent as E;
        use CreateState as S;

        match (self, event) {
            (S::Idle, E::Submit) => Some(S::Submitting),
            (S::Submitting, E::Succeeded) => Some(S::Success),
            (S::Submitting, E::Failed) => Some(S::Error),
            (S::Success | S::Error, E::Settle) => Some(S::Idle),
            _ => None,
        }
    }
}

/// Why a submit did not start.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitRejected {
    #[error("a create request is already in flight")]
    Busy,
    #[error(transparent)]
    Invalid(#[from] FormErrors),
}

/// How a create request settled.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    Created(Job),
    Failed(RequestError),
}

impl CreateOutcome {
    pub fn notification(&self) -> Notification {
        match self {
            CreateOutcome::Created(_) => Notification::success("Job created!"),
            CreateOutcome::Failed(e) => Notification::request_failed("Failed to create job", e),
        }
    }

    /// Whether the collection should be refetched.
    pub fn is_created(&self) -> bool {
        matches!(self, CreateOutcome::Created(_))
    }
}

/// Form values, inline errors, and the submit state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateWorkflow {
    pub form: JobForm,
    errors: FormErrors,
    state: CreateState,
}

impl CreateWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CreateState {
        self.state
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Disables the submit control.
    pub fn is_submitting(&self) -> bool {
        self.state == CreateState::Submitting
    }

    fn apply(&mut self, event: CreateEvent) -> bool {
        match self.state.on(event) {
            Some(next) => {
                tracing::debug!(from = ?self.state, to = ?next, ?event, "create workflow");
                self.state = next;
                true
            }
            None => false,
        }
    }

    /// Validate the form and enter `Submitting`.
    ///
    /// Returns the payload to send. Validation failures are kept for inline
    /// display and nothing is sent.
    pub fn begin_submit(&mut self) -> Result<JobPayload, SubmitRejected> {
        if self.state != CreateState::Idle {
            return Err(SubmitRejected::Busy);
        }

        match self.form.to_payload() {
            Ok(payload) => {
                self.errors.clear();
                self.apply(CreateEvent::Submit);
                Ok(payload)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(SubmitRejected::Invalid(errors))
            }
        }
    }

    /// Settle the in-flight request and return to `Idle`.
    ///
    /// On success the form is cleared; on failure the entered values stay.
    pub fn finish_submit(&mut self, result: Result<Job, RequestError>) -> CreateOutcome {
        let outcome = match result {
            Ok(job) => {
                self.apply(CreateEvent::Succeeded);
                self.form.clear();
                tracing::info!(id = %job.id, "job created");
                CreateOutcome::Created(job)
            }
            Err(error) => {
                self.apply(CreateEvent::Failed);
                tracing::warn!(status = error.status, error = %error, "create job failed");
                CreateOutcome::Failed(error)
            }
        };
        self.apply(CreateEvent::Settle);
        outcome
    }
}
