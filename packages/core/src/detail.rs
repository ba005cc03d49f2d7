//! Workflow behind the job detail modal: view a record, edit it, save it.

use thiserror::Error;

use crate::error::{FormErrors, RequestError};
use crate::form::JobForm;
use crate::job::{Job, JobId, JobPayload};
use crate::notify::Notification;
use crate::store::LoadOutcome;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailState {
    #[default]
    Closed,
    Viewing,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEvent {
    Open,
    Edit,
    Saved,
    Cancel,
    Close,
}

impl DetailState {
    /// Transition table. `None` means the event is not allowed here.
    pub fn on(self, event: DetailEvent) -> Option<DetailState> {
        use DetailEvent as E;
        use DetailState as S;

        match (self, event) {
            (_, E::Open) => Some(S::Viewing),
            (S::Viewing, E::Edit) => Some(S::Editing),
            (S::Editing, E::Saved | E::Cancel) => Some(S::Viewing),
            (S::Viewing | S::Editing, E::Close) => Some(S::Closed),
            _ => None,
        }
    }
}

/// Why a save did not start.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SaveRejected {
    #[error("not editing a job")]
    NotEditing,
    #[error("a save is already in flight")]
    Busy,
    #[error(transparent)]
    Invalid(#[from] FormErrors),
}

/// An update to issue. Hand it back to [`DetailWorkflow::finish_save`].
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub id: JobId,
    pub payload: JobPayload,
    /// Modal session the save was started in.
    session: u64,
}

/// How an update settled.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Updated(Job),
    Failed(RequestError),
}

impl SaveOutcome {
    pub fn notification(&self) -> Notification {
        match self {
            SaveOutcome::Updated(_) => Notification::success("Job updated"),
            SaveOutcome::Failed(e) => Notification::request_failed("Update failed", e),
        }
    }

    /// The id to hand to the parent so it can refetch.
    pub fn updated_id(&self) -> Option<JobId> {
        match self {
            SaveOutcome::Updated(job) => Some(job.id),
            SaveOutcome::Failed(_) => None,
        }
    }
}

/// The selected record, its shadow form, and the modal state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailWorkflow {
    pub form: JobForm,
    selected: Option<Job>,
    errors: FormErrors,
    state: DetailState,
    saving: bool,
    /// Bumped on every open and close.
    session: u64,
}

impl DetailWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DetailState {
        self.state
    }

    pub fn selected(&self) -> Option<&Job> {
        self.selected.as_ref()
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_open(&self) -> bool {
        self.state != DetailState::Closed
    }

    pub fn is_editing(&self) -> bool {
        self.state == DetailState::Editing
    }

    /// Disables the save control.
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    fn apply(&mut self, event: DetailEvent) -> bool {
        match self.state.on(event) {
            Some(next) => {
                tracing::debug!(from = ?self.state, to = ?next, ?event, "detail workflow");
                self.state = next;
                true
            }
            None => {
                tracing::debug!(state = ?self.state, ?event, "ignored detail event");
                false
            }
        }
    }

    /// Show `job`, discarding whatever was selected before.
    pub fn open(&mut self, job: Job) {
        self.apply(DetailEvent::Open);
        self.session += 1;
        self.form = JobForm::from_job(&job);
        self.selected = Some(job);
        self.errors.clear();
        self.saving = false;
    }

    /// Switch from viewing to editing the last-known copy.
    pub fn edit(&mut self) -> bool {
        self.apply(DetailEvent::Edit)
    }

    /// Drop edits and go back to viewing.
    pub fn cancel(&mut self) -> bool {
        if !self.apply(DetailEvent::Cancel) {
            return false;
        }
        self.reset_form();
        true
    }

    /// Close the modal, dropping the selection and any unsaved edits.
    pub fn close(&mut self) -> bool {
        if !self.apply(DetailEvent::Close) {
            return false;
        }
        self.session += 1;
        self.selected = None;
        self.form.clear();
        self.errors.clear();
        self.saving = false;
        true
    }

    fn reset_form(&mut self) {
        self.form = self.selected.as_ref().map(JobForm::from_job).unwrap_or_default();
        self.errors.clear();
    }

    /// Validate the shadow form and mark a save as in flight.
    pub fn begin_save(&mut self) -> Result<SaveRequest, SaveRejected> {
        let id = match (&self.state, &self.selected) {
            (DetailState::Editing, Some(job)) => job.id,
            _ => return Err(SaveRejected::NotEditing),
        };
        if self.saving {
            return Err(SaveRejected::Busy);
        }

        match self.form.to_payload() {
            Ok(payload) => {
                self.errors.clear();
                self.saving = true;
                Ok(SaveRequest {
                    id,
                    payload,
                    session: self.session,
                })
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(SaveRejected::Invalid(errors))
            }
        }
    }

    /// Settle the update started by `request`.
    ///
    /// Success returns to viewing the updated record. Failure stays in
    /// editing with the entered values untouched. If the modal was closed or
    /// reopened meanwhile, even on the same record, only the outcome is
    /// reported.
    pub fn finish_save(
        &mut self,
        request: &SaveRequest,
        result: Result<Job, RequestError>,
    ) -> SaveOutcome {
        let id = request.id;
        let current = request.session == self.session;
        if current {
            self.saving = false;
        }

        match result {
            Ok(job) => {
                tracing::info!(%id, "job updated");
                if current && self.apply(DetailEvent::Saved) {
                    self.form = JobForm::from_job(&job);
                    self.selected = Some(job.clone());
                }
                SaveOutcome::Updated(job)
            }
            Err(error) => {
                tracing::warn!(%id, status = error.status, error = %error, "update job failed");
                SaveOutcome::Failed(error)
            }
        }
    }

    /// React to a finished load of `jobs`.
    ///
    /// Only a successful load is followed. A degraded load leaves the modal
    /// as it is, since an empty list says nothing about the selected record.
    pub fn after_load(&mut self, outcome: &LoadOutcome, jobs: &[Job]) {
        if let LoadOutcome::Applied { .. } = outcome {
            self.sync(jobs);
        }
    }

    /// Follow a refetched collection.
    ///
    /// A viewed record is replaced by its fresh copy, or closed if it is gone.
    /// A record being edited is left alone.
    pub fn sync(&mut self, jobs: &[Job]) {
        if self.state != DetailState::Viewing {
            return;
        }
        let Some(id) = self.selected.as_ref().map(|job| job.id) else {
            return;
        };

        match jobs.iter().find(|job| job.id == id) {
            Some(fresh) if self.selected.as_ref() != Some(fresh) => {
                self.form = JobForm::from_job(fresh);
                self.selected = Some(fresh.clone());
            }
            Some(_) => {}
            None => {
                tracing::debug!(%id, "selected job no longer listed, closing");
                self.close();
            }
        }
    }
}
