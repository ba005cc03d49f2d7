//! In-process implementation of the jobs contract.
//!
//! Behaves like a well-behaved backend: sequential ids, full-payload updates,
//! 404 for unknown ids. Failures can be injected ahead of any request, and
//! every request is recorded so callers can assert on what was sent.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use tracker_core::{Job, JobId, JobPayload, JobsApi, RequestError};

/// A request as received by [`InMemoryJobsApi`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedRequest {
    List,
    Create(JobPayload),
    Update(JobId, JobPayload),
    Delete(JobId),
}

#[derive(Debug, Default)]
struct State {
    jobs: Vec<Job>,
    next_id: i64,
    failures: VecDeque<RequestError>,
    requests: Vec<RecordedRequest>,
}

/// Shared handle; clones see the same collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJobsApi {
    state: Arc<Mutex<State>>,
}

impl InMemoryJobsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `jobs` already stored.
    pub fn with_jobs(jobs: Vec<Job>) -> Self {
        let api = Self::new();
        {
            let mut state = api.lock();
            state.next_id = jobs.iter().map(|j| j.id.0).max().unwrap_or(0);
            state.jobs = jobs;
        }
        api
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Make the next request fail with `status`.
    pub fn fail_next(&self, status: u16) {
        self.fail_next_with(RequestError::status(status, "injected failure"));
    }

    /// Make the next request fail with `error`.
    pub fn fail_next_with(&self, error: RequestError) {
        self.lock().failures.push_back(error);
    }

    /// Snapshot of the stored collection.
    pub fn jobs(&self) -> Vec<Job> {
        self.lock().jobs.clone()
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    /// Record `request` and pop an injected failure if one is queued.
    fn receive(&self, request: RecordedRequest) -> Result<MutexGuard<'_, State>, RequestError> {
        let mut state = self.lock();
        tracing::debug!(?request, "in-memory jobs api");
        state.requests.push(request);
        match state.failures.pop_front() {
            Some(error) => Err(error),
            None => Ok(state),
        }
    }
}

fn not_found(id: JobId) -> RequestError {
    RequestError::status(404, format!("Job {} not found", id))
}

impl JobsApi for InMemoryJobsApi {
    async fn list_jobs(&self) -> Result<Vec<Job>, RequestError> {
        let state = self.receive(RecordedRequest::List)?;
        Ok(state.jobs.clone())
    }

    async fn create_job(&self, payload: &JobPayload) -> Result<Job, RequestError> {
        let mut state = self.receive(RecordedRequest::Create(payload.clone()))?;
        payload
            .validate()
            .map_err(|e| RequestError::status(422, e.to_string()))?;

        state.next_id += 1;
        let job = Job::from_payload(JobId(state.next_id), payload.clone());
        state.jobs.push(job.clone());
        Ok(job)
    }

    async fn update_job(&self, id: JobId, payload: &JobPayload) -> Result<Job, RequestError> {
        let mut state = self.receive(RecordedRequest::Update(id, payload.clone()))?;
        payload
            .validate()
            .map_err(|e| RequestError::status(422, e.to_string()))?;

        let slot = state
            .jobs
            .iter_mut()
            .find(|job| job.id == id)
            .ok_or_else(|| not_found(id))?;
        *slot = Job::from_payload(id, payload.clone());
        Ok(slot.clone())
    }

    async fn delete_job(&self, id: JobId) -> Result<(), RequestError> {
        let mut state = self.receive(RecordedRequest::Delete(id))?;
        let before = state.jobs.len();
        state.jobs.retain(|job| job.id != id);
        if state.jobs.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}
