//! Boundary to the remote persistence service.

use crate::error::RequestError;
use crate::job::{Job, JobId, JobPayload};

/// CRUD operations against the job collection.
///
/// Futures are not required to be `Send`: every call is driven from the single
/// UI task executor.
#[allow(async_fn_in_trait)]
pub trait JobsApi {
    /// `GET /jobs`
    async fn list_jobs(&self) -> Result<Vec<Job>, RequestError>;

    /// `POST /jobs`
    async fn create_job(&self, payload: &JobPayload) -> Result<Job, RequestError>;

    /// `PUT /jobs/{id}`
    async fn update_job(&self, id: JobId, payload: &JobPayload) -> Result<Job, RequestError>;

    /// `DELETE /jobs/{id}`
    async fn delete_job(&self, id: JobId) -> Result<(), RequestError>;
}
