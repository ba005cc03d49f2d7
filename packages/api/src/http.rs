//! reqwest-backed persistence client.

use reqwest::Method;
use serde::Deserialize;
use tracing::Instrument;
use tracker_core::{Job, JobId, JobPayload, JobsApi, RequestError, normalize_date_applied};

use crate::config::{ClientConfig, ConfigError};

/// Talks to the job tracker backend over JSON/HTTP.
#[derive(Debug, Clone)]
pub struct HttpJobsClient {
    config: ClientConfig,
    http: reqwest::Client,
}

/// Clients compare by configuration; the connection pool is not part of it.
impl PartialEq for HttpJobsClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

/// Create and update answer with the record, or just its id.
#[derive(Deserialize)]
#[serde(untagged)]
enum MutationBody {
    Job(Job),
    Id(JobId),
}

impl HttpJobsClient {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);

        let http = builder
            .build()
            .map_err(|e| ConfigError::Http(e.to_string()))?;

        tracing::info!(base_url = %config.base_url, label = %config.label, "jobs client ready");
        Ok(Self { config, http })
    }

    /// Build from [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Send one request and return the body of a 2xx answer.
    async fn send(
        &self,
        method: Method,
        path: &str,
        payload: Option<&JobPayload>,
    ) -> Result<(u16, String), RequestError> {
        let span = tracing::info_span!(
            "jobs_api",
            client = %self.config.label,
            method = %method,
            path = %path,
        );

        let mut request = self.http.request(method, self.url(path));
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        async move {
            tracing::debug!("request ->");

            let response = request.send().await.map_err(from_reqwest)?;
            let status = response.status();
            let body = response.text().await.map_err(from_reqwest)?;

            if !status.is_success() {
                tracing::warn!(status = status.as_u16(), body = %body, "request failed");
                return Err(RequestError::status(status.as_u16(), body));
            }

            tracing::debug!(status = status.as_u16(), bytes = body.len(), "response <-");
            Ok((status.as_u16(), body))
        }
        .instrument(span)
        .await
    }
}

fn from_reqwest(error: reqwest::Error) -> RequestError {
    if error.is_timeout() {
        RequestError::timeout(error.to_string())
    } else if error.is_decode() {
        RequestError::decode(error.status().map(|s| s.as_u16()), error.to_string())
    } else if let Some(status) = error.status() {
        RequestError::status(status.as_u16(), error.to_string())
    } else {
        RequestError::transport(error.to_string())
    }
}

/// Validate a payload and put its date in canonical wire form.
fn prepare(payload: &JobPayload) -> Result<JobPayload, RequestError> {
    payload
        .validate()
        .map_err(|e| RequestError::invalid_payload(&e))?;

    let mut prepared = payload.clone();
    if let Some(date) = &payload.date_applied {
        let wire = normalize_date_applied(date).map_err(|e| RequestError::invalid_payload(&e))?;
        prepared.date_applied = Some(wire);
    }
    Ok(prepared)
}

fn decode_list(status: u16, body: &str) -> Result<Vec<Job>, RequestError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str::<Option<Vec<Job>>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| RequestError::decode(Some(status), e.to_string()))
}

/// Rebuild the saved record from the answer, falling back to the sent payload.
fn decode_mutation(
    status: u16,
    body: &str,
    known_id: Option<JobId>,
    payload: JobPayload,
) -> Result<Job, RequestError> {
    if body.trim().is_empty() {
        return known_id
            .map(|id| Job::from_payload(id, payload))
            .ok_or_else(|| RequestError::decode(Some(status), "empty response, expected a job"));
    }

    match serde_json::from_str::<MutationBody>(body) {
        Ok(MutationBody::Job(job)) => Ok(job),
        Ok(MutationBody::Id(id)) => Ok(Job::from_payload(id, payload)),
        Err(e) => Err(RequestError::decode(Some(status), e.to_string())),
    }
}

impl JobsApi for HttpJobsClient {
    async fn list_jobs(&self) -> Result<Vec<Job>, RequestError> {
        let (status, body) = self.send(Method::GET, "/jobs", None).await?;
        decode_list(status, &body)
    }

    async fn create_job(&self, payload: &JobPayload) -> Result<Job, RequestError> {
        let payload = prepare(payload)?;
        let (status, body) = self.send(Method::POST, "/jobs", Some(&payload)).await?;
        decode_mutation(status, &body, None, payload)
    }

    async fn update_job(&self, id: JobId, payload: &JobPayload) -> Result<Job, RequestError> {
        let payload = prepare(payload)?;
        let path = format!("/jobs/{}", id);
        let (status, body) = self.send(Method::PUT, &path, Some(&payload)).await?;
        decode_mutation(status, &body, Some(id), payload)
    }

    async fn delete_job(&self, id: JobId) -> Result<(), RequestError> {
        let path = format!("/jobs/{}", id);
        self.send(Method::DELETE, &path, None).await?;
        Ok(())
    }
}
