//! Persistence client for the job tracker backend.
//!
//! This crate contains:
//! - `ClientConfig`, loaded from the environment
//! - `HttpJobsClient`, the reqwest implementation of `JobsApi`
//! - `InMemoryJobsApi`, an in-process implementation of the same contract

mod config;
mod http;
pub mod mock;

pub use config::{
    BASE_URL_ENV, ClientConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, TIMEOUT_ENV,
};
pub use http::HttpJobsClient;
pub use mock::{InMemoryJobsApi, RecordedRequest};

// Re-export core types for convenience
pub use tracker_core::{Job, JobId, JobPayload, JobStatus, JobsApi, RequestError};
