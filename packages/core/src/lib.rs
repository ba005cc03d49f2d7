//! Core types and client-side workflows for the job application tracker.
//!
//! This crate contains everything the UI drives, with no rendering or HTTP:
//! - Job records, statuses and the request payload
//! - The collection store with load sequencing
//! - Create, detail/edit and delete workflows
//! - The `JobsApi` boundary implemented by the persistence client

mod client;
mod create;
mod date;
mod detail;
mod error;
mod form;
mod job;
mod list;
mod notify;
mod store;

pub use client::JobsApi;
pub use create::{CreateEvent, CreateOutcome, CreateState, CreateWorkflow, SubmitRejected};
pub use date::{date_input_value, display_date, normalize_date_applied, parse_date_applied, to_wire};
pub use detail::{DetailEvent, DetailState, DetailWorkflow, SaveOutcome, SaveRejected, SaveRequest};
pub use error::{Field, FormErrors, RequestError, RequestErrorKind, ValidationError};
pub use form::JobForm;
pub use job::{
    format_salary, suggest_places, Job, JobId, JobPayload, JobStatus, UnknownStatus,
    PLACE_SUGGESTIONS,
};
pub use list::{primary_line, secondary_line, DeleteFlow, DeleteOutcome, DeleteState, JobRowView};
pub use notify::{Notification, NotificationKind};
pub use store::{CollectionStore, LoadOutcome, LoadTicket, RefetchToken};
