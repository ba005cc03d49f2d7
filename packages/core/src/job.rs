//! Job application records and their vocabularies.

use serde::{Deserialize, Deserializer, Serialize};

use crate::date::normalize_date_applied;
use crate::error::{Field, ValidationError};

/// Server-assigned identifier of a job record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub i64);

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where an application currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Applied,
    Pending,
    Interviewing,
    Offer,
    Rejected,
    NotApplied,
}

impl JobStatus {
    /// Every status, in the order the forms offer them.
    pub const ALL: [JobStatus; 6] = [
        JobStatus::Applied,
        JobStatus::Pending,
        JobStatus::Interviewing,
        JobStatus::Offer,
        JobStatus::Rejected,
        JobStatus::NotApplied,
    ];

    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Applied => "applied",
            JobStatus::Pending => "pending",
            JobStatus::Interviewing => "interviewing",
            JobStatus::Offer => "offer",
            JobStatus::Rejected => "rejected",
            JobStatus::NotApplied => "not_applied",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Applied => "Applied",
            JobStatus::Pending => "Pending",
            JobStatus::Interviewing => "Interviewing",
            JobStatus::Offer => "Offer",
            JobStatus::Rejected => "Rejected",
            JobStatus::NotApplied => "Not Applied",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JobStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A status string outside the known vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown job status: {0:?}")]
pub struct UnknownStatus(pub String);

/// Places offered as suggestions; any other text is accepted too.
pub const PLACE_SUGGESTIONS: [&str; 8] = [
    "Bangalore",
    "Hyderabad",
    "Mumbai",
    "Delhi",
    "Chennai",
    "Pune",
    "Kolkata",
    "Remote",
];

/// Suggestions containing `input`, case-insensitively.
pub fn suggest_places(input: &str) -> Vec<&'static str> {
    let needle = input.trim().to_lowercase();
    PLACE_SUGGESTIONS
        .into_iter()
        .filter(|place| place.to_lowercase().contains(&needle))
        .collect()
}

/// Format a salary for display.
pub fn format_salary(salary: f64) -> String {
    format!("$ {}", salary)
}

/// Empty or unrecognised statuses decode as unset.
fn status_or_unset<'de, D>(deserializer: D) -> Result<Option<JobStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(|s| s.parse().ok()))
}

/// A tracked job application as held by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(
        default,
        deserialize_with = "status_or_unset",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<JobStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    /// ISO-8601 string exactly as stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_applied: Option<String>,
}

impl Job {
    /// Build the record the server holds after accepting `payload` under `id`.
    pub fn from_payload(id: JobId, payload: JobPayload) -> Self {
        Self {
            id,
            title: payload.title,
            company: payload.company,
            status: payload.status,
            notes: payload.notes,
            source: payload.source,
            place: payload.place,
            salary: payload.salary,
            date_applied: payload.date_applied,
        }
    }

    /// Every field except the id.
    pub fn payload(&self) -> JobPayload {
        JobPayload {
            title: self.title.clone(),
            company: self.company.clone(),
            status: self.status,
            notes: self.notes.clone(),
            source: self.source.clone(),
            place: self.place.clone(),
            salary: self.salary,
            date_applied: self.date_applied.clone(),
        }
    }
}

/// Request body for create and update: a job without its id.
///
/// Unset fields go out as `null` so an update clears them on the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPayload {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub status: Option<JobStatus>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub salary: Option<f64>,
    #[serde(default)]
    pub date_applied: Option<String>,
}

impl JobPayload {
    pub fn new(title: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    pub fn with_salary(mut self, salary: f64) -> Self {
        self.salary = Some(salary);
        self
    }

    pub fn with_date_applied(mut self, date_applied: impl Into<String>) -> Self {
        self.date_applied = Some(date_applied.into());
        self
    }

    /// Check the invariants a payload must hold before it is sent.
    ///
    /// Reports the first violation found, in field order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::Required(Field::Title));
        }
        if self.company.trim().is_empty() {
            return Err(ValidationError::Required(Field::Company));
        }
        if let Some(salary) = self.salary {
            if !salary.is_finite() {
                return Err(ValidationError::InvalidSalary(salary.to_string()));
            }
            if salary < 0.0 {
                return Err(ValidationError::NegativeSalary(salary));
            }
        }
        if let Some(date) = &self.date_applied {
            normalize_date_applied(date)?;
        }
        Ok(())
    }
}
