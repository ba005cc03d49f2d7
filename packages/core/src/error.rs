//! Error types shared by the workflows and the persistence client.

use thiserror::Error;

/// Form fields that can carry an inline validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Company,
    Salary,
    DateApplied,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Company => "company",
            Field::Salary => "salary",
            Field::DateApplied => "date_applied",
        }
    }
}

/// Client-side validation failure. Raised before any request is issued.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please enter a {}", .0.as_str())]
    Required(Field),
    #[error("Salary must be a number, got {0:?}")]
    InvalidSalary(String),
    #[error("Salary cannot be negative ({0})")]
    NegativeSalary(f64),
    #[error("Not a valid date: {0:?}")]
    InvalidDate(String),
}

impl ValidationError {
    /// The field this message belongs next to.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Required(field) => *field,
            ValidationError::InvalidSalary(_) | ValidationError::NegativeSalary(_) => Field::Salary,
            ValidationError::InvalidDate(_) => Field::DateApplied,
        }
    }
}

/// Every validation failure found in one form, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Error)]
#[error("{} invalid field(s)", .0.len())]
pub struct FormErrors(pub Vec<ValidationError>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Record `error` unless its field already has one.
    pub fn push(&mut self, error: ValidationError) {
        if self.get(error.field()).is_none() {
            self.0.push(error);
        }
    }

    /// The message for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.iter().find(|e| e.field() == field)
    }

    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// How a request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestErrorKind {
    /// The server answered with a non-2xx status.
    Status,
    /// The request never got an answer.
    Transport,
    Timeout,
    /// A 2xx answer whose body could not be decoded.
    Decode,
    /// The payload failed validation at the client boundary.
    InvalidPayload,
}

impl RequestErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestErrorKind::Status => "status",
            RequestErrorKind::Transport => "transport",
            RequestErrorKind::Timeout => "timeout",
            RequestErrorKind::Decode => "decode",
            RequestErrorKind::InvalidPayload => "invalid_payload",
        }
    }
}

/// Failure of a persistence request. Callers only ever look at `status`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe(.kind, .status, .message))]
pub struct RequestError {
    pub kind: RequestErrorKind,
    pub status: Option<u16>,
    pub message: String,
}

fn describe(kind: &RequestErrorKind, status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) if message.is_empty() => format!("request failed with status {}", code),
        Some(code) => format!("request failed with status {}: {}", code, message),
        None => format!("{} error: {}", kind.as_str(), message),
    }
}

impl RequestError {
    /// A non-2xx answer.
    pub fn status(code: u16, body: impl Into<String>) -> Self {
        Self {
            kind: RequestErrorKind::Status,
            status: Some(code),
            message: body.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: RequestErrorKind::Transport,
            status: None,
            message: message.into(),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            kind: RequestErrorKind::Timeout,
            status: None,
            message: message.into(),
        }
    }

    pub fn decode(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            kind: RequestErrorKind::Decode,
            status,
            message: message.into(),
        }
    }

    pub fn invalid_payload(error: &ValidationError) -> Self {
        Self {
            kind: RequestErrorKind::InvalidPayload,
            status: None,
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_errors_keep_one_message_per_field() {
        let mut errors = FormErrors::default();
        errors.push(ValidationError::InvalidSalary("abc".into()));
        errors.push(ValidationError::NegativeSalary(-3.0));
        errors.push(ValidationError::Required(Field::Title));

        assert_eq!(errors.0.len(), 2);
        assert_eq!(
            errors.get(Field::Salary),
            Some(&ValidationError::InvalidSalary("abc".into()))
        );
        assert_eq!(
            errors.message(Field::Title).as_deref(),
            Some("Please enter a title")
        );
        assert!(errors.get(Field::Company).is_none());
    }

    #[test]
    fn request_error_display_includes_status() {
        assert_eq!(
            RequestError::status(500, "").to_string(),
            "request failed with status 500"
        );
        assert_eq!(
            RequestError::transport("connection refused").to_string(),
            "transport error: connection refused"
        );
    }
}
