//! Transient user-facing notifications.

use crate::error::RequestError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A message shown briefly to the user after an operation settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    /// `"{summary} ({status})"`, or just the summary when there's no status.
    pub fn request_failed(summary: &str, error: &RequestError) -> Self {
        match error.status {
            Some(status) => Self::error(format!("{} ({})", summary, status)),
            None => Self::error(summary),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_appended_when_present() {
        let n = Notification::request_failed("Failed to create job", &RequestError::status(503, ""));
        assert_eq!(n.message, "Failed to create job (503)");
        assert!(n.is_error());

        let n = Notification::request_failed(
            "Failed to create job",
            &RequestError::transport("offline"),
        );
        assert_eq!(n.message, "Failed to create job");
    }
}
