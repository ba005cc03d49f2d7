//! Editable form model shared by the create form and the edit panel.

use crate::date::{date_input_value, normalize_date_applied};
use crate::error::{Field, FormErrors, ValidationError};
use crate::job::{Job, JobPayload, JobStatus};

/// Raw form values as the user typed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobForm {
    pub title: String,
    pub company: String,
    pub status: Option<JobStatus>,
    pub notes: String,
    pub source: String,
    pub place: String,
    pub salary: String,
    /// Calendar date (`YYYY-MM-DD`) or empty.
    pub date_applied: String,
    /// Stored `date_applied` this form was populated from.
    loaded_date: Option<String>,
}

impl JobForm {
    /// Populate a form from a record's current values.
    pub fn from_job(job: &Job) -> Self {
        let date_applied = job
            .date_applied
            .as_deref()
            .map(|stored| date_input_value(stored).unwrap_or_else(|| stored.to_string()))
            .unwrap_or_default();

        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            status: job.status,
            notes: job.notes.clone().unwrap_or_default(),
            source: job.source.clone().unwrap_or_default(),
            place: job.place.clone().unwrap_or_default(),
            salary: job.salary.map(|s| s.to_string()).unwrap_or_default(),
            date_applied,
            loaded_date: job.date_applied.clone(),
        }
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Build the request payload, collecting every field-level problem.
    pub fn to_payload(&self) -> Result<JobPayload, FormErrors> {
        let mut errors = FormErrors::default();

        let title = self.title.trim().to_string();
        if title.is_empty() {
            errors.push(ValidationError::Required(Field::Title));
        }
        let company = self.company.trim().to_string();
        if company.is_empty() {
            errors.push(ValidationError::Required(Field::Company));
        }

        let salary = parse_salary(&self.salary).unwrap_or_else(|e| {
            errors.push(e);
            None
        });
        let date_applied = self.wire_date().unwrap_or_else(|e| {
            errors.push(e);
            None
        });

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(JobPayload {
            title,
            company,
            status: self.status,
            notes: optional_text(&self.notes),
            source: optional_text(&self.source),
            place: optional_text(&self.place),
            salary,
            date_applied,
        })
    }

    /// Wire string for the date input. An untouched calendar day resends the
    /// stored instant rather than midnight.
    fn wire_date(&self) -> Result<Option<String>, ValidationError> {
        let input = self.date_applied.trim();
        if input.is_empty() {
            return Ok(None);
        }

        if let Some(stored) = &self.loaded_date
            && date_input_value(stored).as_deref() == Some(input)
        {
            return normalize_date_applied(stored).map(Some);
        }

        normalize_date_applied(input).map(Some)
    }
}

fn optional_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Accepts plain numbers and the `$ 1,200` display form.
fn parse_salary(raw: &str) -> Result<Option<f64>, ValidationError> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return Ok(None);
    }

    let salary: f64 = cleaned
        .parse()
        .map_err(|_| ValidationError::InvalidSalary(raw.to_string()))?;
    if !salary.is_finite() {
        return Err(ValidationError::InvalidSalary(raw.to_string()));
    }
    if salary < 0.0 {
        return Err(ValidationError::NegativeSalary(salary));
    }
    Ok(Some(salary))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;
    use crate::job::JobId;

    fn filled() -> JobForm {
        JobForm {
            title: " Backend Engineer ".into(),
            company: "Acme".into(),
            status: Some(JobStatus::Applied),
            notes: "  ".into(),
            source: "LinkedIn".into(),
            place: "Remote".into(),
            salary: "$ 120,000".into(),
            date_applied: "2024-03-15".into(),
            ..Default::default()
        }
    }

    #[test]
    fn builds_trimmed_payload() {
        let payload = filled().to_payload().unwrap();
        assert_eq!(payload.title, "Backend Engineer");
        assert_eq!(payload.notes, None);
        assert_eq!(payload.source.as_deref(), Some("LinkedIn"));
        assert_eq!(payload.salary, Some(120_000.0));
        assert_eq!(
            payload.date_applied.as_deref(),
            Some("2024-03-15T00:00:00.000Z")
        );
    }

    #[test]
    fn reports_every_invalid_field() {
        let form = JobForm {
            salary: "lots".into(),
            date_applied: "someday".into(),
            ..Default::default()
        };
        let errors = form.to_payload().unwrap_err();
        assert!(errors.get(Field::Title).is_some());
        assert!(errors.get(Field::Company).is_some());
        assert!(errors.get(Field::Salary).is_some());
        assert!(errors.get(Field::DateApplied).is_some());
    }

    #[test]
    fn negative_salary_is_rejected() {
        let form = JobForm {
            salary: "-5".into(),
            ..filled()
        };
        assert_eq!(
            form.to_payload().unwrap_err().get(Field::Salary),
            Some(&ValidationError::NegativeSalary(-5.0))
        );
    }

    #[test]
    fn unchanged_date_resends_stored_instant() {
        let job = Job::from_payload(
            JobId(1),
            JobPayload::new("Dev", "Acme").with_date_applied("2024-03-15T09:45:12.250Z"),
        );
        let form = JobForm::from_job(&job);
        assert_eq!(form.date_applied, "2024-03-15");
        assert_eq!(
            form.to_payload().unwrap().date_applied.as_deref(),
            Some("2024-03-15T09:45:12.250Z")
        );

        let moved = JobForm {
            date_applied: "2024-03-16".into(),
            ..form
        };
        assert_eq!(
            moved.to_payload().unwrap().date_applied.as_deref(),
            Some("2024-03-16T00:00:00.000Z")
        );
    }

    #[test]
    fn from_job_round_trips_values() {
        let payload = JobPayload::new("Dev", "Acme")
            .with_status(JobStatus::Offer)
            .with_notes("great team")
            .with_place("Pune")
            .with_salary(90000.0)
            .with_date_applied("2024-03-15T00:00:00.000Z");
        let job = Job::from_payload(JobId(4), payload.clone());
        assert_eq!(JobForm::from_job(&job).to_payload().unwrap(), payload);
    }

    #[test]
    fn cleared_fields_are_sent_as_null() {
        let job = Job::from_payload(
            JobId(1),
            JobPayload::new("Dev", "Acme")
                .with_notes("old note")
                .with_place("Pune")
                .with_salary(50000.0),
        );
        let mut form = JobForm::from_job(&job);
        form.notes.clear();
        form.place = "  ".into();
        form.salary.clear();

        let body = serde_json::to_value(form.to_payload().unwrap()).unwrap();
        let fields = body.as_object().unwrap();
        assert_eq!(fields.get("notes"), Some(&serde_json::Value::Null));
        assert_eq!(fields.get("place"), Some(&serde_json::Value::Null));
        assert_eq!(fields.get("salary"), Some(&serde_json::Value::Null));
        assert_eq!(fields.get("title"), Some(&serde_json::json!("Dev")));
    }

    #[test]
    fn clear_empties_everything() {
        let mut form = filled();
        form.clear();
        assert_eq!(form, JobForm::default());
    }
}
