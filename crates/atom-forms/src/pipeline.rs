// File: src/pipeline.rs
// Purpose: extract -> sanitize -> validate_required -> validate_format

use crate::email::is_valid_mailbox;
use crate::field::{FieldKind, FieldSpec};
use crate::raw::RawValues;
use crate::result::{FieldErrors, ValidationResult};
use crate::submission::Submission;
use std::sync::Arc;

/// Message recorded for an email field that is not a single valid mailbox
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

pub fn required_message(field: &FieldSpec) -> String {
    format!("{} is required", field.label)
}

pub fn too_long_message(field: &FieldSpec) -> String {
    format!("{} is too long", field.label)
}

/// Collect one trimmed value per schema field. Missing values become `""`.
pub fn extract(raw: &RawValues, schema: &[FieldSpec]) -> Submission {
    let submission: Submission = schema
        .iter()
        .map(|field| {
            let value = raw.first(&field.name).unwrap_or("").trim();
            (field.name.clone(), value.to_string())
        })
        .collect();

    tracing::debug!(
        fields = submission.len(),
        raw_keys = raw.len(),
        "extracted form submission"
    );
    submission
}

/// Strip `\r` and `\n` from every non-textarea field.
///
/// Single-line values end up in outgoing message headers (Subject, From);
/// a line break there would let a sender inject headers. Idempotent.
pub fn sanitize(submission: &mut Submission, schema: &[FieldSpec]) {
    for field in schema.iter().filter(|f| !f.kind.is_multiline()) {
        if let Some(value) = submission.get_mut(&field.name) {
            if value.contains(['\r', '\n']) {
                tracing::debug!(field = %field.name, "stripped line breaks");
                value.retain(|c| c != '\r' && c != '\n');
            }
        }
    }
}

/// Every required field must have a non-blank value.
pub fn validate_required(submission: &Submission, schema: &[FieldSpec]) -> FieldErrors {
    schema
        .iter()
        .filter(|field| field.required && submission.get(&field.name).trim().is_empty())
        .map(|field| (field.name.clone(), required_message(field)))
        .collect()
}

/// Email syntax and maximum length (in chars) for non-empty values.
///
/// `max_len == 0` disables the length check. A field failing both checks
/// keeps the length message, since that check runs second.
pub fn validate_format(submission: &Submission, schema: &[FieldSpec], max_len: usize) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for field in schema {
        let value = submission.get(&field.name);
        if value.is_empty() {
            continue;
        }

        if field.kind == FieldKind::Email && !is_valid_mailbox(value) {
            errors.insert(field.name.clone(), INVALID_EMAIL_MESSAGE);
        }

        if max_len > 0 && value.chars().count() > max_len {
            errors.insert(field.name.clone(), too_long_message(field));
        }
    }

    errors
}

/// A schema plus format limits, run as one unit per request.
///
/// Cheap to clone; the schema is shared read-only.
#[derive(Debug, Clone)]
pub struct FormPipeline {
    schema: Arc<[FieldSpec]>,
    max_len: usize,
}

impl FormPipeline {
    pub fn new(schema: impl Into<Arc<[FieldSpec]>>) -> Self {
        Self {
            schema: schema.into(),
            max_len: 0,
        }
    }

    /// Maximum value length in chars, `0` for no limit
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn schema(&self) -> &[FieldSpec] {
        &self.schema
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.schema.iter().find(|f| f.name == name)
    }

    /// Run every stage in order and merge the error sets.
    pub fn run(&self, raw: &RawValues) -> ValidationResult {
        let mut submission = extract(raw, &self.schema);
        sanitize(&mut submission, &self.schema);

        let required = validate_required(&submission, &self.schema);
        let format = validate_format(&submission, &self.schema, self.max_len);

        let result = ValidationResult::from_stages(submission, [required, format]);
        if result.valid {
            tracing::debug!("form submission is valid");
        } else {
            let fields: Vec<&str> = result.errors.fields().collect();
            tracing::debug!(?fields, "form submission has errors");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("name", "Name").required(),
            FieldSpec::email("email", "Email"),
            FieldSpec::textarea("note", "Note"),
        ]
    }

    #[test]
    fn test_extract_trims_and_fills_missing() {
        let raw: RawValues = [("name", "  Alice \t"), ("unknown", "x")].into_iter().collect();
        let submission = extract(&raw, &schema());

        let names: Vec<&str> = submission.names().collect();
        assert_eq!(names, vec!["email", "name", "note"]);
        assert_eq!(submission.get("name"), "Alice");
        assert_eq!(submission.get("email"), "");
        assert!(!submission.contains("unknown"));
    }

    #[test]
    fn test_sanitize_keeps_textarea() {
        let mut submission: Submission = [
            ("name", "Alice\r\nSmith"),
            ("email", "a@b.com\n"),
            ("note", "one\r\ntwo"),
        ]
        .into_iter()
        .collect();

        sanitize(&mut submission, &schema());

        assert_eq!(submission.get("name"), "AliceSmith");
        assert_eq!(submission.get("email"), "a@b.com");
        assert_eq!(submission.get("note"), "one\r\ntwo");
    }

    #[test]
    fn test_validate_required_messages() {
        let submission: Submission = [("name", "   "), ("email", ""), ("note", "")]
            .into_iter()
            .collect();
        let errors = validate_required(&submission, &schema());

        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_validate_format_skips_empty_values() {
        let submission: Submission = [("name", ""), ("email", ""), ("note", "")]
            .into_iter()
            .collect();
        assert!(validate_format(&submission, &schema(), 1).is_valid());
    }

    #[test]
    fn test_validate_format_length_wins_over_email() {
        let submission: Submission = [("email", "not-an-email-at-all")].into_iter().collect();

        let errors = validate_format(&submission, &schema(), 5);
        assert_eq!(errors.get("email"), Some("Email is too long"));

        let errors = validate_format(&submission, &schema(), 0);
        assert_eq!(errors.get("email"), Some(INVALID_EMAIL_MESSAGE));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let submission: Submission = [("name", "ééééé")].into_iter().collect();
        assert!(validate_format(&submission, &schema(), 5).is_valid());
        assert!(!validate_format(&submission, &schema(), 4).is_valid());
    }

    #[test]
    fn test_pipeline_field_lookup() {
        let pipeline = FormPipeline::new(schema()).max_len(100);
        assert_eq!(pipeline.field("email").map(|f| f.kind), Some(FieldKind::Email));
        assert!(pipeline.field("missing").is_none());
        assert_eq!(pipeline.schema().len(), 3);
    }
}
