// File: src/result.rs
// Purpose: Per-stage error sets and the combined validation result

use crate::submission::Submission;
use serde::Serialize;
use std::collections::BTreeMap;

/// Field name -> human-readable message, one message per field.
///
/// Every validation stage returns its own `FieldErrors`; results are combined
/// with [`FieldErrors::merge`] in stage order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    /// Fold a later stage's errors into this set. On a shared field the later
    /// message replaces the earlier one.
    pub fn merge(&mut self, later: FieldErrors) {
        self.errors.extend(later.errors);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// A stage passed when it produced no errors
    pub fn is_valid(&self) -> bool {
        self.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.errors
    }
}

impl<K, V> FromIterator<(K, V)> for FieldErrors
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (field, message) in iter {
            errors.insert(field, message);
        }
        errors
    }
}

/// Outcome of running a submission through every validation stage.
///
/// Also serves as the redisplay state for a form: `values` pre-fill the
/// inputs and `errors` are shown next to them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub values: Submission,
    pub errors: FieldErrors,
    pub valid: bool,
}

impl ValidationResult {
    /// Combine stage results in the order given. Later stages win on a
    /// shared field.
    pub fn from_stages(values: Submission, stages: impl IntoIterator<Item = FieldErrors>) -> Self {
        let mut errors = FieldErrors::new();
        for stage in stages {
            errors.merge(stage);
        }
        let valid = errors.is_empty();
        Self {
            values,
            errors,
            valid,
        }
    }

    /// Blank state for a form rendered for the first time
    pub fn empty() -> Self {
        Self {
            valid: true,
            ..Self::default()
        }
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field)
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains(field)
    }
}
