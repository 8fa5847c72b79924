// File: src/field.rs
// Purpose: Field schema entries that submissions are validated against

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Input kind of a form field.
///
/// The kind decides both how the field is rendered and which pipeline stages
/// apply to it: `Email` values get mailbox validation, and every kind except
/// `Textarea` is stripped of line breaks during sanitization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Textarea,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Textarea => "textarea",
        }
    }

    /// Multi-line content is expected, so line breaks are kept.
    pub fn is_multiline(self) -> bool {
        matches!(self, FieldKind::Textarea)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field kind `{0}` (expected text, email or textarea)")]
pub struct FieldKindError(pub String);

impl FromStr for FieldKind {
    type Err = FieldKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(FieldKind::Text),
            "email" => Ok(FieldKind::Email),
            "textarea" => Ok(FieldKind::Textarea),
            _ => Err(FieldKindError(s.to_string())),
        }
    }
}

/// One entry of a form schema.
///
/// Built once and shared read-only between requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Unique key, used as the HTML `name` attribute
    pub name: String,
    /// Human-readable label, also used in error messages
    pub label: String,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub placeholder: String,
    /// Visible rows for textarea fields
    #[serde(default)]
    pub rows: Option<u32>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            placeholder: String::new(),
            rows: None,
        }
    }

    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn email(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub fn textarea(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Textarea)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }
}

/// The standard contact schema: Name, Email, Subject and Message, all required.
pub fn default_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("name", "Name")
            .placeholder("Your name")
            .required(),
        FieldSpec::email("email", "Email")
            .placeholder("you@example.com")
            .required(),
        FieldSpec::text("subject", "Subject")
            .placeholder("What is this about?")
            .required(),
        FieldSpec::textarea("message", "Message")
            .placeholder("Your message...")
            .rows(5)
            .required(),
    ]
}
