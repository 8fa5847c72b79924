// File: src/toast.rs
// Purpose: Toast notifications and their container

use maud::{html, Markup, Render};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastLevel {
    pub const ALL: [ToastLevel; 4] = [
        ToastLevel::Success,
        ToastLevel::Error,
        ToastLevel::Warning,
        ToastLevel::Info,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ToastLevel::Success => "success",
            ToastLevel::Error => "error",
            ToastLevel::Warning => "warning",
            ToastLevel::Info => "info",
        }
    }
}

impl fmt::Display for ToastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown toast level `{0}`")]
pub struct ToastLevelError(pub String);

impl FromStr for ToastLevel {
    type Err = ToastLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToastLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ToastLevelError(s.to_string()))
    }
}

/// Fixed region toasts are appended to.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToastContainer;

impl Render for ToastContainer {
    fn render(&self) -> Markup {
        html! {
            div.ac-toast-container aria-live="polite" {}
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Warning)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Info)
    }
}

impl Render for Toast {
    fn render(&self) -> Markup {
        html! {
            div class={ "ac-toast ac-toast-" (self.level.as_str()) } role="alert" {
                span.ac-toast-message { (self.message) }
                button.ac-toast-close type="button" data-toast-close aria-label="Dismiss" { "×" }
            }
        }
    }
}
