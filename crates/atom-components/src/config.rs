// File: src/config.rs
// Purpose: Component defaults loaded from atom-components.toml

use crate::contact::{ContactForm, DEFAULT_SUBMIT_LABEL};
use crate::datepicker::{DatePicker, DatePickerDefaults};
use anyhow::{Context, Result};
use atom_forms::{FieldSpec, FormPipeline, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

pub const DEFAULT_CONFIG_PATH: &str = "atom-components.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentsConfig {
    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(default)]
    pub datepicker: DatePickerDefaults,
}

/// Contact form settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Maximum value length in chars; 0 disables the check
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    #[serde(default = "default_submit_label")]
    pub submit_label: String,
}

fn default_max_length() -> usize {
    5000
}

fn default_submit_label() -> String {
    DEFAULT_SUBMIT_LABEL.to_string()
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            submit_label: default_submit_label(),
        }
    }
}

impl ContactConfig {
    /// Pipeline for `schema` using the configured length limit
    pub fn pipeline(&self, schema: impl Into<Arc<[FieldSpec]>>) -> FormPipeline {
        FormPipeline::new(schema).max_len(self.max_length)
    }
}

impl ComponentsConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing or blank file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::info!(?path, "no component config found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ComponentsConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        if config.contact.max_length == 0 {
            tracing::warn!(?path, "contact.max_length is 0, field length is unlimited");
        }

        tracing::info!(?path, "loaded component config");
        Ok(config)
    }

    /// Load configuration from the default path (./atom-components.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_PATH)
    }

    /// Date picker carrying the configured year range and placeholder
    pub fn date_picker(&self, id: impl Into<String>, name: impl Into<String>) -> DatePicker {
        DatePicker::new(id, name).defaults(self.datepicker.clone())
    }

    /// Contact form using the configured submit label
    pub fn contact_form<'a>(
        &self,
        action: impl Into<String>,
        fields: &'a [FieldSpec],
        state: &'a ValidationResult,
    ) -> ContactForm<'a> {
        ContactForm::new(action, fields, state).submit_label(&self.contact.submit_label)
    }
}
