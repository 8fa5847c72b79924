// File: src/datepicker.rs
// Purpose: Date picker markup (trigger input, hidden ISO value, dialog shell)
//
// Only the server-rendered shell lives here. Year/month/day grids are drawn
// by the client runtime through the data-ac-datepicker-* hooks.

use crate::non_empty;
use chrono::{Datelike, Local, NaiveDate};
use maud::{html, Markup, Render};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PLACEHOLDER: &str = "Select a date...";
pub const ISO_FORMAT: &str = "%Y-%m-%d";
/// "Jan 2, 2006"
pub const DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// Fallbacks applied when a picker leaves its year range or placeholder unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePickerDefaults {
    /// Years before the current one offered when `min_year` is 0
    #[serde(default = "default_past_years")]
    pub past_years: u32,
    /// Years after the current one offered when `max_year` is 0
    #[serde(default = "default_future_years")]
    pub future_years: u32,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_past_years() -> u32 {
    100
}

fn default_future_years() -> u32 {
    20
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

impl Default for DatePickerDefaults {
    fn default() -> Self {
        Self {
            past_years: default_past_years(),
            future_years: default_future_years(),
            placeholder: default_placeholder(),
        }
    }
}

impl DatePickerDefaults {
    pub fn min_year(&self, min: i32, current_year: i32) -> i32 {
        if min == 0 {
            current_year.saturating_sub_unsigned(self.past_years)
        } else {
            min
        }
    }

    pub fn max_year(&self, max: i32, current_year: i32) -> i32 {
        if max == 0 {
            current_year.saturating_add_unsigned(self.future_years)
        } else {
            max
        }
    }

    pub fn placeholder<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if placeholder.is_empty() {
            &self.placeholder
        } else {
            placeholder
        }
    }
}

pub fn current_year() -> i32 {
    Local::now().year()
}

/// `0` → current year − 100
pub fn resolve_min_year(min: i32) -> i32 {
    DatePickerDefaults::default().min_year(min, current_year())
}

/// `0` → current year + 20
pub fn resolve_max_year(max: i32) -> i32 {
    DatePickerDefaults::default().max_year(max, current_year())
}

pub fn resolve_placeholder(placeholder: &str) -> &str {
    if placeholder.is_empty() {
        DEFAULT_PLACEHOLDER
    } else {
        placeholder
    }
}

/// `"2026-01-15"` → `"Jan 15, 2026"`.
///
/// Empty input stays empty; anything that is not a zero-padded
/// `yyyy-mm-dd` date is returned unchanged.
pub fn format_display_date(iso: &str) -> String {
    if iso.is_empty() {
        return String::new();
    }
    if !is_iso_date_shape(iso) {
        tracing::debug!(value = iso, "date picker value is not a yyyy-mm-dd date");
        return iso.to_string();
    }
    match NaiveDate::parse_from_str(iso, ISO_FORMAT) {
        Ok(date) => date.format(DISPLAY_FORMAT).to_string(),
        Err(err) => {
            tracing::debug!(value = iso, %err, "date picker value is not an ISO date");
            iso.to_string()
        }
    }
}

/// chrono accepts unpadded fields and a leading sign; the stored value must
/// be exactly `dddd-dd-dd`.
fn is_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Date input rendered as a read-only trigger plus a hidden ISO value.
#[derive(Debug, Clone, Default)]
pub struct DatePicker {
    pub id: String,
    pub name: String,
    pub label: String,
    /// ISO `yyyy-mm-dd`, or empty
    pub value: String,
    pub placeholder: String,
    pub error: String,
    /// `0` = derived from the current year
    pub min_year: i32,
    /// `0` = derived from the current year
    pub max_year: i32,
    pub defaults: DatePickerDefaults,
}

impl DatePicker {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = error.into();
        self
    }

    pub fn year_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    pub fn defaults(mut self, defaults: DatePickerDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    fn render_at(&self, current_year: i32) -> Markup {
        let has_error = !self.error.is_empty();
        let trigger_id = format!("{}-trigger", self.id);
        let modal_id = format!("{}-modal", self.id);
        let display = format_display_date(&self.value);
        let dialog_label = if self.label.is_empty() {
            "Date picker".to_string()
        } else {
            format!("{} date picker", self.label)
        };

        html! {
            div.ac-datepicker
                id=(self.id)
                data-ac-datepicker
                data-ac-datepicker-min-year=(self.defaults.min_year(self.min_year, current_year))
                data-ac-datepicker-max-year=(self.defaults.max_year(self.max_year, current_year)) {
                @if !self.label.is_empty() {
                    label.ac-label for=(trigger_id) { (self.label) }
                }
                input.ac-input.ac-datepicker-trigger.ac-input-error[has_error]
                    type="text"
                    id=(trigger_id)
                    readonly
                    placeholder=(self.defaults.placeholder(&self.placeholder))
                    value=[non_empty(&display)]
                    data-ac-datepicker-trigger
                    aria-haspopup="dialog"
                    aria-expanded="false"
                    aria-controls=(modal_id)
                    aria-invalid=[has_error.then_some("true")];
                input type="hidden" name=(self.name) value=(self.value) data-ac-datepicker-value;
                @if has_error {
                    p.ac-error-text { (self.error) }
                }
                div.ac-datepicker-overlay style="display: none" {
                    div.ac-datepicker-modal
                        id=(modal_id)
                        role="dialog"
                        aria-modal="true"
                        aria-label=(dialog_label) {
                        div.ac-datepicker-header {
                            button.ac-datepicker-back type="button" data-ac-datepicker-back aria-label="Back" { "‹" }
                            span.ac-datepicker-title data-ac-datepicker-title {}
                            button.ac-datepicker-close type="button" data-ac-datepicker-close aria-label="Close" { "×" }
                        }
                        div.ac-datepicker-body data-ac-datepicker-body {}
                        div.ac-datepicker-footer {
                            button.ac-datepicker-today type="button" data-ac-datepicker-today { "Today" }
                            div.ac-datepicker-actions {
                                button.ac-datepicker-cancel type="button" data-ac-datepicker-cancel { "Cancel" }
                                button.ac-datepicker-confirm type="button" data-ac-datepicker-confirm { "Confirm" }
                            }
                        }
                    }
                }
            }
        }
    }
}

impl Render for DatePicker {
    fn render(&self) -> Markup {
        self.render_at(current_year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_years() {
        let defaults = DatePickerDefaults::default();
        assert_eq!(defaults.min_year(0, 2026), 1926);
        assert_eq!(defaults.max_year(0, 2026), 2046);
        assert_eq!(defaults.min_year(2000, 2026), 2000);
        assert_eq!(defaults.max_year(2030, 2026), 2030);

        assert_eq!(resolve_min_year(1990), 1990);
        assert_eq!(resolve_min_year(0), current_year() - 100);
        assert_eq!(resolve_max_year(0), current_year() + 20);
    }

    #[test]
    fn test_resolve_placeholder() {
        assert_eq!(resolve_placeholder(""), "Select a date...");
        assert_eq!(resolve_placeholder("Pick a date"), "Pick a date");

        let custom = DatePickerDefaults {
            placeholder: "Choose...".to_string(),
            ..DatePickerDefaults::default()
        };
        assert_eq!(custom.placeholder(""), "Choose...");
    }

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date(""), "");
        assert_eq!(format_display_date("2026-01-15"), "Jan 15, 2026");
        assert_eq!(format_display_date("2006-01-02"), "Jan 2, 2006");
        assert_eq!(format_display_date("2024-12-31"), "Dec 31, 2024");
        assert_eq!(format_display_date("15/01/2026"), "15/01/2026");
        assert_eq!(format_display_date("2026-02-30"), "2026-02-30");
    }

    #[test]
    fn test_format_display_date_requires_padded_iso() {
        assert_eq!(format_display_date("2026-1-5"), "2026-1-5");
        assert_eq!(format_display_date(" 2026-01-15"), " 2026-01-15");
        assert_eq!(format_display_date("+2026-01-15"), "+2026-01-15");
        assert_eq!(format_display_date("2026-01-15 "), "2026-01-15 ");
        assert_eq!(format_display_date("2026/01/15"), "2026/01/15");
    }

    #[test]
    fn test_extreme_year_offsets_saturate() {
        let defaults = DatePickerDefaults {
            past_years: u32::MAX,
            future_years: u32::MAX,
            ..DatePickerDefaults::default()
        };
        assert_eq!(defaults.min_year(0, 2026), i32::MIN);
        assert_eq!(defaults.max_year(0, 2026), i32::MAX);
    }

    #[test]
    fn test_render_with_fixed_year() {
        let html = DatePicker::new("dob", "date_of_birth")
            .render_at(2026)
            .into_string();

        assert!(html.contains(r#"data-ac-datepicker-min-year="1926""#));
        assert!(html.contains(r#"data-ac-datepicker-max-year="2046""#));
        assert!(html.contains(r#"aria-label="Date picker""#));
    }
}
