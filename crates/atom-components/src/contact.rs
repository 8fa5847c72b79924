// File: src/contact.rs
// Purpose: Contact form markup driven by a field schema and a validation result

use crate::form::{TextArea, TextInput, DEFAULT_TEXTAREA_ROWS};
use atom_forms::{FieldKind, FieldSpec, ValidationResult};
use maud::{html, Markup, Render};

pub use atom_forms::{default_fields, FormPipeline, RawValues};

pub const DEFAULT_SUBMIT_LABEL: &str = "Send Message";

/// A POST form with one input per schema field.
///
/// `state` pre-fills values and shows per-field errors on redisplay. Use
/// [`ValidationResult::empty`] for a first render.
#[derive(Debug, Clone)]
pub struct ContactForm<'a> {
    pub action: String,
    pub fields: &'a [FieldSpec],
    pub state: &'a ValidationResult,
    pub submit_label: String,
}

impl<'a> ContactForm<'a> {
    pub fn new(action: impl Into<String>, fields: &'a [FieldSpec], state: &'a ValidationResult) -> Self {
        Self {
            action: action.into(),
            fields,
            state,
            submit_label: DEFAULT_SUBMIT_LABEL.to_string(),
        }
    }

    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    fn field(&self, field: &FieldSpec) -> Markup {
        let id = format!("contact-{}", field.name);
        let value = self.state.value(&field.name);
        let error = self.state.error(&field.name).unwrap_or("");

        match field.kind {
            FieldKind::Textarea => TextArea::new(id, &field.name)
                .label(&field.label)
                .placeholder(&field.placeholder)
                .value(value)
                .rows(field.rows.unwrap_or(DEFAULT_TEXTAREA_ROWS))
                .error(error)
                .required(field.required)
                .render(),
            FieldKind::Text | FieldKind::Email => TextInput::new(id, &field.name)
                .label(&field.label)
                .input_type(field.kind.as_str())
                .placeholder(&field.placeholder)
                .value(value)
                .error(error)
                .required(field.required)
                .render(),
        }
    }
}

impl Render for ContactForm<'_> {
    fn render(&self) -> Markup {
        html! {
            form.ac-contact-form action=(self.action) method="POST" {
                @for field in self.fields {
                    (self.field(field))
                }
                button.ac-contact-submit type="submit" { (self.submit_label) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atom_forms::{FieldErrors, Submission};

    #[test]
    fn test_contact_form_default_fields() {
        let fields = default_fields();
        let state = ValidationResult::empty();
        let html = ContactForm::new("/contact", &fields, &state).render().into_string();

        assert!(html.contains(r#"action="/contact""#));
        assert!(html.contains(r#"method="POST""#));
        assert!(html.contains("ac-contact-form"));
        for name in ["name", "email", "subject", "message"] {
            assert!(html.contains(&format!(r#"name="{name}""#)), "missing {name}");
        }
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains(r#"rows="5""#));
        assert!(html.contains("ac-contact-submit"));
        assert!(html.contains("Send Message"));
        assert!(!html.contains("ac-input-error"));
    }

    #[test]
    fn test_contact_form_with_data() {
        let fields = default_fields();
        let values: Submission = [
            ("name", "Alice"),
            ("email", "alice@example.com"),
            ("subject", "Hello"),
            ("message", "Hi there"),
        ]
        .into_iter()
        .collect();
        let errors: FieldErrors = [("email", "Invalid email")].into_iter().collect();
        let state = ValidationResult::from_stages(values, [errors]);
        let html = ContactForm::new("/send", &fields, &state).render().into_string();

        assert!(html.contains(r#"value="Alice""#));
        assert!(html.contains(r#"value="alice@example.com""#));
        assert!(html.contains("Hi there"));
        assert!(html.contains("Invalid email"));
        assert!(html.contains("ac-input-error"));
        assert!(html.contains(r#"id="contact-email-error""#));
    }

    #[test]
    fn test_contact_form_custom_fields() {
        let fields = vec![
            FieldSpec::text("full_name", "Full Name").placeholder("Jane Doe"),
            FieldSpec::textarea("body", "Body").placeholder("Write here...").rows(10),
        ];
        let state = ValidationResult::empty();
        let html = ContactForm::new("/custom", &fields, &state)
            .submit_label("Submit")
            .render()
            .into_string();

        assert!(html.contains(r#"name="full_name""#));
        assert!(html.contains(r#"name="body""#));
        assert!(html.contains(r#"rows="10""#));
        assert!(html.contains("Submit"));
        assert!(!html.contains(r#"name="email""#));
        assert!(!html.contains(r#"name="subject""#));
        assert!(!html.contains("required"));
    }
}
