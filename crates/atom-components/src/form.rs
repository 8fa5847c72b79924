// File: src/form.rs
// Purpose: Generic form inputs (text input, textarea, select) with inline errors

use crate::non_empty;
use maud::{html, Markup, Render};

/// Rows used when a textarea is given `0`
pub const DEFAULT_TEXTAREA_ROWS: u32 = 5;

/// `0` falls back to [`DEFAULT_TEXTAREA_ROWS`]
pub fn textarea_rows(rows: u32) -> u32 {
    if rows == 0 {
        DEFAULT_TEXTAREA_ROWS
    } else {
        rows
    }
}

fn error_id(id: &str) -> String {
    format!("{id}-error")
}

fn error_text(id: &str, error: &str) -> Markup {
    html! {
        @if !error.is_empty() {
            p.ac-error-text id=(error_id(id)) { (error) }
        }
    }
}

fn field_label(id: &str, label: &str) -> Markup {
    html! {
        @if !label.is_empty() {
            label.ac-label for=(id) { (label) }
        }
    }
}

/// Single-line `<input>` with optional label and error message.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    pub id: String,
    pub name: String,
    pub label: String,
    pub input_type: String,
    pub placeholder: String,
    pub value: String,
    pub error: String,
    pub required: bool,
}

impl TextInput {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            input_type: "text".to_string(),
            ..Self::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = error.into();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

impl Render for TextInput {
    fn render(&self) -> Markup {
        let has_error = !self.error.is_empty();
        html! {
            div.ac-field {
                (field_label(&self.id, &self.label))
                input.ac-input.ac-input-error[has_error]
                    type=(self.input_type)
                    id=(self.id)
                    name=(self.name)
                    placeholder=[non_empty(&self.placeholder)]
                    value=[non_empty(&self.value)]
                    required[self.required]
                    aria-invalid=[has_error.then_some("true")]
                    aria-describedby=[has_error.then(|| error_id(&self.id))];
                (error_text(&self.id, &self.error))
            }
        }
    }
}

/// Multi-line `<textarea>` with optional label and error message.
#[derive(Debug, Clone, Default)]
pub struct TextArea {
    pub id: String,
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub value: String,
    pub rows: u32,
    pub error: String,
    pub required: bool,
}

impl TextArea {
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

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = error.into();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

impl Render for TextArea {
    fn render(&self) -> Markup {
        let has_error = !self.error.is_empty();
        html! {
            div.ac-field {
                (field_label(&self.id, &self.label))
                textarea.ac-textarea.ac-input-error[has_error]
                    id=(self.id)
                    name=(self.name)
                    rows=(textarea_rows(self.rows))
                    placeholder=[non_empty(&self.placeholder)]
                    required[self.required]
                    aria-invalid=[has_error.then_some("true")]
                    aria-describedby=[has_error.then(|| error_id(&self.id))] {
                    (self.value)
                }
                (error_text(&self.id, &self.error))
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected: false,
        }
    }

    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }
}

/// `<select>` with optional label and error message.
#[derive(Debug, Clone, Default)]
pub struct Select {
    pub id: String,
    pub name: String,
    pub label: String,
    pub options: Vec<SelectOption>,
    pub error: String,
}

impl Select {
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

    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = error.into();
        self
    }
}

impl Render for Select {
    fn render(&self) -> Markup {
        let has_error = !self.error.is_empty();
        html! {
            div.ac-field {
                (field_label(&self.id, &self.label))
                select.ac-select.ac-input-error[has_error]
                    id=(self.id)
                    name=(self.name)
                    aria-invalid=[has_error.then_some("true")] {
                    @for option in &self.options {
                        option value=(option.value) selected[option.selected] { (option.label) }
                    }
                }
                (error_text(&self.id, &self.error))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input() {
        let html = TextInput::new("email", "email")
            .label("Email")
            .input_type("email")
            .placeholder("you@example.com")
            .render()
            .into_string();

        assert!(html.contains(r#"id="email""#));
        assert!(html.contains(r#"name="email""#));
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains(r#"placeholder="you@example.com""#));
        assert!(html.contains("ac-label"));
        assert!(html.contains("ac-input"));
        assert!(!html.contains("ac-input-error"));
        assert!(!html.contains("ac-error-text"));
        assert!(!html.contains("value="));
    }

    #[test]
    fn test_text_input_with_error() {
        let html = TextInput::new("name", "name")
            .label("Name")
            .error("Name is required")
            .render()
            .into_string();

        assert!(html.contains("ac-input-error"));
        assert!(html.contains("ac-error-text"));
        assert!(html.contains("Name is required"));
        assert!(html.contains(r#"aria-invalid="true""#));
        assert!(html.contains(r#"aria-describedby="name-error""#));
    }

    #[test]
    fn test_text_input_escapes_value() {
        let html = TextInput::new("q", "q")
            .value(r#""><script>alert(1)</script>"#)
            .render()
            .into_string();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_text_input_without_label() {
        let html = TextInput::new("q", "q").render().into_string();
        assert!(!html.contains("<label"));
    }

    #[test]
    fn test_textarea() {
        let html = TextArea::new("msg", "message")
            .label("Message")
            .placeholder("Type here...")
            .rows(5)
            .render()
            .into_string();

        assert!(html.contains("<textarea"));
        assert!(html.contains("ac-textarea"));
        assert!(html.contains(r#"rows="5""#));
    }

    #[test]
    fn test_textarea_default_rows() {
        let html = TextArea::new("msg", "message").render().into_string();
        assert!(html.contains(r#"rows="5""#));
        assert_eq!(textarea_rows(0), 5);
        assert_eq!(textarea_rows(10), 10);
    }

    #[test]
    fn test_textarea_keeps_line_breaks() {
        let html = TextArea::new("msg", "message")
            .value("Line1\r\nLine2")
            .render()
            .into_string();
        assert!(html.contains("Line1\r\nLine2"));
    }

    #[test]
    fn test_select() {
        let html = Select::new("sel", "selection")
            .label("Pick one")
            .options([
                SelectOption::new("", "Choose..."),
                SelectOption::new("a", "Option A"),
                SelectOption::new("b", "Option B").selected(),
            ])
            .render()
            .into_string();

        assert!(html.contains("<select"));
        assert!(html.contains("ac-select"));
        assert!(html.contains("Option A"));
        assert!(html.contains(r#"<option value="b" selected>Option B</option>"#));
        assert!(html.contains(r#"<option value="a">Option A</option>"#));
    }
}
