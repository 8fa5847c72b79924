// File: src/modal.rs
// Purpose: Dialog overlay with title, body and optional footer

use maud::{html, Markup, Render};

/// Hidden dialog opened by the client runtime (`acOpenModal(id)`).
#[derive(Debug, Clone)]
pub struct Modal {
    pub id: String,
    pub title: String,
    pub body: Markup,
    pub footer: Option<Markup>,
}

impl Modal {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: html! {},
            footer: None,
        }
    }

    pub fn body(mut self, body: impl Render) -> Self {
        self.body = body.render();
        self
    }

    pub fn footer(mut self, footer: impl Render) -> Self {
        self.footer = Some(footer.render());
        self
    }
}

impl Render for Modal {
    fn render(&self) -> Markup {
        let title_id = format!("{}-title", self.id);
        html! {
            div.ac-modal-overlay id=(self.id) style="display: none" {
                div.ac-modal role="dialog" aria-modal="true" aria-labelledby=(title_id) {
                    div.ac-modal-header {
                        h2.ac-modal-title id=(title_id) { (self.title) }
                        button.ac-modal-close type="button" data-modal-close aria-label="Close" { "×" }
                    }
                    div.ac-modal-body { (self.body) }
                    @if let Some(footer) = &self.footer {
                        div.ac-modal-footer { (footer) }
                    }
                }
            }
        }
    }
}
