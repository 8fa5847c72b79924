// atom-components - server-rendered HTML UI components on Maud
//
// Every component is a plain struct implementing `maud::Render`, so it can be
// spliced into any `html!` tree or turned into a `String`:
//
//     let page = html! {
//         (ToastContainer)
//         (ContactForm::new("/contact", &fields, &state))
//     };
//
// The contact form pairs with `atom_forms::FormPipeline` for handling the
// submitted data.

pub mod assets;
pub mod card;
pub mod config;
pub mod contact;
pub mod datepicker;
pub mod form;
pub mod modal;
pub mod toast;

pub use card::{FeatureCard, PricingCard, PricingTier, TestimonialCard};
pub use config::{ComponentsConfig, ContactConfig};
pub use contact::ContactForm;
pub use datepicker::{DatePicker, DatePickerDefaults};
pub use form::{Select, SelectOption, TextArea, TextInput};
pub use modal::Modal;
pub use toast::{Toast, ToastContainer, ToastLevel};

// Re-export the form pipeline and Maud for templates
pub use atom_forms;
pub use maud::{html, Markup, Render};

/// `None` for an empty string, so optional attributes are omitted
pub(crate) fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
