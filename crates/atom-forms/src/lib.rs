//! atom-forms
//!
//! Schema-driven handling of submitted form data for atom-components:
//! decode the body, pull one trimmed value per field, strip line breaks from
//! single-line fields, then check required fields and value formats.
//!
//! ```ignore
//! use atom_forms::{default_fields, FormPipeline, RawValues};
//!
//! let pipeline = FormPipeline::new(default_fields()).max_len(5000);
//! let result = pipeline.run(&RawValues::from_urlencoded(body));
//! if result.valid {
//!     send_mail(&result.values);
//! }
//! ```
//!
//! The stages are also exported one by one. Call them in order:
//! [`extract`] → [`sanitize`] → [`validate_required`] → [`validate_format`].
//! Validating without sanitizing first lets header-injection payloads
//! through unflagged.

pub mod email;
pub mod field;
pub mod pipeline;
pub mod raw;
pub mod result;
pub mod submission;

#[cfg(feature = "axum")]
pub mod request;

pub use email::is_valid_mailbox;
pub use field::{default_fields, FieldKind, FieldKindError, FieldSpec};
pub use pipeline::{
    extract, sanitize, validate_format, validate_required, FormPipeline, INVALID_EMAIL_MESSAGE,
};
pub use raw::RawValues;
pub use result::{FieldErrors, ValidationResult};
pub use submission::Submission;
