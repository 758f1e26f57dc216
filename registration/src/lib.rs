//! Framework-free model for the "Cadastro Boas Vindas" registration form.
//!
//! This crate owns everything the form does that does not need a browser:
//! the record and its wire schema, the birth-date mask, the pre-submit
//! checks, and the submit/settle state machine. The `client` crate renders
//! it with Leptos and supplies the real HTTP transport.
//!
//! ARCHITECTURE
//! ============
//! `record` defines the data, `mask` and `validate` are pure helpers over it,
//! `webhook` abstracts the one outbound POST, and `form` ties them together
//! into the UI-facing [`RegistrationForm`].

pub mod form;
pub mod mask;
pub mod record;
pub mod validate;
pub mod webhook;

#[cfg(test)]
mod test_support;

pub use form::{FAILURE_MESSAGE, RegistrationForm, SUCCESS_MESSAGE, SubmitStatus};
pub use mask::mask_birth_date;
pub use record::{ATTENDS_CHURCH_KEY, Field, InputKind, RegistrationRecord};
pub use validate::{ValidationError, validate};
pub use webhook::{SubmitError, WEBHOOK_URL, Webhook, deliver};
