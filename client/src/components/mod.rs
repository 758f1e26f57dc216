//! Reusable pieces of the registration form.
//!
//! Every component reads the `RwSignal<RegistrationForm>` provided by
//! `App`, so the page only has to lay them out.

pub mod church_checkbox;
pub mod status_banner;
pub mod submit_button;
pub mod text_field;
