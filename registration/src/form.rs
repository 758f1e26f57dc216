//! UI-facing form state: the record plus the busy flag and status message.
//!
//! DESIGN
//! ======
//! Submission is split into [`RegistrationForm::begin_submit`] and
//! [`RegistrationForm::settle`] so a reactive UI can hold the form in a
//! signal, release it across the network await, and apply the outcome
//! afterwards. [`RegistrationForm::submit`] runs the whole cycle in one call
//! for callers that can keep `&mut self` across the await.
//!
//! STATE MACHINE
//! =============
//! `Idle -> Submitting -> {Success, Failure}`. The next `begin_submit`
//! leaves `Success`/`Failure` and clears the message before dispatch.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::mask::mask_birth_date;
use crate::record::{ATTENDS_CHURCH_KEY, Field, RegistrationRecord};
use crate::validate::validate;
use crate::webhook::{SubmitError, Webhook, deliver};

/// Shown after the webhook accepts the registration.
pub const SUCCESS_MESSAGE: &str = "Cadastro realizado com sucesso! Seja bem-vindo(a)!";

/// Shown after any rejection or network failure.
pub const FAILURE_MESSAGE: &str = "Erro ao enviar cadastro. Tente novamente.";

/// Where the form is in its submit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    record: RegistrationRecord,
    status: SubmitStatus,
    message: Option<&'static str>,
}

impl RegistrationForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    #[must_use]
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Status banner text, if any.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        self.message
    }

    /// True while a request is in flight; the submit control is disabled.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Store a keystroke value. Birth date goes through the display mask;
    /// every other field is stored verbatim.
    pub fn set_text(&mut self, field: Field, raw: &str) {
        let value = if field == Field::BirthDate { mask_birth_date(raw) } else { raw.to_owned() };
        self.record.set(field, value);
    }

    pub fn set_attends_church(&mut self, checked: bool) {
        self.record.attends_church = checked;
    }

    /// Apply a DOM change event addressed by the input's `name` attribute.
    ///
    /// `checked` is only read for the checkbox. Returns `false` when `name`
    /// does not belong to this form.
    pub fn update(&mut self, name: &str, value: &str, checked: bool) -> bool {
        if name == ATTENDS_CHURCH_KEY {
            self.set_attends_church(checked);
            return true;
        }
        match Field::from_key(name) {
            Some(field) => {
                self.set_text(field, value);
                true
            }
            None => false,
        }
    }

    /// Check the current record against the form constraints.
    ///
    /// # Errors
    ///
    /// See [`crate::validate::validate`].
    pub fn validate(&self) -> Result<(), crate::ValidationError> {
        validate(&self.record)
    }

    /// Enter `Submitting` and hand back the snapshot to send.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Busy`] if a request is already in flight, or
    /// [`SubmitError::Invalid`] if the record fails validation. In both cases
    /// the form is left as it was.
    pub fn begin_submit(&mut self) -> Result<RegistrationRecord, SubmitError> {
        if self.is_busy() {
            return Err(SubmitError::Busy);
        }
        self.validate()?;
        self.status = SubmitStatus::Submitting;
        self.message = None;
        Ok(self.record.clone())
    }

    /// Apply the outcome of the request started by `begin_submit`.
    ///
    /// Success resets the record to its defaults; failure keeps it so the
    /// user can resubmit without re-typing. Either way the form stops being
    /// busy.
    pub fn settle(&mut self, outcome: &Result<(), SubmitError>) {
        match outcome {
            Ok(()) => {
                self.record = RegistrationRecord::default();
                self.status = SubmitStatus::Success;
                self.message = Some(SUCCESS_MESSAGE);
            }
            Err(_) => {
                self.status = SubmitStatus::Failure;
                self.message = Some(FAILURE_MESSAGE);
            }
        }
    }

    /// Run one full submit cycle against `webhook`.
    ///
    /// # Errors
    ///
    /// Returns the `begin_submit` error without sending anything, or the
    /// delivery error after the form has been settled as a failure.
    pub async fn submit<W>(&mut self, webhook: &W) -> Result<(), SubmitError>
    where
        W: Webhook + ?Sized,
    {
        let snapshot = self.begin_submit()?;
        let outcome = deliver(webhook, &snapshot).await;
        self.settle(&outcome);
        outcome
    }
}
