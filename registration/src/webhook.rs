//! The single outbound call: POST the record as JSON to the webhook.
//!
//! DESIGN
//! ======
//! [`Webhook`] is the seam between the protocol and the HTTP stack. The
//! browser build implements it with `gloo-net`; tests use an in-memory
//! recorder. [`deliver`] owns everything that is not transport: encoding the
//! body and deciding what counts as success.
//!
//! ERROR HANDLING
//! ==============
//! Rejections and transport failures are kept apart in [`SubmitError`] for
//! logging, but the form collapses them into one user-facing message.

#[cfg(test)]
#[path = "webhook_test.rs"]
mod webhook_test;

use crate::record::RegistrationRecord;

/// Endpoint that receives every registration.
pub const WEBHOOK_URL: &str = "https://automacao.igrejafamilia.net.br/webhook/boas-vindas";

/// `Content-Type` sent with the body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Why a submission did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The endpoint answered with a status outside `200..=299`.
    #[error("webhook rejected submission with status {status}")]
    Rejected { status: u16 },
    /// The request never produced a response.
    #[error("webhook request failed: {0}")]
    Transport(String),
    /// The record could not be encoded.
    #[error("failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),
    /// A submission is already in flight.
    #[error("a submission is already in progress")]
    Busy,
    /// The record does not satisfy the form constraints.
    #[error(transparent)]
    Invalid(#[from] crate::validate::ValidationError),
}

/// Transport for one JSON POST.
///
/// Futures are `?Send`: the browser implementation runs on the single JS
/// thread and holds non-`Send` handles across the await.
#[async_trait::async_trait(?Send)]
pub trait Webhook {
    /// POST `body` to `url` with a JSON content type and return the HTTP
    /// status code. The response body is not read.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Transport`] if no response was received.
    async fn post_json(&self, url: &str, body: String) -> Result<u16, SubmitError>;
}

/// Whether an HTTP status counts as an accepted submission.
#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..=299).contains(&status)
}

/// Encode `record` and send it once to [`WEBHOOK_URL`].
///
/// # Errors
///
/// Returns [`SubmitError::Encode`] if serialization fails, the transport's
/// error if the request fails, or [`SubmitError::Rejected`] for any non-2xx
/// status.
pub async fn deliver<W>(webhook: &W, record: &RegistrationRecord) -> Result<(), SubmitError>
where
    W: Webhook + ?Sized,
{
    let body = serde_json::to_string(record)?;
    let status = webhook.post_json(WEBHOOK_URL, body).await?;
    if is_success(status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected { status })
    }
}
