//! Browser transport for the registration webhook.
//!
//! Client-side (hydrate): a real `fetch` via `gloo-net`.
//! Server-side (SSR): a stub that always fails, since submission only ever
//! happens in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Request-building and network errors both become
//! `SubmitError::Transport`; the status code of any response that does
//! arrive is returned untouched for `registration::deliver` to judge.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "webhook_test.rs"]
mod webhook_test;

use registration::{SubmitError, Webhook};

/// `fetch`-backed [`Webhook`] used by the registration page.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserWebhook;

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> SubmitError {
    SubmitError::Transport("not available on server".to_owned())
}

#[async_trait::async_trait(?Send)]
impl Webhook for BrowserWebhook {
    async fn post_json(&self, url: &str, body: String) -> Result<u16, SubmitError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(url)
                .header("Content-Type", registration::webhook::JSON_CONTENT_TYPE)
                .body(body)
                .map_err(|e| SubmitError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| SubmitError::Transport(e.to_string()))?;
            Ok(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err(unavailable())
        }
    }
}
