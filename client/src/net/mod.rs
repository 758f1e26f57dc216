//! Networking for the registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `webhook` is the only outbound call the page makes: the browser
//! implementation of `registration::Webhook`.

pub mod webhook;
