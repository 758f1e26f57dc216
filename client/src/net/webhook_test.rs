#![cfg(not(feature = "hydrate"))]

use futures::executor::block_on;
use registration::{RegistrationForm, SubmitStatus};

use super::*;

#[test]
fn unavailable_is_a_transport_error() {
    assert!(matches!(unavailable(), SubmitError::Transport(msg) if msg == "not available on server"));
}

#[test]
fn post_json_fails_outside_the_browser() {
    let err = block_on(BrowserWebhook.post_json(registration::WEBHOOK_URL, "{}".to_owned())).unwrap_err();
    assert!(matches!(err, SubmitError::Transport(_)));
}

#[test]
fn failed_transport_leaves_filled_form_intact() {
    let mut form = RegistrationForm::new();
    for field in registration::Field::ALL {
        form.set_text(field, "12345678");
    }
    let before = form.record().clone();

    assert!(block_on(form.submit(&BrowserWebhook)).is_err());

    assert_eq!(form.status(), SubmitStatus::Failure);
    assert_eq!(form.record(), &before);
}
