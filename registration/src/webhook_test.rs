use futures::executor::block_on;

use super::*;
use crate::test_support::{RecordingWebhook, Reply, filled_record};

#[test]
fn posts_once_to_fixed_url_with_full_record() {
    let webhook = RecordingWebhook::new(Reply::Status(200));
    let record = filled_record();

    block_on(deliver(&webhook, &record)).unwrap();

    assert_eq!(webhook.call_count(), 1);
    assert_eq!(webhook.calls.borrow()[0].0, WEBHOOK_URL);
    let sent: RegistrationRecord = serde_json::from_value(webhook.sent_json()).unwrap();
    assert_eq!(sent, record);
}

#[test]
fn any_2xx_is_success() {
    for status in [200, 201, 204, 299] {
        let webhook = RecordingWebhook::new(Reply::Status(status));
        assert!(block_on(deliver(&webhook, &filled_record())).is_ok(), "status {status}");
    }
}

#[test]
fn non_2xx_is_rejected_with_status() {
    for status in [199, 300, 400, 422, 500] {
        let webhook = RecordingWebhook::new(Reply::Status(status));
        let err = block_on(deliver(&webhook, &filled_record())).unwrap_err();
        assert!(matches!(err, SubmitError::Rejected { status: s } if s == status));
    }
}

#[test]
fn transport_failure_is_passed_through() {
    let webhook = RecordingWebhook::new(Reply::NetworkDown);
    let err = block_on(deliver(&webhook, &filled_record())).unwrap_err();
    assert!(matches!(err, SubmitError::Transport(_)));
    assert_eq!(webhook.call_count(), 1);
}

#[test]
fn is_success_bounds() {
    assert!(!is_success(199));
    assert!(is_success(200));
    assert!(is_success(299));
    assert!(!is_success(300));
}

#[test]
fn rejected_message_includes_status() {
    assert_eq!(
        SubmitError::Rejected { status: 503 }.to_string(),
        "webhook rejected submission with status 503"
    );
}
