//! Shared fakes for unit tests.

use std::cell::RefCell;

use crate::record::RegistrationRecord;
use crate::webhook::{SubmitError, Webhook};

/// What the fake should answer with.
pub(crate) enum Reply {
    Status(u16),
    NetworkDown,
}

/// In-memory [`Webhook`] that records each call and answers with a fixed reply.
pub(crate) struct RecordingWebhook {
    reply: Reply,
    pub(crate) calls: RefCell<Vec<(String, String)>>,
}

impl RecordingWebhook {
    pub(crate) fn new(reply: Reply) -> Self {
        Self { reply, calls: RefCell::new(Vec::new()) }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Decode the body of the only recorded call.
    pub(crate) fn sent_json(&self) -> serde_json::Value {
        let calls = self.calls.borrow();
        assert_eq!(calls.len(), 1, "expected exactly one POST");
        serde_json::from_str(&calls[0].1).unwrap()
    }
}

#[async_trait::async_trait(?Send)]
impl Webhook for RecordingWebhook {
    async fn post_json(&self, url: &str, body: String) -> Result<u16, SubmitError> {
        self.calls.borrow_mut().push((url.to_owned(), body));
        match self.reply {
            Reply::Status(status) => Ok(status),
            Reply::NetworkDown => Err(SubmitError::Transport("connection refused".to_owned())),
        }
    }
}

pub(crate) fn filled_record() -> RegistrationRecord {
    RegistrationRecord {
        name: "Ana Lima".to_owned(),
        phone: "(21) 97777-1234".to_owned(),
        street: "Rua Sete".to_owned(),
        house_number: "7".to_owned(),
        neighborhood: "Tijuca".to_owned(),
        city: "Rio de Janeiro".to_owned(),
        postal_code: "20500000".to_owned(),
        state: "RJ".to_owned(),
        birth_date: "15/08/1985".to_owned(),
        attends_church: true,
    }
}
