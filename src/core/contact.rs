//! Contact form submission.
//!
//! One POST per submit, no retries. The form state moves
//! idle -> sending -> succeeded | failed and, after a success, back to idle
//! once the confirmation has been on screen for the display window.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::{ReadableExt, Signal, WritableExt};
use http::header::CONTENT_TYPE;
use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::state::{ContactFormState, ContactMessage, SubmitStatus};

/// Why a submit never reached the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    #[error("a message is already being sent")]
    AlreadySending,
    #[error("please fill in your {0}")]
    MissingField(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error(transparent)]
    Rejected(#[from] SubmitRejection),
    #[error("could not reach the server: {0}")]
    Transport(String),
    #[error("API error: {status} - {body}")]
    Status { status: StatusCode, body: String },
    #[error("unexpected response: {0}")]
    MalformedResponse(String),
}

/// Delivers a contact message. Returns the decoded response body on success.
pub trait ContactTransport {
    fn post(&self, message: &ContactMessage) -> impl Future<Output = Result<Value, ContactError>>;
}

/// `POST {origin}/api/contact-messages/` with a JSON body.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl ReqwestTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ContactTransport for ReqwestTransport {
    async fn post(&self, message: &ContactMessage) -> Result<Value, ContactError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(message)
            .send()
            .await
            .map_err(|err| ContactError::Transport(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ContactError::Transport(err.to_string()))?;
        if !status.is_success() {
            return Err(ContactError::Status { status, body });
        }
        serde_json::from_str(&body).map_err(|err| ContactError::MalformedResponse(err.to_string()))
    }
}

/// Where the submitter reads and writes form state.
pub trait ContactFormStore {
    fn snapshot(&self) -> ContactFormState;
    fn update(&mut self, apply: impl FnOnce(&mut ContactFormState));
}

impl ContactFormStore for Signal<ContactFormState> {
    fn snapshot(&self) -> ContactFormState {
        self.read().clone()
    }

    fn update(&mut self, apply: impl FnOnce(&mut ContactFormState)) {
        apply(&mut self.write());
    }
}

impl ContactFormStore for Rc<RefCell<ContactFormState>> {
    fn snapshot(&self) -> ContactFormState {
        self.borrow().clone()
    }

    fn update(&mut self, apply: impl FnOnce(&mut ContactFormState)) {
        apply(&mut self.borrow_mut());
    }
}

pub struct ContactSubmitter<T> {
    transport: T,
    display_window: Duration,
    /// Bumped by every submit that reaches the transport. Only the latest
    /// cycle may end the success display.
    cycle: Cell<u64>,
}

impl<T: ContactTransport> ContactSubmitter<T> {
    pub fn new(transport: T, display_window: Duration) -> Self {
        Self {
            transport,
            display_window,
            cycle: Cell::new(0),
        }
    }

    /// Validate and enter `sending`. Nothing changes when rejected.
    fn begin<S: ContactFormStore>(store: &mut S) -> Result<ContactMessage, SubmitRejection> {
        let state = store.snapshot();
        if state.is_sending() {
            return Err(SubmitRejection::AlreadySending);
        }
        let message = state
            .to_message()
            .map_err(|field| SubmitRejection::MissingField(field.label()))?;
        store.update(|state| state.status = SubmitStatus::Sending);
        Ok(message)
    }

    /// Run one submit cycle against `store`.
    ///
    /// On success this resolves after the display window, with the form back
    /// to idle. On failure it resolves as soon as the form is marked failed;
    /// the fields are left as they were.
    pub async fn submit<S: ContactFormStore>(&self, store: &mut S) -> Result<(), ContactError> {
        let message = Self::begin(store)?;
        let cycle = self.cycle.get() + 1;
        self.cycle.set(cycle);
        match self.transport.post(&message).await {
            Ok(body) => {
                log::info!("contact message delivered: {}", body);
                store.update(|state| {
                    state.clear_fields();
                    state.status = SubmitStatus::Succeeded;
                });
                tokio::time::sleep(self.display_window).await;
                if self.cycle.get() == cycle {
                    store.update(|state| {
                        if state.status == SubmitStatus::Succeeded {
                            state.status = SubmitStatus::Idle;
                        }
                    });
                }
                Ok(())
            }
            Err(err) => {
                log::error!("contact message failed: {}", err);
                let shown = format!("Failed to send message: {}", err);
                store.update(|state| state.status = SubmitStatus::Failed(shown));
                Err(err)
            }
        }
    }
}

/// Endpoint for a configured API origin.
pub fn contact_endpoint(origin: &str) -> String {
    format!("{}/api/contact-messages/", origin.trim_end_matches('/'))
}
