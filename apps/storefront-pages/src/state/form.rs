//! # Form Widget
//!
//! Name/email form posted to the backend.
//!
//! ## Submit Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Form Submit Lifecycle                                │
//! │                                                                         │
//! │  ┌──────────┐   invalid   ┌──────────────────────────────────────────┐  │
//! │  │  Clear   │────────────►│ field errors + "Please check the input   │  │
//! │  │  errors  │             │ fields." (error)         no request      │  │
//! │  └────┬─────┘             └──────────────────────────────────────────┘  │
//! │       │ valid                                                           │
//! │       ▼                                                                 │
//! │  ┌──────────────────────┐                                               │
//! │  │ button disabled      │                                               │
//! │  │ "Submitting..." info │                                               │
//! │  └────┬─────────────────┘                                               │
//! │       │ await StorefrontApi::submit                                     │
//! │       ├── 2xx ─────────► success, fields cleared                        │
//! │       ├── non-2xx ─────► "Submission failed: ..." (error)               │
//! │       └── no reply ────► "Network error or server not responding"       │
//! │       ▼                                                                 │
//! │  button enabled (always)                                                │
//! │                                                                         │
//! │  submit while disabled ──► Busy, page untouched, no request             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use storefront_client::{StorefrontApi, UNKNOWN_ERROR};
use storefront_core::validation::{validate_submission, FormErrors};
use storefront_core::SubmissionPayload;
use tracing::{debug, error, info};

use crate::dom::{Document, DocumentState};
use crate::error::{PageError, PageResult};

pub const FORM_ID: &str = "submission-form";
pub const NAME_INPUT_ID: &str = "name";
pub const EMAIL_INPUT_ID: &str = "email";
pub const SUBMIT_BTN_ID: &str = "submit-btn";
pub const RESPONSE_MESSAGE_ID: &str = "response-message";
pub const NAME_ERROR_ID: &str = "name-error";
pub const EMAIL_ERROR_ID: &str = "email-error";

const REQUIRED_IDS: [&str; 7] = [
    FORM_ID,
    NAME_INPUT_ID,
    EMAIL_INPUT_ID,
    SUBMIT_BTN_ID,
    RESPONSE_MESSAGE_ID,
    NAME_ERROR_ID,
    EMAIL_ERROR_ID,
];

pub const INVALID_CLASS: &str = "invalid";
pub const CHECK_FIELDS_MESSAGE: &str = "Please check the input fields.";
pub const SUBMITTING_MESSAGE: &str = "Submitting... please wait";

/// How a submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Client-side validation failed; nothing was sent.
    Invalid(FormErrors),
    /// The server answered 2xx.
    Accepted { message: Option<String> },
    /// The server answered with an error status.
    Rejected { status: u16, message: String },
    /// No usable reply (connection, timeout, unparseable body).
    NetworkError(String),
    /// A previous submission is still in flight; nothing was sent.
    Busy,
}

/// The submission form bound to its document elements.
#[derive(Clone)]
pub struct FormWidget {
    doc: DocumentState,
    api: Arc<dyn StorefrontApi>,
}

impl FormWidget {
    /// A document with every element the widget needs.
    pub fn page() -> Document {
        Document::with_elements(&[
            ("form", FORM_ID),
            ("input", NAME_INPUT_ID),
            ("input", EMAIL_INPUT_ID),
            ("button", SUBMIT_BTN_ID),
            ("div", RESPONSE_MESSAGE_ID),
            ("div", NAME_ERROR_ID),
            ("div", EMAIL_ERROR_ID),
        ])
    }

    pub fn mount(doc: DocumentState, api: Arc<dyn StorefrontApi>) -> PageResult<Self> {
        doc.with_doc(|d| d.require_all(&REQUIRED_IDS))?;
        debug!("Form widget mounted");
        Ok(FormWidget { doc, api })
    }

    /// Types both fields.
    pub fn fill(&self, name: &str, email: &str) -> PageResult<()> {
        self.doc.with_doc_mut(|d| {
            d.set_value(NAME_INPUT_ID, name)?;
            d.set_value(EMAIL_INPUT_ID, email)
        })
    }

    /// Handles the form's submit event.
    ///
    /// A submit while the button is disabled returns [`SubmitOutcome::Busy`]
    /// and leaves the page untouched.
    pub async fn submit(&self) -> PageResult<SubmitOutcome> {
        let fields = self.doc.with_doc_mut(|d| {
            if d.is_disabled(SUBMIT_BTN_ID)? {
                return Ok(None);
            }
            clear_errors(d)?;
            Ok::<_, PageError>(Some((d.value(NAME_INPUT_ID)?, d.value(EMAIL_INPUT_ID)?)))
        })?;
        let Some((name, email)) = fields else {
            debug!("Submit ignored while a request is in flight");
            return Ok(SubmitOutcome::Busy);
        };
        debug!(name = %name, email = %email, "Form submit");

        let payload = match validate_submission(&name, &email) {
            Ok(payload) => payload,
            Err(errors) => {
                self.doc.with_doc_mut(|d| show_field_errors(d, &errors))?;
                debug!(?errors, "Form rejected client-side");
                return Ok(SubmitOutcome::Invalid(errors));
            }
        };

        let claimed = self.doc.with_doc_mut(|d| {
            if d.is_disabled(SUBMIT_BTN_ID)? {
                return Ok(false);
            }
            d.set_disabled(SUBMIT_BTN_ID, true)?;
            d.set_text(RESPONSE_MESSAGE_ID, SUBMITTING_MESSAGE)?;
            d.set_class_name(RESPONSE_MESSAGE_ID, "info")?;
            Ok::<_, PageError>(true)
        })?;
        if !claimed {
            return Ok(SubmitOutcome::Busy);
        }

        let outcome = self.send(&payload).await;

        // Re-enable before reporting any rendering failure.
        let enabled = self.doc.with_doc_mut(|d| d.set_disabled(SUBMIT_BTN_ID, false));
        let outcome = outcome?;
        enabled?;

        Ok(outcome)
    }

    async fn send(&self, payload: &SubmissionPayload) -> PageResult<SubmitOutcome> {
        match self.api.submit(payload).await {
            Ok(reply) if reply.is_success() => {
                let message = reply.message.unwrap_or_default();
                info!(status = reply.status, "Submission accepted");
                self.doc.with_doc_mut(|d| {
                    show_status(
                        d,
                        format!("Submitted successfully! Server message: {}", message),
                        "success",
                    )?;
                    d.set_value(NAME_INPUT_ID, "")?;
                    d.set_value(EMAIL_INPUT_ID, "")
                })?;
                Ok(SubmitOutcome::Accepted {
                    message: Some(message).filter(|m| !m.is_empty()),
                })
            }
            Ok(reply) => {
                let message = reply
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
                info!(status = reply.status, message = %message, "Submission rejected");
                self.doc.with_doc_mut(|d| {
                    show_status(d, format!("Submission failed: {}", message), "error")
                })?;
                Ok(SubmitOutcome::Rejected {
                    status: reply.status,
                    message,
                })
            }
            Err(e) => {
                error!(error = %e, "Submission failed");
                let text = e.to_string();
                self.doc.with_doc_mut(|d| {
                    show_status(
                        d,
                        format!("Network error or server not responding: {}", text),
                        "error",
                    )
                })?;
                Ok(SubmitOutcome::NetworkError(text))
            }
        }
    }
}

fn clear_errors(doc: &mut Document) -> PageResult<()> {
    doc.remove_class(NAME_INPUT_ID, INVALID_CLASS)?;
    doc.remove_class(EMAIL_INPUT_ID, INVALID_CLASS)?;
    doc.set_text(NAME_ERROR_ID, "")?;
    doc.set_text(EMAIL_ERROR_ID, "")?;
    doc.set_text(RESPONSE_MESSAGE_ID, "")?;
    doc.set_class_name(RESPONSE_MESSAGE_ID, "")
}

fn show_field_errors(doc: &mut Document, errors: &FormErrors) -> PageResult<()> {
    if let Some(e) = &errors.name {
        doc.add_class(NAME_INPUT_ID, INVALID_CLASS)?;
        doc.set_text(NAME_ERROR_ID, e.to_string())?;
    }
    if let Some(e) = &errors.email {
        doc.add_class(EMAIL_INPUT_ID, INVALID_CLASS)?;
        doc.set_text(EMAIL_ERROR_ID, e.to_string())?;
    }
    show_status(doc, CHECK_FIELDS_MESSAGE, "error")
}

/// Sets the status line and makes `class` its only class.
fn show_status(doc: &mut Document, text: impl Into<String>, class: &str) -> PageResult<()> {
    doc.set_text(RESPONSE_MESSAGE_ID, text)?;
    doc.set_class_name(RESPONSE_MESSAGE_ID, class)
}
