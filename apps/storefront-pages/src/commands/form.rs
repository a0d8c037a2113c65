//! # Submit Command
//!
//! Fills the form, submits it once and prints the status line.

use std::io::Write;
use std::sync::Arc;

use storefront_client::StorefrontApi;

use crate::dom::DocumentState;
use crate::error::{PageError, PageResult};
use crate::state::form::{EMAIL_ERROR_ID, NAME_ERROR_ID, RESPONSE_MESSAGE_ID};
use crate::state::{FormWidget, SubmitOutcome};

pub async fn submit_form<W: Write>(
    api: Arc<dyn StorefrontApi>,
    name: &str,
    email: &str,
    out: &mut W,
) -> PageResult<SubmitOutcome> {
    let doc = DocumentState::new(FormWidget::page());
    let widget = FormWidget::mount(doc.clone(), api)?;

    widget.fill(name, email)?;
    let outcome = widget.submit().await?;

    let (name_error, email_error, status, class) = doc.with_doc(|d| {
        Ok::<_, PageError>((
            d.text(NAME_ERROR_ID)?,
            d.text(EMAIL_ERROR_ID)?,
            d.text(RESPONSE_MESSAGE_ID)?,
            d.require(RESPONSE_MESSAGE_ID)?.class_name(),
        ))
    })?;

    if !name_error.is_empty() {
        writeln!(out, "name: {}", name_error)?;
    }
    if !email_error.is_empty() {
        writeln!(out, "email: {}", email_error)?;
    }
    writeln!(out, "[{}] {}", class, status)?;

    Ok(outcome)
}
