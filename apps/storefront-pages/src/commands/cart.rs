//! # Cart Command
//!
//! Drives the cart widget from a line-oriented event script.
//!
//! ```text
//! type 3      set the field to "3" and fire input
//! plus        click "+"
//! minus       click "-"
//! blur        leave the field
//! add         click "Add to cart"
//! ```
//!
//! After each event the pending alerts and the widget state are printed.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::dom::DocumentState;
use crate::error::PageResult;
use crate::state::{CartState, CartWidget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    Type(String),
    Plus,
    Minus,
    Blur,
    Add,
}

impl FromStr for CartEvent {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));

        match word.to_ascii_lowercase().as_str() {
            "type" | "input" => Ok(CartEvent::Type(rest.trim().to_string())),
            "plus" | "+" => Ok(CartEvent::Plus),
            "minus" | "-" => Ok(CartEvent::Minus),
            "blur" => Ok(CartEvent::Blur),
            "add" => Ok(CartEvent::Add),
            _ => Err(format!("Unknown event: {}", line)),
        }
    }
}

/// Replays events from `input`, writing what the page shows to `out`.
///
/// Returns the final cart total.
pub fn run_cart<R: BufRead, W: Write>(input: R, out: &mut W) -> PageResult<u64> {
    let doc = DocumentState::new(CartWidget::page());
    let widget = CartWidget::mount(doc.clone(), CartState::new())?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let event = match line.parse::<CartEvent>() {
            Ok(event) => event,
            Err(message) => {
                warn!(line = %line, "Skipping unknown cart event");
                writeln!(out, "{}", message)?;
                continue;
            }
        };
        debug!(?event, "Cart event");

        match event {
            CartEvent::Type(raw) => widget.type_quantity(&raw)?,
            CartEvent::Plus => widget.on_plus()?,
            CartEvent::Minus => widget.on_minus()?,
            CartEvent::Blur => widget.on_blur()?,
            CartEvent::Add => widget.on_add_to_cart()?,
        }

        for alert in doc.with_doc_mut(|d| d.take_alerts()) {
            writeln!(out, "alert: {}", alert)?;
        }
        writeln!(
            out,
            "quantity={} total={}",
            widget.quantity_field()?,
            widget.total()
        )?;
    }

    Ok(widget.total())
}
