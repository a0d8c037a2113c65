//! # Clock Command

use std::io::Write;

use chrono::Local;

use crate::dom::DocumentState;
use crate::error::PageResult;
use crate::state::ClockWidget;

/// Prints `timestamp` (or now) in local time.
pub fn show_clock<W: Write>(timestamp: Option<i64>, out: &mut W) -> PageResult<String> {
    let clock = ClockWidget::mount(DocumentState::new(ClockWidget::page()));

    let shown = match timestamp {
        Some(secs) => clock.render_at(secs, &Local)?,
        None => clock.render_now()?,
    };

    writeln!(out, "{}", shown)?;
    Ok(shown)
}
