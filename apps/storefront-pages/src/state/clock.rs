//! # Clock Widget
//!
//! Writes the current local time into `#displayTime` once. The element is
//! optional: without it the time is only logged.

use chrono::{TimeZone, Utc};
use storefront_core::timestamp::{format_unix_timestamp, format_unix_timestamp_in};
use tracing::info;

use crate::dom::{Document, DocumentState};
use crate::error::{PageError, PageResult};

pub const DISPLAY_TIME_ID: &str = "displayTime";

#[derive(Debug, Clone)]
pub struct ClockWidget {
    doc: DocumentState,
}

impl ClockWidget {
    pub fn page() -> Document {
        Document::with_elements(&[("span", DISPLAY_TIME_ID)])
    }

    pub fn mount(doc: DocumentState) -> Self {
        ClockWidget { doc }
    }

    /// Shows the current time in the local timezone.
    pub fn render_now(&self) -> PageResult<String> {
        let secs = Utc::now().timestamp();
        let formatted = format_unix_timestamp(secs)?;
        self.show(secs, formatted)
    }

    /// Shows `secs` in the given timezone.
    pub fn render_at<Tz>(&self, secs: i64, tz: &Tz) -> PageResult<String>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let formatted = format_unix_timestamp_in(secs, tz)?;
        self.show(secs, formatted)
    }

    fn show(&self, secs: i64, formatted: String) -> PageResult<String> {
        info!(timestamp = secs, formatted = %formatted, "Current time");

        self.doc.with_doc_mut(|d| {
            if d.contains(DISPLAY_TIME_ID) {
                d.set_text(DISPLAY_TIME_ID, formatted.clone())?;
            }
            Ok::<_, PageError>(())
        })?;

        Ok(formatted)
    }
}
