//! # Timestamp Formatting
//!
//! Unix seconds → `YYYY-MM-DD HH:MM:SS` in a calendar time zone.
//!
//! The pages format in [`chrono::Local`]; everything else goes through
//! [`format_unix_timestamp_in`] so output is deterministic for a fixed zone.

use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

use crate::error::{CoreError, CoreResult};

/// Four-digit year, every other field zero-padded to two digits.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats `secs` since the Unix epoch in the local time zone.
///
/// ## Example
/// ```rust
/// use storefront_core::timestamp::format_unix_timestamp;
///
/// let text = format_unix_timestamp(0).unwrap();
/// assert_eq!(text.len(), "1970-01-01 00:00:00".len());
/// ```
pub fn format_unix_timestamp(secs: i64) -> CoreResult<String> {
    format_unix_timestamp_in(secs, &Local)
}

/// Formats `secs` since the Unix epoch in the given time zone.
///
/// ## Example
/// ```rust
/// use chrono::{FixedOffset, Utc};
/// use storefront_core::timestamp::format_unix_timestamp_in;
///
/// assert_eq!(
///     format_unix_timestamp_in(1_672_531_199, &Utc).unwrap(),
///     "2022-12-31 23:59:59"
/// );
/// let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
/// assert_eq!(
///     format_unix_timestamp_in(1_672_531_199, &tokyo).unwrap(),
///     "2023-01-01 08:59:59"
/// );
/// ```
pub fn format_unix_timestamp_in<Tz>(secs: i64, tz: &Tz) -> CoreResult<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let utc = DateTime::from_timestamp(secs, 0).ok_or(CoreError::TimestampOutOfRange(secs))?;
    Ok(utc.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string())
}

/// Parses text produced by the formatters back into calendar fields.
pub fn parse_formatted(text: &str) -> CoreResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).map_err(|e| CoreError::TimestampParse {
        input: text.to_string(),
        reason: e.to_string(),
    })
}
