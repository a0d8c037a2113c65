//! # Validation Module
//!
//! Input validation for the cart quantity field and the submission form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Widget (storefront-pages)                                     │
//! │  ├── Reads the raw field value                                          │
//! │  └── Shows the error inline / in the alert log                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── validate_quantity_input: "3" → 3, "2.5" → NotInteger ...           │
//! │  └── validate_submission: name + email → SubmissionPayload              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend (storefront-api)                                      │
//! │  └── Re-checks required fields and a looser email rule                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_quantity_input, validate_submission};
//!
//! assert_eq!(validate_quantity_input(" 4 ").unwrap(), 4);
//! assert!(validate_submission("Ann", "ann@example.com").is_ok());
//! ```

use std::sync::LazyLock;

use fancy_regex::Regex;

use crate::error::ValidationError;
use crate::types::SubmissionPayload;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Field label used in quantity messages.
pub const QUANTITY_FIELD: &str = "Quantity";

/// Field label used for the name input.
pub const NAME_FIELD: &str = "Name";

/// Field label used for the email input.
pub const EMAIL_FIELD: &str = "Email";

/// `local@domain.tld` with no whitespace and exactly one `@` per part.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

// =============================================================================
// Quantity Validators
// =============================================================================

/// Validates the raw text of the quantity field.
///
/// ## Rules
/// - Plain digits (surrounding whitespace ignored) → that integer
/// - Integer part below zero → [`ValidationError::Negative`]
/// - Finite number with a fractional part → [`ValidationError::NotInteger`]
/// - Anything else → [`ValidationError::NotANumber`]
///
/// Integral decimals such as `"3.0"` are accepted as `3`.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Quantity field: user types "2.5"                                       │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity_input("2.5") ← THIS FUNCTION                         │
/// │       │                                                                 │
/// │       ├── NotInteger → alert "Quantity must be a whole number"          │
/// │       │                field reset to 1                                 │
/// │       │                                                                 │
/// │       └── Ok(n) → field shows n                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_quantity_input;
/// use storefront_core::ValidationError;
///
/// assert_eq!(validate_quantity_input("12").unwrap(), 12);
/// assert!(matches!(
///     validate_quantity_input("-1"),
///     Err(ValidationError::Negative { .. })
/// ));
/// assert!(matches!(
///     validate_quantity_input("abc"),
///     Err(ValidationError::NotANumber { .. })
/// ));
/// ```
pub fn validate_quantity_input(raw: &str) -> ValidationResult<u64> {
    let trimmed = raw.trim();

    if let Ok(quantity) = trimmed.parse::<u64>() {
        return Ok(quantity);
    }

    let value = trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::NotANumber {
            field: QUANTITY_FIELD.to_string(),
        })?;

    if value.trunc() < 0.0 {
        return Err(ValidationError::Negative {
            field: QUANTITY_FIELD.to_string(),
        });
    }

    if value.fract() != 0.0 {
        return Err(ValidationError::NotInteger {
            field: QUANTITY_FIELD.to_string(),
        });
    }

    // u64::MAX is not exactly representable; anything at or past 2^64 overflows.
    if value >= u64::MAX as f64 {
        return Err(ValidationError::OutOfRange {
            field: QUANTITY_FIELD.to_string(),
            min: 0,
            max: u64::MAX,
        });
    }

    Ok(value as u64)
}

/// Reads the leading integer of a field value the way the stepper does.
///
/// Leading whitespace and one sign are accepted, then as many digits as
/// follow; the rest of the string is ignored. Returns `None` when no digit
/// is found. Values past the i64 range saturate.
///
/// ## Example
/// ```rust
/// use storefront_core::validation::parse_leading_integer;
///
/// assert_eq!(parse_leading_integer(" 42abc"), Some(42));
/// assert_eq!(parse_leading_integer("-3"), Some(-3));
/// assert_eq!(parse_leading_integer("2.9"), Some(2));
/// assert_eq!(parse_leading_integer(""), None);
/// ```
pub fn parse_leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = {
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        &digits[..end]
    };

    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });

    Some(if negative { -magnitude } else { magnitude })
}

// =============================================================================
// Form Validators
// =============================================================================

/// Per-field errors of a rejected submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<ValidationError>,
    pub email: Option<ValidationError>,
}

impl FormErrors {
    /// True when neither field has an error.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Validates the name field: it must contain a non-whitespace character.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: NAME_FIELD.to_string(),
        });
    }

    Ok(())
}

/// Returns true if `email` matches `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email).unwrap_or(false)
}

/// Validates the email field.
///
/// ## Rules
/// - Blank → [`ValidationError::Required`]
/// - Not `local@domain.tld` → [`ValidationError::InvalidEmail`]
///
/// The pattern is applied to the value as typed, so surrounding whitespace
/// makes an otherwise valid address invalid.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if email.trim().is_empty() {
        return Err(ValidationError::Required {
            field: EMAIL_FIELD.to_string(),
        });
    }

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validates both form fields and builds the payload to send.
///
/// Both fields are always checked so every error can be shown at once.
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_submission;
///
/// let errors = validate_submission("", "not-an-email").unwrap_err();
/// assert!(errors.name.is_some());
/// assert!(errors.email.is_some());
/// ```
pub fn validate_submission(name: &str, email: &str) -> Result<SubmissionPayload, FormErrors> {
    let errors = FormErrors {
        name: validate_name(name).err(),
        email: validate_email(email).err(),
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(SubmissionPayload {
        name: name.to_string(),
        email: email.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
