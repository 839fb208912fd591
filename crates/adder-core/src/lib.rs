//! Integer addition over textual operands
//!
//! Both operands are validated as a pair before anything is added.

use icu_properties::{CodePointMapData, props::GeneralCategory};

/// Broad category of an [`AdderError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An operand is absent or is not a base-10 `i32`
    InvalidInput,
    /// Both operands are valid but their sum does not fit in `i32`
    Overflow,
}

impl ErrorKind {
    /// Stable machine-readable code
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::Overflow => "overflow",
        }
    }
}

/// Error types for `sum`
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AdderError {
    #[error("Both inputs cannot be null.")]
    MissingInput,

    #[error("Both inputs must be valid integers.")]
    NotAnInteger,

    #[error("Sum of {a} and {b} overflows a 32-bit signed integer.")]
    Overflow { a: i32, b: i32 },
}

impl AdderError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingInput | Self::NotAnInteger => ErrorKind::InvalidInput,
            Self::Overflow { .. } => ErrorKind::Overflow,
        }
    }
}

/// Add two integers given as text
///
/// `None` marks an absent operand. Absence is checked before format, and the
/// error never says which operand was at fault.
///
/// # Errors
///
/// Returns `AdderError::MissingInput` if either operand is absent,
/// `AdderError::NotAnInteger` if either does not parse as `i32`, and
/// `AdderError::Overflow` if the sum leaves the `i32` range.
pub fn sum(a: Option<&str>, b: Option<&str>) -> Result<i32, AdderError> {
    let (Some(a), Some(b)) = (a, b) else {
        return Err(AdderError::MissingInput);
    };

    let (Some(x), Some(y)) = (parse_operand(a), parse_operand(b)) else {
        return Err(AdderError::NotAnInteger);
    };

    let total = x.checked_add(y).ok_or(AdderError::Overflow { a: x, b: y })?;
    log::debug!("{x} + {y} = {total}");
    Ok(total)
}

/// Parses an optionally signed base-10 `i32`. Digits may come from any
/// Unicode decimal-digit script, matching Java's `Integer.parseInt`.
fn parse_operand(text: &str) -> Option<i32> {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() {
        log::trace!("rejecting operand {text:?}: no digits");
        return None;
    }

    // Accumulate negatively so i32::MIN stays representable
    let mut value: i32 = 0;
    for ch in digits.chars() {
        let Some(digit) = decimal_digit(ch) else {
            log::trace!("rejecting operand {text:?}: {ch:?} is not a decimal digit");
            return None;
        };
        let Some(next) = value.checked_mul(10).and_then(|v| v.checked_sub(digit)) else {
            log::trace!("rejecting operand {text:?}: out of range");
            return None;
        };
        value = next;
    }

    if negative {
        Some(value)
    } else {
        value.checked_neg()
    }
}

/// Numeric value of a general category `Nd` character
fn decimal_digit(ch: char) -> Option<i32> {
    if ch.is_ascii() {
        return ch.to_digit(10).and_then(|d| i32::try_from(d).ok());
    }

    let categories = CodePointMapData::<GeneralCategory>::new();
    if categories.get(ch) != GeneralCategory::DecimalNumber {
        return None;
    }

    // Nd characters are encoded in contiguous runs of ten, starting at zero
    let mut offset = 0;
    let mut code = u32::from(ch);
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32) {
        if categories.get(prev) != GeneralCategory::DecimalNumber {
            break;
        }
        offset += 1;
        code -= 1;
    }
    Some(offset % 10)
}
