// ============================================================================
// Numeral Validation
// Decides whether an arbitrary string is an acceptable decimal numeral
// ============================================================================

use super::errors::{NumeralError, NumeralResult};

/// Check whether `input` is a plain decimal numeral.
///
/// Accepted: an optional leading `-`, decimal digits, at most one `.`.
/// Rejected:
/// - absent or empty input
/// - a `-` anywhere but the first position, or more than one `-`
/// - more than one `.`
/// - any character outside `0-9`, `.`, `-` (so no exponents, separators or spaces)
/// - no digit at all (`"-"`, `"."`, `"-."`)
/// - an integer part longer than one digit that starts with `0` (`"05"`)
///
/// Never panics.
pub fn is_valid(input: Option<&str>) -> bool {
    let Some(input) = input else {
        return false;
    };

    let unsigned = input.strip_prefix('-').unwrap_or(input);

    if unsigned.contains('-') {
        return false;
    }

    if !unsigned.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return false;
    }

    if unsigned.bytes().filter(|&b| b == b'.').count() > 1 {
        return false;
    }

    // Also covers the empty string
    if !unsigned.bytes().any(|b| b.is_ascii_digit()) {
        return false;
    }

    let integer_part = match unsigned.find('.') {
        Some(pos) => &unsigned[..pos],
        None => unsigned,
    };

    !(integer_part.len() > 1 && integer_part.starts_with('0'))
}

/// `Result` flavoured [`is_valid`] for `?` composition.
pub fn validate(input: &str) -> NumeralResult<()> {
    if is_valid(Some(input)) {
        Ok(())
    } else {
        Err(NumeralError::NotANumber)
    }
}
