// ============================================================================
// Numeric Module
// Validated numeral input for the English writer
// ============================================================================
//
// This module provides:
// - is_valid / validate: the numeral validator (runs before anything else)
// - Digit / Digits: digit sequences with validated construction
// - ParsedNumeral: sign + integer digits + fractional digits
// - NumeralError: error kinds with their user-facing messages
//
// Design principles:
// - No floating-point parsing
// - All fallible operations return Result (no panics)
// - No character indexing outside this module

mod digits;
mod errors;
mod validation;

pub use digits::{is_all_zero, trim_leading_zeros, Digit, Digits, ParsedNumeral, Sign};
pub use errors::{FormatError, NumeralError, NumeralResult};
pub use validation::{is_valid, validate};
