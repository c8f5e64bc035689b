// ============================================================================
// Numeral Errors
// Error types for numeral validation and rendering
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while turning a numeral into words.
///
/// Every variant is terminal. The `Display` text is the sentence shown to the
/// end user in place of the written number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumeralError {
    /// Input failed validation (not a plain decimal numeral)
    NotANumber,
    /// Integer part needs a magnitude name beyond the name table
    NumberTooLarge,
    /// Fractional part needs a magnitude name beyond the name table
    FractionTooPrecise,
}

/// Name used at the public boundary.
pub type FormatError = NumeralError;

impl fmt::Display for NumeralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralError::NotANumber => write!(
                f,
                "Your input was not a simple number. Please write one into the input field if you want a correct result."
            ),
            NumeralError::NumberTooLarge => write!(
                f,
                "Number is larger than what is currently supported. Please enter a smaller number"
            ),
            NumeralError::FractionTooPrecise => write!(
                f,
                "Number is more precise than what is currently supported. Please enter fewer decimal places"
            ),
        }
    }
}

impl std::error::Error for NumeralError {}

/// Result type alias for numeral operations
pub type NumeralResult<T> = Result<T, NumeralError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumeralError::NumberTooLarge.to_string(),
            "Number is larger than what is currently supported. Please enter a smaller number"
        );
        assert!(NumeralError::NotANumber
            .to_string()
            .starts_with("Your input was not a simple number."));
        assert!(NumeralError::FractionTooPrecise
            .to_string()
            .contains("fewer decimal places"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumeralError::NotANumber, NumeralError::NotANumber);
        assert_ne!(NumeralError::NumberTooLarge, NumeralError::FractionTooPrecise);
    }
}
