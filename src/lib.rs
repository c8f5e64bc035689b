// ============================================================================
// Written Numerals Library
// Converts decimal numeral strings into written English
// ============================================================================

//! # Written Numerals
//!
//! Turns a decimal numeral such as `"-1234.5"` into English words such as
//! `"minus twelve hundred and thirty-four and five tenths"`.
//!
//! ## Features
//!
//! - **Strict validation** of plain decimal numerals (sign, digits, one point)
//! - **Long-scale magnitude names** up to vigintillion (10^120)
//! - **British "and"** between hundreds and tens, reserved for the decimal point
//!   when a fraction is present
//! - **Teen hundreds** ("thirteen hundred") for 1100-1999
//! - **Fractions** with singular/plural denominators ("one tenth", "two tenths")
//! - **Pure and thread-safe**: no I/O, no shared mutable state
//!
//! ## Example
//!
//! ```rust
//! use written_numerals::prelude::*;
//! use std::sync::Arc;
//!
//! // One-shot formatting; errors come back as their display message
//! assert_eq!(format(Some("1002")), "one thousand and two");
//! assert_eq!(format(Some("1.2")), "one and two tenths");
//!
//! // Typed errors
//! assert_eq!(try_format("abc"), Err(FormatError::NotANumber));
//!
//! // Configured writer with event reporting
//! let writer = NumeralWriterBuilder::new()
//!     .teen_hundreds(false)
//!     .build(Arc::new(LoggingEventHandler))
//!     .unwrap();
//! assert_eq!(writer.write(1300u32).unwrap(), "one thousand three hundred");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

pub use domain::{block_partition, write_block};
pub use engine::{format, try_format};
pub use numeric::{is_valid, FormatError};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        block_partition, write_block, Block, NegativeZero, NumeralConfig, WrittenBlock,
    };
    pub use crate::engine::{
        create_from_config, format, try_format, NumeralWriter, NumeralWriterBuilder,
    };
    pub use crate::interfaces::{
        EventHandler, FormatEvent, IntoNumeral, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeric::{is_valid, FormatError, NumeralError, NumeralResult, ParsedNumeral};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    const NOT_A_NUMBER: &str = "Your input was not a simple number. Please write one into the input field if you want a correct result.";
    const TOO_LARGE: &str =
        "Number is larger than what is currently supported. Please enter a smaller number";

    fn words(input: &str) -> String {
        format(Some(input))
    }

    #[test]
    fn test_incorrect_input() {
        assert_eq!(words("abc"), NOT_A_NUMBER);
        assert_eq!(words("1e2"), NOT_A_NUMBER);
        assert_eq!(words("1,000"), NOT_A_NUMBER);
        assert_eq!(words(""), NOT_A_NUMBER);
        assert_eq!(format(None), NOT_A_NUMBER);
    }

    #[test]
    fn test_complete_numbers() {
        assert_eq!(
            words("123456"),
            "one hundred and twenty-three thousand four hundred and fifty-six"
        );
        assert_eq!(words("1002"), "one thousand and two");
        assert_eq!(words("1002003"), "one million two thousand and three");
        assert_eq!(
            words("1203405"),
            "one million two hundred and three thousand four hundred and five"
        );
    }

    #[test]
    fn test_small_numbers() {
        assert_eq!(words("0"), "zero");
        assert_eq!(words("7"), "seven");
        assert_eq!(words("10"), "ten");
        assert_eq!(words("15"), "fifteen");
        assert_eq!(words("40"), "forty");
        assert_eq!(words("99"), "ninety-nine");
        assert_eq!(words("100"), "one hundred");
        assert_eq!(words("101"), "one hundred and one");
        assert_eq!(words("1000"), "one thousand");
        assert_eq!(words("1010"), "one thousand and ten");
        assert_eq!(words("1100"), "eleven hundred");
    }

    #[test]
    fn test_teen_hundreds() {
        assert_eq!(words("1355"), "thirteen hundred and fifty-five");
        assert_eq!(words("1300"), "thirteen hundred");
        assert_eq!(words("1320"), "thirteen hundred and twenty");
        assert_eq!(words("1302"), "thirteen hundred and two");
        assert_eq!(words("1117"), "eleven hundred and seventeen");
    }

    #[test]
    fn test_non_integers() {
        assert_eq!(words("1.2"), "one and two tenths");
        assert_eq!(words("1.03"), "one and three hundredths");
        assert_eq!(words("1.004"), "one and four thousandths");
        assert_eq!(words("1.0005"), "one and five ten thousandths");
        assert_eq!(words("1.00006"), "one and six hundred thousandths");
        assert_eq!(words("1.000007"), "one and seven millionths");
        assert_eq!(words("1.0000008"), "one and eight ten millionths");
        assert_eq!(words("1.00000009"), "one and nine hundred millionths");
        assert_eq!(words("1.000000010"), "one and ten thousand millionths");
        assert_eq!(words("1.0000000011"), "one and eleven ten thousand millionths");
        assert_eq!(
            words("1.00000000012"),
            "one and twelve hundred thousand millionths"
        );
        assert_eq!(words("0.2"), "two tenths");
        assert_eq!(words("1.1"), "one and one tenth");
        assert_eq!(words("1.0"), "one");
        assert_eq!(
            words("123456789.0"),
            "one hundred and twenty-three million four hundred and fifty-six thousand seven hundred and eighty-nine"
        );
    }

    #[test]
    fn test_long_number_with_fraction() {
        assert_eq!(
            words("123456789123456789.123456789123456789"),
            "one hundred twenty-three thousand four hundred fifty-six billion \
             seven hundred eighty-nine thousand one hundred twenty-three million \
             four hundred fifty-six thousand seven hundred eighty-nine and \
             one hundred twenty-three thousand four hundred fifty-six billion \
             seven hundred eighty-nine thousand one hundred twenty-three million \
             four hundred fifty-six thousand seven hundred eighty-nine trillionths"
        );
    }

    #[test]
    fn test_negative_numbers() {
        assert_eq!(words("-1"), "minus one");
        assert_eq!(
            words("-1234567"),
            "minus one million two hundred and thirty-four thousand five hundred and sixty-seven"
        );
        assert_eq!(words("-1.1"), "minus one and one tenth");
        assert_eq!(words("-0.002"), "minus two thousandths");
    }

    #[test]
    fn test_plurality() {
        assert!(words("1.1").ends_with("tenth"));
        assert!(words("1.2").ends_with("tenths"));
        assert!(words("0.001").ends_with("thousandth"));
        assert!(words("0.011").ends_with("thousandths"));
    }

    #[test]
    fn test_number_too_large() {
        let input = format!("1{}", "0".repeat(126));
        assert_eq!(words(&input), TOO_LARGE);
        assert_eq!(words(&"9".repeat(131)), TOO_LARGE);
        assert_eq!(words(&"1".repeat(131)), TOO_LARGE);
    }

    #[test]
    fn test_magnitude_boundaries() {
        // 10^123: a thousand vigintillion, the largest named block
        let largest = format!("1{}", "0".repeat(123));
        assert_eq!(words(&largest), "one thousand vigintillion");

        let vigintillion = format!("1{}", "0".repeat(120));
        assert_eq!(words(&vigintillion), "one vigintillion");

        let finest = format!("0.{}1", "0".repeat(124));
        assert_eq!(words(&finest), "one hundred thousand vigintillionth");

        let too_fine = format!("0.{}1", "0".repeat(125));
        assert_eq!(words(&too_fine), FormatError::FractionTooPrecise.to_string());
    }

    #[test]
    fn test_exposed_helpers() {
        assert_eq!(block_partition("1234567"), vec!["1", "234", "567"]);
        assert_eq!(write_block("123", false, false), "one hundred and twenty-three");
        assert_eq!(write_block("002", true, false), "and two");
        assert!(is_valid(Some("0.5")));
        assert!(!is_valid(Some("05")));
    }
}
