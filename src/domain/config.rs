// ============================================================================
// Writer Configuration
// Wording options for the numeral writer
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Negative Zero
// ============================================================================

/// How a negative numeral with value zero ("-0", "-0.00") is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NegativeZero {
    /// Drop the sign: "zero"
    #[default]
    Unsigned,

    /// Keep the sign: "minus zero"
    Signed,
}

// ============================================================================
// Complete Writer Configuration
// ============================================================================

/// Configuration for a [`NumeralWriter`](crate::engine::NumeralWriter)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumeralConfig {
    /// Word placed in front of negative numbers (e.g. "minus", "negative")
    pub negative_word: String,

    /// Word written for a value of zero
    pub zero_word: String,

    /// Read 1100-1999 as "eleven hundred" ... "nineteen hundred"
    pub teen_hundreds: bool,

    /// Sign handling for negative zero
    pub negative_zero: NegativeZero,
}

impl Default for NumeralConfig {
    fn default() -> Self {
        Self::british()
    }
}

impl NumeralConfig {
    /// Create a new configuration with required parameters
    pub fn new(negative_word: String, zero_word: String) -> Self {
        Self {
            negative_word,
            zero_word,
            teen_hundreds: true,
            negative_zero: NegativeZero::Unsigned,
        }
    }

    /// Builder method: Enable or disable the teen-hundred idiom
    pub fn with_teen_hundreds(mut self, enabled: bool) -> Self {
        self.teen_hundreds = enabled;
        self
    }

    /// Builder method: Set negative zero handling
    pub fn with_negative_zero(mut self, negative_zero: NegativeZero) -> Self {
        self.negative_zero = negative_zero;
        self
    }

    /// Builder method: Set the word for negative numbers
    pub fn with_negative_word(mut self, word: impl Into<String>) -> Self {
        self.negative_word = word.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        validate_word("Negative word", &self.negative_word)?;
        validate_word("Zero word", &self.zero_word)?;
        Ok(())
    }
}

fn validate_word(label: &str, word: &str) -> Result<(), String> {
    if word.is_empty() {
        return Err(format!("{label} cannot be empty"));
    }

    if word.trim() != word {
        return Err(format!("{label} cannot start or end with whitespace"));
    }

    // Digits would leak into the output and break the digit-free guarantee
    if word.chars().any(|c| c.is_ascii_digit()) {
        return Err(format!("{label} cannot contain digits"));
    }

    Ok(())
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl NumeralConfig {
    /// British-style wording
    /// - "minus" for negatives
    /// - Teen hundreds ("thirteen hundred")
    pub fn british() -> Self {
        Self::new("minus".to_string(), "zero".to_string())
    }

    /// Formal wording
    /// - "minus" for negatives
    /// - No teen hundreds ("one thousand three hundred")
    pub fn formal() -> Self {
        Self::british().with_teen_hundreds(false)
    }

    /// Wording with "negative" in place of "minus"
    pub fn negative_style() -> Self {
        Self::british().with_negative_word("negative")
    }
}
