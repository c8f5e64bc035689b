// ============================================================================
// Numeral Writer Factory
// Creates numeral writers with validated configuration
// ============================================================================

use crate::domain::config::{NegativeZero, NumeralConfig};
use crate::engine::NumeralWriter;
use crate::interfaces::EventHandler;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a numeral writer from configuration
///
/// # Arguments
/// * `config` - Writer configuration
/// * `event_handler` - Event handler for format outcomes
///
/// # Returns
/// * `Result<NumeralWriter, String>` - Configured writer or error
///
/// # Example
/// ```
/// use written_numerals::prelude::*;
/// use std::sync::Arc;
///
/// let config = NumeralConfig::formal();
/// let writer = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(writer.write_str("1300").unwrap(), "one thousand three hundred");
/// ```
pub fn create_from_config(
    config: NumeralConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<NumeralWriter, String> {
    config.validate()?;

    Ok(NumeralWriter::new(config, event_handler))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating numeral writers with fluent API
///
/// # Example
/// ```
/// use written_numerals::prelude::*;
/// use std::sync::Arc;
///
/// let writer = NumeralWriterBuilder::new()
///     .negative_word("negative")
///     .signed_negative_zero()
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// assert_eq!(writer.write_str("-0").unwrap(), "negative zero");
/// ```
pub struct NumeralWriterBuilder {
    config: NumeralConfig,
}

impl NumeralWriterBuilder {
    /// Create a new builder with British defaults
    pub fn new() -> Self {
        Self {
            config: NumeralConfig::british(),
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: NumeralConfig) -> Self {
        Self { config }
    }

    /// Set the word for negative numbers
    pub fn negative_word(mut self, word: impl Into<String>) -> Self {
        self.config.negative_word = word.into();
        self
    }

    /// Set the word for zero
    pub fn zero_word(mut self, word: impl Into<String>) -> Self {
        self.config.zero_word = word.into();
        self
    }

    /// Read 1100-1999 as "eleven hundred" ... "nineteen hundred"
    pub fn teen_hundreds(mut self, enabled: bool) -> Self {
        self.config.teen_hundreds = enabled;
        self
    }

    /// Write "-0" with its sign
    pub fn signed_negative_zero(mut self) -> Self {
        self.config.negative_zero = NegativeZero::Signed;
        self
    }

    /// Build the writer
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<NumeralWriter, String> {
        create_from_config(self.config, event_handler)
    }
}

impl Default for NumeralWriterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
