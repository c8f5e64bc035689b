// ============================================================================
// Numeral Writer
// Orchestrates validation, integer/fraction rendering and sign handling
// ============================================================================

use super::integer::{write_fractional, write_integer};
use crate::domain::config::{NegativeZero, NumeralConfig};
use crate::interfaces::{EventHandler, FormatEvent, IntoNumeral, NoOpEventHandler};
use crate::numeric::{NumeralResult, ParsedNumeral};
use std::sync::Arc;

/// Write a parsed numeral in words according to `config`.
///
/// # Errors
/// Propagates `NumberTooLarge` / `FractionTooPrecise` from the block writers.
pub fn render(numeral: &ParsedNumeral, config: &NumeralConfig) -> NumeralResult<String> {
    let negative = numeral.sign().is_negative();

    if numeral.is_zero() {
        return Ok(match (negative, config.negative_zero) {
            (true, NegativeZero::Signed) => format!("{} {}", config.negative_word, config.zero_word),
            _ => config.zero_word.clone(),
        });
    }

    // "and" marks the decimal point whenever a fraction will be written
    let force_no_ands = numeral.has_nonzero_fraction();

    let integer = write_integer(numeral.integer(), force_no_ands, config.teen_hundreds)?;
    let fraction = match numeral.fraction() {
        Some(fraction) => write_fractional(fraction, config.teen_hundreds)?,
        None => String::new(),
    };

    let body = join_parts(integer, fraction);
    if negative {
        Ok(format!("{} {}", config.negative_word, body))
    } else {
        Ok(body)
    }
}

/// Join integer and fractional words with "and", skipping empty sides.
fn join_parts(integer: String, fraction: String) -> String {
    match (integer.is_empty(), fraction.is_empty()) {
        (false, false) => format!("{integer} and {fraction}"),
        (true, _) => fraction,
        (false, true) => integer,
    }
}

/// Validate and write `input` with the default configuration.
///
/// # Errors
/// - `NotANumber` if the input is not a plain decimal numeral
/// - `NumberTooLarge` / `FractionTooPrecise` if a magnitude has no name
pub fn try_format(input: &str) -> NumeralResult<String> {
    let numeral: ParsedNumeral = input.parse()?;
    render(&numeral, &NumeralConfig::default())
}

/// Write `input` in English, or return the error message to show instead.
///
/// Never panics. `None` is treated like any other invalid input.
///
/// # Example
/// ```
/// use written_numerals::format;
///
/// assert_eq!(format(Some("1300")), "thirteen hundred");
/// assert_eq!(format(Some("-0.002")), "minus two thousandths");
/// ```
pub fn format(input: Option<&str>) -> String {
    match input.map(try_format) {
        Some(Ok(words)) => words,
        Some(Err(error)) => error.to_string(),
        None => crate::numeric::NumeralError::NotANumber.to_string(),
    }
}

// ============================================================================
// Configured Writer
// ============================================================================

/// A configured numeral writer that reports every outcome to an event handler.
///
/// Immutable after construction and safe to share between threads.
pub struct NumeralWriter {
    config: NumeralConfig,
    event_handler: Arc<dyn EventHandler>,
}

impl NumeralWriter {
    /// Create a new writer.
    ///
    /// The configuration is taken as-is; use
    /// [`create_from_config`](super::factory::create_from_config) to validate it first.
    pub fn new(config: NumeralConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    #[inline]
    pub fn config(&self) -> &NumeralConfig {
        &self.config
    }

    /// Validate and write a numeral string.
    pub fn write_str(&self, input: &str) -> NumeralResult<String> {
        let outcome = input
            .parse::<ParsedNumeral>()
            .and_then(|numeral| render(&numeral, &self.config));
        self.event_handler
            .on_event(FormatEvent::from_outcome(input, &outcome));
        outcome
    }

    /// Write any typed numeral source.
    pub fn write<T: IntoNumeral>(&self, value: T) -> NumeralResult<String> {
        self.write_str(&value.into_numeral())
    }

    /// Like [`format`], using this writer's configuration.
    pub fn format(&self, input: Option<&str>) -> String {
        match input {
            Some(input) => self
                .write_str(input)
                .unwrap_or_else(|error| error.to_string()),
            None => {
                self.event_handler.on_event(FormatEvent::InputRejected {
                    input: String::new(),
                    timestamp: chrono::Utc::now(),
                });
                crate::numeric::NumeralError::NotANumber.to_string()
            }
        }
    }
}

impl Default for NumeralWriter {
    fn default() -> Self {
        Self::new(NumeralConfig::default(), Arc::new(NoOpEventHandler))
    }
}
