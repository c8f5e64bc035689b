// ============================================================================
// Engine Module
// Turns validated numerals into English words
// ============================================================================

mod integer;
mod writer;

pub mod factory;

pub use factory::{create_from_config, NumeralWriterBuilder};
pub use integer::{is_fraction_plural, is_teen_hundreds, write_fractional, write_integer};
pub use writer::{format, render, try_format, NumeralWriter};
