// ============================================================================
// Basic Usage Example
// ============================================================================

use rust_decimal::Decimal;
use std::sync::Arc;
use written_numerals::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Written Numerals Example ===\n");

    // One-shot formatting with the default configuration
    println!("Formatting numeral strings...");
    for input in ["123456", "1002", "1300", "1.2", "0.2", "-1234567", "abc"] {
        println!("  {:>10} -> {}", input, format(Some(input)));
    }

    // Typed errors instead of display messages
    println!("\n=== Typed Errors ===");
    let too_large = "9".repeat(131);
    match try_format(&too_large) {
        Ok(words) => println!("  unexpected: {}", words),
        Err(error) => println!("  {:?}: {}", error, error),
    }

    // Configured writer reporting to the logging handler
    println!("\n=== Configured Writer ===");
    let writer = NumeralWriterBuilder::new()
        .teen_hundreds(false)
        .negative_word("negative")
        .build(Arc::new(LoggingEventHandler))
        .unwrap();

    for value in [1999i64, -42, 1_000_000_000] {
        match writer.write(value) {
            Ok(words) => println!("  {:>10} -> {}", value, words),
            Err(error) => println!("  {:>10} -> {}", value, error),
        }
    }

    let price = Decimal::new(-1995, 2);
    match writer.write(price) {
        Ok(words) => println!("  {:>10} -> {}", price, words),
        Err(error) => println!("  {:>10} -> {}", price, error),
    }
}
