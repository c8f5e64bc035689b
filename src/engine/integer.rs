// ============================================================================
// Integer and Fraction Writers
// Assemble written blocks with magnitude names
// ============================================================================

use crate::domain::block::{partition, should_put_and, write_digits};
use crate::domain::names;
use crate::numeric::{is_all_zero, trim_leading_zeros, Digit, NumeralError, NumeralResult};
use smallvec::SmallVec;

/// Whether `digits` is read with the teen-hundred idiom (1100-1999).
#[inline]
pub fn is_teen_hundreds(digits: &[Digit]) -> bool {
    matches!(digits, [Digit::ONE, second, _, _] if !second.is_zero())
}

/// "thirteen hundred and fifty-five" style rendering of 11xx-19xx.
///
/// Always keeps its "and", even when the surrounding number suppresses them.
fn write_teen_hundreds(digits: &[Digit; 4]) -> String {
    let [_, second, third, fourth] = *digits;

    let mut tokens: SmallVec<[String; 4]> = SmallVec::new();
    tokens.push(names::teen(second).to_string());
    tokens.push("hundred".to_string());

    if should_put_and(Some(second), Some(third), Some(fourth), true, false) {
        tokens.push("and".to_string());
    }

    if !(third.is_zero() && fourth.is_zero()) {
        tokens.push(write_digits(None, Some(third), Some(fourth), true, false).text);
    }

    tokens.join(" ")
}

/// Write an integer digit run in words.
///
/// Blocks are named on the long scale: thousand, million, thousand million,
/// billion, ... A zero block is skipped, except that a zero power-of-a-million
/// block still contributes its bare name after a non-zero thousand block
/// ("one thousand million" for 10^9). An empty or all-zero run writes as "".
///
/// # Errors
/// Returns `NumberTooLarge` when any block index runs off the name table.
pub fn write_integer(
    digits: &[Digit],
    force_no_ands: bool,
    teen_hundreds: bool,
) -> NumeralResult<String> {
    if teen_hundreds {
        if let Ok(four) = <&[Digit; 4]>::try_from(digits) {
            if is_teen_hundreds(four) {
                return Ok(write_teen_hundreds(four));
            }
        }
    }

    let blocks = partition(digits);
    let block_names = blocks
        .iter()
        .map(|block| block.name().ok_or(NumeralError::NumberTooLarge))
        .collect::<NumeralResult<SmallVec<[&str; 8]>>>()?;

    let last = blocks.len().saturating_sub(1);
    let mut tokens: Vec<String> = Vec::with_capacity(blocks.len() * 2);
    let mut higher_thousand_nonzero = false;

    for (i, (block, name)) in blocks.iter().zip(block_names).enumerate() {
        if block.is_zero() {
            // Zero powers of a million still close a preceding thousand
            if higher_thousand_nonzero && !name.is_empty() && name != names::THOUSAND {
                tokens.push(name.to_string());
            }
        } else {
            let written = block.write(i == last, force_no_ands);
            tokens.push(written.text);
            if !name.is_empty() {
                tokens.push(name.to_string());
            }
        }
        higher_thousand_nonzero = name == names::THOUSAND && !block.is_zero();
    }

    Ok(tokens.join(" "))
}

/// Singular only for a lone trailing "1" after zeroes (0.1, 0.001, ...).
pub fn is_fraction_plural(digits: &[Digit]) -> bool {
    match digits.split_last() {
        Some((last, rest)) => !(is_all_zero(rest) && (last.is_zero() || *last == Digit::ONE)),
        None => false,
    }
}

/// Write the digits after the decimal point, e.g. "three hundredths".
///
/// Leading zeroes only shift the denominator. An all-zero or empty fraction
/// writes as "".
///
/// # Errors
/// Returns `FractionTooPrecise` when the denominator runs off the name table.
pub fn write_fractional(digits: &[Digit], teen_hundreds: bool) -> NumeralResult<String> {
    let significant = trim_leading_zeros(digits);
    if significant.is_empty() {
        return Ok(String::new());
    }

    let denominator =
        names::fraction_denominator(digits.len()).ok_or(NumeralError::FractionTooPrecise)?;
    let plural = if is_fraction_plural(digits) { "s" } else { "" };

    let numerator = write_integer(significant, true, teen_hundreds)?;
    Ok(format!("{numerator} {denominator}th{plural}"))
}
