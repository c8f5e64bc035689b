// ============================================================================
// English Number Names
// Static lookup tables for digits, teens and magnitudes
// ============================================================================

use crate::numeric::Digit;

/// Ones names indexed by digit. Zero renders as nothing.
const ONES: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Tens names indexed by the tens digit. Index 1 is only used for a bare "10".
const TENS: [&str; 10] = [
    "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// 10..=19 indexed by the ones digit.
const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Powers of one million (long scale). Index 0 has no name.
pub const LARGE_NUMBER_NAMES: [&str; 21] = [
    "",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
    "undecillion",
    "duodecillion",
    "tredecillion",
    "quattuordecillion",
    "quindecillion",
    "sexdecillion",
    "septendecillion",
    "octodecillion",
    "novemdecillion",
    "vigintillion",
];

/// Name of the "thousand" magnitude that sits between two powers of a million.
pub const THOUSAND: &str = "thousand";

/// Fractional denominators below one million, indexed by `digit count % 6`.
const SUB_MILLION_FRACTION_NAMES: [&str; 6] = [
    "",
    "ten",
    "hundred",
    "thousand",
    "ten thousand",
    "hundred thousand",
];

#[inline]
pub fn ones(digit: Digit) -> &'static str {
    ONES[digit.value() as usize]
}

#[inline]
pub fn tens(digit: Digit) -> &'static str {
    TENS[digit.value() as usize]
}

/// Teen name for `1` followed by `ones`.
#[inline]
pub fn teen(ones: Digit) -> &'static str {
    TEENS[ones.value() as usize]
}

/// Name for the given power of one million, `None` beyond the table.
#[inline]
pub fn large_number_name(power_of_million: usize) -> Option<&'static str> {
    LARGE_NUMBER_NAMES.get(power_of_million).copied()
}

/// Magnitude name of a block counted from the least significant end.
///
/// Odd indices are thousands, even ones powers of a million.
#[inline]
pub fn block_name(reverse_index: usize) -> Option<&'static str> {
    if reverse_index % 2 == 1 {
        Some(THOUSAND)
    } else {
        large_number_name(reverse_index / 2)
    }
}

/// Largest block index that still has a name.
pub const MAX_BLOCK_INDEX: usize = (LARGE_NUMBER_NAMES.len() - 1) * 2 + 1;

/// Denominator name for a fraction with `digit_count` digits, without the
/// trailing "th".
///
/// Returns `None` once the million power runs off the table.
pub fn fraction_denominator(digit_count: usize) -> Option<String> {
    let lower = SUB_MILLION_FRACTION_NAMES[digit_count % 6];
    let higher = large_number_name(digit_count / 6)?;

    let name = match (lower.is_empty(), higher.is_empty()) {
        (false, false) => format!("{lower} {higher}"),
        (false, true) => lower.to_string(),
        (true, _) => higher.to_string(),
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    #[test]
    fn test_leaf_tables() {
        assert_eq!(ones(d(0)), "");
        assert_eq!(ones(d(7)), "seven");
        assert_eq!(tens(d(0)), "");
        assert_eq!(tens(d(4)), "forty");
        assert_eq!(teen(d(0)), "ten");
        assert_eq!(teen(d(9)), "nineteen");
    }

    #[test]
    fn test_block_names() {
        assert_eq!(block_name(0), Some(""));
        assert_eq!(block_name(1), Some("thousand"));
        assert_eq!(block_name(2), Some("million"));
        assert_eq!(block_name(3), Some("thousand"));
        assert_eq!(block_name(4), Some("billion"));
        assert_eq!(block_name(40), Some("vigintillion"));
        assert_eq!(block_name(MAX_BLOCK_INDEX), Some("thousand"));
        assert_eq!(block_name(42), None);
    }

    #[test]
    fn test_fraction_denominators() {
        assert_eq!(fraction_denominator(1).as_deref(), Some("ten"));
        assert_eq!(fraction_denominator(3).as_deref(), Some("thousand"));
        assert_eq!(fraction_denominator(6).as_deref(), Some("million"));
        assert_eq!(fraction_denominator(10).as_deref(), Some("ten thousand million"));
        assert_eq!(fraction_denominator(18).as_deref(), Some("trillion"));
        assert_eq!(
            fraction_denominator(125).as_deref(),
            Some("hundred thousand vigintillion")
        );
        assert_eq!(fraction_denominator(126), None);
    }
}
