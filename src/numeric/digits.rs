// ============================================================================
// Digit Sequences
// Validated digit types and the parsed form of a numeral string
// ============================================================================

use super::errors::{NumeralError, NumeralResult};
use super::validation::validate;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// A single decimal digit (0-9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);

    /// Create from a numeric value. Returns `None` above 9.
    #[inline]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create from an ASCII digit character.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        if byte.is_ascii_digit() {
            Some(Self(byte - b'0'))
        } else {
            None
        }
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn to_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Digit String
// ============================================================================

/// An owned run of decimal digits. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Digits(Vec<Digit>);

impl Digits {
    /// Parse a string made only of ASCII digits.
    ///
    /// # Errors
    /// Returns `NotANumber` if any character is not `0-9`.
    pub fn parse(s: &str) -> NumeralResult<Self> {
        s.bytes()
            .map(|b| Digit::from_ascii(b).ok_or(NumeralError::NotANumber))
            .collect::<NumeralResult<Vec<_>>>()
            .map(Self)
    }

    /// True when every digit is zero (vacuously true when empty).
    #[inline]
    pub fn is_all_zero(&self) -> bool {
        is_all_zero(&self.0)
    }
}

impl Deref for Digits {
    type Target = [Digit];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.0 {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

/// True when every digit is zero (vacuously true when empty).
#[inline]
pub fn is_all_zero(digits: &[Digit]) -> bool {
    digits.iter().all(|d| d.is_zero())
}

/// Strip leading zeroes. An all-zero input yields an empty slice.
#[inline]
pub fn trim_leading_zeros(digits: &[Digit]) -> &[Digit] {
    let start = digits
        .iter()
        .position(|d| !d.is_zero())
        .unwrap_or(digits.len());
    &digits[start..]
}

// ============================================================================
// Parsed Numeral
// ============================================================================

/// Sign of a numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }
}

/// A validated numeral split into sign, integer digits and fractional digits.
///
/// `integer` is empty only for inputs like `".5"`. `fraction` is `None` when
/// the source had no decimal point and `Some(empty)` for inputs like `"5."`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedNumeral {
    sign: Sign,
    integer: Digits,
    fraction: Option<Digits>,
}

impl ParsedNumeral {
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn integer(&self) -> &Digits {
        &self.integer
    }

    #[inline]
    pub fn fraction(&self) -> Option<&Digits> {
        self.fraction.as_ref()
    }

    /// True when both parts consist only of zeroes.
    pub fn is_zero(&self) -> bool {
        self.integer.is_all_zero() && self.fraction.as_ref().is_none_or(Digits::is_all_zero)
    }

    /// True when a fractional part exists and carries a non-zero digit.
    pub fn has_nonzero_fraction(&self) -> bool {
        self.fraction.as_ref().is_some_and(|f| !f.is_all_zero())
    }
}

impl FromStr for ParsedNumeral {
    type Err = NumeralError;

    /// Parse a numeral string.
    ///
    /// # Examples
    /// - "123" -> +, [1,2,3], None
    /// - "-0.002" -> -, [0], Some([0,0,2])
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)?;

        let (sign, s) = if let Some(rest) = s.strip_prefix('-') {
            (Sign::Negative, rest)
        } else {
            (Sign::Positive, s)
        };

        let (int_str, frac_str) = match s.split_once('.') {
            Some((int_str, frac_str)) => (int_str, Some(frac_str)),
            None => (s, None),
        };

        Ok(Self {
            sign,
            integer: Digits::parse(int_str)?,
            fraction: frac_str.map(Digits::parse).transpose()?,
        })
    }
}
