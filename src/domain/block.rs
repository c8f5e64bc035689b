// ============================================================================
// Three-Digit Blocks
// Digit grouping and the leaf renderer for up to three digits
// ============================================================================

use super::names;
use crate::numeric::{Digit, NumeralError, NumeralResult};
use arrayvec::ArrayVec;
use smallvec::SmallVec;
use std::fmt;

/// Up to three digits that share one magnitude name.
///
/// `magnitude` counts blocks from the least significant end: 0 = units,
/// 1 = thousands, 2 = millions, 3 = thousand millions, ...
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Block {
    digits: ArrayVec<Digit, 3>,
    magnitude: usize,
}

/// Blocks of one number, most significant first.
pub type Blocks = SmallVec<[Block; 8]>;

impl Block {
    /// Build a block from 1 to 3 digits.
    ///
    /// # Errors
    /// Returns `NotANumber` for an empty or over-long slice.
    pub fn new(digits: &[Digit], magnitude: usize) -> NumeralResult<Self> {
        if digits.is_empty() {
            return Err(NumeralError::NotANumber);
        }
        let digits = ArrayVec::try_from(digits).map_err(|_| NumeralError::NotANumber)?;
        Ok(Self { digits, magnitude })
    }

    /// Parse a block from 1 to 3 ASCII digits at magnitude 0.
    pub fn parse(s: &str) -> NumeralResult<Self> {
        let digits = s
            .bytes()
            .map(|b| Digit::from_ascii(b).ok_or(NumeralError::NotANumber))
            .collect::<NumeralResult<SmallVec<[Digit; 3]>>>()?;
        Self::new(&digits, 0)
    }

    #[inline]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    #[inline]
    pub fn magnitude(&self) -> usize {
        self.magnitude
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|d| d.is_zero())
    }

    /// Digit `place` positions from the right (0 = ones), `None` if absent.
    #[inline]
    fn place(&self, place: usize) -> Option<Digit> {
        self.digits.len().checked_sub(place + 1).map(|i| self.digits[i])
    }

    #[inline]
    pub fn hundreds(&self) -> Option<Digit> {
        self.place(2)
    }

    #[inline]
    pub fn tens(&self) -> Option<Digit> {
        self.place(1)
    }

    #[inline]
    pub fn ones(&self) -> Option<Digit> {
        self.place(0)
    }

    /// Magnitude name of this block, `None` beyond the name table.
    #[inline]
    pub fn name(&self) -> Option<&'static str> {
        names::block_name(self.magnitude)
    }

    /// Render the block in words.
    pub fn write(&self, is_last_block: bool, suppress_and: bool) -> WrittenBlock {
        write_digits(
            self.hundreds(),
            self.tens(),
            self.ones(),
            is_last_block,
            suppress_and,
        )
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

/// Rendered text of one block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WrittenBlock {
    pub text: String,
    /// An "and" was placed between the hundreds and the tens/ones
    pub used_and: bool,
}

impl WrittenBlock {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

// ============================================================================
// Partitioning
// ============================================================================

/// Split digits into blocks: the first holds 1-3 digits, the rest exactly 3.
///
/// # Example
/// `1234567` -> `[1] [234] [567]` with magnitudes 2, 1, 0.
pub fn partition(digits: &[Digit]) -> Blocks {
    let first_len = match digits.len() % 3 {
        0 => digits.len().min(3),
        n => n,
    };
    let (first, rest) = digits.split_at(first_len);
    let count = usize::from(!first.is_empty()) + rest.len() / 3;

    let mut blocks = Blocks::new();
    if !first.is_empty() {
        blocks.push(Block {
            digits: first.iter().copied().collect(),
            magnitude: count - 1,
        });
    }
    for (i, chunk) in rest.chunks_exact(3).enumerate() {
        blocks.push(Block {
            digits: chunk.iter().copied().collect(),
            magnitude: count - 2 - i,
        });
    }
    blocks
}

/// String flavoured [`partition`].
///
/// Works on any string by grouping characters, mirroring how numerals are
/// grouped for readability: `"1234567"` -> `["1", "234", "567"]`.
pub fn block_partition(digits: &str) -> Vec<String> {
    let chars: Vec<char> = digits.chars().collect();
    let first_len = chars.len() % 3;

    let mut blocks: Vec<String> = Vec::with_capacity(chars.len().div_ceil(3));
    if first_len != 0 {
        blocks.push(chars[..first_len].iter().collect());
    }
    blocks.extend(
        chars[first_len..]
            .chunks(3)
            .map(|chunk| chunk.iter().collect::<String>()),
    );
    blocks
}

// ============================================================================
// Rendering
// ============================================================================

/// Whether an "and" goes between the hundreds and the tens/ones.
///
/// The last block of a number takes an "and" whenever its hundreds position
/// exists, even if it is zero ("one thousand and two").
pub(crate) fn should_put_and(
    hundreds: Option<Digit>,
    tens: Option<Digit>,
    ones: Option<Digit>,
    is_last_block: bool,
    suppress_and: bool,
) -> bool {
    let hundreds_allow = match hundreds {
        Some(h) => !h.is_zero() || is_last_block,
        None => false,
    };
    let has_remainder = tens.is_some_and(|t| !t.is_zero()) || ones.is_some_and(|o| !o.is_zero());

    !suppress_and && hundreds_allow && has_remainder
}

/// Render up to three positional digits.
pub(crate) fn write_digits(
    hundreds: Option<Digit>,
    tens: Option<Digit>,
    ones: Option<Digit>,
    is_last_block: bool,
    suppress_and: bool,
) -> WrittenBlock {
    let mut tokens: SmallVec<[String; 4]> = SmallVec::new();

    if let Some(h) = hundreds.filter(|h| !h.is_zero()) {
        tokens.push(format!("{} hundred", names::ones(h)));
    }

    let used_and = should_put_and(hundreds, tens, ones, is_last_block, suppress_and);
    if used_and {
        tokens.push("and".to_string());
    }

    match (tens, ones) {
        (Some(Digit::ONE), ones) => {
            tokens.push(names::teen(ones.unwrap_or(Digit::ZERO)).to_string());
        }
        (Some(t), Some(o)) if !t.is_zero() && !o.is_zero() => {
            tokens.push(format!("{}-{}", names::tens(t), names::ones(o)));
        }
        (tens, ones) => {
            if let Some(t) = tens.filter(|t| !t.is_zero()) {
                tokens.push(names::tens(t).to_string());
            }
            if let Some(o) = ones.filter(|o| !o.is_zero()) {
                tokens.push(names::ones(o).to_string());
            }
        }
    }

    WrittenBlock {
        text: tokens.join(" "),
        used_and,
    }
}

/// Render a 1-3 digit string in words.
///
/// `is_last_block` marks the least significant block of a number, which takes
/// an "and" even when its hundreds digit is zero. `suppress_and` drops every
/// "and" (used when "and" marks the decimal point).
///
/// # Panics
/// Panics if `digits` is not 1 to 3 ASCII digits. Use [`Block::parse`] for a
/// fallible version.
pub fn write_block(digits: &str, is_last_block: bool, suppress_and: bool) -> String {
    Block::parse(digits)
        .expect("write_block expects 1 to 3 ASCII digits")
        .write(is_last_block, suppress_and)
        .text
}
