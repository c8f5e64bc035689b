// ============================================================================
// Numeral Sources
// Typed values that can be written out in words
// ============================================================================

use rust_decimal::Decimal;

/// A value that has a plain decimal numeral form.
///
/// The produced string must pass [`is_valid`](crate::numeric::is_valid):
/// optional `-`, digits, optional `.` and digits. No exponent, no separators.
pub trait IntoNumeral {
    fn into_numeral(self) -> String;
}

macro_rules! impl_into_numeral_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoNumeral for $t {
                #[inline]
                fn into_numeral(self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_into_numeral_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Decimals keep their scale, so `1.50` is written as fifty hundredths.
impl IntoNumeral for Decimal {
    fn into_numeral(self) -> String {
        self.to_string()
    }
}

impl IntoNumeral for &Decimal {
    fn into_numeral(self) -> String {
        self.to_string()
    }
}
