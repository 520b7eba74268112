// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Height Numeric Trait
//!
//! Unified numeric bounds for histogram heights. `HeightNumeric` collects
//! what every solver needs from a height type: ordering, a zero sentinel,
//! an admissibility check and a checked area computation into a wider type.
//!
//! ## Area types
//!
//! | Height type                              | Area type |
//! |------------------------------------------|-----------|
//! | `u8`, `u16`, `u32`, `i8`, `i16`, `i32`   | `u64`     |
//! | `u64`, `u128`, `usize`, `i64`, `i128`, `isize` | `u128` |
//! | `f32`, `f64`                             | `f64`     |
//!
//! Signed heights map to unsigned areas because admissible heights are
//! non-negative. For 32-bit and narrower heights the area cannot overflow for
//! any realistic length; the product is still checked, as it is for the
//! 64/128-bit types, and an unrepresentable area is reported as `None`.

use num_traits::ToPrimitive;
use skyline_core::num::{constants::Zero, ops::checked_arithmetic::CheckedMulVal};

/// A trait alias for numeric types that can be used as histogram heights.
pub trait HeightNumeric:
    Copy
    + PartialOrd
    + Zero
    + ToPrimitive
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
{
    /// The type areas of rectangles are measured in.
    type Area: Copy
        + PartialOrd
        + Zero
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync;

    /// Returns `true` if the value is a valid bar height:
    /// non-negative and, for floats, finite.
    fn is_admissible(self) -> bool;

    /// Computes `self * width` in the area type.
    ///
    /// Returns `None` if the product is not representable. The caller must
    /// only pass admissible heights.
    fn area(self, width: usize) -> Option<Self::Area>;
}

macro_rules! impl_integer_height {
    ($h:ident => $admissible:expr; $($t:ty => $area:ty),* $(,)?) => {
        $(
            impl HeightNumeric for $t {
                type Area = $area;

                #[inline(always)]
                fn is_admissible(self) -> bool {
                    let $h = self;
                    $admissible
                }

                #[inline]
                fn area(self, width: usize) -> Option<$area> {
                    let height = <$area>::try_from(self).ok()?;
                    let width = <$area>::try_from(width).ok()?;
                    height.checked_mul_val(width)
                }
            }
        )*
    };
}

impl_integer_height!(_h => true;
    u8 => u64,
    u16 => u64,
    u32 => u64,
    u64 => u128,
    u128 => u128,
    usize => u128,
);

impl_integer_height!(h => h >= 0;
    i8 => u64,
    i16 => u64,
    i32 => u64,
    i64 => u128,
    i128 => u128,
    isize => u128,
);

macro_rules! impl_float_height {
    ($($t:ty),* $(,)?) => {
        $(
            impl HeightNumeric for $t {
                type Area = f64;

                #[inline(always)]
                fn is_admissible(self) -> bool {
                    self.is_finite() && self >= 0.0
                }

                #[inline]
                fn area(self, width: usize) -> Option<f64> {
                    let area = f64::from(self) * width as f64;
                    area.is_finite().then_some(area)
                }
            }
        )*
    };
}

impl_float_height!(f32, f64);
