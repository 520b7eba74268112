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

use core::ops::Mul;

macro_rules! checked_impl_val {
    ($trait_name:ident, $method:ident, $src_method:ident; $($t:ty),* $(,)?) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: $t) -> Option<$t> {
                    <$t>::$src_method(self, v)
                }
            }
        )*
    };
}

/// A trait for types that support checked multiplication by value (no references).
///
/// The area of a rectangle is `height * width`; the solvers compute it with
/// this trait so that an unrepresentable area surfaces as `None` instead of
/// a wrapped value.
///
/// # Examples
///
/// ```rust
/// # use skyline_core::num::ops::checked_arithmetic::CheckedMulVal;
/// let a: u8 = 20;
/// assert_eq!(a.checked_mul_val(10), Some(200)); // No overflow
/// assert_eq!(a.checked_mul_val(20), None); // 400 > u8::MAX
/// ```
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs checked multiplication by value, returning `None` if overflow occurs.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

checked_impl_val!(CheckedMulVal, checked_mul_val, checked_mul; u8, u16, u32, u64, u128, usize);
checked_impl_val!(CheckedMulVal, checked_mul_val, checked_mul; i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_mul_val_wide_products() {
        let h = u64::from(u32::MAX);
        assert_eq!(h.checked_mul_val(h), Some(18_446_744_065_119_617_025));
        assert_eq!(u128::MAX.checked_mul_val(2), None);
        assert_eq!(0u128.checked_mul_val(u128::MAX), Some(0));
    }
}
