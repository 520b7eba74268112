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

/// A trait for numeric types that have a constant representing 0.
///
/// Implemented for every primitive integer and for `f32`/`f64`, so it can
/// serve as the sentinel height and the neutral area of a histogram scan.
///
/// # Examples
///
/// ```rust
/// # use skyline_core::num::constants::Zero;
/// assert_eq!(<u32 as Zero>::ZERO, 0);
/// assert_eq!(<f64 as Zero>::ZERO, 0.0);
/// ```
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

macro_rules! impl_zero_for {
    ($value:expr; $($t:ty),* $(,)?) => {
        $(
            impl Zero for $t {
                const ZERO: Self = $value;
            }
        )*
    };
}

impl_zero_for!(0; u8, u16, u32, u64, u128, usize);
impl_zero_for!(0; i8, i16, i32, i64, i128, isize);
impl_zero_for!(0.0; f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_integers() {
        assert_eq!(<u8 as Zero>::ZERO, 0);
        assert_eq!(<i64 as Zero>::ZERO, 0);
        assert_eq!(<u128 as Zero>::ZERO, 0);
        assert_eq!(<isize as Zero>::ZERO, 0);
    }

    #[test]
    fn test_zero_floats() {
        assert_eq!(<f32 as Zero>::ZERO, 0.0);
        assert!(<f64 as Zero>::ZERO.is_sign_positive());
    }
}
