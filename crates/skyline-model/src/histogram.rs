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

//! The validated histogram.

use crate::{error::InvalidHeightError, index::BarIndex, num::HeightNumeric};

/// Checks that every height of `heights` is admissible.
///
/// Runs without allocating, so slices can be validated in place before
/// handing them to a solver. Returns the first offending bar.
///
/// # Examples
///
/// ```rust
/// # use skyline_model::histogram::validate_heights;
/// assert!(validate_heights(&[2, 1, 5]).is_ok());
///
/// let err = validate_heights(&[2, -1, 5]).unwrap_err();
/// assert_eq!(err.index.get(), 1);
/// assert_eq!(err.height, "-1");
/// ```
pub fn validate_heights<T>(heights: &[T]) -> Result<(), InvalidHeightError>
where
    T: HeightNumeric,
{
    match heights.iter().position(|h| !h.is_admissible()) {
        None => Ok(()),
        Some(i) => Err(InvalidHeightError {
            index: BarIndex::new(i),
            height: heights[i].to_string(),
        }),
    }
}

/// An ordered sequence of unit-width bars with admissible heights.
///
/// A `Histogram` can only be constructed from heights that passed
/// [`validate_heights`], and it never hands out mutable access, so the
/// solvers may rely on every height being non-negative and ordered.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram<T> {
    heights: Vec<T>,
}

impl<T> Default for Histogram<T> {
    fn default() -> Self {
        Self {
            heights: Vec::new(),
        }
    }
}

impl<T> Histogram<T>
where
    T: HeightNumeric,
{
    /// Creates a histogram from owned heights.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHeightError` for the first negative, `NaN` or
    /// infinite height.
    pub fn new(heights: Vec<T>) -> Result<Self, InvalidHeightError> {
        validate_heights(&heights)?;
        Ok(Self { heights })
    }

    /// Creates a histogram by copying the given heights.
    ///
    /// # Errors
    ///
    /// See [`Histogram::new`].
    #[inline]
    pub fn from_slice(heights: &[T]) -> Result<Self, InvalidHeightError> {
        Self::new(heights.to_vec())
    }

    /// Creates an empty histogram.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of bars.
    #[inline]
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Returns `true` if the histogram has no bars.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Returns the height of a bar.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn height(&self, index: BarIndex) -> T {
        let i = index.get();
        assert!(
            i < self.len(),
            "called `Histogram::height` with bar index out of bounds: the len is {} but the index is {}",
            self.len(),
            i
        );
        self.heights[i]
    }

    /// Returns the heights as a read-only slice.
    #[inline]
    pub fn heights(&self) -> &[T] {
        &self.heights
    }

    /// Returns an iterator over the bar heights.
    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, T>> {
        self.heights.iter().copied()
    }

    /// Returns the tallest height, or `None` for an empty histogram.
    pub fn max_height(&self) -> Option<T> {
        self.iter().fold(None, |best, h| match best {
            Some(b) if b >= h => Some(b),
            _ => Some(h),
        })
    }

    /// Consumes the histogram and returns the heights.
    #[inline]
    pub fn into_heights(self) -> Vec<T> {
        self.heights
    }
}

impl<T> TryFrom<Vec<T>> for Histogram<T>
where
    T: HeightNumeric,
{
    type Error = InvalidHeightError;

    fn try_from(heights: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(heights)
    }
}

impl<T> AsRef<[T]> for Histogram<T> {
    fn as_ref(&self) -> &[T] {
        &self.heights
    }
}

impl<T> std::fmt::Display for Histogram<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Histogram[")?;
        for (i, h) in self.heights.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", h)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_admissible_heights() {
        let h = Histogram::new(vec![2u32, 1, 5, 6, 2, 3]).unwrap();
        assert_eq!(h.len(), 6);
        assert!(!h.is_empty());
        assert_eq!(h.height(BarIndex::new(3)), 6);
        assert_eq!(h.heights(), &[2, 1, 5, 6, 2, 3]);
    }

    #[test]
    fn test_new_rejects_negative_height() {
        let err = Histogram::new(vec![3i64, 0, -7, -1]).unwrap_err();
        assert_eq!(err.index, BarIndex::new(2));
        assert_eq!(err.height, "-7");
    }

    #[test]
    fn test_new_rejects_non_finite_floats() {
        let err = Histogram::new(vec![1.0, f64::NAN]).unwrap_err();
        assert_eq!(err.index.get(), 1);
        assert_eq!(err.height, "NaN");

        assert!(Histogram::new(vec![f32::INFINITY]).is_err());
    }

    #[test]
    fn test_empty() {
        let h: Histogram<u8> = Histogram::empty();
        assert!(h.is_empty());
        assert_eq!(h.max_height(), None);
        assert!(validate_heights::<i32>(&[]).is_ok());
    }

    #[test]
    fn test_from_slice_does_not_touch_input() {
        let raw = [4i16, 0, 4];
        let h = Histogram::from_slice(&raw).unwrap();
        assert_eq!(raw, [4, 0, 4]);
        assert_eq!(h.into_heights(), vec![4, 0, 4]);
    }

    #[test]
    fn test_try_from_and_as_ref() {
        let h: Histogram<u64> = vec![1, 2].try_into().unwrap();
        assert_eq!(h.as_ref(), &[1, 2]);
        let bad: Result<Histogram<i8>, _> = vec![-1].try_into();
        assert!(bad.is_err());
    }

    #[test]
    fn test_max_height() {
        let h = Histogram::new(vec![3.5, 7.25, 1.0]).unwrap();
        assert_eq!(h.max_height(), Some(7.25));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_height_out_of_bounds() {
        let h = Histogram::new(vec![1u8]).unwrap();
        let _ = h.height(BarIndex::new(1));
    }

    #[test]
    fn test_display() {
        let h = Histogram::new(vec![2u8, 0, 3]).unwrap();
        assert_eq!(format!("{}", h), "Histogram[2, 0, 3]");
    }
}
