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

use std::ops::Range;

/// A half-open span `[start, end)` of bar positions.
///
/// # Invariants
/// `start` must always be less than or equal to `end`.
///
/// # Examples
///
/// ```rust
/// # use skyline_core::math::span::BarSpan;
/// let span = BarSpan::new(2, 4);
/// assert_eq!(span.width(), 2);
/// assert!(span.contains(3));
/// assert!(!span.contains(4));
/// assert_eq!(format!("{}", span), "[2, 4)");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BarSpan {
    start: usize,
    end: usize,
}

impl BarSpan {
    /// Creates a new `BarSpan`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        assert!(
            start <= end,
            "called `BarSpan::new` with start {} greater than end {}",
            start,
            end
        );
        Self { start, end }
    }

    /// Creates a new `BarSpan`, returning `None` if `start > end`.
    #[inline]
    pub fn try_new(start: usize, end: usize) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Creates the span of the bars strictly between two boundary bars.
    ///
    /// `left` is the nearest strictly lower bar on the left (if any) and
    /// `right` the nearest strictly lower bar on the right, or the number of
    /// bars if there is none. The span runs from `left + 1` to `right`.
    ///
    /// # Panics
    ///
    /// Panics if the resulting span would be inverted.
    #[inline]
    pub fn between(left: Option<usize>, right: usize) -> Self {
        let start = left.map_or(0, |l| l + 1);
        Self::new(start, right)
    }

    /// Returns the first bar position covered by the span.
    #[inline(always)]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the position one past the last covered bar.
    #[inline(always)]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns the number of bars covered by the span.
    #[inline(always)]
    pub const fn width(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the span covers no bars.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if the bar at `position` lies inside the span.
    #[inline(always)]
    pub const fn contains(&self, position: usize) -> bool {
        self.start <= position && position < self.end
    }

    /// Returns `true` if `other` lies entirely inside this span.
    #[inline]
    pub const fn contains_span(&self, other: &BarSpan) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns an iterator over the covered bar positions.
    #[inline]
    pub fn iter(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl std::fmt::Debug for BarSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BarSpan")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl std::fmt::Display for BarSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl From<Range<usize>> for BarSpan {
    /// # Panics
    ///
    /// Panics if the range is inverted.
    #[inline]
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<BarSpan> for Range<usize> {
    #[inline]
    fn from(span: BarSpan) -> Self {
        span.start..span.end
    }
}

impl IntoIterator for BarSpan {
    type Item = usize;
    type IntoIter = Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_accessors() {
        let s = BarSpan::new(1, 5);
        assert_eq!(s.start(), 1);
        assert_eq!(s.end(), 5);
        assert_eq!(s.width(), 4);
        assert!(!s.is_empty());
    }

    #[test]
    #[should_panic(expected = "greater than end")]
    fn test_new_panics_on_inverted() {
        let _ = BarSpan::new(5, 1);
    }

    #[test]
    fn test_try_new() {
        assert_eq!(BarSpan::try_new(3, 3), Some(BarSpan::new(3, 3)));
        assert_eq!(BarSpan::try_new(4, 3), None);
    }

    #[test]
    fn test_between_boundaries() {
        // No smaller bar on the left: span starts at 0.
        assert_eq!(BarSpan::between(None, 6), BarSpan::new(0, 6));
        // Smaller bar at 1 on the left and at 4 on the right.
        let s = BarSpan::between(Some(1), 4);
        assert_eq!(s, BarSpan::new(2, 4));
        assert_eq!(s.width(), 2);
    }

    #[test]
    fn test_contains() {
        let s = BarSpan::new(2, 4);
        assert!(!s.contains(1));
        assert!(s.contains(2));
        assert!(s.contains(3));
        assert!(!s.contains(4));
        assert!(s.contains_span(&BarSpan::new(2, 3)));
        assert!(!s.contains_span(&BarSpan::new(1, 3)));
        assert!(BarSpan::new(0, 0).is_empty());
    }

    #[test]
    fn test_iteration_and_ranges() {
        let s = BarSpan::new(3, 6);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(s.into_iter().rev().collect::<Vec<_>>(), vec![5, 4, 3]);
        let r: Range<usize> = s.into();
        assert_eq!(r, 3..6);
        assert_eq!(BarSpan::from(0..2), BarSpan::new(0, 2));
    }

    #[test]
    fn test_display_and_debug() {
        let s = BarSpan::new(0, 3);
        assert_eq!(format!("{}", s), "[0, 3)");
        assert_eq!(format!("{:?}", s), "BarSpan { start: 0, end: 3 }");
    }
}
