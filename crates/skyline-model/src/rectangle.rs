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

use crate::{error::AreaOverflowError, index::BarIndex, num::HeightNumeric};
use skyline_core::math::span::BarSpan;

/// An axis-aligned rectangle under a histogram.
///
/// A rectangle is described by the bar limiting its height, that height,
/// and the span of bars it covers. Its area is computed once at construction
/// in the widened area type of `T`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle<T>
where
    T: HeightNumeric,
{
    limiting_bar: BarIndex,
    height: T,
    span: BarSpan,
    area: T::Area,
}

impl<T> Rectangle<T>
where
    T: HeightNumeric,
{
    /// Constructs a new `Rectangle` and computes its area.
    ///
    /// # Errors
    ///
    /// Returns `AreaOverflowError` if `height * span.width()` is not
    /// representable in `T::Area`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the limiting bar lies outside the span.
    #[inline]
    pub fn new(limiting_bar: BarIndex, height: T, span: BarSpan) -> Result<Self, AreaOverflowError> {
        debug_assert!(
            span.contains(limiting_bar.get()),
            "called `Rectangle::new` with limiting bar {} outside of span {}",
            limiting_bar.get(),
            span
        );

        let area = height.area(span.width()).ok_or(AreaOverflowError {
            index: limiting_bar,
            width: span.width(),
        })?;

        Ok(Self {
            limiting_bar,
            height,
            span,
            area,
        })
    }

    /// Returns the bar whose height limits the rectangle.
    #[inline]
    pub fn limiting_bar(&self) -> BarIndex {
        self.limiting_bar
    }

    /// Returns the height of the rectangle.
    #[inline]
    pub fn height(&self) -> T {
        self.height
    }

    /// Returns the span of bars covered by the rectangle.
    #[inline]
    pub fn span(&self) -> BarSpan {
        self.span
    }

    /// Returns the number of bars covered by the rectangle.
    #[inline]
    pub fn width(&self) -> usize {
        self.span.width()
    }

    /// Returns the area of the rectangle.
    #[inline]
    pub fn area(&self) -> T::Area {
        self.area
    }

    /// Returns `true` if the rectangle lies entirely under the outline of
    /// `heights`: its span is in bounds and every covered bar is at least
    /// as tall as the rectangle.
    pub fn fits_under(&self, heights: &[T]) -> bool {
        self.span.end() <= heights.len()
            && heights[self.span.start()..self.span.end()]
                .iter()
                .all(|&h| h >= self.height)
    }
}

impl<T> std::fmt::Display for Rectangle<T>
where
    T: HeightNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rectangle(bars: {}, height: {}, area: {})",
            self.span, self.height, self.area
        )
    }
}
