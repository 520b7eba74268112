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

//! Error types shared by the model and the solvers.
//!
//! Invalid input is the only way a histogram computation can fail besides an
//! area that does not fit the widened area type. Both carry the offending
//! bar so the caller can point at it directly.

use crate::index::BarIndex;

/// A bar height that is negative, `NaN` or infinite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidHeightError {
    /// The index of the offending bar.
    pub index: BarIndex,
    /// The rejected height, rendered with `Display`.
    pub height: String,
}

impl std::fmt::Display for InvalidHeightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Bar {} has invalid height {} (heights must be finite and non-negative)",
            self.index.get(),
            self.height
        )
    }
}

impl std::error::Error for InvalidHeightError {}

/// A rectangle whose area is not representable in the area type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaOverflowError {
    /// The bar limiting the rectangle's height.
    pub index: BarIndex,
    /// The number of bars the rectangle spans.
    pub width: usize,
}

impl std::fmt::Display for AreaOverflowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Area of the rectangle limited by bar {} over {} bars overflows the area type",
            self.index.get(),
            self.width
        )
    }
}

impl std::error::Error for AreaOverflowError {}

/// The error type of the histogram solvers' validating entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistogramError {
    /// The input contains a height outside the admissible domain.
    InvalidHeight(InvalidHeightError),
    /// A candidate area does not fit the area type.
    AreaOverflow(AreaOverflowError),
}

impl HistogramError {
    /// Returns `true` if the error was caused by the caller's input
    /// rather than by the limits of the numeric types.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidHeight(_))
    }
}

impl std::fmt::Display for HistogramError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHeight(e) => write!(f, "Invalid argument: {}", e),
            Self::AreaOverflow(e) => write!(f, "Overflow: {}", e),
        }
    }
}

impl std::error::Error for HistogramError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidHeight(e) => Some(e),
            Self::AreaOverflow(e) => Some(e),
        }
    }
}

impl From<InvalidHeightError> for HistogramError {
    fn from(e: InvalidHeightError) -> Self {
        Self::InvalidHeight(e)
    }
}

impl From<AreaOverflowError> for HistogramError {
    fn from(e: AreaOverflowError) -> Self {
        Self::AreaOverflow(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_height_display() {
        let e = InvalidHeightError {
            index: BarIndex::new(2),
            height: "-3".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Bar 2 has invalid height -3 (heights must be finite and non-negative)"
        );
    }

    #[test]
    fn test_histogram_error_kinds() {
        let invalid: HistogramError = InvalidHeightError {
            index: BarIndex::new(0),
            height: "NaN".to_string(),
        }
        .into();
        assert!(invalid.is_invalid_argument());
        assert!(invalid.to_string().starts_with("Invalid argument: Bar 0"));
        assert!(invalid.source().is_some());

        let overflow: HistogramError = AreaOverflowError {
            index: BarIndex::new(1),
            width: 4,
        }
        .into();
        assert!(!overflow.is_invalid_argument());
        assert_eq!(
            overflow.to_string(),
            "Overflow: Area of the rectangle limited by bar 1 over 4 bars overflows the area type"
        );
    }
}
