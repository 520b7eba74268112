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

//! # Free Functions
//!
//! Validating entry points working on plain slices. Each call validates the
//! heights without copying them and runs on fresh working storage, so the
//! functions share no state and are safe to call from any thread.
//!
//! ```rust
//! use skyline_solver::{largest_rectangle, max_area};
//!
//! assert_eq!(max_area(&[2u32, 1, 5, 6, 2, 3]).unwrap(), 10);
//!
//! let rect = largest_rectangle(&[2u32, 1, 5, 6, 2, 3]).unwrap().unwrap();
//! assert_eq!(rect.height(), 5);
//! assert_eq!(rect.width(), 2);
//!
//! assert!(max_area(&[3i32, -1]).unwrap_err().is_invalid_argument());
//! ```

use crate::{
    boundary::{Boundaries, BoundarySolver},
    monitor::no_op::NoOperationMonitor,
    result::SolverOutcome,
    stack_solver::StackSolver,
};
use skyline_model::{
    error::{HistogramError, InvalidHeightError},
    histogram::validate_heights,
    num::HeightNumeric,
    rectangle::Rectangle,
};

#[inline]
fn solve_by_stack<T>(heights: &[T]) -> Result<SolverOutcome<T>, HistogramError>
where
    T: HeightNumeric,
{
    validate_heights(heights)?;
    let outcome = StackSolver::preallocated(heights.len())
        .scan(heights, &mut NoOperationMonitor::new())?;
    Ok(outcome)
}

/// Returns the area of the largest rectangle under `heights`.
///
/// An empty histogram has area zero.
///
/// # Errors
///
/// - `HistogramError::InvalidHeight` for a negative, `NaN` or infinite height.
/// - `HistogramError::AreaOverflow` if a candidate area does not fit `T::Area`.
pub fn max_area<T>(heights: &[T]) -> Result<T::Area, HistogramError>
where
    T: HeightNumeric,
{
    Ok(solve_by_stack(heights)?.area())
}

/// Returns the largest rectangle under `heights`, or `None` if no rectangle
/// of positive area exists.
///
/// If several rectangles share the maximal area, the one the scan closes
/// first is returned.
///
/// # Errors
///
/// Same as [`max_area`].
pub fn largest_rectangle<T>(heights: &[T]) -> Result<Option<Rectangle<T>>, HistogramError>
where
    T: HeightNumeric,
{
    Ok(solve_by_stack(heights)?.into_rectangle())
}

/// Returns the area of the largest rectangle under `heights`, computed from
/// the explicit boundary arrays.
///
/// # Errors
///
/// Same as [`max_area`].
pub fn max_area_by_boundaries<T>(heights: &[T]) -> Result<T::Area, HistogramError>
where
    T: HeightNumeric,
{
    validate_heights(heights)?;
    Ok(BoundarySolver::new().scan(heights)?.area())
}

/// Returns the nearest strictly lower bar on both sides of every bar.
///
/// # Errors
///
/// Returns `InvalidHeightError` for a negative, `NaN` or infinite height.
pub fn boundaries<T>(heights: &[T]) -> Result<Boundaries, InvalidHeightError>
where
    T: HeightNumeric,
{
    validate_heights(heights)?;
    Ok(Boundaries::compute(heights))
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyline_core::math::span::BarSpan;

    #[test]
    fn test_empty_histogram_has_zero_area() {
        assert_eq!(max_area::<u32>(&[]).unwrap(), 0);
        assert_eq!(max_area_by_boundaries::<u32>(&[]).unwrap(), 0);
        assert_eq!(largest_rectangle::<u32>(&[]).unwrap(), None);
        assert!(boundaries::<u32>(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_single_bar() {
        assert_eq!(max_area(&[7u32]).unwrap(), 7);
        assert_eq!(max_area(&[0u32]).unwrap(), 0);
    }

    #[test]
    fn test_uniform_bars() {
        assert_eq!(max_area(&[4u32; 6]).unwrap(), 24);
        assert_eq!(max_area_by_boundaries(&[4u32; 6]).unwrap(), 24);
    }

    #[test]
    fn test_monotone_sequences() {
        assert_eq!(max_area(&[1u32, 2, 3, 4, 5]).unwrap(), 9);
        assert_eq!(max_area(&[5u32, 4, 3, 2, 1]).unwrap(), 9);
        assert_eq!(max_area_by_boundaries(&[1u32, 2, 3, 4, 5]).unwrap(), 9);
        assert_eq!(max_area_by_boundaries(&[5u32, 4, 3, 2, 1]).unwrap(), 9);
    }

    #[test]
    fn test_classic_example() {
        let heights = [2u32, 1, 5, 6, 2, 3];
        assert_eq!(max_area(&heights).unwrap(), 10);
        assert_eq!(max_area_by_boundaries(&heights).unwrap(), 10);

        let rect = largest_rectangle(&heights).unwrap().unwrap();
        assert_eq!(rect.span(), BarSpan::new(2, 4));
        assert_eq!(rect.area(), 10);
    }

    #[test]
    fn test_zero_bars_do_not_block_neighbours() {
        assert_eq!(max_area(&[0u32, 2, 0, 2, 2, 0]).unwrap(), 4);
        assert_eq!(largest_rectangle(&[0u32, 0, 0]).unwrap(), None);
    }

    #[test]
    fn test_signed_and_float_heights() {
        assert_eq!(max_area(&[2i64, 1, 5, 6, 2, 3]).unwrap(), 10u128);
        assert_eq!(max_area(&[0.5f32, 1.0, 1.0]).unwrap(), 2.0f64);
    }

    #[test]
    fn test_invalid_heights_are_rejected() {
        let err = max_area(&[3i32, 4, -2]).unwrap_err();
        assert!(err.is_invalid_argument());
        match err {
            HistogramError::InvalidHeight(e) => {
                assert_eq!(e.index.get(), 2);
                assert_eq!(e.height, "-2");
            }
            other => panic!("unexpected error: {}", other),
        }

        assert!(max_area(&[1.0f64, f64::NAN]).is_err());
        assert!(max_area_by_boundaries(&[f64::INFINITY]).is_err());
        assert!(largest_rectangle(&[-1i8]).is_err());
        assert_eq!(boundaries(&[1i16, -1]).unwrap_err().index.get(), 1);
    }

    #[test]
    fn test_overflow_is_reported() {
        let err = max_area(&[u128::MAX, u128::MAX]).unwrap_err();
        assert!(!err.is_invalid_argument());
        assert!(matches!(err, HistogramError::AreaOverflow(_)));
    }

    #[test]
    fn test_input_is_not_mutated_and_result_is_deterministic() {
        let heights = vec![6u32, 2, 5, 4, 5, 1, 6];
        let snapshot = heights.clone();

        let first = largest_rectangle(&heights).unwrap();
        let second = largest_rectangle(&heights).unwrap();

        assert_eq!(heights, snapshot);
        assert_eq!(first, second);
        assert_eq!(max_area(&heights).unwrap(), 12);
    }

    #[test]
    fn test_boundaries_match_naive_scan() {
        let heights = [3u32, 1, 4, 1, 5, 9, 2, 6];
        let b = boundaries(&heights).unwrap();
        for i in 0..heights.len() {
            let left = (0..i).rev().find(|&j| heights[j] < heights[i]);
            let right = (i + 1..heights.len()).find(|&j| heights[j] < heights[i]);
            assert_eq!(b.lefts()[i], left, "left of {}", i);
            assert_eq!(b.rights()[i], right, "right of {}", i);
        }
    }
}
