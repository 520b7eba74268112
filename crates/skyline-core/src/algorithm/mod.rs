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

//! # Nearest Smaller Neighbours
//!
//! Monotonic-stack scans that find, for every element, the nearest element to
//! its left or right that is strictly smaller. Each index is pushed once and
//! popped at most once, so both scans run in amortized `O(n)` time with `O(n)`
//! auxiliary space.
//!
//! The scans only require `PartialOrd`. Callers passing floats must make sure
//! the slice contains no `NaN`; the result is unspecified otherwise.

/// Returns `true` if the keys of `items` are non-decreasing from front to back.
///
/// # Examples
///
/// ```rust
/// # use skyline_core::algorithm::is_non_decreasing_by_key;
/// let heights = [1, 3, 3, 7];
/// assert!(is_non_decreasing_by_key(&[0usize, 1, 2, 3], |&i| heights[i]));
/// assert!(!is_non_decreasing_by_key(&[1usize, 0], |&i| heights[i]));
/// ```
#[inline]
pub fn is_non_decreasing_by_key<I, K, F>(items: &[I], mut key: F) -> bool
where
    F: FnMut(&I) -> K,
    K: PartialOrd,
{
    items.windows(2).all(|w| key(&w[0]) <= key(&w[1]))
}

/// For every position `i`, finds the nearest `j < i` with `values[j] < values[i]`.
///
/// Returns `None` at positions that have no strictly smaller element to
/// their left.
///
/// # Examples
///
/// ```rust
/// # use skyline_core::algorithm::previous_smaller;
/// let left = previous_smaller(&[2, 1, 5, 6, 2, 3]);
/// assert_eq!(left, vec![None, None, Some(1), Some(2), Some(1), Some(4)]);
/// ```
pub fn previous_smaller<T>(values: &[T]) -> Vec<Option<usize>>
where
    T: PartialOrd,
{
    let mut bounds = Vec::with_capacity(values.len());
    let mut stack: Vec<usize> = Vec::with_capacity(values.len());

    for (i, value) in values.iter().enumerate() {
        while let Some(&top) = stack.last() {
            if values[top] < *value {
                break;
            }
            stack.pop();
        }
        bounds.push(stack.last().copied());
        stack.push(i);
    }

    debug_assert_eq!(bounds.len(), values.len());
    bounds
}

/// For every position `i`, finds the nearest `j > i` with `values[j] < values[i]`.
///
/// Returns `None` at positions that have no strictly smaller element to
/// their right.
///
/// # Examples
///
/// ```rust
/// # use skyline_core::algorithm::next_smaller;
/// let right = next_smaller(&[2, 1, 5, 6, 2, 3]);
/// assert_eq!(right, vec![Some(1), None, Some(4), Some(4), None, None]);
/// ```
pub fn next_smaller<T>(values: &[T]) -> Vec<Option<usize>>
where
    T: PartialOrd,
{
    let mut bounds = vec![None; values.len()];
    let mut stack: Vec<usize> = Vec::with_capacity(values.len());

    for (i, value) in values.iter().enumerate().rev() {
        while let Some(&top) = stack.last() {
            if values[top] < *value {
                break;
            }
            stack.pop();
        }
        bounds[i] = stack.last().copied();
        stack.push(i);
    }

    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_previous_smaller(values: &[i32]) -> Vec<Option<usize>> {
        (0..values.len())
            .map(|i| (0..i).rev().find(|&j| values[j] < values[i]))
            .collect()
    }

    fn naive_next_smaller(values: &[i32]) -> Vec<Option<usize>> {
        (0..values.len())
            .map(|i| (i + 1..values.len()).find(|&j| values[j] < values[i]))
            .collect()
    }

    #[test]
    fn test_empty() {
        let empty: [u8; 0] = [];
        assert!(previous_smaller(&empty).is_empty());
        assert!(next_smaller(&empty).is_empty());
    }

    #[test]
    fn test_equal_values_are_not_boundaries() {
        let v = [3, 3, 3];
        assert_eq!(previous_smaller(&v), vec![None, None, None]);
        assert_eq!(next_smaller(&v), vec![None, None, None]);
    }

    #[test]
    fn test_strictly_increasing() {
        let v = [1, 2, 3, 4, 5];
        assert_eq!(
            previous_smaller(&v),
            vec![None, Some(0), Some(1), Some(2), Some(3)]
        );
        assert_eq!(next_smaller(&v), vec![None; 5]);
    }

    #[test]
    fn test_strictly_decreasing() {
        let v = [5, 4, 3, 2, 1];
        assert_eq!(previous_smaller(&v), vec![None; 5]);
        assert_eq!(
            next_smaller(&v),
            vec![Some(1), Some(2), Some(3), Some(4), None]
        );
    }

    #[test]
    fn test_matches_naive_scan() {
        let cases: [&[i32]; 5] = [
            &[2, 1, 5, 6, 2, 3],
            &[0, 0, 1, 0, 2],
            &[4, 2, 0, 3, 2, 5],
            &[6, 2, 5, 4, 5, 1, 6],
            &[1],
        ];
        for v in cases {
            assert_eq!(previous_smaller(v), naive_previous_smaller(v), "{:?}", v);
            assert_eq!(next_smaller(v), naive_next_smaller(v), "{:?}", v);
        }
    }

    #[test]
    fn test_floats() {
        let v = [1.5, 0.5, 2.0];
        assert_eq!(previous_smaller(&v), vec![None, None, Some(1)]);
        assert_eq!(next_smaller(&v), vec![Some(1), None, None]);
    }

    #[test]
    fn test_is_non_decreasing_by_key() {
        let empty: [usize; 0] = [];
        assert!(is_non_decreasing_by_key(&empty, |&i| i));
        assert!(is_non_decreasing_by_key(&[4usize], |&i| i));
        assert!(is_non_decreasing_by_key(&[1, 1, 2], |&i: &i32| i));
        assert!(!is_non_decreasing_by_key(&[2, 1], |&i: &i32| i));
    }
}
