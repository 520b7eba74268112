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

use skyline_core::algorithm::is_non_decreasing_by_key;

/// A LIFO stack of bar indices whose heights are non-decreasing from the
/// bottom to the top.
///
/// The stack stores only indices; heights are looked up in the slice the
/// caller passes along. `push` checks the monotonic invariant in debug
/// builds, `pop_if` lets the scan pop exactly the bars that the current
/// height closes off.
///
/// Performance notes:
/// - `preallocated` and `ensure_capacity` avoid reallocations when the same
///   stack is reused across histograms.
/// - `reset` keeps the allocated capacity.
#[derive(Clone, Debug, Default)]
pub struct MonotonicStack {
    entries: Vec<usize>,
}

impl MonotonicStack {
    /// Creates a new, empty `MonotonicStack`.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates a `MonotonicStack` with room for `num_bars` indices.
    #[inline]
    pub fn preallocated(num_bars: usize) -> Self {
        Self {
            entries: Vec::with_capacity(num_bars),
        }
    }

    /// Ensures the stack can hold `num_bars` indices without reallocating.
    #[inline]
    pub fn ensure_capacity(&mut self, num_bars: usize) {
        if self.entries.capacity() < num_bars {
            self.entries.reserve(num_bars - self.entries.len());
        }
    }

    /// Returns the number of indices on the stack.
    #[inline]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the stack holds no indices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the index on top of the stack, if any.
    #[inline]
    pub fn peek(&self) -> Option<usize> {
        self.entries.last().copied()
    }

    /// Pushes the bar at `index`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the bar on top of the stack is strictly
    /// taller than `heights[index]`, which would break the invariant.
    #[inline]
    pub fn push<T>(&mut self, index: usize, heights: &[T])
    where
        T: PartialOrd,
    {
        debug_assert!(
            index < heights.len(),
            "called `MonotonicStack::push` with index out of bounds: the len is {} but the index is {}",
            heights.len(),
            index
        );
        debug_assert!(
            self.peek().map_or(true, |top| heights[top] <= heights[index]),
            "called `MonotonicStack::push` with a bar lower than the top of the stack"
        );
        self.entries.push(index);
    }

    /// Pops the top index if `predicate` holds for it.
    #[inline]
    pub fn pop_if<F>(&mut self, predicate: F) -> Option<usize>
    where
        F: FnOnce(usize) -> bool,
    {
        let top = self.peek()?;
        if predicate(top) {
            self.entries.pop()
        } else {
            None
        }
    }

    /// Clears all entries, but keeps allocated capacity.
    #[inline]
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Returns `true` if the heights of the stacked indices are
    /// non-decreasing from bottom to top.
    #[inline]
    pub fn is_monotonic<T>(&self, heights: &[T]) -> bool
    where
        T: PartialOrd,
    {
        is_non_decreasing_by_key(&self.entries, |&i| &heights[i])
    }

    /// Returns the total allocated memory in bytes.
    #[inline]
    pub fn allocated_memory_bytes(&self) -> usize {
        self.entries.capacity() * core::mem::size_of::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_peek() {
        let heights = [1, 3, 3, 7];
        let mut s = MonotonicStack::new();
        assert!(s.is_empty());
        assert_eq!(s.peek(), None);

        for i in 0..heights.len() {
            s.push(i, &heights);
        }
        assert_eq!(s.depth(), 4);
        assert_eq!(s.peek(), Some(3));
        assert!(s.is_monotonic(&heights));

        assert_eq!(s.pop_if(|_| true), Some(3));
        assert_eq!(s.depth(), 3);
    }

    #[test]
    fn test_pop_if() {
        let heights = [2, 5];
        let mut s = MonotonicStack::new();
        s.push(0, &heights);
        s.push(1, &heights);

        // Current height 4 closes off bar 1 (height 5) but not bar 0 (height 2).
        assert_eq!(s.pop_if(|top| heights[top] > 4), Some(1));
        assert_eq!(s.pop_if(|top| heights[top] > 4), None);
        assert_eq!(s.depth(), 1);

        s.reset();
        assert_eq!(s.pop_if(|_| true), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "lower than the top of the stack")]
    fn test_push_checks_invariant() {
        let heights = [5, 2];
        let mut s = MonotonicStack::new();
        s.push(0, &heights);
        s.push(1, &heights);
    }

    #[test]
    fn test_is_monotonic_detects_violation() {
        let heights = [5, 2];
        let s = MonotonicStack {
            entries: vec![0, 1],
        };
        assert!(!s.is_monotonic(&heights));
    }

    #[test]
    fn test_capacity_management() {
        let mut s = MonotonicStack::preallocated(16);
        assert!(s.allocated_memory_bytes() >= 16 * core::mem::size_of::<usize>());

        let mut small = MonotonicStack::new();
        small.ensure_capacity(32);
        assert!(small.allocated_memory_bytes() >= 32 * core::mem::size_of::<usize>());

        let heights = [0u8; 4];
        for i in 0..4 {
            s.push(i, &heights);
        }
        s.reset();
        assert!(s.is_empty());
        assert!(s.allocated_memory_bytes() >= 16 * core::mem::size_of::<usize>());
    }
}
