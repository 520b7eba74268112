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

//! # Segment Tree Solver
//!
//! Divide and conquer on the lowest bar: the largest rectangle over a span is
//! either limited by the span's lowest bar and covers the whole span, or it
//! lies entirely on one side of that bar. Range minimum queries are answered
//! by an iterative segment tree, giving `O(n log n)` overall.
//!
//! Pending spans live on an explicit work stack instead of the call stack.

use crate::{
    result::{is_improvement, SolverOutcome},
    solver::RectangleSolver,
    stats::SolverStatistics,
};
use skyline_core::math::span::BarSpan;
use skyline_model::{
    error::AreaOverflowError, histogram::Histogram, index::BarIndex, num::HeightNumeric,
    rectangle::Rectangle,
};
use std::time::Instant;

/// A bottom-up segment tree over bar positions answering "index of the lowest
/// bar in `[start, end)`".
///
/// Among equally low bars the leftmost one is reported.
#[derive(Clone, Debug)]
pub struct RangeMinTree<'a, T> {
    heights: &'a [T],
    // Node `k` has children `2k` and `2k + 1`; leaves start at `heights.len()`.
    nodes: Vec<usize>,
}

impl<'a, T> RangeMinTree<'a, T>
where
    T: PartialOrd + Copy,
{
    /// Builds the tree in `O(n)`.
    ///
    /// `heights` must not contain `NaN`.
    pub fn new(heights: &'a [T]) -> Self {
        let n = heights.len();
        let mut nodes = vec![0; 2 * n];
        for (i, node) in nodes[n..].iter_mut().enumerate() {
            *node = i;
        }
        for k in (1..n).rev() {
            nodes[k] = Self::lower(heights, nodes[2 * k], nodes[2 * k + 1]);
        }
        Self { heights, nodes }
    }

    #[inline]
    fn lower(heights: &[T], a: usize, b: usize) -> usize {
        if heights[b] < heights[a] || (heights[b] == heights[a] && b < a) {
            b
        } else {
            a
        }
    }

    /// Returns the number of bars covered by the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Returns the index of the lowest bar in `span`, or `None` if the span
    /// is empty.
    ///
    /// # Panics
    ///
    /// Panics if `span` reaches past the last bar.
    pub fn query(&self, span: BarSpan) -> Option<usize> {
        let n = self.len();
        assert!(
            span.end() <= n,
            "called `RangeMinTree::query` with span {} but the tree covers {} bars",
            span,
            n
        );

        let mut best: Option<usize> = None;
        let mut lo = span.start() + n;
        let mut hi = span.end() + n;
        while lo < hi {
            if lo & 1 == 1 {
                best = Some(self.merge(best, self.nodes[lo]));
                lo += 1;
            }
            if hi & 1 == 1 {
                hi -= 1;
                best = Some(self.merge(best, self.nodes[hi]));
            }
            lo >>= 1;
            hi >>= 1;
        }
        best
    }

    #[inline]
    fn merge(&self, best: Option<usize>, candidate: usize) -> usize {
        match best {
            Some(b) => Self::lower(self.heights, b, candidate),
            None => candidate,
        }
    }

    /// Returns the total allocated memory of the tree nodes in bytes.
    #[inline]
    pub fn allocated_memory_bytes(&self) -> usize {
        self.nodes.capacity() * std::mem::size_of::<usize>()
    }
}

/// Largest-rectangle solver splitting spans at their lowest bar.
#[derive(Clone, Debug, Default)]
pub struct SegmentTreeSolver {
    work: Vec<BarSpan>,
}

impl SegmentTreeSolver {
    #[inline]
    pub fn new() -> Self {
        Self { work: Vec::new() }
    }

    /// Runs the solver on raw, already validated heights.
    pub(crate) fn scan<T>(&mut self, heights: &[T]) -> Result<SolverOutcome<T>, AreaOverflowError>
    where
        T: HeightNumeric,
    {
        let start_time = Instant::now();
        let mut stats = SolverStatistics::default();
        let mut best: Option<Rectangle<T>> = None;

        let tree = RangeMinTree::new(heights);
        stats.on_bars_scanned(heights.len());

        self.work.clear();
        if !heights.is_empty() {
            self.work.push(BarSpan::new(0, heights.len()));
            stats.on_push(self.work.len());
        }

        while let Some(span) = self.work.pop() {
            stats.on_pop();

            // Only non-empty spans are ever pushed.
            let Some(lowest) = tree.query(span) else {
                continue;
            };
            let candidate = Rectangle::new(BarIndex::new(lowest), heights[lowest], span)?;
            stats.on_candidate_evaluated();
            if is_improvement(best.as_ref(), &candidate) {
                stats.on_improvement();
                best = Some(candidate);
            }

            for side in [
                BarSpan::new(span.start(), lowest),
                BarSpan::new(lowest + 1, span.end()),
            ] {
                if !side.is_empty() {
                    self.work.push(side);
                    stats.on_push(self.work.len());
                }
            }
        }

        stats.set_total_time(start_time.elapsed());
        Ok(SolverOutcome::new(best, stats))
    }
}

impl<T> RectangleSolver<T> for SegmentTreeSolver
where
    T: HeightNumeric,
{
    fn solve(&mut self, histogram: &Histogram<T>) -> Result<SolverOutcome<T>, AreaOverflowError> {
        self.scan(histogram.heights())
    }

    fn name(&self) -> &str {
        "SegmentTreeSolver"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_argmin(heights: &[u32], lo: usize, hi: usize) -> Option<usize> {
        (lo..hi).fold(None, |best, i| match best {
            Some(b) if heights[b] <= heights[i] => Some(b),
            _ => Some(i),
        })
    }

    #[test]
    fn test_query_matches_naive_argmin() {
        let heights = [5u32, 3, 8, 3, 9, 1, 1, 7, 2];
        let tree = RangeMinTree::new(&heights);
        for lo in 0..=heights.len() {
            for hi in lo..=heights.len() {
                assert_eq!(
                    tree.query(BarSpan::new(lo, hi)),
                    naive_argmin(&heights, lo, hi),
                    "span [{}, {})",
                    lo,
                    hi
                );
            }
        }
    }

    #[test]
    fn test_query_prefers_leftmost_minimum() {
        let heights = [2u32, 2, 2, 2, 2];
        let tree = RangeMinTree::new(&heights);
        assert_eq!(tree.query(BarSpan::new(0, 5)), Some(0));
        assert_eq!(tree.query(BarSpan::new(3, 5)), Some(3));
    }

    #[test]
    fn test_empty_tree() {
        let heights: [u32; 0] = [];
        let tree = RangeMinTree::new(&heights);
        assert!(tree.is_empty());
        assert_eq!(tree.query(BarSpan::new(0, 0)), None);
        assert_eq!(tree.allocated_memory_bytes(), 0);
    }

    #[test]
    #[should_panic(expected = "called `RangeMinTree::query` with span")]
    fn test_query_out_of_bounds_panics() {
        let heights = [1u32, 2];
        RangeMinTree::new(&heights).query(BarSpan::new(0, 3));
    }

    #[test]
    fn test_solver_classic_example() {
        let histogram = Histogram::new(vec![2u32, 1, 5, 6, 2, 3]).unwrap();
        let outcome = SegmentTreeSolver::new().solve(&histogram).unwrap();

        assert_eq!(outcome.area(), 10);
        let rect = outcome.rectangle().unwrap();
        assert_eq!(rect.height(), 5);
        assert_eq!(rect.span(), BarSpan::new(2, 4));

        let stats = outcome.statistics();
        assert_eq!(stats.bars_scanned, 6);
        assert_eq!(stats.candidates_evaluated, 6);
        assert_eq!(stats.stack_pushes, 6);
        assert_eq!(stats.stack_pops, 6);
    }

    #[test]
    fn test_solver_edge_cases() {
        let mut solver = SegmentTreeSolver::new();
        let mut area = |h: Vec<u32>| solver.solve(&Histogram::new(h).unwrap()).unwrap().area();

        assert_eq!(area(vec![]), 0);
        assert_eq!(area(vec![7]), 7);
        assert_eq!(area(vec![4, 4, 4, 4]), 16);
        assert_eq!(area(vec![1, 2, 3, 4, 5]), 9);
        assert_eq!(area(vec![5, 4, 3, 2, 1]), 9);
        assert_eq!(area(vec![0, 3, 3, 0, 2, 0]), 6);
        assert_eq!(area(vec![0, 0]), 0);
    }

    #[test]
    fn test_deep_input_does_not_recurse() {
        let heights: Vec<u32> = (0..100_000).collect();
        let histogram = Histogram::new(heights).unwrap();
        let outcome = SegmentTreeSolver::new().solve(&histogram).unwrap();
        // Bar 50_000 over the upper half: 50_000 * 50_000.
        assert_eq!(outcome.area(), 2_500_000_000);
    }

    #[test]
    fn test_name() {
        assert_eq!(
            RectangleSolver::<u32>::name(&SegmentTreeSolver::new()),
            "SegmentTreeSolver"
        );
    }
}
