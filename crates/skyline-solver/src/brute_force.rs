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

//! # Brute Force Solver
//!
//! Evaluates `min(heights[i..=j]) * (j - i + 1)` for every pair `i <= j`,
//! keeping a running minimum so the whole search is `O(n²)`. Only meant as
//! an oracle for tests and benchmarks.

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

#[derive(Clone, Copy, Debug, Default)]
pub struct BruteForceSolver;

impl BruteForceSolver {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Runs the solver on raw, already validated heights.
    pub(crate) fn scan<T>(&self, heights: &[T]) -> Result<SolverOutcome<T>, AreaOverflowError>
    where
        T: HeightNumeric,
    {
        let start_time = Instant::now();
        let mut stats = SolverStatistics::default();
        let mut best: Option<Rectangle<T>> = None;

        for start in 0..heights.len() {
            stats.on_bar_scanned();

            let mut lowest = start;
            for end in start..heights.len() {
                if heights[end] < heights[lowest] {
                    lowest = end;
                }
                let span = BarSpan::new(start, end + 1);
                let candidate = Rectangle::new(BarIndex::new(lowest), heights[lowest], span)?;
                stats.on_candidate_evaluated();

                if is_improvement(best.as_ref(), &candidate) {
                    stats.on_improvement();
                    best = Some(candidate);
                }
            }
        }

        stats.set_total_time(start_time.elapsed());
        Ok(SolverOutcome::new(best, stats))
    }
}

impl<T> RectangleSolver<T> for BruteForceSolver
where
    T: HeightNumeric,
{
    fn solve(&mut self, histogram: &Histogram<T>) -> Result<SolverOutcome<T>, AreaOverflowError> {
        self.scan(histogram.heights())
    }

    fn name(&self) -> &str {
        "BruteForceSolver"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(heights: Vec<u32>) -> u64 {
        BruteForceSolver::new()
            .solve(&Histogram::new(heights).unwrap())
            .unwrap()
            .area()
    }

    #[test]
    fn test_known_histograms() {
        assert_eq!(area(vec![]), 0);
        assert_eq!(area(vec![7]), 7);
        assert_eq!(area(vec![3, 3, 3]), 9);
        assert_eq!(area(vec![1, 2, 3, 4, 5]), 9);
        assert_eq!(area(vec![5, 4, 3, 2, 1]), 9);
        assert_eq!(area(vec![2, 1, 5, 6, 2, 3]), 10);
        assert_eq!(area(vec![6, 2, 5, 4, 5, 1, 6]), 12);
    }

    #[test]
    fn test_evaluates_every_pair() {
        let histogram = Histogram::new(vec![1u32, 2, 3, 4]).unwrap();
        let outcome = BruteForceSolver::new().solve(&histogram).unwrap();
        assert_eq!(outcome.statistics().candidates_evaluated, 10);
        assert_eq!(outcome.statistics().bars_scanned, 4);
    }

    #[test]
    fn test_first_maximum_wins() {
        // [0, 2) and [3, 5) both have area 4; the first one is kept.
        let histogram = Histogram::new(vec![2u32, 2, 0, 2, 2]).unwrap();
        let outcome = BruteForceSolver::new().solve(&histogram).unwrap();
        let rect = outcome.rectangle().unwrap();
        assert_eq!(rect.area(), 4);
        assert_eq!(rect.span(), BarSpan::new(0, 2));
        assert_eq!(outcome.statistics().improvements, 2);
    }

    #[test]
    fn test_rectangle_fits_under_histogram() {
        let heights = vec![4u32, 0, 2, 6, 3, 3, 1];
        let histogram = Histogram::new(heights.clone()).unwrap();
        let outcome = BruteForceSolver::new().solve(&histogram).unwrap();
        let rect = outcome.rectangle().unwrap();
        assert!(rect.fits_under(&heights));
        assert_eq!(rect.area(), 9);
    }

    #[test]
    fn test_name() {
        assert_eq!(RectangleSolver::<u32>::name(&BruteForceSolver::new()), "BruteForceSolver");
    }
}
