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

//! # Two-Pass Boundary Solver
//!
//! Computes, for every bar, the nearest strictly lower bar on each side and
//! then evaluates the rectangle limited by each bar in a single pass.
//!
//! For bar `i` the rectangle spans `left(i) + 1 .. right(i)`, where a missing
//! left boundary stands for `-1` and a missing right boundary for `n`.

use crate::{
    result::{is_improvement, SolverOutcome},
    solver::RectangleSolver,
    stats::SolverStatistics,
};
use skyline_core::{
    algorithm::{next_smaller, previous_smaller},
    math::span::BarSpan,
};
use skyline_model::{
    error::AreaOverflowError, histogram::Histogram, index::BarIndex, num::HeightNumeric,
    rectangle::Rectangle,
};
use std::time::Instant;

/// Nearest strictly lower bars on both sides of every bar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Boundaries {
    left: Vec<Option<usize>>,
    right: Vec<Option<usize>>,
}

impl Boundaries {
    /// Computes the boundaries of `heights` with two monotonic passes.
    ///
    /// `heights` must not contain `NaN`.
    pub fn compute<T>(heights: &[T]) -> Self
    where
        T: PartialOrd,
    {
        Self {
            left: previous_smaller(heights),
            right: next_smaller(heights),
        }
    }

    /// Returns the number of bars.
    #[inline]
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Returns `true` if there are no bars.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Returns the nearest strictly lower bar left of `index`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn left(&self, index: BarIndex) -> Option<usize> {
        self.left[index.get()]
    }

    /// Returns the nearest strictly lower bar right of `index`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn right(&self, index: BarIndex) -> Option<usize> {
        self.right[index.get()]
    }

    /// Returns the widest span around `index` whose bars are all at least as
    /// high as the bar at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn span(&self, index: BarIndex) -> BarSpan {
        let i = index.get();
        BarSpan::between(self.left[i], self.right[i].unwrap_or(self.len()))
    }

    #[inline]
    pub fn lefts(&self) -> &[Option<usize>] {
        &self.left
    }

    #[inline]
    pub fn rights(&self) -> &[Option<usize>] {
        &self.right
    }
}

/// Largest-rectangle solver that materializes both boundary arrays first.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoundarySolver;

impl BoundarySolver {
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

        let boundaries = Boundaries::compute(heights);
        for (i, &height) in heights.iter().enumerate() {
            stats.on_bar_scanned();

            let bar = BarIndex::new(i);
            let candidate = Rectangle::new(bar, height, boundaries.span(bar))?;
            stats.on_candidate_evaluated();

            if is_improvement(best.as_ref(), &candidate) {
                stats.on_improvement();
                best = Some(candidate);
            }
        }

        stats.set_total_time(start_time.elapsed());
        Ok(SolverOutcome::new(best, stats))
    }
}

impl<T> RectangleSolver<T> for BoundarySolver
where
    T: HeightNumeric,
{
    fn solve(&mut self, histogram: &Histogram<T>) -> Result<SolverOutcome<T>, AreaOverflowError> {
        self.scan(histogram.heights())
    }

    fn name(&self) -> &str {
        "BoundarySolver"
    }
}
