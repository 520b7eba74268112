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

//! # Monotonic Stack Solver
//!
//! The canonical largest-rectangle algorithm.
//!
//! The scan keeps a stack of bar indices whose heights are non-decreasing
//! from bottom to top. Bars are visited left to right, followed by one
//! virtual sentinel bar at position `n`. Whenever the current bar is strictly
//! lower than the bar on top of the stack, the top bar can no longer extend
//! to the right: it is popped, and the rectangle it limits spans from just
//! after the new top of the stack (its nearest strictly lower bar on the
//! left, or the start of the histogram) up to the current position (its
//! nearest strictly lower bar on the right).
//!
//! At the sentinel the stack is drained completely. For positive heights this
//! is exactly what a sentinel of height zero would pop; zero-height bars are
//! drained as well, so every real bar is evaluated once as a candidate.
//!
//! Each index is pushed once and popped once, which gives amortized `O(n)`
//! time and `O(n)` auxiliary space.

use crate::{
    monitor::{no_op::NoOperationMonitor, scan_monitor::ScanMonitor},
    result::{is_improvement, SolverOutcome},
    solver::RectangleSolver,
    stack::MonotonicStack,
    stats::SolverStatistics,
};
use skyline_core::math::span::BarSpan;
use skyline_model::{
    error::AreaOverflowError, histogram::Histogram, index::BarIndex, num::HeightNumeric,
    rectangle::Rectangle,
};
use std::time::Instant;

/// Largest-rectangle solver based on a monotonic stack.
///
/// The solver owns its stack so repeated solves reuse the allocation. No
/// other state survives a call.
#[derive(Clone, Debug, Default)]
pub struct StackSolver {
    stack: MonotonicStack,
}

impl StackSolver {
    /// Creates a new `StackSolver`.
    #[inline]
    pub fn new() -> Self {
        Self {
            stack: MonotonicStack::new(),
        }
    }

    /// Creates a `StackSolver` whose stack can hold `num_bars` indices
    /// without reallocating.
    #[inline]
    pub fn preallocated(num_bars: usize) -> Self {
        Self {
            stack: MonotonicStack::preallocated(num_bars),
        }
    }

    /// Returns the total allocated memory of the working stack in bytes.
    #[inline]
    pub fn allocated_memory_bytes(&self) -> usize {
        self.stack.allocated_memory_bytes()
    }

    /// Solves `histogram` and reports every stack event to `monitor`.
    ///
    /// # Errors
    ///
    /// Returns `AreaOverflowError` if a candidate area does not fit `T::Area`.
    #[inline]
    pub fn solve_with_monitor<T, M>(
        &mut self,
        histogram: &Histogram<T>,
        monitor: &mut M,
    ) -> Result<SolverOutcome<T>, AreaOverflowError>
    where
        T: HeightNumeric,
        M: ScanMonitor<T> + ?Sized,
    {
        self.scan(histogram.heights(), monitor)
    }

    /// Runs the scan on raw heights.
    ///
    /// The caller must have validated `heights` (see
    /// `skyline_model::histogram::validate_heights`).
    pub(crate) fn scan<T, M>(
        &mut self,
        heights: &[T],
        monitor: &mut M,
    ) -> Result<SolverOutcome<T>, AreaOverflowError>
    where
        T: HeightNumeric,
        M: ScanMonitor<T> + ?Sized,
    {
        let start_time = Instant::now();
        let n = heights.len();

        let mut stats = SolverStatistics::default();
        let mut best: Option<Rectangle<T>> = None;

        self.stack.reset();
        self.stack.ensure_capacity(n);
        monitor.on_enter_scan(heights);

        for i in 0..=n {
            let current = heights.get(i).copied();
            if current.is_some() {
                stats.on_bar_scanned();
            }

            // `None` is the sentinel: everything left on the stack is closed off.
            debug_assert!(current.is_some() || self.stack.is_monotonic(heights));
            while let Some(top) = self
                .stack
                .pop_if(|j| current.map_or(true, |h| heights[j] > h))
            {
                stats.on_pop();

                let span = BarSpan::between(self.stack.peek(), i);
                let candidate = Rectangle::new(BarIndex::new(top), heights[top], span)?;
                stats.on_candidate_evaluated();
                monitor.on_pop(&candidate);

                if is_improvement(best.as_ref(), &candidate) {
                    stats.on_improvement();
                    monitor.on_improvement(&candidate);
                    best = Some(candidate);
                }
            }

            if let Some(h) = current {
                self.stack.push(i, heights);
                stats.on_push(self.stack.depth());
                monitor.on_push(BarIndex::new(i), h, self.stack.depth());
            }
        }

        debug_assert!(self.stack.is_empty());

        stats.set_total_time(start_time.elapsed());
        monitor.on_exit_scan(&stats);

        Ok(SolverOutcome::new(best, stats))
    }
}

impl<T> RectangleSolver<T> for StackSolver
where
    T: HeightNumeric,
{
    fn solve(&mut self, histogram: &Histogram<T>) -> Result<SolverOutcome<T>, AreaOverflowError> {
        self.solve_with_monitor(histogram, &mut NoOperationMonitor::new())
    }

    fn name(&self) -> &str {
        "StackSolver"
    }
}
