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

use skyline_core::num::ops::saturating_arithmetic::SaturatingAddVal;
use std::time::Duration;

/// Statistics collected while solving one histogram.
///
/// Not every strategy drives every counter: `BoundarySolver` keeps its
/// stacks inside the boundary scans and reports no pushes or pops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverStatistics {
    /// Bars read by the main scan.
    pub bars_scanned: u64,
    /// Indices pushed onto a working stack.
    pub stack_pushes: u64,
    /// Indices popped from a working stack.
    pub stack_pops: u64,
    /// Candidate rectangles whose area was computed.
    pub candidates_evaluated: u64,
    /// Times the best rectangle was replaced by a strictly larger one.
    pub improvements: u64,
    /// The deepest the working stack got.
    pub max_stack_depth: u64,
    /// Total time spent in the solver.
    pub time_total: Duration,
}

impl SolverStatistics {
    #[inline]
    pub fn on_bar_scanned(&mut self) {
        self.bars_scanned = self.bars_scanned.saturating_add_val(1);
    }

    /// Records `count` bars read in one go, e.g. while building an index.
    #[inline]
    pub fn on_bars_scanned(&mut self, count: usize) {
        self.bars_scanned = self.bars_scanned.saturating_add_val(count as u64);
    }

    /// Records a push and the resulting stack depth.
    #[inline]
    pub fn on_push(&mut self, depth: usize) {
        self.stack_pushes = self.stack_pushes.saturating_add_val(1);
        self.max_stack_depth = self.max_stack_depth.max(depth as u64);
    }

    #[inline]
    pub fn on_pop(&mut self) {
        self.stack_pops = self.stack_pops.saturating_add_val(1);
    }

    #[inline]
    pub fn on_candidate_evaluated(&mut self) {
        self.candidates_evaluated = self.candidates_evaluated.saturating_add_val(1);
    }

    #[inline]
    pub fn on_improvement(&mut self) {
        self.improvements = self.improvements.saturating_add_val(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for SolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Skyline Solver Statistics:")?;
        writeln!(f, "  Bars scanned:         {}", self.bars_scanned)?;
        writeln!(f, "  Stack pushes:         {}", self.stack_pushes)?;
        writeln!(f, "  Stack pops:           {}", self.stack_pops)?;
        writeln!(f, "  Max stack depth:      {}", self.max_stack_depth)?;
        writeln!(f, "  Candidates evaluated: {}", self.candidates_evaluated)?;
        writeln!(f, "  Improvements:         {}", self.improvements)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}
