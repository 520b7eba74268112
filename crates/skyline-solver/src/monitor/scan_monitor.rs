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

use crate::stats::SolverStatistics;
use skyline_model::{index::BarIndex, num::HeightNumeric, rectangle::Rectangle};

/// Trait for observing the monotonic stack scan of a histogram.
pub trait ScanMonitor<T>: Send + Sync
where
    T: HeightNumeric,
{
    /// Called once before the scan begins.
    fn on_enter_scan(&mut self, heights: &[T]);

    /// Called after a bar was pushed onto the stack.
    /// `depth` is the stack depth after the push.
    fn on_push(&mut self, bar: BarIndex, height: T, depth: usize);

    /// Called for every bar popped from the stack, with the rectangle the
    /// popped bar limits.
    fn on_pop(&mut self, candidate: &Rectangle<T>);

    /// Called when a candidate becomes the new largest rectangle.
    fn on_improvement(&mut self, best: &Rectangle<T>);

    /// Called when the scan is finished.
    fn on_exit_scan(&mut self, stats: &SolverStatistics);

    /// Returns the name of the monitor.
    fn name(&self) -> &str;
}

impl<'a, T> std::fmt::Debug for dyn ScanMonitor<T> + 'a
where
    T: HeightNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ScanMonitor({})", self.name())
    }
}

impl<'a, T> std::fmt::Display for dyn ScanMonitor<T> + 'a
where
    T: HeightNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ScanMonitor({})", self.name())
    }
}
