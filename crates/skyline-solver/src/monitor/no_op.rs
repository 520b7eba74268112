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

use crate::{monitor::scan_monitor::ScanMonitor, stats::SolverStatistics};
use skyline_model::{index::BarIndex, num::HeightNumeric, rectangle::Rectangle};

/// A no-operation monitor that ignores every event.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NoOperationMonitor<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> NoOperationMonitor<T> {
    /// Creates a new `NoOperationMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> Default for NoOperationMonitor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ScanMonitor<T> for NoOperationMonitor<T>
where
    T: HeightNumeric,
{
    #[inline(always)]
    fn on_enter_scan(&mut self, _heights: &[T]) {}

    #[inline(always)]
    fn on_push(&mut self, _bar: BarIndex, _height: T, _depth: usize) {}

    #[inline(always)]
    fn on_pop(&mut self, _candidate: &Rectangle<T>) {}

    #[inline(always)]
    fn on_improvement(&mut self, _best: &Rectangle<T>) {}

    #[inline(always)]
    fn on_exit_scan(&mut self, _stats: &SolverStatistics) {}

    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }
}
