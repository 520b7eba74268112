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

//! Monitoring combinators for histogram scans
//!
//! Provides `CompositeMonitor`, a fan-out monitor that forwards every event
//! to its children in insertion order. This lets you mix narration, counting
//! and visualization without coupling them to the solver.

use crate::{monitor::scan_monitor::ScanMonitor, stats::SolverStatistics};
use skyline_model::{index::BarIndex, num::HeightNumeric, rectangle::Rectangle};

/// A scan monitor that aggregates multiple monitors and forwards events to all of them.
pub struct CompositeMonitor<'a, T>
where
    T: HeightNumeric,
{
    monitors: Vec<Box<dyn ScanMonitor<T> + 'a>>,
}

impl<'a, T> Default for CompositeMonitor<'a, T>
where
    T: HeightNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeMonitor<'a, T>
where
    T: HeightNumeric,
{
    /// Creates a new empty `CompositeMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeMonitor` with room for `capacity` monitors.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: ScanMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn ScanMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns a slice of the monitors contained in the composite monitor.
    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn ScanMonitor<T> + 'a>] {
        &self.monitors
    }

    /// Returns the number of monitors contained in the composite monitor.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> FromIterator<Box<dyn ScanMonitor<T> + 'a>> for CompositeMonitor<'a, T>
where
    T: HeightNumeric,
{
    #[inline(always)]
    fn from_iter<I: IntoIterator<Item = Box<dyn ScanMonitor<T> + 'a>>>(iter: I) -> Self {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> ScanMonitor<T> for CompositeMonitor<'a, T>
where
    T: HeightNumeric,
{
    fn on_enter_scan(&mut self, heights: &[T]) {
        for monitor in &mut self.monitors {
            monitor.on_enter_scan(heights);
        }
    }

    fn on_push(&mut self, bar: BarIndex, height: T, depth: usize) {
        for monitor in &mut self.monitors {
            monitor.on_push(bar, height, depth);
        }
    }

    fn on_pop(&mut self, candidate: &Rectangle<T>) {
        for monitor in &mut self.monitors {
            monitor.on_pop(candidate);
        }
    }

    fn on_improvement(&mut self, best: &Rectangle<T>) {
        for monitor in &mut self.monitors {
            monitor.on_improvement(best);
        }
    }

    fn on_exit_scan(&mut self, stats: &SolverStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_scan(stats);
        }
    }

    fn name(&self) -> &str {
        "CompositeMonitor"
    }
}

impl<'a, T> std::fmt::Debug for CompositeMonitor<'a, T>
where
    T: HeightNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.monitors.iter()).finish()
    }
}
