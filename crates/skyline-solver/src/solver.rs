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

use crate::result::SolverOutcome;
use skyline_model::{error::AreaOverflowError, histogram::Histogram, num::HeightNumeric};

/// A strategy for finding the largest rectangle under a histogram.
///
/// Solvers take `&mut self` so they can keep working buffers between calls;
/// they must not keep any other state, so solving the same histogram twice
/// yields the same outcome.
pub trait RectangleSolver<T>
where
    T: HeightNumeric,
{
    /// Finds the largest rectangle under `histogram`.
    ///
    /// # Errors
    ///
    /// Returns `AreaOverflowError` if some candidate area does not fit
    /// `T::Area`.
    fn solve(&mut self, histogram: &Histogram<T>) -> Result<SolverOutcome<T>, AreaOverflowError>;

    /// Returns the name of the solver.
    fn name(&self) -> &str;
}

impl<T> std::fmt::Debug for dyn RectangleSolver<T>
where
    T: HeightNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RectangleSolver({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn RectangleSolver<T>
where
    T: HeightNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RectangleSolver({})", self.name())
    }
}
