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
use skyline_core::num::constants::Zero;
use skyline_model::{num::HeightNumeric, rectangle::Rectangle};

/// The result of running a solver on one histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOutcome<T>
where
    T: HeightNumeric,
{
    rectangle: Option<Rectangle<T>>,
    statistics: SolverStatistics,
}

impl<T> SolverOutcome<T>
where
    T: HeightNumeric,
{
    #[inline]
    pub fn new(rectangle: Option<Rectangle<T>>, statistics: SolverStatistics) -> Self {
        Self {
            rectangle,
            statistics,
        }
    }

    /// Returns the largest rectangle, or `None` if no rectangle of positive
    /// area exists (empty or all-zero histogram).
    #[inline]
    pub fn rectangle(&self) -> Option<&Rectangle<T>> {
        self.rectangle.as_ref()
    }

    /// Returns the largest area; zero if there is no rectangle.
    #[inline]
    pub fn area(&self) -> T::Area {
        self.rectangle.as_ref().map_or(<T::Area as Zero>::ZERO, |r| r.area())
    }

    #[inline]
    pub fn has_rectangle(&self) -> bool {
        self.rectangle.is_some()
    }

    #[inline]
    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    #[inline]
    pub fn into_rectangle(self) -> Option<Rectangle<T>> {
        self.rectangle
    }
}

/// Returns `true` if `candidate` should replace `best`: its area is strictly
/// larger, and positive if there is no best rectangle yet.
#[inline]
pub(crate) fn is_improvement<T>(best: Option<&Rectangle<T>>, candidate: &Rectangle<T>) -> bool
where
    T: HeightNumeric,
{
    let incumbent = best.map_or(<T::Area as Zero>::ZERO, |b| b.area());
    candidate.area() > incumbent
}

impl<T> std::fmt::Display for SolverOutcome<T>
where
    T: HeightNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.rectangle {
            Some(r) => write!(f, "SolverOutcome(area: {}, {})", r.area(), r),
            None => write!(f, "SolverOutcome(area: {}, no rectangle)", self.area()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyline_core::math::span::BarSpan;
    use skyline_model::index::BarIndex;

    #[test]
    fn test_is_improvement_requires_strictly_larger_area() {
        let small = Rectangle::new(BarIndex::new(0), 2u32, BarSpan::new(0, 2)).unwrap();
        let same = Rectangle::new(BarIndex::new(3), 4u32, BarSpan::new(3, 4)).unwrap();
        let zero = Rectangle::new(BarIndex::new(0), 0u32, BarSpan::new(0, 3)).unwrap();

        assert!(is_improvement(None, &small));
        assert!(!is_improvement(None, &zero));
        assert!(!is_improvement(Some(&small), &same));
        assert!(is_improvement(Some(&zero), &small));
    }

    #[test]
    fn test_outcome_without_rectangle() {
        let o = SolverOutcome::<u32>::new(None, SolverStatistics::default());
        assert!(!o.has_rectangle());
        assert_eq!(o.area(), 0u64);
        assert_eq!(format!("{}", o), "SolverOutcome(area: 0, no rectangle)");
    }

    #[test]
    fn test_outcome_with_rectangle() {
        let r = Rectangle::new(BarIndex::new(2), 5u32, BarSpan::new(2, 4)).unwrap();
        let o = SolverOutcome::new(Some(r), SolverStatistics::default());
        assert!(o.has_rectangle());
        assert_eq!(o.area(), 10);
        assert_eq!(o.rectangle(), Some(&r));
        assert_eq!(
            format!("{}", o),
            "SolverOutcome(area: 10, Rectangle(bars: [2, 4), height: 5, area: 10))"
        );
        assert_eq!(o.into_rectangle(), Some(r));
    }
}
