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

//! Skyline-Solver: the largest rectangle under a histogram
//!
//! Computes the area (and the rectangle itself) of the largest axis-aligned
//! rectangle that fits entirely under a histogram of unit-width bars.
//!
//! Core flow
//! - Call `max_area` / `largest_rectangle` on a plain slice of heights, or
//! - build a validated `skyline_model::histogram::Histogram<T>` and run any
//!   `RectangleSolver` on it, optionally observing the scan with a
//!   `ScanMonitor`.
//!
//! Strategies
//! - `StackSolver`: the canonical sentinel-terminated monotonic stack scan,
//!   amortized `O(n)` time and `O(n)` auxiliary space.
//! - `BoundarySolver`: two monotonic passes computing the nearest strictly
//!   smaller bar on each side, then one pass over the candidates.
//! - `SegmentTreeSolver`: divide and conquer on the range minimum, answered
//!   by a segment tree, `O(n log n)`.
//! - `BruteForceSolver`: the `O(n²)` definition, used as a test oracle.
//!
//! Guarantees
//! - Pure: inputs are never mutated and no state survives a call apart from
//!   reusable buffer capacity.
//! - Deterministic: identical input gives identical output.
//! - Iterative: no strategy recurses, so deep inputs cannot overflow the
//!   call stack.
//! - Ties: a candidate replaces the incumbent only if its area is strictly
//!   larger. Only the area is canonical across strategies.
//!
//! Module map
//! - `area`: validating free functions.
//! - `boundary`: boundary arrays and `BoundarySolver`.
//! - `brute_force`: `BruteForceSolver`.
//! - `monitor`: scan monitors (no-op, console log, composite).
//! - `result`: `SolverOutcome`.
//! - `segment_tree`: range-minimum tree and `SegmentTreeSolver`.
//! - `solver`: the `RectangleSolver` trait.
//! - `stack`: the monotonic index stack.
//! - `stack_solver`: `StackSolver`.
//! - `stats`: lightweight counters/timing.

pub mod area;
pub mod boundary;
pub mod brute_force;
pub mod monitor;
pub mod result;
pub mod segment_tree;
pub mod solver;
pub mod stack;
pub mod stack_solver;
pub mod stats;

pub use area::{boundaries, largest_rectangle, max_area, max_area_by_boundaries};
