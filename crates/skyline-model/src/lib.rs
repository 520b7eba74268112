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

//! # Skyline Model
//!
//! **The domain model for the largest-rectangle-in-a-histogram problem.**
//!
//! This crate defines the data the solvers consume and produce. It is the
//! interchange layer between user input (raw heights, text files) and the
//! solving engine (`skyline_solver`).
//!
//! ## Architecture
//!
//! * **`index`**: The strongly typed `BarIndex`.
//! * **`num`**: `HeightNumeric`, which maps every supported height type to a
//!   wider area type and computes `height * width` without silent overflow.
//! * **`histogram`**: The validated, immutable `Histogram<T>` and the
//!   allocation-free `validate_heights` for plain slices.
//! * **`rectangle`**: `Rectangle<T>`, a candidate or maximal rectangle.
//! * **`error`**: `InvalidHeightError`, `AreaOverflowError` and the umbrella
//!   `HistogramError`.
//! * **`loading`**: `HistogramLoader`, a text loader for whitespace or comma
//!   separated heights.
//!
//! ## Design Philosophy
//!
//! 1.  **Fail-Fast**: Heights are validated eagerly. A negative, `NaN` or
//!     infinite height is an error, never clamped.
//! 2.  **Widened Results**: Areas use a wider type than heights so that
//!     `max height * n` fits for every realistic input.
//! 3.  **Read-Only Inputs**: Nothing in the model mutates the heights after
//!     validation.

pub mod error;
pub mod histogram;
pub mod index;
pub mod loading;
pub mod num;
pub mod rectangle;
