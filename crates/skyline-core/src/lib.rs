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

//! # Skyline Core
//!
//! Foundational numerics, indices and span primitives shared by the Skyline
//! histogram crates. Everything in here is independent of histograms as such;
//! the model and solver crates build their domain types on top.
//!
//! ## Modules
//!
//! - `algorithm`: Monotonic-stack scans for nearest strictly smaller
//!   neighbours (`previous_smaller`, `next_smaller`) and ordering predicates.
//! - `math`: Half-open bar spans `[start, end)` with width, containment and
//!   conversions to/from `std::ops::Range<usize>`.
//! - `num`: Associated constant traits (`Zero`) and by-value arithmetic
//!   traits for checked (`Option<T>`) and saturating operations.
//! - `utils`: Phantom-tagged, strongly typed indices (`TypedIndex<T>`).
//!
//! Refer to each module for detailed APIs and examples.

pub mod algorithm;
pub mod math;
pub mod num;
pub mod utils;
