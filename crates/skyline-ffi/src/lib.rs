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

//! # Skyline FFI
//!
//! C-compatible entry points for the largest-rectangle solver, meant for
//! drivers and test harnesses written in other languages.
//!
//! Every entry point takes a pointer/length pair describing the heights and
//! an out-pointer for the area, and returns a [`status::SkylineStatus`].
//! The out-pointer is only written on `SKYLINE_STATUS_OK`.
//!
//! - A null heights pointer is accepted only together with `len == 0`, which
//!   describes the empty histogram.
//! - Nothing is allocated on the caller's behalf, so there is nothing to free.
//! - Status codes can be turned into static, NUL-terminated messages with
//!   `skyline_status_message`.

pub mod area;
pub mod status;
