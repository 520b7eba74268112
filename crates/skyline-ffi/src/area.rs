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

use crate::status::SkylineStatus;
use skyline_model::num::HeightNumeric;

/// Views `(ptr, len)` as a slice. `None` if `ptr` is null but `len` is not zero.
///
/// # Safety
///
/// A non-null `ptr` must point to `len` initialized values that stay valid
/// and unmodified for `'a`.
#[inline]
unsafe fn heights_from_raw<'a, T>(ptr: *const T, len: usize) -> Option<&'a [T]> {
    if len == 0 {
        Some(&[][..])
    } else if ptr.is_null() {
        None
    } else {
        Some(std::slice::from_raw_parts(ptr, len))
    }
}

/// Solves `(ptr, len)` and stores the narrowed area in `out`.
///
/// # Safety
///
/// Same as [`heights_from_raw`]; a non-null `out` must be valid for writes.
unsafe fn max_area_into<T, A, F>(ptr: *const T, len: usize, out: *mut A, narrow: F) -> SkylineStatus
where
    T: HeightNumeric,
    F: FnOnce(T::Area) -> Option<A>,
{
    if out.is_null() {
        return SkylineStatus::InvalidArgument;
    }
    let Some(heights) = heights_from_raw(ptr, len) else {
        return SkylineStatus::InvalidArgument;
    };

    match skyline_solver::max_area(heights) {
        Ok(area) => match narrow(area) {
            Some(value) => {
                out.write(value);
                SkylineStatus::Ok
            }
            None => SkylineStatus::AreaOverflow,
        },
        Err(e) => SkylineStatus::from(&e),
    }
}

/// Computes the largest rectangle area of `len` unsigned 32-bit heights.
///
/// # Safety
///
/// `heights` must point to `len` readable values (or may be null if `len`
/// is zero) and `out` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn skyline_max_area_u32(
    heights: *const u32,
    len: usize,
    out: *mut u64,
) -> SkylineStatus {
    max_area_into(heights, len, out, Some)
}

/// Computes the largest rectangle area of `len` signed 64-bit heights.
///
/// Fails with `AreaOverflow` if the area does not fit a `u64`.
///
/// # Safety
///
/// `heights` must point to `len` readable values (or may be null if `len`
/// is zero) and `out` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn skyline_max_area_i64(
    heights: *const i64,
    len: usize,
    out: *mut u64,
) -> SkylineStatus {
    max_area_into(heights, len, out, |area| u64::try_from(area).ok())
}

/// Computes the largest rectangle area of `len` double-precision heights.
///
/// # Safety
///
/// `heights` must point to `len` readable values (or may be null if `len`
/// is zero) and `out` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn skyline_max_area_f64(
    heights: *const f64,
    len: usize,
    out: *mut f64,
) -> SkylineStatus {
    max_area_into(heights, len, out, Some)
}
