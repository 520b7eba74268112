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

use libc::{c_char, c_int};
use skyline_model::error::HistogramError;

/// Result code of every Skyline C entry point.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkylineStatus {
    /// The call succeeded and the out-pointer was written.
    Ok = 0,
    /// A required pointer was null.
    InvalidArgument = 1,
    /// A height was negative, `NaN` or infinite.
    InvalidHeight = 2,
    /// The area does not fit the output type.
    AreaOverflow = 3,
}

impl SkylineStatus {
    /// Returns a static, NUL-terminated description of the status.
    #[inline]
    pub const fn message(self) -> &'static [u8] {
        match self {
            Self::Ok => b"ok\0",
            Self::InvalidArgument => b"invalid argument: null pointer\0",
            Self::InvalidHeight => b"invalid argument: heights must be finite and non-negative\0",
            Self::AreaOverflow => b"overflow: area does not fit the output type\0",
        }
    }

    /// Returns the status with the numeric `code`, if there is one.
    #[inline]
    pub const fn from_code(code: c_int) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            1 => Some(Self::InvalidArgument),
            2 => Some(Self::InvalidHeight),
            3 => Some(Self::AreaOverflow),
            _ => None,
        }
    }
}

impl From<&HistogramError> for SkylineStatus {
    fn from(e: &HistogramError) -> Self {
        match e {
            HistogramError::InvalidHeight(_) => Self::InvalidHeight,
            HistogramError::AreaOverflow(_) => Self::AreaOverflow,
        }
    }
}

impl std::fmt::Display for SkylineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.message();
        // Messages are ASCII literals.
        let text = std::str::from_utf8(&bytes[..bytes.len() - 1]).map_err(|_| std::fmt::Error)?;
        write!(f, "{}", text)
    }
}

/// Message returned for codes that are not a `SkylineStatus`.
const UNKNOWN_STATUS_MESSAGE: &[u8] = b"unknown status\0";

/// Returns a static, NUL-terminated description of the status `code`.
///
/// Codes that do not name a `SkylineStatus` yield `"unknown status"`.
/// The returned pointer is valid for the lifetime of the program and must
/// not be freed.
#[no_mangle]
pub extern "C" fn skyline_status_message(code: c_int) -> *const c_char {
    let message = match SkylineStatus::from_code(code) {
        Some(status) => status.message(),
        None => UNKNOWN_STATUS_MESSAGE,
    };
    message.as_ptr() as *const c_char
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyline_model::{
        error::{AreaOverflowError, InvalidHeightError},
        index::BarIndex,
    };
    use std::ffi::CStr;

    #[test]
    fn test_status_codes_are_stable() {
        assert_eq!(SkylineStatus::Ok as i32, 0);
        assert_eq!(SkylineStatus::InvalidArgument as i32, 1);
        assert_eq!(SkylineStatus::InvalidHeight as i32, 2);
        assert_eq!(SkylineStatus::AreaOverflow as i32, 3);
    }

    #[test]
    fn test_messages_are_nul_terminated() {
        for status in [
            SkylineStatus::Ok,
            SkylineStatus::InvalidArgument,
            SkylineStatus::InvalidHeight,
            SkylineStatus::AreaOverflow,
        ] {
            let ptr = skyline_status_message(status as c_int);
            let text = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap();
            assert_eq!(text, status.to_string());
            assert!(!text.is_empty());
        }
    }

    #[test]
    fn test_unknown_codes_have_a_message() {
        for code in [-1, 4, 7, c_int::MAX, c_int::MIN] {
            assert_eq!(SkylineStatus::from_code(code), None);
            let text = unsafe { CStr::from_ptr(skyline_status_message(code)) };
            assert_eq!(text.to_str().unwrap(), "unknown status");
        }
    }

    #[test]
    fn test_from_code_round_trips_known_statuses() {
        for status in [
            SkylineStatus::Ok,
            SkylineStatus::InvalidArgument,
            SkylineStatus::InvalidHeight,
            SkylineStatus::AreaOverflow,
        ] {
            assert_eq!(SkylineStatus::from_code(status as c_int), Some(status));
        }
    }

    #[test]
    fn test_from_histogram_error() {
        let invalid = HistogramError::from(InvalidHeightError {
            index: BarIndex::new(0),
            height: "-1".to_string(),
        });
        let overflow = HistogramError::from(AreaOverflowError {
            index: BarIndex::new(1),
            width: 2,
        });
        assert_eq!(SkylineStatus::from(&invalid), SkylineStatus::InvalidHeight);
        assert_eq!(SkylineStatus::from(&overflow), SkylineStatus::AreaOverflow);
    }
}
