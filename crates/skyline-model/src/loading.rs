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

//! Histogram loader for plain-text height lists.
//!
//! This module turns text streams into a validated `Histogram`. Heights are
//! separated by whitespace and/or commas, so both `2 1 5 6 2 3` and
//! `2,1,5,6,2,3` are accepted, and lines may carry comments introduced by
//! `#`. Optionally the first token is the number of bars, in which case
//! exactly that many heights must follow.
//!
//! The loader accepts any `BufRead`, file path, raw reader, or string slice,
//! which makes it convenient for benchmarks, tests and driver programs.

use crate::{error::InvalidHeightError, histogram::Histogram, num::HeightNumeric};
use std::{
    collections::VecDeque,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, Read},
    marker::PhantomData,
    path::Path,
    str::FromStr,
};

/// Upper bound on the capacity reserved up front from a declared count,
/// so a corrupt header cannot trigger a huge allocation.
const MAX_PREALLOCATED_BARS: usize = 1 << 16;

/// The error type for the histogram loading process.
#[derive(Debug)]
pub enum HistogramLoaderError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// The input ended before the declared number of heights was read.
    UnexpectedEof,
    /// A token could not be parsed into the expected numeric type.
    Parse(ParseTokenError),
    /// More tokens follow the declared number of heights.
    TrailingTokens(String),
    /// A parsed height is negative, `NaN` or infinite.
    Height(InvalidHeightError),
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "u32").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

impl Display for HistogramLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => {
                write!(f, "Unexpected end of input before all declared heights were read")
            }
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::TrailingTokens(token) => {
                write!(f, "Unexpected token '{}' after the declared heights", token)
            }
            Self::Height(e) => write!(f, "Invalid height: {}", e),
        }
    }
}

impl std::error::Error for HistogramLoaderError {}

impl From<std::io::Error> for HistogramLoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseTokenError> for HistogramLoaderError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

impl From<InvalidHeightError> for HistogramLoaderError {
    fn from(e: InvalidHeightError) -> Self {
        Self::Height(e)
    }
}

/// A configurable loader for histograms.
///
/// Without a count header the format is simply a list of heights:
///
/// ```raw
/// # heights of the bars, left to right
/// 2 1 5 6
/// 2, 3
/// ```
///
/// With `expect_count(true)` the first token is the number of bars `n`:
///
/// ```raw
/// 6
/// 2 1 5 6 2 3
/// ```
///
/// # Configuration
/// * `expect_count`: If true, the first token declares the number of bars and
///   exactly that many heights must follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramLoader<T> {
    expect_count: bool,
    _marker: PhantomData<T>,
}

impl<T> Default for HistogramLoader<T> {
    fn default() -> Self {
        Self {
            expect_count: false,
            _marker: PhantomData,
        }
    }
}

impl<T> HistogramLoader<T>
where
    T: HeightNumeric + FromStr,
{
    /// Creates a new `HistogramLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether the first token is the number of bars.
    #[inline]
    pub fn expect_count(mut self, yes: bool) -> Self {
        self.expect_count = yes;
        self
    }

    /// Loads a histogram from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<Histogram<T>, HistogramLoaderError> {
        let mut sc = Scanner::new(rdr);

        let heights = if self.expect_count {
            let n: usize = sc.next()?.ok_or(HistogramLoaderError::UnexpectedEof)?;
            let mut heights = Vec::with_capacity(n.min(MAX_PREALLOCATED_BARS));
            for _ in 0..n {
                let h: T = sc.next()?.ok_or(HistogramLoaderError::UnexpectedEof)?;
                heights.push(h);
            }
            if let Some(token) = sc.next_token()? {
                return Err(HistogramLoaderError::TrailingTokens(token));
            }
            heights
        } else {
            let mut heights = Vec::new();
            while let Some(h) = sc.next::<T>()? {
                heights.push(h);
            }
            heights
        };

        Ok(Histogram::new(heights)?)
    }

    /// Loads a histogram from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Histogram<T>, HistogramLoaderError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads a histogram from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Histogram<T>, HistogramLoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads a histogram from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Histogram<T>, HistogramLoaderError> {
        self.from_reader(s.as_bytes())
    }
}

/// Splits a generic reader into tokens, one line at a time.
struct Scanner<R> {
    rdr: R,
    line: String,
    pending: VecDeque<String>,
}

impl<R: BufRead> Scanner<R> {
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            line: String::new(),
            pending: VecDeque::new(),
        }
    }

    /// Returns the next raw token, or `None` at the end of the input.
    /// Comments run from `#` to the end of the line.
    fn next_token(&mut self) -> Result<Option<String>, HistogramLoaderError> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.rdr.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }

            let content = match self.line.find('#') {
                Some(pos) => &self.line[..pos],
                None => self.line.as_str(),
            };

            self.pending.extend(
                content
                    .split(|c: char| c.is_whitespace() || c == ',')
                    .filter(|t| !t.is_empty())
                    .map(str::to_owned),
            );
        }
        Ok(self.pending.pop_front())
    }

    /// Reads the next token and parses it into `V`.
    fn next<V>(&mut self) -> Result<Option<V>, HistogramLoaderError>
    where
        V: FromStr,
    {
        let Some(token) = self.next_token()? else {
            return Ok(None);
        };

        token.parse::<V>().map(Some).map_err(|_| {
            HistogramLoaderError::Parse(ParseTokenError {
                token,
                type_name: std::any::type_name::<V>(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::BarIndex;

    const COMMENTED: &str = r#"
        # Classic example
        2 1 5     # first half
        6, 2, 3   # second half, comma separated
    "#;

    #[test]
    fn test_loads_plain_list_with_comments() {
        let h: Histogram<u32> = HistogramLoader::new().from_str(COMMENTED).expect("Failed to load");
        assert_eq!(h.heights(), &[2, 1, 5, 6, 2, 3]);
    }

    #[test]
    fn test_loads_empty_input() {
        let h: Histogram<u32> = HistogramLoader::new().from_str("# nothing here\n\n").unwrap();
        assert!(h.is_empty());
    }

    #[test]
    fn test_loads_with_count_header() {
        let loader = HistogramLoader::<i64>::new().expect_count(true);
        let h = loader.from_str("3\n4 0 4").unwrap();
        assert_eq!(h.heights(), &[4, 0, 4]);
    }

    #[test]
    fn test_count_header_missing_heights() {
        let loader = HistogramLoader::<i64>::new().expect_count(true);
        assert!(matches!(
            loader.from_str("4\n1 2 3"),
            Err(HistogramLoaderError::UnexpectedEof)
        ));
    }

    #[test]
    fn test_count_header_trailing_tokens() {
        let loader = HistogramLoader::<i64>::new().expect_count(true);
        match loader.from_str("2 1 2 3") {
            Err(HistogramLoaderError::TrailingTokens(token)) => assert_eq!(token, "3"),
            other => panic!("Expected TrailingTokens, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_structure() {
        let res = HistogramLoader::<u16>::new().from_str("2 1 garbage");
        match res {
            Err(HistogramLoaderError::Parse(e)) => {
                assert_eq!(e.token, "garbage");
                assert!(e.type_name.contains("u16"));
            }
            _ => panic!("Expected Parse error with context"),
        }
    }

    #[test]
    fn test_negative_height_is_rejected() {
        let res = HistogramLoader::<i32>::new().from_str("3 -2 4");
        match res {
            Err(HistogramLoaderError::Height(e)) => {
                assert_eq!(e.index, BarIndex::new(1));
                assert_eq!(e.height, "-2");
            }
            _ => panic!("Expected Height error"),
        }
    }

    #[test]
    fn test_float_heights() {
        let h = HistogramLoader::<f64>::new().from_str("1.5 2.25\n0").unwrap();
        assert_eq!(h.heights(), &[1.5, 2.25, 0.0]);

        let res = HistogramLoader::<f64>::new().from_str("1.0 NaN");
        assert!(matches!(res, Err(HistogramLoaderError::Height(_))));
    }
}
