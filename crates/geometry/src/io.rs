// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Whitespace-separated text form of points.
//!
//! A point of dimension `N` is written as its `N` components separated by
//! single spaces, with no trailing space or newline: `3 2`. Reading accepts
//! any ASCII whitespace between tokens and consumes only the tokens it needs,
//! so the rest of a line stays available to the caller.

use crate::{GeometryError, Point};
use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Splits a buffered reader into whitespace-separated tokens.
///
/// The reader carries a sticky failure flag: once a point fails to read, the
/// flag stays set until [`clear`](TokenReader::clear) is called, and every
/// further point read is refused with [`GeometryError::StreamFailed`].
#[derive(Debug)]
pub struct TokenReader<R> {
    inner: R,
    failed: bool,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            failed: false,
        }
    }

    /// Returns `true` if a previous read failed.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Marks the reader failed.
    pub fn fail(&mut self) {
        self.failed = true;
    }

    /// Clears the failure flag.
    pub fn clear(&mut self) {
        self.failed = false;
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Returns the next token, or `None` at end of input.
    ///
    /// Leading whitespace is skipped; the whitespace byte that ends the token
    /// is left unread.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            let buf = self.inner.fill_buf()?;
            if buf.is_empty() {
                return Ok(None);
            }
            let skip = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
            let found = skip < buf.len();
            self.inner.consume(skip);
            if found {
                break;
            }
        }

        let mut token = Vec::new();
        loop {
            let buf = self.inner.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let len = buf.iter().take_while(|b| !b.is_ascii_whitespace()).count();
            token.extend_from_slice(&buf[..len]);
            let ended = len < buf.len();
            self.inner.consume(len);
            if ended {
                break;
            }
        }

        String::from_utf8(token)
            .map(Some)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl<T: Copy + FromStr, const N: usize> Point<T, N> {
    /// Reads `N` components from `input`, replacing all of them at once.
    ///
    /// On any failure (reader already failed, input exhausted, unparsable
    /// token, I/O error) the point keeps its previous components, `input` is
    /// marked failed, and the error is returned.
    ///
    /// # Examples
    /// ```
    /// use geometry::{point, TokenReader};
    ///
    /// let mut input = TokenReader::new("1.5 -2 rest".as_bytes());
    /// let mut p = point![0.0f32, 0.0];
    /// p.read_from(&mut input).unwrap();
    /// assert_eq!(p, point![1.5, -2.0]);
    /// assert_eq!(input.next_token().unwrap().as_deref(), Some("rest"));
    /// ```
    pub fn read_from<R: BufRead>(&mut self, input: &mut TokenReader<R>) -> Result<(), GeometryError> {
        if input.is_failed() {
            return Err(GeometryError::StreamFailed);
        }
        match self.read_staged(input) {
            Ok(staged) => {
                *self = staged;
                Ok(())
            }
            Err(e) => {
                input.fail();
                Err(e)
            }
        }
    }

    fn read_staged<R: BufRead>(&self, input: &mut TokenReader<R>) -> Result<Self, GeometryError> {
        let mut staged = *self;
        for index in 0..N {
            let token = input.next_token()?.ok_or(GeometryError::Truncated {
                expected: N,
                found: index,
            })?;
            staged[index] = token
                .parse()
                .map_err(|_| GeometryError::InvalidComponent { index, token })?;
        }
        Ok(staged)
    }
}

impl<T: Copy + fmt::Display, const N: usize> Point<T, N> {
    /// Writes the components separated by single spaces, without a newline.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

/// Formatting flags such as precision are applied to every component.
impl<T: Copy + fmt::Display, const N: usize> fmt::Display for Point<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.components().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(c, f)?;
        }
        Ok(())
    }
}

/// Parses exactly `N` whitespace-separated components.
impl<T: Copy + Default + FromStr, const N: usize> FromStr for Point<T, N> {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut input = TokenReader::new(s.as_bytes());
        let mut point = Self::origin();
        point.read_from(&mut input)?;
        match input.next_token()? {
            Some(extra) => Err(GeometryError::TrailingInput(extra)),
            None => Ok(point),
        }
    }
}
