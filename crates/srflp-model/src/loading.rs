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

//! Problem instance loader for the Single Row Facility Layout Problem.
//!
//! Turns a whitespace-delimited text stream into a validated `Model`. The
//! expected layout is the classic dataset format:
//!
//! ```raw
//! n                      (number of facilities)
//! l_1 ... l_n            (facility widths)
//! c_1_1 ... c_1_n        (cost matrix, one row per facility)
//! ...
//! c_n_1 ... c_n_n
//! ```
//!
//! Published instances usually fill only the upper triangle and leave zeros
//! below the diagonal, so by default the upper triangle is authoritative and
//! mirrored. Lines may carry comments introduced by `#`. Anything after the
//! last matrix row is ignored.

use crate::{
    error::ModelError,
    index::FacilityIndex,
    model::{MAX_FACILITIES, Model, ModelBuilder},
};
use srflp_core::num::SolverFloat;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};
use thiserror::Error;

/// The error type for the problem loading process.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input while parsing instance")]
    UnexpectedEof,

    #[error("could not parse token '{token}' as type {type_name}")]
    Parse {
        token: String,
        type_name: &'static str,
    },

    #[error("invalid model: {0}")]
    Model(#[from] ModelError),
}

/// How the cost matrix in the input should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixLayout {
    /// Only entries above the diagonal are read; they are mirrored below it.
    #[default]
    UpperTriangular,
    /// The full matrix is used as given and must already be symmetric.
    Symmetric,
}

/// A configurable loader for SRFLP instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProblemLoader {
    layout: MatrixLayout,
}

impl ProblemLoader {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how the cost matrix is interpreted.
    #[inline]
    pub fn layout(mut self, layout: MatrixLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Loads a problem from a type implementing `BufRead`.
    pub fn from_bufread<T, R>(&self, rdr: R) -> Result<Model<T>, LoaderError>
    where
        T: SolverFloat + FromStr,
        R: BufRead,
    {
        let mut sc = Scanner::new(rdr);

        let n: usize = sc.next()?;
        if n > MAX_FACILITIES {
            return Err(ModelError::TooManyFacilities {
                found: n,
                max: MAX_FACILITIES,
            }
            .into());
        }

        let mut widths = Vec::with_capacity(n);
        for _ in 0..n {
            widths.push(sc.next::<T>()?);
        }

        let mut matrix = Vec::with_capacity(n);
        for _ in 0..n {
            let mut row = Vec::with_capacity(n);
            for _ in 0..n {
                row.push(sc.next::<T>()?);
            }
            matrix.push(row);
        }

        let model = match self.layout {
            MatrixLayout::Symmetric => Model::from_parts(widths, &matrix)?,
            MatrixLayout::UpperTriangular => {
                let mut builder = ModelBuilder::new(n);
                for (i, w) in widths.into_iter().enumerate() {
                    builder.set_width(FacilityIndex::new(i), w);
                }
                for (a, row) in matrix.iter().enumerate() {
                    for (b, &c) in row.iter().enumerate().skip(a + 1) {
                        builder.set_cost(FacilityIndex::new(a), FacilityIndex::new(b), c);
                    }
                }
                builder.build()?
            }
        };

        tracing::debug!(
            "Loaded SRFLP instance with {} facilities ({:?} matrix)",
            model.num_facilities(),
            self.layout
        );
        Ok(model)
    }

    /// Loads a problem from a file path.
    #[inline]
    pub fn from_path<T, P>(&self, path: P) -> Result<Model<T>, LoaderError>
    where
        T: SolverFloat + FromStr,
        P: AsRef<Path>,
    {
        tracing::info!("Loading SRFLP instance from: {}", path.as_ref().display());
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads a problem from a generic reader.
    #[inline]
    pub fn from_reader<T, R>(&self, r: R) -> Result<Model<T>, LoaderError>
    where
        T: SolverFloat + FromStr,
        R: Read,
    {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads a problem from a string slice.
    #[inline]
    pub fn from_str<T>(&self, s: &str) -> Result<Model<T>, LoaderError>
    where
        T: SolverFloat + FromStr,
    {
        self.from_bufread(s.as_bytes())
    }
}

/// Reads whitespace-delimited tokens, skipping `#` comments.
struct Scanner<R> {
    rdr: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            line: String::new(),
            pos: 0,
        }
    }

    /// Reads the next line, dropping any comment. Returns `Ok(false)` on EOF.
    fn refill(&mut self) -> Result<bool, LoaderError> {
        self.line.clear();
        self.pos = 0;
        if self.rdr.read_line(&mut self.line)? == 0 {
            return Ok(false);
        }
        if let Some(comment) = self.line.find('#') {
            self.line.truncate(comment);
        }
        Ok(true)
    }

    /// Reads the next token and parses it into `T`.
    fn next<T: FromStr>(&mut self) -> Result<T, LoaderError> {
        loop {
            let rest = &self.line[self.pos..];
            let trimmed = rest.trim_start();
            if trimmed.is_empty() {
                if !self.refill()? {
                    return Err(LoaderError::UnexpectedEof);
                }
                continue;
            }

            let start = self.pos + (rest.len() - trimmed.len());
            let len = trimmed
                .find(char::is_whitespace)
                .unwrap_or(trimmed.len());
            let token = &self.line[start..start + len];
            self.pos = start + len;

            return token.parse::<T>().map_err(|_| LoaderError::Parse {
                token: token.to_owned(),
                type_name: std::any::type_name::<T>(),
            });
        }
    }
}
