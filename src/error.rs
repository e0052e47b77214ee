// Copyright 2016 Joe Wilm, The Alacritty Project Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Errors reported by grid operations.

use std::fmt::{self, Display, Formatter};

use crate::index::Point;

/// The dimension an index refers to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Axis {
    Line,
    Column,
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Line => f.write_str("line"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// Errors occurring during grid construction and editing.
///
/// Every operation validates its arguments before touching the grid, so a
/// returned error always means the grid was left unchanged.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Error {
    /// Negative width or height passed at construction.
    InvalidSize { width: isize, height: isize },

    /// Index outside the range accepted by the operation.
    OutOfBounds {
        axis: Axis,
        index: isize,
        /// Upper bound the index was checked against.
        limit: usize,
    },

    /// Number of supplied values does not match the grid's orthogonal dimension.
    ArraySizeMismatch { expected: usize, actual: usize },

    /// Line walk with a zero step that never reaches its end line or column.
    UnterminatedLine { start: Point, end: Point },
}

impl Error {
    #[inline]
    pub(crate) fn line(index: isize, limit: usize) -> Error {
        Error::OutOfBounds { axis: Axis::Line, index, limit }
    }

    #[inline]
    pub(crate) fn column(index: isize, limit: usize) -> Error {
        Error::OutOfBounds { axis: Axis::Column, index, limit }
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidSize { width, height } => {
                write!(f, "Invalid grid size {}x{}", width, height)
            },
            Error::OutOfBounds { axis, index, limit } => {
                write!(f, "{} {} out of bounds (limit {})", axis, index, limit)
            },
            Error::ArraySizeMismatch { expected, actual } => {
                write!(f, "Expected {} values, got {}", expected, actual)
            },
            Error::UnterminatedLine { start, end } => {
                write!(f, "Line from {} never reaches {}", start, end)
            },
        }
    }
}

/// Result from grid operations.
pub type Result<T> = std::result::Result<T, Error>;
