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

//! A generic dense 2D grid.
//!
//! Cells are stored as a vector of rows. Structural edits (inserting or
//! deleting a row or column) build a fresh vector of rows sized to the new
//! dimensions and replace the old one, so the storage always matches the
//! current width and height exactly.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, Index, IndexMut};

use fnv::FnvHasher;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{Error, Result};
use crate::index::{invalid_index, Column, Line, Point};

#[cfg(feature = "serde")]
mod de;
mod edit;
mod fill;
mod row;

pub use self::fill::LineWalk;
pub use self::row::Row;

/// Multiplier used when folding cell hashes into [`Grid::hash_code`].
const HASH_MULTIPLIER: u64 = 7;

/// Grid dimensions.
pub trait Dimensions {
    /// Number of columns.
    fn width(&self) -> usize;

    /// Number of lines.
    fn height(&self) -> usize;

    /// Check if a point addresses an existing cell.
    #[inline]
    fn contains(&self, point: Point) -> bool {
        !invalid_index(point.line.0, self.height()) && !invalid_index(point.column.0, self.width())
    }
}

/// Cell values that can stand for "no value".
///
/// [`Grid::hash_code`] skips null cells entirely. Types without a null state
/// opt in with an empty impl.
pub trait Nullable {
    #[inline]
    fn is_null(&self) -> bool {
        false
    }
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

macro_rules! never_null {
    ($($ty:ty)*) => {
        $(impl Nullable for $ty {})*
    };
}

never_null! { bool char u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize String }

/// An item in the grid along with its Line and Column.
#[derive(Debug, PartialEq, Eq)]
pub struct Indexed<T> {
    pub inner: T,
    pub line: Line,
    pub column: Column,
}

impl<T> Deref for Indexed<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.inner
    }
}

/// Dense grid of `height` rows by `width` columns.
///
/// ```notrust
///            width
///   ┌─────────────────────┐
///   │ Row 0               │
///   ├─────────────────────┤
///   │ Row 1               │  height
///   ├─────────────────────┤
///   │ ...                 │
///   └─────────────────────┘
/// ```
///
/// Equality and hashing look at the dimensions and cells only; the default
/// value does not take part.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Grid<T> {
    /// Lines in the grid. Each row holds a list of cells corresponding to the
    /// columns in that row.
    ///
    /// Invariant: `raw.len() == lines` and every row has `columns` cells.
    raw: Vec<Row<T>>,

    /// Number of columns.
    columns: usize,

    /// Number of lines.
    lines: usize,

    /// Value used for every cell created without an explicit value.
    default: T,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `default`.
    pub fn new(width: isize, height: isize, default: T) -> Result<Grid<T>> {
        if width < 0 || height < 0 {
            return Err(Error::InvalidSize { width, height });
        }

        let (columns, lines) = (width as usize, height as usize);
        let template = Row::new(columns, &default);

        Ok(Grid { raw: vec![template; lines], columns, lines, default })
    }

    /// Create a grid filled with `T::default()`.
    pub fn with_size(width: isize, height: isize) -> Result<Grid<T>>
    where
        T: Default,
    {
        Grid::new(width, height, T::default())
    }
}

#[allow(clippy::len_without_is_empty)]
impl<T> Grid<T> {
    /// Value used to populate new cells.
    #[inline]
    pub fn default(&self) -> &T {
        &self.default
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines * self.columns
    }

    pub fn get(&self, line: Line, column: Column) -> Result<&T> {
        let (line, column) = self.offset(Point::new(line, column))?;
        Ok(self.raw[line].cell(column))
    }

    pub fn get_mut(&mut self, line: Line, column: Column) -> Result<&mut T> {
        let (line, column) = self.offset(Point::new(line, column))?;
        Ok(self.raw[line].cell_mut(column))
    }

    /// Overwrite a single cell.
    pub fn set(&mut self, line: Line, column: Column, val: T) -> Result<()> {
        *self.get_mut(line, column)? = val;
        Ok(())
    }

    /// Iterate over all rows, top to bottom.
    #[inline]
    pub fn rows(&self) -> std::slice::Iter<'_, Row<T>> {
        self.raw.iter()
    }

    /// Iterate over all cells in row-major order.
    #[inline]
    pub fn iter(&self) -> GridIterator<'_, T> {
        GridIterator { grid: self, line: 0, column: 0 }
    }

    /// Deterministic hash of the dimensions and every cell in row-major order.
    ///
    /// Null cells contribute nothing. Unlike [`Hash`], the result does not
    /// depend on the hasher picked by the caller, so it is stable across
    /// processes.
    pub fn hash_code(&self) -> u64
    where
        T: Hash + Nullable,
    {
        let mut code = (self.columns as u64)
            .wrapping_add(HASH_MULTIPLIER.wrapping_mul(self.lines as u64));

        for cell in self.raw.iter().flat_map(Row::iter).filter(|cell| !cell.is_null()) {
            let mut hasher = FnvHasher::default();
            cell.hash(&mut hasher);
            code = code.wrapping_mul(HASH_MULTIPLIER).wrapping_add(hasher.finish());
        }

        code
    }

    /// Convert a point into storage offsets, rejecting anything outside the grid.
    pub(crate) fn offset(&self, point: Point) -> Result<(usize, usize)> {
        if invalid_index(point.line.0, self.lines) {
            return Err(Error::line(point.line.0, self.lines));
        }
        if invalid_index(point.column.0, self.columns) {
            return Err(Error::column(point.column.0, self.columns));
        }

        Ok((point.line.0 as usize, point.column.0 as usize))
    }
}

impl<T> Dimensions for Grid<T> {
    #[inline]
    fn width(&self) -> usize {
        self.columns
    }

    #[inline]
    fn height(&self) -> usize {
        self.lines
    }
}

impl<T: PartialEq> PartialEq for Grid<T> {
    fn eq(&self, other: &Self) -> bool {
        // Compare dimensions first, an empty grid has no rows to tell widths apart.
        self.columns == other.columns && self.lines == other.lines && self.raw == other.raw
    }
}

impl<T: Eq> Eq for Grid<T> {}

impl<T: Hash> Hash for Grid<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.columns.hash(state);
        self.lines.hash(state);
        for cell in self.raw.iter().flat_map(Row::iter) {
            cell.hash(state);
        }
    }
}

/// One line per row, cells separated by a single space.
impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.raw {
            let mut cells = row.iter();
            if let Some(first) = cells.next() {
                write!(f, "{}", first)?;
            }
            for cell in cells {
                write!(f, " {}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Row-major iterator over the cells of a grid.
pub struct GridIterator<'a, T> {
    grid: &'a Grid<T>,
    line: usize,
    column: usize,
}

impl<'a, T> Iterator for GridIterator<'a, T> {
    type Item = Indexed<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.column >= self.grid.columns {
            self.column = 0;
            self.line += 1;
        }

        if self.line >= self.grid.lines || self.grid.columns == 0 {
            return None;
        }

        let item = Indexed {
            inner: self.grid.raw[self.line].cell(self.column),
            line: Line(self.line as isize),
            column: Column(self.column as isize),
        };
        self.column += 1;

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let consumed = self.line * self.grid.columns + self.column;
        let remaining = self.grid.len().saturating_sub(consumed);
        (remaining, Some(remaining))
    }
}

impl<T> Index<Line> for Grid<T> {
    type Output = Row<T>;

    #[inline]
    fn index(&self, index: Line) -> &Row<T> {
        if invalid_index(index.0, self.lines) {
            panic!("{}", Error::line(index.0, self.lines));
        }
        &self.raw[index.0 as usize]
    }
}

impl<T> IndexMut<Line> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, index: Line) -> &mut Row<T> {
        if invalid_index(index.0, self.lines) {
            panic!("{}", Error::line(index.0, self.lines));
        }
        &mut self.raw[index.0 as usize]
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, point: Point) -> &T {
        match self.offset(point) {
            Ok((line, column)) => self.raw[line].cell(column),
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, point: Point) -> &mut T {
        match self.offset(point) {
            Ok((line, column)) => self.raw[line].cell_mut(column),
            Err(err) => panic!("{}", err),
        }
    }
}
