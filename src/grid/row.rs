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

//! Defines the Row type which makes up lines in the grid.

use std::convert::TryFrom;
use std::ops::{Index, IndexMut, Range, RangeFull};
use std::slice;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::index::Column;

/// A row in the grid.
#[derive(Default, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Row<T> {
    inner: Vec<T>,
}

impl<T: Clone> Row<T> {
    /// Create a row of `columns` copies of `template`.
    pub fn new(columns: usize, template: &T) -> Row<T> {
        Row { inner: vec![template.clone(); columns] }
    }
}

#[allow(clippy::len_without_is_empty)]
impl<T> Row<T> {
    #[inline]
    pub fn from_vec(vec: Vec<T>) -> Row<T> {
        Row { inner: vec }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.inner.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.inner.iter_mut()
    }

    /// Consume the row, placing `cell` at `column`.
    ///
    /// Cells before `column` keep their position, the rest shift right by one.
    pub(crate) fn with_inserted(self, column: usize, cell: T) -> Row<T> {
        let mut inner = Vec::with_capacity(self.inner.len() + 1);
        let mut cells = self.inner.into_iter();
        inner.extend(cells.by_ref().take(column));
        inner.push(cell);
        inner.extend(cells);
        Row { inner }
    }

    /// Consume the row, dropping the cell at `column` and closing the gap.
    pub(crate) fn without(self, column: usize) -> Row<T> {
        let inner = self
            .inner
            .into_iter()
            .enumerate()
            .filter_map(|(i, cell)| if i == column { None } else { Some(cell) })
            .collect();
        Row { inner }
    }

    #[inline]
    pub(crate) fn cell(&self, column: usize) -> &T {
        &self.inner[column]
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, column: usize) -> &mut T {
        &mut self.inner[column]
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self, range: Range<usize>) -> &mut [T] {
        &mut self.inner[range]
    }
}

impl<'a, T> IntoIterator for &'a Row<T> {
    type IntoIter = slice::Iter<'a, T>;
    type Item = &'a T;

    #[inline]
    fn into_iter(self) -> slice::Iter<'a, T> {
        self.inner.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Row<T> {
    type IntoIter = slice::IterMut<'a, T>;
    type Item = &'a mut T;

    #[inline]
    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.inner.iter_mut()
    }
}

impl<T> Index<Column> for Row<T> {
    type Output = T;

    /// Panics on a negative column, like any other out of range index.
    #[inline]
    fn index(&self, index: Column) -> &T {
        match usize::try_from(index.0) {
            Ok(column) => &self.inner[column],
            Err(_) => panic!("negative column index {}", index),
        }
    }
}

impl<T> IndexMut<Column> for Row<T> {
    #[inline]
    fn index_mut(&mut self, index: Column) -> &mut T {
        match usize::try_from(index.0) {
            Ok(column) => &mut self.inner[column],
            Err(_) => panic!("negative column index {}", index),
        }
    }
}

impl<T> Index<RangeFull> for Row<T> {
    type Output = [T];

    #[inline]
    fn index(&self, _: RangeFull) -> &[T] {
        &self.inner[..]
    }
}

impl<T> IndexMut<RangeFull> for Row<T> {
    #[inline]
    fn index_mut(&mut self, _: RangeFull) -> &mut [T] {
        &mut self.inner[..]
    }
}
