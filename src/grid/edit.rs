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

//! Row and column insertion and deletion.
//!
//! Every edit validates its arguments first and then rebuilds the row storage
//! for the new dimensions in one go, so a failed edit never leaves the grid
//! half-modified.

use std::mem;

use log::trace;

use crate::error::{Error, Result};
use crate::grid::row::Row;
use crate::grid::Grid;
use crate::index::{invalid_index, invalid_position, Column, Line};

impl<T: Clone> Grid<T> {
    /// Insert a row of default cells at `line`.
    ///
    /// Rows at or below `line` move down by one. Inserting at `height` appends.
    pub fn insert_row(&mut self, line: Line) -> Result<()> {
        let at = self.check_row_position(line)?;
        let row = Row::new(self.columns, &self.default);
        self.splice_row(at, row);
        Ok(())
    }

    /// Insert a row holding `vals` at `line`.
    ///
    /// `vals` must contain exactly `width` values.
    pub fn insert_row_with(&mut self, line: Line, vals: Vec<T>) -> Result<()> {
        let at = self.check_row_position(line)?;
        if vals.len() != self.columns {
            return Err(Error::ArraySizeMismatch { expected: self.columns, actual: vals.len() });
        }

        self.splice_row(at, Row::from_vec(vals));
        Ok(())
    }

    /// Insert a column of default cells at `column`.
    ///
    /// Columns at or right of `column` move right by one. Inserting at `width`
    /// appends.
    pub fn insert_col(&mut self, column: Column) -> Result<()> {
        let at = self.check_column_position(column)?;
        let cells = vec![self.default.clone(); self.lines];
        self.splice_column(at, cells);
        Ok(())
    }

    /// Insert a column holding `vals` at `column`, top to bottom.
    ///
    /// `vals` must contain exactly `height` values.
    pub fn insert_col_with(&mut self, column: Column, vals: Vec<T>) -> Result<()> {
        let at = self.check_column_position(column)?;
        if vals.len() != self.lines {
            return Err(Error::ArraySizeMismatch { expected: self.lines, actual: vals.len() });
        }

        self.splice_column(at, vals);
        Ok(())
    }
}

impl<T> Grid<T> {
    /// Remove the row at `line`, moving the rows below it up by one.
    pub fn delete_row(&mut self, line: Line) -> Result<()> {
        if invalid_index(line.0, self.lines) {
            return Err(Error::line(line.0, self.lines));
        }

        let at = line.0 as usize;
        let old = mem::take(&mut self.raw);
        self.raw = old
            .into_iter()
            .enumerate()
            .filter_map(|(i, row)| if i == at { None } else { Some(row) })
            .collect();
        self.lines -= 1;

        trace!("Deleted row {}, grid is now {}x{}", at, self.columns, self.lines);

        Ok(())
    }

    /// Remove the column at `column`, moving the columns right of it left by one.
    pub fn delete_col(&mut self, column: Column) -> Result<()> {
        if invalid_index(column.0, self.columns) {
            return Err(Error::column(column.0, self.columns));
        }

        let at = column.0 as usize;
        let old = mem::take(&mut self.raw);
        self.raw = old.into_iter().map(|row| row.without(at)).collect();
        self.columns -= 1;

        trace!("Deleted column {}, grid is now {}x{}", at, self.columns, self.lines);

        Ok(())
    }

    fn check_row_position(&self, line: Line) -> Result<usize> {
        if invalid_position(line.0, self.lines) {
            return Err(Error::line(line.0, self.lines));
        }
        Ok(line.0 as usize)
    }

    fn check_column_position(&self, column: Column) -> Result<usize> {
        if invalid_position(column.0, self.columns) {
            return Err(Error::column(column.0, self.columns));
        }
        Ok(column.0 as usize)
    }

    /// Rebuild the row storage with `row` placed at index `at`.
    fn splice_row(&mut self, at: usize, row: Row<T>) {
        debug_assert_eq!(row.len(), self.columns);

        let old = mem::take(&mut self.raw);
        let mut raw = Vec::with_capacity(self.lines + 1);
        let mut rows = old.into_iter();
        raw.extend(rows.by_ref().take(at));
        raw.push(row);
        raw.extend(rows);

        self.raw = raw;
        self.lines += 1;

        trace!("Inserted row {}, grid is now {}x{}", at, self.columns, self.lines);
    }

    /// Rebuild every row with one cell of `cells` placed at column `at`.
    fn splice_column(&mut self, at: usize, cells: Vec<T>) {
        debug_assert_eq!(cells.len(), self.lines);

        let old = mem::take(&mut self.raw);
        self.raw = old.into_iter().zip(cells).map(|(row, cell)| row.with_inserted(at, cell)).collect();
        self.columns += 1;

        trace!("Inserted column {}, grid is now {}x{}", at, self.columns, self.lines);
    }
}
