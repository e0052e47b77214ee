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

//! Bulk fills of rectangular regions and lines.

use log::debug;

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::index::{invalid_position, Point};

/// Points visited by a line walk.
///
/// The walk yields `start`, then keeps stepping by `delta`, and stops once the
/// line of the next point equals `end.line` or its column equals `end.column`.
/// The first point is always yielded, even if it already lies on the end line
/// or column.
///
/// Only equality is tested, so a walk that steps over its end line and end
/// column never stops. Nothing here checks grid bounds. A step that would leave
/// the `isize` range ends the walk, and [`LineWalk::overflowed_from`] reports
/// the point it was taken from.
#[derive(Debug, Clone)]
pub struct LineWalk {
    next: Option<Point>,
    delta: Point,
    end: Point,
    overflowed_from: Option<Point>,
}

impl LineWalk {
    pub fn new(start: Point, delta: Point, end: Point) -> LineWalk {
        LineWalk { next: Some(start), delta, end, overflowed_from: None }
    }

    /// Last point yielded before a step out of the `isize` range stopped the walk.
    #[inline]
    pub fn overflowed_from(&self) -> Option<Point> {
        self.overflowed_from
    }

    /// Check whether the walk stops at all when it doesn't move.
    fn is_stuck(&self) -> bool {
        match self.next {
            Some(start) => {
                self.delta == Point::default()
                    && start.line != self.end.line
                    && start.column != self.end.column
            },
            None => false,
        }
    }
}

impl Iterator for LineWalk {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let current = self.next?;

        self.next = match current.checked_add(self.delta) {
            Some(step) if step.line == self.end.line || step.column == self.end.column => None,
            Some(step) => Some(step),
            None => {
                self.overflowed_from = Some(current);
                None
            },
        };

        Some(current)
    }
}

impl<T: Clone> Grid<T> {
    /// Set every cell in the half-open rectangle `start..end` to `val`.
    ///
    /// Bounds are checked first, including `end.column <= width`. A rectangle
    /// that passes them but is empty writes nothing and is not an error.
    pub fn fill_region(&mut self, start: Point, end: Point, val: T) -> Result<()> {
        if let Err(err) = self.check_fill_bounds(start, end) {
            debug!("Rejected region fill {}..{}: {}", start, end, err);
            return Err(err);
        }
        if end.column.0 > self.columns as isize {
            debug!("Rejected region fill {}..{}: end column past width", start, end);
            return Err(Error::column(end.column.0, self.columns));
        }

        if end.line <= start.line || end.column <= start.column {
            return Ok(());
        }

        let columns = start.column.0 as usize..end.column.0 as usize;
        for row in &mut self.raw[start.line.0 as usize..end.line.0 as usize] {
            row.cells_mut(columns.clone()).fill(val.clone());
        }

        Ok(())
    }

    /// Set every cell visited by the walk from `start` in steps of `delta` to `val`.
    ///
    /// See [`LineWalk`] for when the walk stops. The whole walk is checked before
    /// anything is written: it fails if it leaves the grid (including by
    /// overflowing `isize`), or if `delta` is zero and `start` shares neither
    /// line nor column with `end`.
    pub fn fill_line(&mut self, start: Point, delta: Point, end: Point, val: T) -> Result<()> {
        if let Err(err) = self.check_fill_bounds(start, end) {
            debug!("Rejected line fill {} -> {}: {}", start, end, err);
            return Err(err);
        }

        let mut walk = LineWalk::new(start, delta, end);
        if walk.is_stuck() {
            debug!("Rejected line fill {} -> {}: zero step never reaches the end", start, end);
            return Err(Error::UnterminatedLine { start, end });
        }

        // A moving walk always leaves the grid eventually, so this terminates.
        let cells = walk.by_ref().map(|point| self.offset(point)).collect::<Result<Vec<_>>>();
        let cells = match (cells, walk.overflowed_from()) {
            (Ok(cells), None) => cells,
            (Ok(_), Some(from)) => {
                let err = self.overflow_error(from, delta);
                debug!("Rejected line fill {} -> {}: {}", start, end, err);
                return Err(err);
            },
            (Err(err), _) => {
                debug!("Rejected line fill {} -> {}: {}", start, end, err);
                return Err(err);
            },
        };

        for (line, column) in cells {
            *self.raw[line].cell_mut(column) = val.clone();
        }

        Ok(())
    }

    /// Error for a step from `from` that leaves the `isize` range.
    ///
    /// The reported index saturates, which is out of bounds for any grid.
    fn overflow_error(&self, from: Point, delta: Point) -> Error {
        if from.line.0.checked_add(delta.line.0).is_none() {
            Error::line(from.line.0.saturating_add(delta.line.0), self.lines)
        } else {
            Error::column(from.column.0.saturating_add(delta.column.0), self.columns)
        }
    }

    /// Bounds shared by both fills.
    ///
    /// The start may sit one past the last column, and the end line one past
    /// the last line.
    fn check_fill_bounds(&self, start: Point, end: Point) -> Result<()> {
        if start.line.0 < 0 {
            return Err(Error::line(start.line.0, self.lines));
        }
        if end.line.0 > self.lines as isize {
            return Err(Error::line(end.line.0, self.lines));
        }
        if invalid_position(start.column.0, self.columns) {
            return Err(Error::column(start.column.0, self.columns));
        }

        Ok(())
    }
}
