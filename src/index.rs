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

//! Line and Column newtypes for strongly typed grid APIs.
//!
//! Both wrap a signed integer. Negative indices are representable on purpose so
//! that they can be rejected with an error instead of wrapping around.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Deref};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Check an index into an existing row or column.
///
/// Returns `true` when `val` is outside `0..limit`.
#[inline]
pub fn invalid_index(val: isize, limit: usize) -> bool {
    val < 0 || val as usize >= limit
}

/// Check an insertion position.
///
/// Returns `true` when `val` is outside `0..=limit`. Inserting at `limit` appends.
#[inline]
pub fn invalid_position(val: isize, limit: usize) -> bool {
    val < 0 || val as usize > limit
}

/// Index in the grid using row, column notation.
///
/// Also used as a step when walking a line through the grid.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point<L = Line, C = Column> {
    pub line: L,
    pub column: C,
}

impl<L, C> Point<L, C> {
    pub fn new(line: L, column: C) -> Point<L, C> {
        Point { line, column }
    }
}

impl<L: Ord, C: Ord> PartialOrd for Point<L, C> {
    fn partial_cmp(&self, other: &Point<L, C>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<L: Ord, C: Ord> Ord for Point<L, C> {
    fn cmp(&self, other: &Point<L, C>) -> Ordering {
        match (self.line.cmp(&other.line), self.column.cmp(&other.column)) {
            (Ordering::Equal, ord) | (ord, _) => ord,
        }
    }
}

impl Point {
    /// Step by `delta`, or `None` if either coordinate leaves the `isize` range.
    #[inline]
    pub fn checked_add(self, delta: Point) -> Option<Point> {
        let line = self.line.0.checked_add(delta.line.0)?;
        let column = self.column.0.checked_add(delta.column.0)?;
        Some(Point::new(Line(line), Column(column)))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.line, self.column)
    }
}

/// A line.
///
/// Newtype to avoid passing values incorrectly.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line(pub isize);

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A column.
///
/// Newtype to avoid passing values incorrectly.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Column(pub isize);

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! ops {
    ($ty:ty, $construct:expr, $primitive:ty) => {
        impl Deref for $ty {
            type Target = $primitive;

            #[inline]
            fn deref(&self) -> &$primitive {
                &self.0
            }
        }

        impl From<$primitive> for $ty {
            #[inline]
            fn from(val: $primitive) -> $ty {
                $construct(val)
            }
        }

        impl Add<$ty> for $ty {
            type Output = $ty;

            #[inline]
            fn add(self, rhs: $ty) -> $ty {
                $construct(self.0 + rhs.0)
            }
        }

        impl AddAssign<$ty> for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: $ty) {
                self.0 += rhs.0;
            }
        }

        impl Add<$primitive> for $ty {
            type Output = $ty;

            #[inline]
            fn add(self, rhs: $primitive) -> $ty {
                $construct(self.0 + rhs)
            }
        }

        impl AddAssign<$primitive> for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: $primitive) {
                self.0 += rhs
            }
        }

        impl PartialEq<$ty> for $primitive {
            #[inline]
            fn eq(&self, other: &$ty) -> bool {
                self.eq(&other.0)
            }
        }

        impl PartialEq<$primitive> for $ty {
            #[inline]
            fn eq(&self, other: &$primitive) -> bool {
                self.0.eq(other)
            }
        }
    };
}

ops!(Line, Line, isize);
ops!(Column, Column, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_ordering() {
        assert!(Point::new(Line(0), Column(0)) == Point::new(Line(0), Column(0)));
        assert!(Point::new(Line(1), Column(0)) > Point::new(Line(0), Column(0)));
        assert!(Point::new(Line(0), Column(1)) > Point::new(Line(0), Column(0)));
        assert!(Point::new(Line(1), Column(1)) > Point::new(Line(0), Column(0)));
        assert!(Point::new(Line(1), Column(1)) > Point::new(Line(0), Column(1)));
        assert!(Point::new(Line(1), Column(0)) > Point::new(Line(0), Column(5)));
        assert!(Point::new(Line(0), Column(0)) > Point::new(Line(-1), Column(0)));
    }

    #[test]
    fn point_step() {
        let point = Point::new(Line(2), Column(3));
        let step = point.checked_add(Point::new(Line(-1), Column(1)));
        assert_eq!(step, Some(Point::new(Line(1), Column(4))));
    }

    #[test]
    fn point_step_overflow() {
        let point = Point::new(Line(1), Column(0));
        assert_eq!(point.checked_add(Point::new(Line(isize::MAX), Column(0))), None);
        assert_eq!(
            point.checked_add(Point::new(Line(0), Column(isize::MIN))),
            Some(Point::new(Line(1), Column(isize::MIN)))
        );

        let point = Point::new(Line(0), Column(-1));
        assert_eq!(point.checked_add(Point::new(Line(0), Column(isize::MIN))), None);
    }

    #[test]
    fn newtype_arithmetic() {
        assert_eq!(Line(3) + 2, Line(5));
        assert_eq!(Column(3) + Column(-4), Column(-1));
        assert!(Column(0) == 0);
        assert_eq!(*Line(7), 7);
    }

    #[test]
    fn index_checks() {
        assert!(invalid_index(-1, 3));
        assert!(!invalid_index(0, 3));
        assert!(!invalid_index(2, 3));
        assert!(invalid_index(3, 3));
        assert!(invalid_index(0, 0));
    }

    #[test]
    fn position_checks() {
        assert!(invalid_position(-1, 3));
        assert!(!invalid_position(0, 3));
        assert!(!invalid_position(3, 3));
        assert!(invalid_position(4, 3));
        assert!(!invalid_position(0, 0));
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(Line(1), Column(-2)).to_string(), "(1, -2)");
    }
}
