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
//
//! Dense two-dimensional grid with row/column editing and region fills.
#![deny(clippy::all, clippy::if_not_else, clippy::enum_glob_use)]

pub mod error;
pub mod grid;
pub mod index;

pub use crate::error::{Error, Result};
pub use crate::grid::{Dimensions, Grid, Nullable, Row};
pub use crate::index::{Column, Line, Point};
