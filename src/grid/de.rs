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

//! Deserialization of grids, checking the storage invariants on the way in.

use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::grid::row::Row;
use crate::grid::Grid;

/// Serialized shape of a grid, before its dimensions are checked.
#[derive(Deserialize)]
struct RawGrid<T> {
    raw: Vec<Row<T>>,
    columns: usize,
    lines: usize,
    default: T,
}

impl<'de, T> Deserialize<'de> for Grid<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let RawGrid { raw, columns, lines, default } = RawGrid::deserialize(deserializer)?;

        if raw.len() != lines {
            return Err(de::Error::custom(format!(
                "grid has {} rows, expected {}",
                raw.len(),
                lines
            )));
        }

        if let Some((i, row)) = raw.iter().enumerate().find(|(_, row)| row.len() != columns) {
            return Err(de::Error::custom(format!(
                "row {} has {} cells, expected {}",
                i,
                row.len(),
                columns
            )));
        }

        Ok(Grid { raw, columns, lines, default })
    }
}
