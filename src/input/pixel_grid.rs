use std::path::Path;

use serde::Serialize;

use crate::error::{CnnError, Result};

/// Side length of every drawing the network accepts.
pub const GRID_SIZE: usize = 9;

/// Shaded pixel.
pub const SHADED: char = '@';
/// Blank pixel.
pub const BLANK: char = '.';

/// A 9x9 drawing encoded as +1 (shaded) / -1 (blank).
///
/// Only obtainable through [`PixelGrid::decode`] and friends, so every value
/// is guaranteed to have the fixed shape and to contain only +1 and -1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PixelGrid {
    cells: [[i8; GRID_SIZE]; GRID_SIZE],
}

impl PixelGrid {
    /// Encodes the lines of one drawing.
    ///
    /// `@` becomes +1, `.` becomes -1 and `\r` is skipped without taking up a
    /// column. Anything else is a [`CnnError::Format`]. A drawing that does
    /// not decode to exactly 9 rows of 9 pixels is a [`CnnError::Shape`].
    pub fn decode<I, S>(lines: I) -> Result<PixelGrid>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows: Vec<Vec<i8>> = Vec::with_capacity(GRID_SIZE);

        for (line_idx, line) in lines.into_iter().enumerate() {
            let mut row = Vec::with_capacity(GRID_SIZE);
            for (col_idx, c) in line.as_ref().chars().enumerate() {
                match c {
                    '\r' => continue,
                    SHADED => row.push(1),
                    BLANK => row.push(-1),
                    found => {
                        return Err(CnnError::Format {
                            line: line_idx + 1,
                            column: col_idx + 1,
                            found,
                        })
                    }
                }
            }
            rows.push(row);
        }

        Self::from_rows(rows)
    }

    /// Encodes a whole drawing held in memory.
    pub fn parse(text: &str) -> Result<PixelGrid> {
        Self::decode(text.lines())
    }

    /// Reads and encodes a drawing file.
    pub fn load(path: impl AsRef<Path>) -> Result<PixelGrid> {
        let path = path.as_ref();
        log::debug!("reading drawing from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Builds a grid from already-encoded rows.
    pub fn from_rows(rows: Vec<Vec<i8>>) -> Result<PixelGrid> {
        let bad_row = rows.iter().find(|row| row.len() != GRID_SIZE);
        if rows.len() != GRID_SIZE || bad_row.is_some() {
            return Err(CnnError::Shape {
                expected_rows: GRID_SIZE,
                expected_cols: GRID_SIZE,
                rows: rows.len(),
                cols: bad_row.or(rows.first()).map_or(0, |row| row.len()),
            });
        }

        let mut cells = [[0i8; GRID_SIZE]; GRID_SIZE];
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                if v != 1 && v != -1 {
                    return Err(CnnError::InvalidPixel { row: i, col: j, value: v });
                }
                cells[i][j] = v;
            }
        }
        Ok(PixelGrid { cells })
    }

    /// Grid with every pixel shaded (+1) or every pixel blank (-1).
    pub fn uniform(shaded: bool) -> PixelGrid {
        let v = if shaded { 1 } else { -1 };
        PixelGrid { cells: [[v; GRID_SIZE]; GRID_SIZE] }
    }

    pub fn get(&self, row: usize, col: usize) -> i8 {
        self.cells[row][col]
    }

    pub fn rows(&self) -> &[[i8; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }
}
