use serde::{Serialize, Deserialize};

/// Row-major grid of reals. Feature maps (7x7) and pooled maps (4x4) are
/// both plain `Matrix` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    pub fn filled(rows: usize, cols: usize, value: f64) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![value; cols]; rows]
        }
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, |row| row.len()),
            data
        }
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix::from_data(
            self.data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect()
        )
    }

    /// Same as [`Matrix::map`] but overwrites `self`.
    pub fn map_in_place<F>(&mut self, functor: F)
    where
        F: Fn(f64) -> f64,
    {
        for row in &mut self.data {
            for x in row.iter_mut() {
                *x = functor(*x);
            }
        }
    }

    /// Maximum over the rectangle `[row, row + height) x [col, col + width)`.
    pub fn window_max(&self, row: usize, col: usize, height: usize, width: usize) -> f64 {
        let mut best = f64::NEG_INFINITY;
        for i in row..row + height {
            for j in col..col + width {
                best = best.max(self.data[i][j]);
            }
        }
        best
    }

    /// Row-major copy of every entry.
    pub fn flatten(&self) -> Vec<f64> {
        self.data.iter().flat_map(|row| row.iter().copied()).collect()
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}
