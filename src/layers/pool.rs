use crate::math::matrix::Matrix;

/// Window height and width.
pub const POOL_WINDOW: usize = 2;
/// Step between window starts.
pub const POOL_STRIDE: usize = 2;

/// Max pooling with a 2x2 window and stride 2.
///
/// A 7-wide map cannot be tiled evenly by stride 2, so the final window is
/// pulled back to end on the last row/column and overlaps its neighbour by
/// one. For 7 that gives window starts `[0, 2, 4, 5]` and a 4x4 output.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxPool;

impl MaxPool {
    /// Start offsets of the windows along one axis of length `len`.
    ///
    /// Regular strides first; when they leave a remainder, one extra window
    /// anchored at `len - window`. `len` below the window size yields no
    /// windows.
    pub fn window_starts(len: usize) -> Vec<usize> {
        if len < POOL_WINDOW {
            return vec![];
        }
        let last = len - POOL_WINDOW;
        let mut starts: Vec<usize> = (0..=last).step_by(POOL_STRIDE).collect();
        if starts.last() != Some(&last) {
            starts.push(last);
        }
        starts
    }

    /// Pools one map.
    pub fn forward(&self, map: &Matrix) -> Matrix {
        let row_starts = Self::window_starts(map.rows);
        let col_starts = Self::window_starts(map.cols);

        let data = row_starts.iter()
            .map(|&r| {
                col_starts.iter()
                    .map(|&c| map.window_max(r, c, POOL_WINDOW, POOL_WINDOW))
                    .collect()
            })
            .collect();

        Matrix::from_data(data)
    }

    /// Pools every map, keeping their order.
    pub fn forward_all(&self, maps: &[Matrix]) -> Vec<Matrix> {
        maps.iter().map(|m| self.forward(m)).collect()
    }
}
