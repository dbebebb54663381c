use crate::{
    input::pixel_grid::{PixelGrid, GRID_SIZE},
    layers::filter::{Filter, FILTER_SIZE},
    math::matrix::Matrix,
};

/// Side length of each feature map: valid convolution, stride 1, no padding.
pub const FEATURE_MAP_SIZE: usize = GRID_SIZE - FILTER_SIZE + 1;

/// Convolution stage. Holds its filters in application order and produces
/// one feature map per filter.
#[derive(Debug, Clone)]
pub struct ConvLayer {
    pub filters: Vec<Filter>,
}

impl ConvLayer {
    pub fn new(filters: Vec<Filter>) -> ConvLayer {
        ConvLayer { filters }
    }

    /// Slides every filter over `input` and returns the 7x7 maps in filter
    /// order. No bias; each entry is the window dot product divided by the
    /// filter's cell count.
    pub fn forward(&self, input: &PixelGrid) -> Vec<Matrix> {
        self.filters.iter().map(|filter| convolve(input, filter)).collect()
    }
}

/// Averaged dot product of `filter` against every 3x3 window of `input`.
/// Output `(i, j)` uses the window whose top-left corner is input `(i, j)`.
pub fn convolve(input: &PixelGrid, filter: &Filter) -> Matrix {
    let cells = filter.cell_count() as f64;
    let mut res = Matrix::zeros(FEATURE_MAP_SIZE, FEATURE_MAP_SIZE);

    for i in 0..FEATURE_MAP_SIZE {
        for j in 0..FEATURE_MAP_SIZE {
            let mut sum: i32 = 0;

            for k in 0..FILTER_SIZE {
                for l in 0..FILTER_SIZE {
                    sum += input.get(i + k, j + l) as i32 * filter.weights[k][l] as i32;
                }
            }

            res.data[i][j] = sum as f64 / cells;
        }
    }

    res
}
