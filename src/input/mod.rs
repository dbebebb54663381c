pub mod pixel_grid;

pub use pixel_grid::{PixelGrid, GRID_SIZE};
