pub mod error;
pub mod math;
pub mod input;
pub mod activation;
pub mod layers;
pub mod network;
pub mod report;

// Convenience re-exports
pub use error::{CnnError, Result};
pub use math::matrix::Matrix;
pub use input::pixel_grid::PixelGrid;
pub use activation::activation::ActivationFunction;
pub use layers::{ConvLayer, Filter, MaxPool};
pub use network::{Confidence, ForwardTrace, Label, Network, NetworkSpec, ScoreIndexSet};
