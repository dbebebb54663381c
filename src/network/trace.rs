use serde::Serialize;

use crate::input::pixel_grid::PixelGrid;
use crate::layers::filter::Filter;
use crate::math::matrix::Matrix;
use crate::network::scoring::{Confidence, Label};

/// Everything one forward pass produced, stage by stage.
#[derive(Debug, Clone, Serialize)]
pub struct ForwardTrace {
    pub input: PixelGrid,
    pub filters: Vec<Filter>,
    /// Convolution output, one 7x7 map per filter.
    pub feature_maps: Vec<Matrix>,
    /// `feature_maps` after activation.
    pub activated_maps: Vec<Matrix>,
    /// One 4x4 map per filter.
    pub pooled_maps: Vec<Matrix>,
    pub flat: Vec<f64>,
    pub confidence: Confidence,
    pub prediction: Label,
}
