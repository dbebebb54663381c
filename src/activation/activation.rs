use serde::{Serialize, Deserialize};

use crate::math::matrix::Matrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActivationFunction {
    /// Clips everything below zero: `max(0, x)`.
    #[default]
    ReLU,
    /// Leaves the feature maps untouched.
    Identity,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::Identity => x,
        }
    }

    /// Rewrites every entry of `map` in place.
    pub fn apply_in_place(&self, map: &mut Matrix) {
        map.map_in_place(|x| self.function(x));
    }

    /// Pure variant of [`ActivationFunction::apply_in_place`].
    pub fn apply(&self, map: &Matrix) -> Matrix {
        map.map(|x| self.function(x))
    }
}
