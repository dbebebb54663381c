use crate::math::matrix::Matrix;

/// Concatenates the maps in order, each one row-major.
pub fn flatten(maps: &[Matrix]) -> Vec<f64> {
    maps.iter().flat_map(|m| m.flatten()).collect()
}
