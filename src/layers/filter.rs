use serde::{Serialize, Deserialize};

use crate::error::{CnnError, Result};

/// Side length of every filter.
pub const FILTER_SIZE: usize = 3;

/// A named 3x3 kernel of -1/+1 coefficients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub name: String,
    pub weights: [[i8; FILTER_SIZE]; FILTER_SIZE],
}

impl Filter {
    pub fn new(name: impl Into<String>, weights: [[i8; FILTER_SIZE]; FILTER_SIZE]) -> Filter {
        Filter { name: name.into(), weights }
    }

    /// Top-left to bottom-right diagonal.
    pub fn diagonal_1() -> Filter {
        Filter::new("Diagonal top-left to bottom-right", [
            [ 1, -1, -1],
            [-1,  1, -1],
            [-1, -1,  1],
        ])
    }

    /// Top-right to bottom-left diagonal.
    pub fn diagonal_2() -> Filter {
        Filter::new("Diagonal top-right to bottom-left", [
            [-1, -1,  1],
            [-1,  1, -1],
            [ 1, -1, -1],
        ])
    }

    /// Checkerboard centerpiece.
    pub fn center() -> Filter {
        Filter::new("Centerpiece", [
            [ 1, -1,  1],
            [-1,  1, -1],
            [ 1, -1,  1],
        ])
    }

    /// The three filters in the order the network applies them.
    pub fn defaults() -> Vec<Filter> {
        vec![Filter::diagonal_1(), Filter::diagonal_2(), Filter::center()]
    }

    /// Number of cells; the convolution divides by this.
    pub fn cell_count(&self) -> usize {
        FILTER_SIZE * FILTER_SIZE
    }

    pub fn coefficient_sum(&self) -> i32 {
        self.weights.iter().flatten().map(|&w| w as i32).sum()
    }

    /// Every coefficient must be -1 or +1.
    pub fn validate(&self) -> Result<()> {
        match self.weights.iter().flatten().find(|&&w| w != 1 && w != -1) {
            Some(&w) => Err(CnnError::InvalidFilter {
                name: self.name.clone(),
                reason: format!("coefficient {w} is not -1 or +1"),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_coefficient_sums() {
        assert_eq!(Filter::diagonal_1().coefficient_sum(), -3);
        assert_eq!(Filter::diagonal_2().coefficient_sum(), -3);
        assert_eq!(Filter::center().coefficient_sum(), 1);
    }

    #[test]
    fn defaults_are_valid_and_ordered() {
        let filters = Filter::defaults();
        assert_eq!(filters.len(), 3);
        assert_eq!(filters[0], Filter::diagonal_1());
        assert_eq!(filters[2], Filter::center());
        assert!(filters.iter().all(|f| f.validate().is_ok()));
    }

    #[test]
    fn zero_coefficient_is_rejected() {
        let mut f = Filter::center();
        f.weights[1][1] = 0;
        assert!(matches!(f.validate(), Err(CnnError::InvalidFilter { .. })));
    }
}
