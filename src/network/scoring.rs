use std::fmt;

use serde::{Serialize, Deserialize};

use crate::error::{CnnError, Result};

/// The two shapes the network tells apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    X,
    O,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::X => write!(f, "X"),
            Label::O => write!(f, "O"),
        }
    }
}

/// Positions in the flat layer that light up for a reference drawing of
/// `label`. Picked by hand from one perfect drawing of each shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreIndexSet {
    pub label: Label,
    pub indices: Vec<usize>,
}

impl ScoreIndexSet {
    pub fn new(label: Label, indices: Vec<usize>) -> ScoreIndexSet {
        ScoreIndexSet { label, indices }
    }

    /// The 13 nodes most weighted by a perfect 'X'.
    pub fn x() -> ScoreIndexSet {
        ScoreIndexSet::new(Label::X, vec![0, 5, 10, 11, 14, 15, 18, 19, 22, 24, 25, 28, 37])
    }

    /// The 9 nodes most weighted by a perfect 'O'.
    pub fn o() -> ScoreIndexSet {
        ScoreIndexSet::new(Label::O, vec![2, 3, 8, 12, 16, 26, 27, 30, 31])
    }

    /// Fails if the set is empty or any index falls outside `[0, len)`.
    pub fn validate(&self, len: usize) -> Result<()> {
        if self.indices.is_empty() {
            return Err(CnnError::EmptyIndexSet { set: self.label.to_string() });
        }
        match self.indices.iter().find(|&&i| i >= len) {
            Some(&index) => Err(CnnError::Index { set: self.label.to_string(), index, len }),
            None => Ok(()),
        }
    }

    /// `100 * mean(flat[indices])`.
    pub fn score(&self, flat: &[f64]) -> Result<f64> {
        self.validate(flat.len())?;
        let sum: f64 = self.indices.iter().map(|&i| flat[i]).sum();
        Ok(sum / self.indices.len() as f64 * 100.0)
    }
}

/// Fails on the first index shared by both sets.
pub fn check_disjoint(a: &ScoreIndexSet, b: &ScoreIndexSet) -> Result<()> {
    match a.indices.iter().find(|i| b.indices.contains(i)) {
        Some(&index) => Err(CnnError::OverlappingIndexSets { index }),
        None => Ok(()),
    }
}

/// Percentage confidence for each shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Confidence {
    pub x: f64,
    pub o: f64,
}

impl Confidence {
    /// 'X' only when it strictly beats 'O'; ties go to 'O'.
    pub fn prediction(&self) -> Label {
        if self.x > self.o { Label::X } else { Label::O }
    }
}
