use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::error::{CnnError, Result};
use crate::layers::filter::Filter;
use crate::layers::pool::MaxPool;
use crate::layers::conv::FEATURE_MAP_SIZE;
use crate::network::scoring::{check_disjoint, Label, ScoreIndexSet};

/// A fully serializable description of the fixed network: which filters to
/// convolve with, which activation to apply, and which flat-layer nodes
/// vote for each shape.
///
/// `NetworkSpec::default()` is the hardcoded configuration. Saving it to JSON
/// and editing the copy is the way to experiment with other filters or
/// index sets without touching code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name shown in reports.
    pub name: String,
    /// Filters in application order.
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub activation: ActivationFunction,
    /// Nodes voting for 'X'.
    pub x_indices: ScoreIndexSet,
    /// Nodes voting for 'O'.
    pub o_indices: ScoreIndexSet,
}

impl Default for NetworkSpec {
    fn default() -> Self {
        NetworkSpec {
            name: "xo-9x9".to_string(),
            filters: Filter::defaults(),
            activation: ActivationFunction::ReLU,
            x_indices: ScoreIndexSet::x(),
            o_indices: ScoreIndexSet::o(),
        }
    }
}

impl NetworkSpec {
    /// Length of the flat layer this spec produces (48 for three filters).
    pub fn flat_len(&self) -> usize {
        let side = MaxPool::window_starts(FEATURE_MAP_SIZE).len();
        self.filters.len() * side * side
    }

    /// Checks filters and index sets before a `Network` is built from them.
    pub fn validate(&self) -> Result<()> {
        if self.filters.is_empty() {
            return Err(CnnError::InvalidFilter {
                name: self.name.clone(),
                reason: "network has no filters".to_string(),
            });
        }
        for filter in &self.filters {
            filter.validate()?;
        }

        for (set, label) in [(&self.x_indices, Label::X), (&self.o_indices, Label::O)] {
            if set.label != label {
                return Err(CnnError::InvalidIndexSet {
                    set: label.to_string(),
                    reason: format!("labelled '{}'", set.label),
                });
            }
        }

        let len = self.flat_len();
        self.x_indices.validate(len)?;
        self.o_indices.validate(len)?;
        check_disjoint(&self.x_indices, &self.o_indices)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let spec: NetworkSpec = serde_json::from_reader(reader)?;
        spec.validate()?;
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_is_valid_with_48_nodes() {
        let spec = NetworkSpec::default();
        assert_eq!(spec.flat_len(), 48);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn index_past_flat_layer_is_rejected() {
        let mut spec = NetworkSpec::default();
        spec.o_indices.indices.push(48);
        assert!(matches!(spec.validate(), Err(CnnError::Index { index: 48, len: 48, .. })));
    }

    #[test]
    fn fewer_filters_shrink_the_valid_range() {
        let mut spec = NetworkSpec::default();
        spec.filters.truncate(2);
        // 37 is in the 'X' set but the flat layer is now 32 long.
        assert!(matches!(spec.validate(), Err(CnnError::Index { index: 37, len: 32, .. })));
    }

    #[test]
    fn swapped_labels_are_rejected() {
        let mut spec = NetworkSpec::default();
        std::mem::swap(&mut spec.x_indices, &mut spec.o_indices);
        assert!(matches!(spec.validate(), Err(CnnError::InvalidIndexSet { .. })));
    }

    #[test]
    fn json_round_trip_through_a_file() {
        let path = std::env::temp_dir().join(format!("ferrite-xo-spec-{}.json", std::process::id()));
        let path = path.to_str().unwrap();

        let spec = NetworkSpec::default();
        spec.save_json(path).unwrap();
        let loaded = NetworkSpec::load_json(path).unwrap();
        std::fs::remove_file(path).unwrap();

        assert_eq!(loaded, spec);
    }

    #[test]
    fn activation_defaults_to_relu_when_missing() {
        let mut value = serde_json::to_value(NetworkSpec::default()).unwrap();
        value.as_object_mut().unwrap().remove("activation");
        let spec: NetworkSpec = serde_json::from_value(value).unwrap();
        assert_eq!(spec.activation, ActivationFunction::ReLU);
    }
}
