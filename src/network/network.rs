use crate::{
    activation::activation::ActivationFunction,
    error::Result,
    input::pixel_grid::PixelGrid,
    layers::{conv::ConvLayer, flatten::flatten, pool::MaxPool},
    network::{
        scoring::{Confidence, Label, ScoreIndexSet},
        spec::NetworkSpec,
        trace::ForwardTrace,
    },
};

/// The fixed X/O classifier: convolution, activation, pooling, flattening
/// and index-set scoring. Nothing is learned; all parameters come from the
/// `NetworkSpec` it was built with.
#[derive(Debug, Clone)]
pub struct Network {
    pub name: String,
    pub conv: ConvLayer,
    pub activator: ActivationFunction,
    pub pool: MaxPool,
    pub x_indices: ScoreIndexSet,
    pub o_indices: ScoreIndexSet,
}

impl Network {
    /// Validates `spec` and builds a network from it.
    pub fn new(spec: NetworkSpec) -> Result<Network> {
        spec.validate()?;
        Ok(Network::from_validated(spec))
    }

    fn from_validated(spec: NetworkSpec) -> Network {
        Network {
            name: spec.name,
            conv: ConvLayer::new(spec.filters),
            activator: spec.activation,
            pool: MaxPool,
            x_indices: spec.x_indices,
            o_indices: spec.o_indices,
        }
    }

    /// Forward pass; keeps every intermediate stage in the returned trace.
    pub fn forward(&self, input: &PixelGrid) -> Result<ForwardTrace> {
        let feature_maps = self.conv.forward(input);
        log::debug!("convolved {} feature maps", feature_maps.len());

        let mut activated_maps = feature_maps.clone();
        for map in &mut activated_maps {
            self.activator.apply_in_place(map);
        }
        log::debug!("applied {:?} activation", self.activator);

        let pooled_maps = self.pool.forward_all(&activated_maps);
        let flat = flatten(&pooled_maps);
        log::debug!("flattened {} pooled maps into {} nodes", pooled_maps.len(), flat.len());

        let confidence = self.score(&flat)?;
        let prediction = confidence.prediction();
        log::info!(
            "{}: X {:.2}%, O {:.2}% -> '{}'",
            self.name, confidence.x, confidence.o, prediction
        );

        Ok(ForwardTrace {
            input: input.clone(),
            filters: self.conv.filters.clone(),
            feature_maps,
            activated_maps,
            pooled_maps,
            flat,
            confidence,
            prediction,
        })
    }

    /// Scores an already flattened layer against both index sets.
    pub fn score(&self, flat: &[f64]) -> Result<Confidence> {
        Ok(Confidence {
            x: self.x_indices.score(flat)?,
            o: self.o_indices.score(flat)?,
        })
    }

    pub fn classify(&self, input: &PixelGrid) -> Result<Label> {
        Ok(self.forward(input)?.prediction)
    }
}

impl Default for Network {
    fn default() -> Self {
        Network::from_validated(NetworkSpec::default())
    }
}
