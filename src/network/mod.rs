pub mod network;
pub mod scoring;
pub mod spec;
pub mod trace;

pub use network::Network;
pub use scoring::{Confidence, Label, ScoreIndexSet};
pub use spec::NetworkSpec;
pub use trace::ForwardTrace;
