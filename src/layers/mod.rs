pub mod filter;
pub mod conv;
pub mod pool;
pub mod flatten;

pub use filter::Filter;
pub use conv::ConvLayer;
pub use pool::MaxPool;
pub use flatten::flatten;
