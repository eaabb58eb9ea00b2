//! Segmentation and pricing engine

pub mod pricing;
pub mod segmentation;

pub use pricing::*;
pub use segmentation::*;
