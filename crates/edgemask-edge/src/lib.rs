#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Lookup of operators by name and batch mask generation.
pub mod catalog;

/// JSON configuration of a mask request.
pub mod config;

/// The edge detection trait and the mask pipeline.
pub mod detect;

/// Convolution matrices.
pub mod kernel;

/// Merging of per-matrix convolution results.
pub mod merge;

/// The data driven operator type.
pub mod operator;

/// The operator catalog.
pub mod operators;

/// Multiplier and threshold post-processing.
pub mod threshold;

pub use crate::catalog::{
    all_edge_operators, all_ridge_operators, get_all_edge_detects, get_all_ridge_detect,
};
pub use crate::config::EdgeMaskConfig;
pub use crate::detect::{EdgeDetect, Feature, MaskParams};
pub use crate::kernel::MatrixKernel;
pub use crate::merge::MergeStrategy;
pub use crate::operator::{Computation, EdgeOperator, Family, SamplePipeline};
