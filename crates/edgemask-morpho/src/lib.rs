#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Structuring element shapes.
pub mod shape;

/// Repeated min/max filtering.
pub mod xxpand;

pub use shape::XxpandMode;
pub use xxpand::{expand, inpand, minmax_gradient, xxpand};
