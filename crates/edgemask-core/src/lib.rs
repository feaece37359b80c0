#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types shared by every edgemask crate.
pub mod error;

/// Clip metadata: sample formats and video info.
pub mod format;

/// The host frame engine abstraction.
pub mod engine;

/// Helpers to assemble postfix expressions for the host evaluator.
pub mod expr;

/// Plane and depth helpers built on top of the engine.
pub mod util;

/// A symbolic engine that records the filter graph.
pub mod recording;

pub use crate::engine::FrameEngine;
pub use crate::error::{EngineError, MaskError};
pub use crate::format::{
    ColorFamily, ColorRange, SampleType, VideoFormat, VideoInfo, MAX_INTEGER_BITS,
};
