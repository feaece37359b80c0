#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Edge and ridge masks are assembled as calls on a host [`core::FrameEngine`];
//! the crate never touches pixels itself.
//!
//! ```
//! use edgemask::core::recording::RecordingEngine;
//! use edgemask::core::VideoFormat;
//! use edgemask::edge::{EdgeDetect, EdgeOperator, MaskParams};
//!
//! let engine = RecordingEngine::default();
//! let clip = engine.source(VideoFormat::yuv(10, 1, 1), 1920, 1080, 24);
//!
//! let sobel = EdgeOperator::from_name("Sobel").unwrap();
//! let mask = sobel.edge_mask(&engine, &clip, &MaskParams::default()).unwrap();
//!
//! assert_eq!(mask.info, clip.info);
//! assert_eq!(engine.count("std.Convolution"), 2);
//! ```

#[doc(inline)]
pub use edgemask_core as core;

#[doc(inline)]
pub use edgemask_edge as edge;

#[doc(inline)]
pub use edgemask_morpho as morpho;

#[doc(inline)]
pub use edgemask_region as region;
