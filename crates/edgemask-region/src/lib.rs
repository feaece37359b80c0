#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Conversion of mask sources into masks.
pub mod normalize;

/// Frame range replacement.
pub mod ranges;

/// Region masks and plane maxima.
pub mod region;

/// Rectangular masks.
pub mod square;

pub use normalize::{normalize_mask, GenericMask, MaskFn};
pub use ranges::{insert_clip, normalize_ranges, replace_ranges};
pub use region::{max_planes, region_abs_mask, region_rel_mask};
pub use square::{freeze_replace_squaremask, replace_squaremask, squaremask, SquareMask};
