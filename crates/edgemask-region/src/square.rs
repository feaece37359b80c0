use std::ops::RangeInclusive;

use log::debug;
use serde::{Deserialize, Serialize};

use edgemask_core::engine::{BlankClip, Blur, Borders, FrameEngine};
use edgemask_core::util::require_format;
use edgemask_core::MaskError;

use crate::ranges::{insert_clip, replace_ranges};
use crate::region::{check_window, square_expr};

/// Position and size of a rectangular mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareMask {
    /// Width of the rectangle.
    pub width: usize,
    /// Height of the rectangle.
    pub height: usize,
    /// Left edge of the rectangle.
    pub offset_x: usize,
    /// Top edge of the rectangle.
    pub offset_y: usize,
}

/// Build a rectangular mask matching `clip`.
///
/// The mask is a single plane clip at the bit depth of `clip`, at its peak
/// value inside the rectangle and 0 outside, or the opposite when `invert` is
/// set. It has as many frames as `clip`.
///
/// # Errors
///
/// Fails with [`MaskError::MaskExceedsClip`] when the rectangle does not fit
/// and with [`MaskError::EmptyWindow`] when it has no width or height.
pub fn squaremask<E: FrameEngine>(
    engine: &E,
    clip: &E::Clip,
    square: SquareMask,
    invert: bool,
) -> Result<E::Clip, MaskError> {
    let format = require_format(engine, clip, "squaremask")?;
    let info = engine.info(clip);
    if !info.has_constant_size() {
        return Err(MaskError::VariableResolution("squaremask"));
    }

    let SquareMask {
        width,
        height,
        offset_x,
        offset_y,
    } = square;
    check_window(&info, width, height, offset_x, offset_y)?;

    let mask_format = format.as_gray();
    let peak = format.peak_value();

    let mask = if engine.supports_pixel_coordinates() {
        let base = engine.blank_clip(&BlankClip {
            width: info.width,
            height: info.height,
            format: mask_format,
            length: 1,
            color: 0.0,
            keep: true,
        })?;
        let expr = square_expr(width, height, offset_x, offset_y, peak, invert);
        engine.expr(&[base], &expr, None)?
    } else {
        let base = engine.blank_clip(&BlankClip {
            width,
            height,
            format: mask_format,
            length: 1,
            color: peak,
            keep: true,
        })?;
        let borders = Borders {
            left: offset_x,
            right: info.width - width - offset_x,
            top: offset_y,
            bottom: info.height - height - offset_y,
        };
        let padded = engine.add_borders(&base, borders)?;
        if invert {
            engine.invert(&padded)?
        } else {
            padded
        }
    };

    debug!("squaremask: {square:?} on {}x{}, invert={invert}", info.width, info.height);

    if info.num_frames == 1 {
        return Ok(mask);
    }
    Ok(engine.loop_clip(&mask, info.num_frames)?)
}

/// Merge a rectangle of `b` over `a`.
///
/// # Arguments
///
/// * `engine` - The host engine.
/// * `a` - The base clip.
/// * `b` - The clip the rectangle is taken from.
/// * `square` - The rectangle.
/// * `ranges` - Frames the merge applies to, empty for every frame.
/// * `blur` - Softening of the mask edges.
/// * `invert` - Take everything but the rectangle from `b`.
pub fn replace_squaremask<E: FrameEngine>(
    engine: &E,
    a: &E::Clip,
    b: &E::Clip,
    square: SquareMask,
    ranges: &[RangeInclusive<usize>],
    blur: Option<Blur>,
    invert: bool,
) -> Result<E::Clip, MaskError> {
    require_format(engine, a, "replace_squaremask")?;
    require_format(engine, b, "replace_squaremask")?;

    let first = engine.trim(b, 0, 0)?;
    let mut mask = squaremask(engine, &first, square, invert)?;
    if let Some(blur) = blur {
        mask = engine.blur(&mask, blur)?;
    }

    let looped = engine.loop_clip(&mask, engine.info(a).num_frames)?;
    let merged = engine.masked_merge(a, b, &looped)?;

    replace_ranges(engine, a, &merged, ranges)
}

/// Freeze the rectangle of `insert` at `frame` over `clip` for every frame of
/// `frames`.
pub fn freeze_replace_squaremask<E: FrameEngine>(
    engine: &E,
    clip: &E::Clip,
    insert: &E::Clip,
    square: SquareMask,
    frame: usize,
    frames: RangeInclusive<usize>,
) -> Result<E::Clip, MaskError> {
    let (start, end) = frames.into_inner();
    if start > end {
        return Err(MaskError::InvalidFrameRange(
            start,
            end,
            engine.info(clip).num_frames,
        ));
    }

    let base = engine.trim(clip, frame, frame)?;
    let replacement = engine.trim(insert, frame, frame)?;
    let frozen = replace_squaremask(engine, &base, &replacement, square, &[], None, false)?;
    let held = engine.loop_clip(&frozen, end - start + 1)?;

    insert_clip(engine, clip, &held, start)
}
