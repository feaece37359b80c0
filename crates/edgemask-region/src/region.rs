use log::debug;

use edgemask_core::engine::{Borders, FrameEngine, Resize, ResizeKernel};
use edgemask_core::expr::number;
use edgemask_core::util::{max_all, require_format, split};
use edgemask_core::{MaskError, VideoInfo};

/// Expression choosing between the two operands of `replace`: the first one
/// outside the window `[left, right] x [top, bottom]`, the second one inside.
pub(crate) fn region_expr(
    left: usize,
    right: usize,
    top: usize,
    bottom: usize,
    replace: &str,
) -> String {
    format!("X {left} < X {right} > or Y {top} < Y {bottom} > or or {replace} ?")
}

fn constant_size<E: FrameEngine>(
    engine: &E,
    clip: &E::Clip,
    func: &'static str,
) -> Result<VideoInfo, MaskError> {
    let info = engine.info(clip);
    if !info.has_constant_size() {
        return Err(MaskError::VariableResolution(func));
    }
    Ok(info)
}

/// Per-pixel maximum over every plane of every clip.
///
/// Each clip is first resized to the dimensions of the first clip, in its
/// format without chroma subsampling.
///
/// # Arguments
///
/// * `engine` - The host engine.
/// * `clips` - The clips, the first one is the model.
/// * `kernel` - The resampling kernel.
///
/// # Returns
///
/// A single plane clip.
pub fn max_planes<E: FrameEngine>(
    engine: &E,
    clips: &[E::Clip],
    kernel: ResizeKernel,
) -> Result<E::Clip, MaskError> {
    let model = clips.first().ok_or(MaskError::EmptyInput("max_planes"))?;
    let format = require_format(engine, model, "max_planes")?.without_subsampling();
    let info = engine.info(model);

    let mut planes = Vec::new();
    for clip in clips {
        let params = Resize {
            format: Some(format),
            ..Resize::new(kernel, info.width, info.height)
        };
        let resized = engine.resize(clip, &params)?;
        planes.extend(split(engine, &resized)?);
    }

    debug!("max_planes: {} planes from {} clips", planes.len(), clips.len());
    max_all(engine, &planes)
}

/// Zero everything but a window given by its distance to each edge.
///
/// With pixel coordinate support this is a single expression, otherwise the
/// clip is cropped and padded back with black borders.
pub fn region_rel_mask<E: FrameEngine>(
    engine: &E,
    clip: &E::Clip,
    left: usize,
    right: usize,
    top: usize,
    bottom: usize,
) -> Result<E::Clip, MaskError> {
    let borders = Borders {
        left,
        right,
        top,
        bottom,
    };

    if engine.supports_pixel_coordinates() {
        let info = constant_size(engine, clip, "region_rel_mask")?;
        check_not_empty(
            info.width.saturating_sub(left + right),
            info.height.saturating_sub(top + bottom),
        )?;
        let expr = region_expr(
            left,
            info.width.saturating_sub(right + 1),
            top,
            info.height.saturating_sub(bottom + 1),
            "0 x",
        );
        return Ok(engine.expr(&[clip.clone()], &expr, None)?);
    }

    let cropped = engine.crop(clip, borders)?;
    Ok(engine.add_borders(&cropped, borders)?)
}

/// Zero everything but a window given by its size and top-left corner.
///
/// # Errors
///
/// Fails with [`MaskError::MaskExceedsClip`] when the window does not fit,
/// with [`MaskError::EmptyWindow`] when it has no width or height and
/// with [`MaskError::VariableResolution`] when the clip has no constant size
/// and the engine has no pixel coordinates.
pub fn region_abs_mask<E: FrameEngine>(
    engine: &E,
    clip: &E::Clip,
    width: usize,
    height: usize,
    left: usize,
    top: usize,
) -> Result<E::Clip, MaskError> {
    let info = engine.info(clip);

    if !info.has_constant_size() {
        if !engine.supports_pixel_coordinates() {
            return Err(MaskError::VariableResolution("region_abs_mask"));
        }
        check_not_empty(width, height)?;
        let expr = region_expr(
            left,
            (left + width).saturating_sub(1),
            top,
            (top + height).saturating_sub(1),
            "0 x",
        );
        return Ok(engine.expr(&[clip.clone()], &expr, None)?);
    }

    check_window(&info, width, height, left, top)?;
    region_rel_mask(
        engine,
        clip,
        left,
        info.width - width - left,
        top,
        info.height - height - top,
    )
}

pub(crate) fn check_window(
    info: &VideoInfo,
    width: usize,
    height: usize,
    offset_x: usize,
    offset_y: usize,
) -> Result<(), MaskError> {
    check_not_empty(width, height)?;
    if offset_x + width > info.width || offset_y + height > info.height {
        return Err(MaskError::MaskExceedsClip {
            width,
            height,
            offset_x,
            offset_y,
            clip_width: info.width,
            clip_height: info.height,
        });
    }
    Ok(())
}

fn check_not_empty(width: usize, height: usize) -> Result<(), MaskError> {
    if width == 0 || height == 0 {
        return Err(MaskError::EmptyWindow { width, height });
    }
    Ok(())
}

/// Expression of the square mask, `peak` inside the window unless inverted.
pub(crate) fn square_expr(
    width: usize,
    height: usize,
    offset_x: usize,
    offset_y: usize,
    peak: f64,
    invert: bool,
) -> String {
    let replace = if invert {
        format!("{} x", number(peak))
    } else {
        format!("x {}", number(peak))
    };
    region_expr(
        offset_x,
        (offset_x + width).saturating_sub(1),
        offset_y,
        (offset_y + height).saturating_sub(1),
        &replace,
    )
}
