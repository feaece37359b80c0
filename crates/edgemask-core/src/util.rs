use log::debug;

use crate::engine::{FrameEngine, Resize, ResizeKernel};
use crate::error::MaskError;
use crate::expr::{max_expr, MAX_EXPR_INPUTS};
use crate::format::{ColorFamily, ColorRange, VideoFormat};

/// Return the constant format of a clip.
///
/// # Errors
///
/// Returns [`MaskError::VariableFormat`] when the clip has no constant format.
pub fn require_format<E: FrameEngine>(
    engine: &E,
    clip: &E::Clip,
    func: &'static str,
) -> Result<VideoFormat, MaskError> {
    engine
        .info(clip)
        .format
        .ok_or(MaskError::VariableFormat(func))
}

/// Convert a clip to another bit depth.
///
/// The conversion is delegated to the host resizer. A clip already at the
/// requested depth is returned untouched.
///
/// # Arguments
///
/// * `engine` - The host engine.
/// * `clip` - The input clip.
/// * `bits` - The target bits per sample, 32 selects float samples.
/// * `range_in` - The input range, `None` lets the host guess.
/// * `range` - The output range, `None` lets the host guess.
pub fn depth<E: FrameEngine>(
    engine: &E,
    clip: &E::Clip,
    bits: u8,
    range_in: Option<ColorRange>,
    range: Option<ColorRange>,
) -> Result<E::Clip, MaskError> {
    let info = engine.info(clip);
    let format = info.format.ok_or(MaskError::VariableFormat("depth"))?;
    let target = format.with_bits(bits);

    if target == format {
        return Ok(clip.clone());
    }

    debug!("depth: {} -> {}", format, target);

    let params = Resize {
        format: Some(target),
        range_in,
        range,
        ..Resize::new(ResizeKernel::Point, info.width, info.height)
    };
    Ok(engine.resize(clip, &params)?)
}

/// Split a clip into its planes.
///
/// A single plane clip is returned as is.
pub fn split<E: FrameEngine>(engine: &E, clip: &E::Clip) -> Result<Vec<E::Clip>, MaskError> {
    let format = require_format(engine, clip, "split")?;
    if format.num_planes() == 1 {
        return Ok(vec![clip.clone()]);
    }
    Ok(engine.split_planes(clip)?)
}

/// Join single plane clips into a clip of the given family.
///
/// A single plane joined as [`ColorFamily::Gray`] is returned as is, otherwise the
/// first three planes are shuffled together.
pub fn join<E: FrameEngine>(
    engine: &E,
    planes: &[E::Clip],
    family: ColorFamily,
) -> Result<E::Clip, MaskError> {
    match planes {
        [] => Err(MaskError::EmptyInput("join")),
        [plane] if family == ColorFamily::Gray => Ok(plane.clone()),
        _ => {
            let planes = &planes[..planes.len().min(3)];
            Ok(engine.shuffle_planes(planes, &[0, 0, 0], family)?)
        }
    }
}

/// Per-pixel maximum of any number of clips.
///
/// Clips are folded in expressions of at most [`MAX_EXPR_INPUTS`] inputs until
/// a single clip is left.
pub fn max_all<E: FrameEngine>(engine: &E, clips: &[E::Clip]) -> Result<E::Clip, MaskError> {
    let mut clips = clips.to_vec();
    while clips.len() > 1 {
        clips = clips
            .chunks(MAX_EXPR_INPUTS)
            .map(|chunk| match chunk {
                [single] => Ok(single.clone()),
                _ => {
                    let expr = max_expr(chunk.len()).ok_or(MaskError::EmptyInput("max_all"))?;
                    Ok(engine.expr(chunk, &expr, None)?)
                }
            })
            .collect::<Result<Vec<_>, MaskError>>()?;
    }
    clips.pop().ok_or(MaskError::EmptyInput("max_all"))
}
