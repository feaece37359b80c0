use log::debug;

use edgemask_core::engine::{FrameEngine, MorphOp, Morpho};
use edgemask_core::MaskError;

use crate::shape::{passes, XxpandMode};

/// Grow or shrink a clip with repeated 3x3 min/max passes.
///
/// # Arguments
///
/// * `engine` - The host engine.
/// * `clip` - The input clip.
/// * `op` - [`MorphOp::Maximum`] to expand, [`MorphOp::Minimum`] to inpand.
/// * `sw` - The horizontal radius.
/// * `sh` - The vertical radius, `None` uses `sw`. `Some(0)` is kept as is and
///   only grows horizontally.
/// * `mode` - The shape approximated by the passes.
/// * `threshold` - Maximum change per pass, `None` for unlimited.
///
/// # Returns
///
/// The transformed clip, or the input clip when both radii are 0.
pub fn xxpand<E: FrameEngine>(
    engine: &E,
    clip: &E::Clip,
    op: MorphOp,
    sw: usize,
    sh: Option<usize>,
    mode: XxpandMode,
    threshold: Option<f64>,
) -> Result<E::Clip, MaskError> {
    let sh = sh.unwrap_or(sw);
    let passes = passes(mode, sw, sh);

    debug!("xxpand: {op:?} {sw}x{sh} {mode:?} in {} passes", passes.len());

    let mut clip = clip.clone();
    for coordinates in passes {
        let params = Morpho {
            threshold,
            coordinates,
        };
        clip = engine.morpho(&clip, op, &params)?;
    }
    Ok(clip)
}

/// Grow bright areas, see [`xxpand`].
pub fn expand<E: FrameEngine>(
    engine: &E,
    clip: &E::Clip,
    sw: usize,
    sh: Option<usize>,
    mode: XxpandMode,
) -> Result<E::Clip, MaskError> {
    xxpand(engine, clip, MorphOp::Maximum, sw, sh, mode, None)
}

/// Shrink bright areas, see [`xxpand`].
pub fn inpand<E: FrameEngine>(
    engine: &E,
    clip: &E::Clip,
    sw: usize,
    sh: Option<usize>,
    mode: XxpandMode,
) -> Result<E::Clip, MaskError> {
    xxpand(engine, clip, MorphOp::Minimum, sw, sh, mode, None)
}

/// Difference between the elliptic expansion and inpansion of a clip.
pub fn minmax_gradient<E: FrameEngine>(
    engine: &E,
    clip: &E::Clip,
    radius: usize,
) -> Result<E::Clip, MaskError> {
    let max = expand(engine, clip, radius, None, XxpandMode::Ellipse)?;
    let min = inpand(engine, clip, radius, None, XxpandMode::Ellipse)?;
    Ok(engine.expr(&[max, min], "x y -", None)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{HORIZONTAL, PLUS, SQUARE};
    use edgemask_core::recording::{Op, RecordingEngine};
    use edgemask_core::VideoFormat;

    #[test]
    fn test_expand_records_passes() -> Result<(), MaskError> {
        let engine = RecordingEngine::default();
        let clip = engine.source(VideoFormat::gray(8), 32, 32, 1);
        let out = expand(&engine, &clip, 2, Some(1), XxpandMode::Rectangle)?;

        let calls = engine.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[0].op,
            Op::Morpho(
                MorphOp::Maximum,
                Morpho {
                    threshold: None,
                    coordinates: SQUARE
                }
            )
        );
        assert_eq!(
            calls[1].op,
            Op::Morpho(
                MorphOp::Maximum,
                Morpho {
                    threshold: None,
                    coordinates: HORIZONTAL
                }
            )
        );
        assert_eq!(calls[1].inputs, vec![calls[0].output]);
        assert_eq!(out.id, calls[1].output);
        Ok(())
    }

    #[test]
    fn test_explicit_zero_height_is_horizontal() -> Result<(), MaskError> {
        let engine = RecordingEngine::default();
        let clip = engine.source(VideoFormat::gray(8), 32, 32, 1);

        expand(&engine, &clip, 2, Some(0), XxpandMode::Rectangle)?;
        let shapes: Vec<_> = engine
            .calls()
            .into_iter()
            .filter_map(|call| match call.op {
                Op::Morpho(_, morpho) => Some(morpho.coordinates),
                _ => None,
            })
            .collect();
        assert_eq!(shapes, vec![HORIZONTAL, HORIZONTAL]);

        engine.clear();
        expand(&engine, &clip, 2, None, XxpandMode::Rectangle)?;
        assert_eq!(engine.count("std.Maximum"), 2);
        assert!(engine.calls().iter().all(|call| matches!(
            call.op,
            Op::Morpho(_, Morpho { coordinates, .. }) if coordinates == SQUARE
        )));
        Ok(())
    }

    #[test]
    fn test_zero_radius_is_identity() -> Result<(), MaskError> {
        let engine = RecordingEngine::default();
        let clip = engine.source(VideoFormat::gray(8), 32, 32, 1);
        let out = inpand(&engine, &clip, 0, None, XxpandMode::Ellipse)?;
        assert_eq!(out, clip);
        assert!(engine.calls().is_empty());
        Ok(())
    }

    #[test]
    fn test_threshold_forwarded() -> Result<(), MaskError> {
        let engine = RecordingEngine::default();
        let clip = engine.source(VideoFormat::gray(8), 32, 32, 1);
        xxpand(
            &engine,
            &clip,
            MorphOp::Minimum,
            1,
            None,
            XxpandMode::Losange,
            Some(12.0),
        )?;
        assert_eq!(
            engine.calls()[0].op,
            Op::Morpho(
                MorphOp::Minimum,
                Morpho {
                    threshold: Some(12.0),
                    coordinates: PLUS
                }
            )
        );
        Ok(())
    }

    #[test]
    fn test_minmax_gradient() -> Result<(), MaskError> {
        let engine = RecordingEngine::default();
        let clip = engine.source(VideoFormat::gray(8), 32, 32, 1);
        minmax_gradient(&engine, &clip, 2)?;
        assert_eq!(engine.count("std.Maximum"), 2);
        assert_eq!(engine.count("std.Minimum"), 2);
        let last = engine.calls().pop().unwrap();
        assert!(matches!(last.op, Op::Expr { ref expr, .. } if expr == "x y -"));
        Ok(())
    }
}
