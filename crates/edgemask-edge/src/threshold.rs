use log::debug;

use edgemask_core::engine::FrameEngine;
use edgemask_core::expr::number;
use edgemask_core::{MaskError, VideoFormat, MAX_INTEGER_BITS};

/// Lookup table multiplying every value, rounded and clamped to `[0, peak]`.
///
/// # Arguments
///
/// * `bits` - The bits per sample of the integer clip.
/// * `multi` - The multiplier.
///
/// # Returns
///
/// A table of `2^bits` entries, or [`MaskError::UnsupportedDepth`] past 16 bits.
pub fn multiplier_lut(bits: u8, multi: f64) -> Result<Vec<u32>, MaskError> {
    let len = lut_len(bits)?;
    let peak = (len - 1) as f64;
    Ok((0..len)
        .map(|x| (x as f64 * multi).clamp(0.0, peak).round_ties_even() as u32)
        .collect())
}

/// Lookup table binarising values outside `(lthr, hthr]`.
///
/// Values above `hthr` become the peak, values at or below `lthr` become 0 and
/// everything in between is kept.
pub fn threshold_lut(bits: u8, lthr: f64, hthr: f64) -> Result<Vec<u32>, MaskError> {
    let len = lut_len(bits)?;
    let peak = (len - 1) as u32;
    Ok((0..len as u32)
        .map(|x| {
            let v = x as f64;
            if v > hthr {
                peak
            } else if v <= lthr {
                0
            } else {
                x
            }
        })
        .collect())
}

fn lut_len(bits: u8) -> Result<usize, MaskError> {
    if (1..=MAX_INTEGER_BITS).contains(&bits) {
        Ok(1 << bits)
    } else {
        Err(MaskError::UnsupportedDepth(bits))
    }
}

/// Expression multiplying every value by `multi`.
pub fn multiplier_expr(multi: f64) -> String {
    format!("x {} *", number(multi))
}

/// Expression equivalent of [`threshold_lut`].
pub fn threshold_expr(lthr: f64, hthr: f64, peak: f64) -> String {
    format!(
        "x {} > {} x {} <= 0 x ? ?",
        number(hthr),
        number(peak),
        number(lthr)
    )
}

/// Expression clamping values to `[0, peak]`.
pub fn clamp_expr(peak: f64) -> String {
    format!("x 0 max {} min", number(peak))
}

/// Multiply a mask, through an expression for float clips and a lookup table
/// otherwise.
pub fn apply_multiplier<E: FrameEngine>(
    engine: &E,
    mask: &E::Clip,
    format: &VideoFormat,
    multi: f64,
) -> Result<E::Clip, MaskError> {
    debug!("multiplier: x{multi} on {format}");
    let out = if format.is_float() {
        engine.expr(&[mask.clone()], &multiplier_expr(multi), None)?
    } else {
        engine.lut(mask, &multiplier_lut(format.bits_per_sample, multi)?)?
    };
    Ok(out)
}

/// Binarise a mask outside `(lthr, hthr]`, see [`threshold_lut`].
pub fn apply_thresholds<E: FrameEngine>(
    engine: &E,
    mask: &E::Clip,
    format: &VideoFormat,
    lthr: f64,
    hthr: f64,
) -> Result<E::Clip, MaskError> {
    debug!("thresholds: ({lthr}, {hthr}] on {format}");
    let out = if format.is_float() {
        let expr = threshold_expr(lthr, hthr, format.peak_value());
        engine.expr(&[mask.clone()], &expr, None)?
    } else {
        engine.lut(mask, &threshold_lut(format.bits_per_sample, lthr, hthr)?)?
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_lut() -> Result<(), MaskError> {
        let lut = multiplier_lut(8, 2.0)?;
        assert_eq!(lut.len(), 256);
        assert_eq!(lut[0], 0);
        assert_eq!(lut[10], 20);
        assert_eq!(lut[127], 254);
        assert_eq!(lut[128], 255);
        assert_eq!(lut[255], 255);
        Ok(())
    }

    #[test]
    fn test_multiplier_lut_rounds_half_to_even() -> Result<(), MaskError> {
        let lut = multiplier_lut(8, 0.5)?;
        assert_eq!(lut[1], 0);
        assert_eq!(lut[3], 2);
        assert_eq!(lut[5], 2);
        assert_eq!(lut[7], 4);
        Ok(())
    }

    #[test]
    fn test_threshold_lut() -> Result<(), MaskError> {
        let lut = threshold_lut(8, 10.0, 200.0)?;
        assert_eq!(lut[0], 0);
        assert_eq!(lut[10], 0);
        assert_eq!(lut[11], 11);
        assert_eq!(lut[200], 200);
        assert_eq!(lut[201], 255);

        let lut = threshold_lut(10, 0.0, 1023.0)?;
        assert_eq!(lut.len(), 1024);
        assert_eq!(lut[1023], 1023);
        assert_eq!(lut[0], 0);
        Ok(())
    }

    #[test]
    fn test_lut_depth_limits() {
        assert_eq!(multiplier_lut(16, 1.0).map(|lut| lut.len()).ok(), Some(65536));
        assert!(matches!(
            multiplier_lut(64, 2.0),
            Err(MaskError::UnsupportedDepth(64))
        ));
        assert!(matches!(
            threshold_lut(0, 0.0, 1.0),
            Err(MaskError::UnsupportedDepth(0))
        ));
    }

    #[test]
    fn test_expressions() {
        assert_eq!(multiplier_expr(1.5), "x 1.5 *");
        assert_eq!(threshold_expr(0.1, 0.9, 1.0), "x 0.9 > 1 x 0.1 <= 0 x ? ?");
        assert_eq!(clamp_expr(1.0), "x 0 max 1 min");
    }
}
