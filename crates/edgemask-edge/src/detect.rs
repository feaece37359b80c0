use log::debug;
use serde::{Deserialize, Serialize};

use edgemask_core::engine::FrameEngine;
use edgemask_core::expr::number;
use edgemask_core::{MaskError, VideoInfo};

use crate::threshold::{apply_multiplier, apply_thresholds, clamp_expr};

/// Post-processing parameters of a mask.
///
/// Thresholds are expressed in the sample range of the input clip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskParams {
    /// Anything at or below this value is set to 0.
    pub lthr: f64,
    /// Anything above this value is set to the peak, `None` for the peak itself.
    pub hthr: Option<f64>,
    /// Multiplier applied before thresholding.
    pub multi: f64,
    /// Clamp float masks to `[0, 1]`.
    pub clamp: bool,
}

impl Default for MaskParams {
    fn default() -> Self {
        Self {
            lthr: 0.0,
            hthr: None,
            multi: 1.0,
            clamp: false,
        }
    }
}

/// Which mask an operator computes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    /// First order edges.
    Edge,
    /// Ridges from the Hessian.
    Ridge,
}

/// An edge detector driving the host engine.
///
/// Implementors provide [`EdgeDetect::compute_edge_mask`] and optionally
/// override the pre and post-processing hooks. The provided
/// [`EdgeDetect::edge_mask`] and [`EdgeDetect::ridge_mask`] run the full
/// pipeline: preprocess, compute, postprocess, multiply, threshold.
pub trait EdgeDetect {
    /// Name of the detector.
    fn name(&self) -> &str;

    /// Compute the raw edge mask.
    fn compute_edge_mask<E: FrameEngine>(
        &self,
        engine: &E,
        clip: &E::Clip,
    ) -> Result<E::Clip, MaskError>;

    /// Compute the raw ridge mask.
    fn compute_ridge_mask<E: FrameEngine>(
        &self,
        _engine: &E,
        _clip: &E::Clip,
    ) -> Result<E::Clip, MaskError> {
        Err(MaskError::RidgeUnsupported(self.name().to_string()))
    }

    /// Whether [`EdgeDetect::ridge_mask`] is available.
    fn supports_ridge(&self) -> bool {
        false
    }

    /// Transform the input clip before computing.
    fn preprocess<E: FrameEngine>(
        &self,
        _engine: &E,
        clip: &E::Clip,
        _feature: Feature,
    ) -> Result<E::Clip, MaskError> {
        Ok(clip.clone())
    }

    /// Transform the raw mask, `source` describes the clip given by the caller.
    fn postprocess<E: FrameEngine>(
        &self,
        _engine: &E,
        mask: &E::Clip,
        _source: &VideoInfo,
        _feature: Feature,
    ) -> Result<E::Clip, MaskError> {
        Ok(mask.clone())
    }

    /// Make an edge mask.
    ///
    /// # Arguments
    ///
    /// * `engine` - The host engine.
    /// * `clip` - The source clip, it must have a constant format.
    /// * `params` - Multiplier and thresholds.
    ///
    /// # Returns
    ///
    /// The mask, in the format of the source clip.
    fn edge_mask<E: FrameEngine>(
        &self,
        engine: &E,
        clip: &E::Clip,
        params: &MaskParams,
    ) -> Result<E::Clip, MaskError> {
        make_mask(self, engine, clip, params, Feature::Edge)
    }

    /// Make a ridge mask, see [`EdgeDetect::edge_mask`].
    fn ridge_mask<E: FrameEngine>(
        &self,
        engine: &E,
        clip: &E::Clip,
        params: &MaskParams,
    ) -> Result<E::Clip, MaskError> {
        if !self.supports_ridge() {
            return Err(MaskError::RidgeUnsupported(self.name().to_string()));
        }
        make_mask(self, engine, clip, params, Feature::Ridge)
    }
}

fn make_mask<D, E>(
    detector: &D,
    engine: &E,
    clip: &E::Clip,
    params: &MaskParams,
    feature: Feature,
) -> Result<E::Clip, MaskError>
where
    D: EdgeDetect + ?Sized,
    E: FrameEngine,
{
    let info = engine.info(clip);
    let format = info.format.ok_or(MaskError::VariableFormat("edge_mask"))?;
    format.validate()?;

    let peak = format.peak_value();
    let hthr = params.hthr.unwrap_or(peak);

    debug!(
        "{} {:?} mask on {} {}x{}",
        detector.name(),
        feature,
        format,
        info.width,
        info.height
    );

    let prepared = detector.preprocess(engine, clip, feature)?;
    let mask = match feature {
        Feature::Edge => detector.compute_edge_mask(engine, &prepared)?,
        Feature::Ridge => detector.compute_ridge_mask(engine, &prepared)?,
    };
    let mut mask = detector.postprocess(engine, &mask, &info, feature)?;

    if params.multi != 1.0 {
        mask = apply_multiplier(engine, &mask, &format, params.multi)?;
    }

    if params.lthr > 0.0 || hthr < peak {
        mask = apply_thresholds(engine, &mask, &format, params.lthr, hthr)?;
    }

    if params.clamp && format.is_float() {
        debug!("clamp to [0, {}]", number(peak));
        mask = engine.expr(&[mask], &clamp_expr(peak), None)?;
    }

    Ok(mask)
}
