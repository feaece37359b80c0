use serde::Serialize;

use edgemask_core::engine::FrameEngine;
use edgemask_core::expr::max_expr;
use edgemask_core::MaskError;

/// Rule combining the per-matrix convolution results into one mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MergeStrategy {
    /// Keep the single convolution result.
    Single,
    /// Euclidean norm of the first two results.
    EuclideanDistance,
    /// Per-pixel maximum of every result.
    Max,
    /// Frei-Chen edge subspace projection over nine results.
    FreiChen,
    /// Difference of the first two results.
    Difference,
}

/// Hessian ridge strength over `[xx, yy, xy]`.
pub const RIDGE_EXPR: &str = "x dup * z dup * 4 * + x y * 2 * - y dup * + sqrt x y + + 0.5 *";

const EUCLIDEAN_EXPR: &str = "x x * y y * + sqrt";

const FREI_CHEN_EDGE: &str = "x x * y y * + z z * + a a * +";

impl MergeStrategy {
    /// Number of results the strategy needs at least.
    pub fn min_inputs(&self) -> usize {
        match self {
            MergeStrategy::Single | MergeStrategy::Max => 1,
            MergeStrategy::EuclideanDistance | MergeStrategy::Difference => 2,
            MergeStrategy::FreiChen => 9,
        }
    }

    /// Host expression of the strategy for `n` inputs, `None` for [`MergeStrategy::Single`].
    pub fn expression(&self, n: usize) -> Option<String> {
        match self {
            MergeStrategy::Single => None,
            MergeStrategy::EuclideanDistance => Some(EUCLIDEAN_EXPR.to_string()),
            MergeStrategy::Max => max_expr(n),
            MergeStrategy::FreiChen => {
                let all = format!("b b * c c * + d d * + e e * + f f * + {FREI_CHEN_EDGE} +");
                Some(format!("{FREI_CHEN_EDGE} {all} / sqrt"))
            }
            MergeStrategy::Difference => Some("x y -".to_string()),
        }
    }

    /// Combine convolution results.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::InvalidKernel`] when fewer results than the strategy
    /// needs are given.
    pub fn merge<E: FrameEngine>(
        &self,
        engine: &E,
        clips: &[E::Clip],
    ) -> Result<E::Clip, MaskError> {
        if clips.len() < self.min_inputs() {
            return Err(MaskError::InvalidKernel(format!(
                "{self:?} merge needs {} results, got {}",
                self.min_inputs(),
                clips.len()
            )));
        }

        match self.expression(clips.len()) {
            None => Ok(clips[0].clone()),
            Some(expr) => Ok(engine.expr(clips, &expr, None)?),
        }
    }
}
