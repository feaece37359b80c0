use log::debug;
use serde::Serialize;

use edgemask_core::engine::{Borders, FrameEngine, PluginFilter, Resize, ResizeKernel};
use edgemask_core::util::{depth, join, require_format, split};
use edgemask_core::{ColorRange, MaskError, VideoInfo};
use edgemask_morpho::minmax_gradient;

use crate::detect::{EdgeDetect, Feature};
use crate::kernel::MatrixKernel;
use crate::merge::{MergeStrategy, RIDGE_EXPR};

/// Kernel size class of an operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Family {
    /// One dimensional kernels applied horizontally and vertically.
    OneDimensional,
    /// 2x2 kernels embedded in 3x3 matrices.
    Matrix2x2,
    /// 3x3 kernels.
    Matrix3x3,
    /// 5x5 kernels.
    Matrix5x5,
    /// Operators that are not a plain convolution.
    Misc,
}

/// Sample format the operator computes in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum SamplePipeline {
    /// Compute in the format of the input.
    #[default]
    Native,
    /// Convert to 32-bit float first and back to the input depth afterwards.
    Float32,
}

/// How an operator produces its mask.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Computation {
    /// One convolution per matrix followed by a merge.
    Matrix {
        /// The convolution matrices.
        kernel: MatrixKernel,
        /// The merge of the convolution results.
        merge: MergeStrategy,
    },
    /// A single dedicated host filter.
    Plugin(PluginFilter),
    /// Per plane difference of the elliptic min and max.
    MinMax {
        /// Radius on the first plane.
        luma_radius: usize,
        /// Radius on the other planes.
        chroma_radius: usize,
    },
}

/// A named edge or ridge detection operator.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeOperator {
    /// Name of the operator.
    pub name: &'static str,
    /// Kernel size class.
    pub family: Family,
    /// One line description.
    pub summary: &'static str,
    /// How the mask is produced.
    pub computation: Computation,
    /// Sample format the computation runs in.
    pub pipeline: SamplePipeline,
    /// Whether the operator can compute ridge masks.
    pub ridge: bool,
}

impl EdgeOperator {
    /// Matrix operator computing in the input format.
    pub const fn matrix(
        name: &'static str,
        family: Family,
        summary: &'static str,
        kernel: MatrixKernel,
        merge: MergeStrategy,
    ) -> Self {
        Self {
            name,
            family,
            summary,
            computation: Computation::Matrix { kernel, merge },
            pipeline: SamplePipeline::Native,
            ridge: false,
        }
    }

    /// Operator backed by a dedicated host filter.
    pub const fn plugin(
        name: &'static str,
        family: Family,
        summary: &'static str,
        filter: PluginFilter,
    ) -> Self {
        Self {
            name,
            family,
            summary,
            computation: Computation::Plugin(filter),
            pipeline: SamplePipeline::Native,
            ridge: false,
        }
    }

    /// Same operator with ridge detection enabled.
    pub const fn with_ridge(self) -> Self {
        Self {
            ridge: true,
            ..self
        }
    }

    /// Same operator computing in 32-bit float.
    pub const fn in_float32(self) -> Self {
        Self {
            pipeline: SamplePipeline::Float32,
            ..self
        }
    }

    /// Min/max operator with separate luma and chroma radii.
    pub const fn min_max(luma_radius: usize, chroma_radius: usize) -> Self {
        Self {
            name: "MinMax",
            family: Family::Misc,
            summary: "Min/max mask with separate luma/chroma radii.",
            computation: Computation::MinMax {
                luma_radius,
                chroma_radius,
            },
            pipeline: SamplePipeline::Native,
            ridge: false,
        }
    }

    /// The convolution matrices, if the operator is matrix based.
    pub fn kernel(&self) -> Option<&MatrixKernel> {
        match &self.computation {
            Computation::Matrix { kernel, .. } => Some(kernel),
            _ => None,
        }
    }

    /// The merge strategy, if the operator is matrix based.
    pub fn merge_strategy(&self) -> Option<MergeStrategy> {
        match &self.computation {
            Computation::Matrix { merge, .. } => Some(*merge),
            _ => None,
        }
    }

    fn convolve_all<E: FrameEngine>(
        &self,
        engine: &E,
        clip: &E::Clip,
        kernel: &MatrixKernel,
    ) -> Result<Vec<E::Clip>, MaskError> {
        (0..kernel.len())
            .map(|i| Ok(engine.convolution(clip, &kernel.convolution(i, false))?))
            .collect()
    }

    fn bleed_crop<E: FrameEngine>(
        &self,
        engine: &E,
        mask: &E::Clip,
        source: &VideoInfo,
    ) -> Result<E::Clip, MaskError> {
        let format = require_format(engine, mask, self.name)?;
        let right = match format.subsampling_w {
            0 => 2,
            ss => 2 * ss as usize,
        };

        debug!("{}: cropping {right} bleeding columns", self.name);

        let cropped = engine.crop(
            mask,
            Borders {
                right,
                ..Default::default()
            },
        )?;
        let params = Resize {
            src_width: Some(source.width as f64),
            ..Resize::new(ResizeKernel::Point, source.width, engine.info(mask).height)
        };
        Ok(engine.resize(&cropped, &params)?)
    }
}

impl EdgeDetect for EdgeOperator {
    fn name(&self) -> &str {
        self.name
    }

    fn supports_ridge(&self) -> bool {
        self.ridge
    }

    fn preprocess<E: FrameEngine>(
        &self,
        engine: &E,
        clip: &E::Clip,
        feature: Feature,
    ) -> Result<E::Clip, MaskError> {
        // second derivatives are signed, keep them in float
        if self.pipeline == SamplePipeline::Float32 || feature == Feature::Ridge {
            return depth(engine, clip, 32, None, None);
        }
        Ok(clip.clone())
    }

    fn compute_edge_mask<E: FrameEngine>(
        &self,
        engine: &E,
        clip: &E::Clip,
    ) -> Result<E::Clip, MaskError> {
        match &self.computation {
            Computation::Matrix { kernel, merge } => {
                kernel.validate()?;
                let results = self.convolve_all(engine, clip, kernel)?;
                merge.merge(engine, &results)
            }
            Computation::Plugin(filter) => {
                let filter = match filter {
                    PluginFilter::ASobel { thresh, .. } => PluginFilter::ASobel {
                        thresh: *thresh,
                        float: require_format(engine, clip, self.name)?.is_float(),
                    },
                    other => other.clone(),
                };
                Ok(engine.plugin(clip, &filter)?)
            }
            Computation::MinMax {
                luma_radius,
                chroma_radius,
            } => {
                let format = require_format(engine, clip, self.name)?;
                let planes = split(engine, clip)?
                    .iter()
                    .enumerate()
                    .map(|(i, plane)| {
                        let radius = if i == 0 { *luma_radius } else { *chroma_radius };
                        minmax_gradient(engine, plane, radius)
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                join(engine, &planes, format.color_family)
            }
        }
    }

    fn compute_ridge_mask<E: FrameEngine>(
        &self,
        engine: &E,
        clip: &E::Clip,
    ) -> Result<E::Clip, MaskError> {
        let kernel = match (&self.computation, self.ridge) {
            (Computation::Matrix { kernel, .. }, true) if kernel.len() >= 2 => kernel,
            _ => return Err(MaskError::RidgeUnsupported(self.name.to_string())),
        };
        kernel.validate()?;

        let along_x = |c: &E::Clip| engine.convolution(c, &kernel.convolution(0, true));
        let along_y = |c: &E::Clip| engine.convolution(c, &kernel.convolution(1, true));

        let gx = along_x(clip)?;
        let gy = along_y(clip)?;
        let xx = along_x(&gx)?;
        let yy = along_y(&gy)?;
        let xy = along_y(&gx)?;

        Ok(engine.expr(&[xx, yy, xy], RIDGE_EXPR, None)?)
    }

    fn postprocess<E: FrameEngine>(
        &self,
        engine: &E,
        mask: &E::Clip,
        source: &VideoInfo,
        feature: Feature,
    ) -> Result<E::Clip, MaskError> {
        let source_format = source
            .format
            .ok_or(MaskError::VariableFormat("postprocess"))?;

        let mask = if self.pipeline == SamplePipeline::Float32 || feature == Feature::Ridge {
            depth(
                engine,
                mask,
                source_format.bits_per_sample,
                Some(ColorRange::Full),
                Some(ColorRange::Full),
            )?
        } else {
            mask.clone()
        };

        if self.pipeline == SamplePipeline::Float32 {
            return Ok(mask);
        }

        // crop once back at the source depth
        match self.kernel() {
            Some(kernel) if kernel.bleeds() => self.bleed_crop(engine, &mask, source),
            _ => Ok(mask),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::MaskParams;
    use edgemask_core::engine::ConvMode;
    use edgemask_core::recording::{Op, RecordingEngine};
    use edgemask_core::VideoFormat;

    const LAPLACIAN: EdgeOperator = EdgeOperator::matrix(
        "Laplacian",
        Family::Matrix3x3,
        "test laplacian",
        MatrixKernel::new(&[&[0.0, -1.0, 0.0, -1.0, 4.0, -1.0, 0.0, -1.0, 0.0]]),
        MergeStrategy::Single,
    );

    #[test]
    fn test_single_matrix_graph() -> Result<(), MaskError> {
        let engine = RecordingEngine::default();
        let clip = engine.source(VideoFormat::gray(8), 64, 64, 1);
        let mask = LAPLACIAN.edge_mask(&engine, &clip, &MaskParams::default())?;

        let calls = engine.calls();
        assert_eq!(calls.len(), 1);
        match &calls[0].op {
            Op::Convolution(conv) => {
                assert_eq!(conv.matrix.len(), 9);
                assert!(!conv.saturate);
                assert_eq!(conv.mode, ConvMode::Square);
            }
            op => panic!("unexpected {op:?}"),
        }
        assert_eq!(mask.id, calls[0].output);
        Ok(())
    }

    #[test]
    fn test_ridge_unsupported() {
        let engine = RecordingEngine::default();
        let clip = engine.source(VideoFormat::gray(8), 64, 64, 1);
        let err = LAPLACIAN
            .ridge_mask(&engine, &clip, &MaskParams::default())
            .unwrap_err();
        assert!(matches!(err, MaskError::RidgeUnsupported(name) if name == "Laplacian"));
    }

    #[test]
    fn test_variable_format_rejected() {
        let engine = RecordingEngine::default();
        let clip = engine.source_with_info(VideoInfo {
            format: None,
            width: 64,
            height: 64,
            num_frames: 1,
        });
        let err = LAPLACIAN
            .edge_mask(&engine, &clip, &MaskParams::default())
            .unwrap_err();
        assert!(matches!(err, MaskError::VariableFormat(_)));
    }

    #[test]
    fn test_min_max_per_plane_radii() -> Result<(), MaskError> {
        let engine = RecordingEngine::default();
        let clip = engine.source(VideoFormat::yuv(8, 1, 1), 64, 64, 1);
        let op = EdgeOperator::min_max(2, 1);
        let mask = op.edge_mask(&engine, &clip, &MaskParams::default())?;

        // luma: two passes each way, chroma: one pass each way
        assert_eq!(engine.count("std.Maximum"), 2 + 1 + 1);
        assert_eq!(engine.count("std.Minimum"), 2 + 1 + 1);
        assert_eq!(engine.count("std.Expr"), 3);
        assert_eq!(engine.count("std.ShufflePlanes"), 1);
        assert_eq!(mask.info.format, clip.info.format);
        Ok(())
    }

    #[test]
    fn test_engine_error_propagates() {
        let engine = RecordingEngine::failing_on("std.Convolution");
        let clip = engine.source(VideoFormat::gray(8), 64, 64, 1);
        let err = LAPLACIAN
            .edge_mask(&engine, &clip, &MaskParams::default())
            .unwrap_err();
        assert!(matches!(err, MaskError::Engine(_)));
    }
}
