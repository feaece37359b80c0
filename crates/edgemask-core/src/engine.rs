//! The host frame engine.
//!
//! Every pixel computation (convolution, expression evaluation, lookup tables,
//! min/max filters, resizing) happens inside the host runtime. This module only
//! describes the calls the mask operators need; host bindings implement
//! [`FrameEngine`] on top of their native filter graph.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::format::{ColorFamily, ColorRange, VideoFormat, VideoInfo};

/// Axis along which a convolution matrix is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConvMode {
    /// Square matrix (`s`).
    #[default]
    Square,
    /// One dimensional, horizontal (`h`).
    Horizontal,
    /// One dimensional, vertical (`v`).
    Vertical,
}

impl ConvMode {
    /// Short host name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConvMode::Square => "s",
            ConvMode::Horizontal => "h",
            ConvMode::Vertical => "v",
        }
    }
}

/// Arguments of a convolution call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Convolution {
    /// Row-major coefficients.
    pub matrix: Vec<f64>,
    /// Divisor, 0 lets the host normalise by the coefficient sum.
    pub divisor: f64,
    /// Whether negative results are clamped instead of made absolute.
    pub saturate: bool,
    /// Axis of the convolution.
    pub mode: ConvMode,
}

/// Min/max filter selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MorphOp {
    /// Local minimum (`std.Minimum`).
    Minimum,
    /// Local maximum (`std.Maximum`).
    Maximum,
}

/// Arguments of a min/max filter call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Morpho {
    /// Maximum change allowed per pixel, `None` for unlimited.
    pub threshold: Option<f64>,
    /// Neighbours taken into account, in host order:
    /// top-left, top, top-right, left, right, bottom-left, bottom, bottom-right.
    pub coordinates: [bool; 8],
}

/// Amount of pixels to remove or add on each side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Borders {
    /// Left side.
    pub left: usize,
    /// Right side.
    pub right: usize,
    /// Top side.
    pub top: usize,
    /// Bottom side.
    pub bottom: usize,
}

/// Resampling kernel used by the host resizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeKernel {
    /// Nearest neighbour.
    Point,
    /// Bilinear.
    #[default]
    Bilinear,
}

/// Arguments of a resize or format conversion call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Resize {
    /// Resampling kernel.
    pub kernel: ResizeKernel,
    /// Output width.
    pub width: usize,
    /// Output height.
    pub height: usize,
    /// Output format, `None` keeps the input format.
    pub format: Option<VideoFormat>,
    /// Width of the source window, `None` uses the input width.
    pub src_width: Option<f64>,
    /// Range of the input samples.
    pub range_in: Option<ColorRange>,
    /// Range of the output samples.
    pub range: Option<ColorRange>,
}

impl Resize {
    /// Resize to the given dimensions keeping the format.
    pub fn new(kernel: ResizeKernel, width: usize, height: usize) -> Self {
        Self {
            kernel,
            width,
            height,
            format: None,
            src_width: None,
            range_in: None,
            range: None,
        }
    }
}

/// Arguments of a blank clip call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlankClip {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Sample format.
    pub format: VideoFormat,
    /// Number of frames.
    pub length: usize,
    /// Value of every sample.
    pub color: f64,
    /// Whether the host keeps a single frame around.
    pub keep: bool,
}

/// Blur applied by the host.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Blur {
    /// Box blur of the given radius.
    Box(usize),
    /// Gaussian blur of the given sigma.
    Gauss(f64),
}

/// Dedicated host plugin filters used by some operators.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum PluginFilter {
    /// `tcanny.TCanny` in gradient magnitude mode.
    TCanny {
        /// Gaussian sigma.
        sigma: f64,
        /// Output mode.
        mode: i32,
        /// Gradient operator index.
        op: u8,
        /// Gradient magnitude scale.
        scale: f64,
    },
    /// `std.Sobel`.
    StdSobel,
    /// `std.Prewitt`.
    StdPrewitt,
    /// `warp.ASobel`, or `warpsf.ASobel` for float input.
    ASobel {
        /// Threshold passed to the filter.
        thresh: u32,
        /// Whether to call the float plugin.
        float: bool,
    },
    /// `tedgemask.TEdgeMask`.
    TEdgeMask {
        /// Threshold passed to the filter.
        threshold: f64,
        /// Mask type.
        kind: u8,
    },
}

impl PluginFilter {
    /// Host name of the filter.
    pub fn host_name(&self) -> &'static str {
        match self {
            PluginFilter::TCanny { .. } => "tcanny.TCanny",
            PluginFilter::StdSobel => "std.Sobel",
            PluginFilter::StdPrewitt => "std.Prewitt",
            PluginFilter::ASobel { float: false, .. } => "warp.ASobel",
            PluginFilter::ASobel { float: true, .. } => "warpsf.ASobel",
            PluginFilter::TEdgeMask { .. } => "tedgemask.TEdgeMask",
        }
    }
}

/// The host runtime that owns clips and executes every filter.
///
/// Clips are opaque handles; the library only reads their metadata through
/// [`FrameEngine::info`].
pub trait FrameEngine {
    /// Handle to a clip owned by the engine.
    type Clip: Clone;

    /// Metadata of a clip.
    fn info(&self, clip: &Self::Clip) -> VideoInfo;

    /// Whether the expression evaluator exposes pixel coordinates as `X` and `Y`.
    fn supports_pixel_coordinates(&self) -> bool {
        false
    }

    /// Convolve every plane with a matrix.
    fn convolution(&self, clip: &Self::Clip, params: &Convolution)
        -> Result<Self::Clip, EngineError>;

    /// Evaluate a postfix expression over one or more clips.
    ///
    /// # Arguments
    ///
    /// * `clips` - The clips loaded as `x`, `y`, `z`, `a`, ...
    /// * `expr` - The postfix expression.
    /// * `format` - The output format, `None` keeps the format of the first clip.
    fn expr(
        &self,
        clips: &[Self::Clip],
        expr: &str,
        format: Option<VideoFormat>,
    ) -> Result<Self::Clip, EngineError>;

    /// Map every sample of an integer clip through a lookup table.
    fn lut(&self, clip: &Self::Clip, table: &[u32]) -> Result<Self::Clip, EngineError>;

    /// Apply a 3x3 minimum or maximum filter.
    fn morpho(
        &self,
        clip: &Self::Clip,
        op: MorphOp,
        params: &Morpho,
    ) -> Result<Self::Clip, EngineError>;

    /// Remove pixels from the clip borders.
    fn crop(&self, clip: &Self::Clip, borders: Borders) -> Result<Self::Clip, EngineError>;

    /// Extract a `width`x`height` window starting at `left`, `top`.
    fn crop_abs(
        &self,
        clip: &Self::Clip,
        width: usize,
        height: usize,
        left: usize,
        top: usize,
    ) -> Result<Self::Clip, EngineError>;

    /// Add black borders around the clip.
    fn add_borders(&self, clip: &Self::Clip, borders: Borders)
        -> Result<Self::Clip, EngineError>;

    /// Resize or convert the format of a clip.
    fn resize(&self, clip: &Self::Clip, params: &Resize) -> Result<Self::Clip, EngineError>;

    /// Split a clip into single plane clips.
    fn split_planes(&self, clip: &Self::Clip) -> Result<Vec<Self::Clip>, EngineError>;

    /// Build a clip from planes of other clips.
    fn shuffle_planes(
        &self,
        clips: &[Self::Clip],
        planes: &[usize],
        family: ColorFamily,
    ) -> Result<Self::Clip, EngineError>;

    /// Create a clip of constant value.
    fn blank_clip(&self, params: &BlankClip) -> Result<Self::Clip, EngineError>;

    /// Invert every sample.
    fn invert(&self, clip: &Self::Clip) -> Result<Self::Clip, EngineError>;

    /// Merge `b` over `a` weighted by `mask`.
    fn masked_merge(
        &self,
        a: &Self::Clip,
        b: &Self::Clip,
        mask: &Self::Clip,
    ) -> Result<Self::Clip, EngineError>;

    /// Repeat a clip `times` times.
    fn loop_clip(&self, clip: &Self::Clip, times: usize) -> Result<Self::Clip, EngineError>;

    /// Keep the frames `first..=last`.
    fn trim(&self, clip: &Self::Clip, first: usize, last: usize)
        -> Result<Self::Clip, EngineError>;

    /// Concatenate clips.
    fn splice(&self, clips: &[Self::Clip]) -> Result<Self::Clip, EngineError>;

    /// Blur a clip.
    fn blur(&self, clip: &Self::Clip, blur: Blur) -> Result<Self::Clip, EngineError>;

    /// Overlay a text label.
    fn text(&self, clip: &Self::Clip, text: &str) -> Result<Self::Clip, EngineError>;

    /// Invoke a dedicated plugin filter.
    fn plugin(&self, clip: &Self::Clip, filter: &PluginFilter)
        -> Result<Self::Clip, EngineError>;
}
