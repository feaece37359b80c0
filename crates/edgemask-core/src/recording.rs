//! A symbolic [`FrameEngine`] that never touches pixels.
//!
//! Every call is validated against the clip metadata, assigned a fresh node and
//! appended to a call log. This is enough to plan and inspect the filter graph
//! an operator would build on a real host.

use std::cell::RefCell;

use log::trace;

use crate::engine::{
    BlankClip, Blur, Borders, Convolution, FrameEngine, Morpho, MorphOp, PluginFilter, Resize,
};
use crate::error::EngineError;
use crate::expr::number;
use crate::format::{ColorFamily, VideoFormat, VideoInfo};

/// Handle to a symbolic clip.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Unique id of the node inside its engine.
    pub id: usize,
    /// Metadata of the clip.
    pub info: VideoInfo,
}

/// Operation recorded for a call.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    /// `std.Convolution`.
    Convolution(Convolution),
    /// `std.Expr`.
    Expr {
        /// The postfix expression.
        expr: String,
        /// The requested output format.
        format: Option<VideoFormat>,
    },
    /// `std.Lut`.
    Lut(Vec<u32>),
    /// `std.Minimum` or `std.Maximum`.
    Morpho(MorphOp, Morpho),
    /// `std.Crop`.
    Crop(Borders),
    /// `std.CropAbs`.
    CropAbs {
        /// Window width.
        width: usize,
        /// Window height.
        height: usize,
        /// Window left edge.
        left: usize,
        /// Window top edge.
        top: usize,
    },
    /// `std.AddBorders`.
    AddBorders(Borders),
    /// `resize.*`.
    Resize(Resize),
    /// One output of `std.SplitPlanes`.
    SplitPlanes(usize),
    /// `std.ShufflePlanes`.
    ShufflePlanes(Vec<usize>, ColorFamily),
    /// `std.BlankClip`.
    BlankClip(BlankClip),
    /// `std.Invert`.
    Invert,
    /// `std.MaskedMerge`.
    MaskedMerge,
    /// `std.Loop`.
    Loop(usize),
    /// Frame slicing.
    Trim(usize, usize),
    /// Clip concatenation.
    Splice,
    /// Box or gaussian blur.
    Blur(Blur),
    /// `text.Text`.
    Text(String),
    /// Dedicated plugin filter.
    Plugin(PluginFilter),
}

impl Op {
    /// Host name of the filter behind the operation.
    pub fn host_name(&self) -> &'static str {
        match self {
            Op::Convolution(_) => "std.Convolution",
            Op::Expr { .. } => "std.Expr",
            Op::Lut(_) => "std.Lut",
            Op::Morpho(MorphOp::Minimum, _) => "std.Minimum",
            Op::Morpho(MorphOp::Maximum, _) => "std.Maximum",
            Op::Crop(_) => "std.Crop",
            Op::CropAbs { .. } => "std.CropAbs",
            Op::AddBorders(_) => "std.AddBorders",
            Op::Resize(params) => match params.kernel {
                crate::engine::ResizeKernel::Point => "resize.Point",
                crate::engine::ResizeKernel::Bilinear => "resize.Bilinear",
            },
            Op::SplitPlanes(_) => "std.SplitPlanes",
            Op::ShufflePlanes(..) => "std.ShufflePlanes",
            Op::BlankClip(_) => "std.BlankClip",
            Op::Invert => "std.Invert",
            Op::MaskedMerge => "std.MaskedMerge",
            Op::Loop(_) => "std.Loop",
            Op::Trim(..) => "std.Trim",
            Op::Splice => "std.Splice",
            Op::Blur(Blur::Box(_)) => "std.BoxBlur",
            Op::Blur(Blur::Gauss(_)) => "gauss_blur",
            Op::Text(_) => "text.Text",
            Op::Plugin(filter) => filter.host_name(),
        }
    }

    fn arguments(&self) -> String {
        match self {
            Op::Convolution(c) => {
                let matrix: Vec<String> = c.matrix.iter().map(|v| number(*v)).collect();
                format!(
                    "matrix=[{}], divisor={}, saturate={}, mode={}",
                    matrix.join(", "),
                    number(c.divisor),
                    c.saturate,
                    c.mode.as_str()
                )
            }
            Op::Expr { expr, format } => match format {
                Some(fmt) => format!("expr=\"{expr}\", format={fmt}"),
                None => format!("expr=\"{expr}\""),
            },
            Op::Lut(table) => format!("lut=[{} entries]", table.len()),
            Op::Morpho(_, m) => {
                let coords: Vec<&str> = m
                    .coordinates
                    .iter()
                    .map(|&c| if c { "1" } else { "0" })
                    .collect();
                format!("threshold={:?}, coordinates=[{}]", m.threshold, coords.join(", "))
            }
            Op::Crop(b) | Op::AddBorders(b) => format!(
                "left={}, right={}, top={}, bottom={}",
                b.left, b.right, b.top, b.bottom
            ),
            Op::CropAbs {
                width,
                height,
                left,
                top,
            } => format!("width={width}, height={height}, left={left}, top={top}"),
            Op::Resize(r) => format!(
                "width={}, height={}, format={:?}, src_width={:?}, range_in={:?}, range={:?}",
                r.width, r.height, r.format, r.src_width, r.range_in, r.range
            ),
            Op::SplitPlanes(plane) => format!("plane={plane}"),
            Op::ShufflePlanes(planes, family) => format!("planes={planes:?}, family={family:?}"),
            Op::BlankClip(b) => format!(
                "{}x{}, format={}, length={}, color={}",
                b.width,
                b.height,
                b.format,
                b.length,
                number(b.color)
            ),
            Op::Loop(times) => format!("times={times}"),
            Op::Trim(first, last) => format!("first={first}, last={last}"),
            Op::Blur(blur) => format!("{blur:?}"),
            Op::Text(text) => format!("text=\"{text}\""),
            Op::Plugin(filter) => format!("{filter:?}"),
            Op::Invert | Op::MaskedMerge | Op::Splice => String::new(),
        }
    }
}

/// A recorded engine call.
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    /// What was called.
    pub op: Op,
    /// Ids of the input nodes.
    pub inputs: Vec<usize>,
    /// Id of the produced node.
    pub output: usize,
}

impl std::fmt::Display for Call {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let inputs: Vec<String> = self.inputs.iter().map(|id| format!("#{id}")).collect();
        write!(
            f,
            "#{} = {}({}) {}",
            self.output,
            self.op.host_name(),
            inputs.join(", "),
            self.op.arguments()
        )
    }
}

#[derive(Default)]
struct State {
    next_id: usize,
    calls: Vec<Call>,
}

/// Engine that records calls instead of executing them.
///
/// # Examples
///
/// ```
/// use edgemask_core::engine::{ConvMode, Convolution, FrameEngine};
/// use edgemask_core::recording::RecordingEngine;
/// use edgemask_core::VideoFormat;
///
/// let engine = RecordingEngine::default();
/// let clip = engine.source(VideoFormat::gray(8), 640, 480, 10);
/// let out = engine
///     .convolution(
///         &clip,
///         &Convolution {
///             matrix: vec![0.0, -1.0, 0.0, -1.0, 4.0, -1.0, 0.0, -1.0, 0.0],
///             divisor: 0.0,
///             saturate: false,
///             mode: ConvMode::Square,
///         },
///     )
///     .unwrap();
///
/// assert_eq!(engine.info(&out).width, 640);
/// assert_eq!(engine.calls().len(), 1);
/// ```
#[derive(Default)]
pub struct RecordingEngine {
    state: RefCell<State>,
    pixel_coordinates: bool,
    missing_plugins: bool,
    failing_filter: Option<&'static str>,
}

impl RecordingEngine {
    /// Create an engine whose expressions understand `X` and `Y`.
    pub fn with_pixel_coordinates() -> Self {
        Self {
            pixel_coordinates: true,
            ..Default::default()
        }
    }

    /// Create an engine where every plugin filter is missing.
    pub fn without_plugins() -> Self {
        Self {
            missing_plugins: true,
            ..Default::default()
        }
    }

    /// Create an engine that rejects every call to the given host filter.
    pub fn failing_on(filter: &'static str) -> Self {
        Self {
            failing_filter: Some(filter),
            ..Default::default()
        }
    }

    /// Register a source clip.
    pub fn source(
        &self,
        format: VideoFormat,
        width: usize,
        height: usize,
        num_frames: usize,
    ) -> Node {
        self.source_with_info(VideoInfo {
            format: Some(format),
            width,
            height,
            num_frames,
        })
    }

    /// Register a source clip with arbitrary, possibly variable, metadata.
    pub fn source_with_info(&self, info: VideoInfo) -> Node {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        Node { id, info }
    }

    /// Snapshot of the calls recorded so far.
    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    /// Number of recorded calls to the given host filter.
    pub fn count(&self, host_name: &str) -> usize {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|call| call.op.host_name() == host_name)
            .count()
    }

    /// Forget every recorded call.
    pub fn clear(&self) {
        self.state.borrow_mut().calls.clear();
    }

    fn record(&self, op: Op, inputs: &[&Node], info: VideoInfo) -> Result<Node, EngineError> {
        let filter = op.host_name();
        if self.failing_filter == Some(filter) {
            return Err(EngineError::Filter {
                filter,
                message: "rejected by engine".to_string(),
            });
        }

        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;

        let call = Call {
            op,
            inputs: inputs.iter().map(|node| node.id).collect(),
            output: id,
        };
        trace!("{call}");
        state.calls.push(call);

        Ok(Node { id, info })
    }
}

fn invalid(filter: &'static str, message: impl Into<String>) -> EngineError {
    EngineError::Filter {
        filter,
        message: message.into(),
    }
}

impl FrameEngine for RecordingEngine {
    type Clip = Node;

    fn info(&self, clip: &Node) -> VideoInfo {
        clip.info
    }

    fn supports_pixel_coordinates(&self) -> bool {
        self.pixel_coordinates
    }

    fn convolution(&self, clip: &Node, params: &Convolution) -> Result<Node, EngineError> {
        let len = params.matrix.len();
        let valid = match params.mode {
            crate::engine::ConvMode::Square => matches!(len, 9 | 25),
            _ => len % 2 == 1 && (3..=25).contains(&len),
        };
        if !valid {
            return Err(invalid(
                "std.Convolution",
                format!("invalid matrix of {len} coefficients"),
            ));
        }
        self.record(Op::Convolution(params.clone()), &[clip], clip.info)
    }

    fn expr(
        &self,
        clips: &[Node],
        expr: &str,
        format: Option<VideoFormat>,
    ) -> Result<Node, EngineError> {
        let first = clips
            .first()
            .ok_or_else(|| invalid("std.Expr", "no input clips"))?;
        if clips.len() > crate::expr::MAX_EXPR_INPUTS {
            return Err(invalid("std.Expr", "too many input clips"));
        }
        let info = VideoInfo {
            format: format.or(first.info.format),
            ..first.info
        };
        let inputs: Vec<&Node> = clips.iter().collect();
        self.record(
            Op::Expr {
                expr: expr.to_string(),
                format,
            },
            &inputs,
            info,
        )
    }

    fn lut(&self, clip: &Node, table: &[u32]) -> Result<Node, EngineError> {
        match clip.info.format {
            Some(fmt)
                if !fmt.is_float()
                    && 1usize.checked_shl(u32::from(fmt.bits_per_sample)) == Some(table.len()) =>
            {
                self.record(Op::Lut(table.to_vec()), &[clip], clip.info)
            }
            _ => Err(invalid("std.Lut", "table does not match the clip format")),
        }
    }

    fn morpho(&self, clip: &Node, op: MorphOp, params: &Morpho) -> Result<Node, EngineError> {
        self.record(Op::Morpho(op, params.clone()), &[clip], clip.info)
    }

    fn crop(&self, clip: &Node, borders: Borders) -> Result<Node, EngineError> {
        let width = clip
            .info
            .width
            .checked_sub(borders.left + borders.right)
            .filter(|w| *w > 0)
            .ok_or_else(|| invalid("std.Crop", "cropped width is not positive"))?;
        let height = clip
            .info
            .height
            .checked_sub(borders.top + borders.bottom)
            .filter(|h| *h > 0)
            .ok_or_else(|| invalid("std.Crop", "cropped height is not positive"))?;
        let info = VideoInfo {
            width,
            height,
            ..clip.info
        };
        self.record(Op::Crop(borders), &[clip], info)
    }

    fn crop_abs(
        &self,
        clip: &Node,
        width: usize,
        height: usize,
        left: usize,
        top: usize,
    ) -> Result<Node, EngineError> {
        if left + width > clip.info.width || top + height > clip.info.height {
            return Err(invalid("std.CropAbs", "window exceeds the clip"));
        }
        let info = VideoInfo {
            width,
            height,
            ..clip.info
        };
        self.record(
            Op::CropAbs {
                width,
                height,
                left,
                top,
            },
            &[clip],
            info,
        )
    }

    fn add_borders(&self, clip: &Node, borders: Borders) -> Result<Node, EngineError> {
        let info = VideoInfo {
            width: clip.info.width + borders.left + borders.right,
            height: clip.info.height + borders.top + borders.bottom,
            ..clip.info
        };
        self.record(Op::AddBorders(borders), &[clip], info)
    }

    fn resize(&self, clip: &Node, params: &Resize) -> Result<Node, EngineError> {
        let info = VideoInfo {
            format: params.format.or(clip.info.format),
            width: params.width,
            height: params.height,
            ..clip.info
        };
        self.record(Op::Resize(params.clone()), &[clip], info)
    }

    fn split_planes(&self, clip: &Node) -> Result<Vec<Node>, EngineError> {
        let format = clip
            .info
            .format
            .ok_or_else(|| invalid("std.SplitPlanes", "variable format"))?;
        (0..format.num_planes())
            .map(|plane| {
                let (width, height) = clip.info.plane_size(plane);
                let info = VideoInfo {
                    format: Some(format.as_gray()),
                    width,
                    height,
                    ..clip.info
                };
                self.record(Op::SplitPlanes(plane), &[clip], info)
            })
            .collect()
    }

    fn shuffle_planes(
        &self,
        clips: &[Node],
        planes: &[usize],
        family: ColorFamily,
    ) -> Result<Node, EngineError> {
        let first = clips
            .first()
            .ok_or_else(|| invalid("std.ShufflePlanes", "no input clips"))?;
        let base = first
            .info
            .format
            .ok_or_else(|| invalid("std.ShufflePlanes", "variable format"))?;

        let subsampling = |full: usize, plane: usize| -> u8 {
            if plane == 0 || full == 0 {
                0
            } else {
                (full / plane.max(1)).trailing_zeros() as u8
            }
        };
        let (subsampling_w, subsampling_h) = match (family, clips.get(1)) {
            (ColorFamily::Yuv, Some(chroma)) => (
                subsampling(first.info.width, chroma.info.width),
                subsampling(first.info.height, chroma.info.height),
            ),
            _ => (0, 0),
        };

        let info = VideoInfo {
            format: Some(VideoFormat {
                color_family: family,
                subsampling_w,
                subsampling_h,
                ..base
            }),
            ..first.info
        };
        let inputs: Vec<&Node> = clips.iter().collect();
        self.record(Op::ShufflePlanes(planes.to_vec(), family), &inputs, info)
    }

    fn blank_clip(&self, params: &BlankClip) -> Result<Node, EngineError> {
        let info = VideoInfo {
            format: Some(params.format),
            width: params.width,
            height: params.height,
            num_frames: params.length,
        };
        self.record(Op::BlankClip(params.clone()), &[], info)
    }

    fn invert(&self, clip: &Node) -> Result<Node, EngineError> {
        self.record(Op::Invert, &[clip], clip.info)
    }

    fn masked_merge(&self, a: &Node, b: &Node, mask: &Node) -> Result<Node, EngineError> {
        if a.info.format != b.info.format {
            return Err(invalid("std.MaskedMerge", "clip formats differ"));
        }
        self.record(Op::MaskedMerge, &[a, b, mask], a.info)
    }

    fn loop_clip(&self, clip: &Node, times: usize) -> Result<Node, EngineError> {
        let info = VideoInfo {
            num_frames: clip.info.num_frames * times,
            ..clip.info
        };
        self.record(Op::Loop(times), &[clip], info)
    }

    fn trim(&self, clip: &Node, first: usize, last: usize) -> Result<Node, EngineError> {
        if first > last || last >= clip.info.num_frames {
            return Err(invalid("std.Trim", format!("invalid range {first}..={last}")));
        }
        let info = VideoInfo {
            num_frames: last - first + 1,
            ..clip.info
        };
        self.record(Op::Trim(first, last), &[clip], info)
    }

    fn splice(&self, clips: &[Node]) -> Result<Node, EngineError> {
        let first = clips
            .first()
            .ok_or_else(|| invalid("std.Splice", "no input clips"))?;
        let info = VideoInfo {
            num_frames: clips.iter().map(|c| c.info.num_frames).sum(),
            ..first.info
        };
        let inputs: Vec<&Node> = clips.iter().collect();
        self.record(Op::Splice, &inputs, info)
    }

    fn blur(&self, clip: &Node, blur: Blur) -> Result<Node, EngineError> {
        self.record(Op::Blur(blur), &[clip], clip.info)
    }

    fn text(&self, clip: &Node, text: &str) -> Result<Node, EngineError> {
        self.record(Op::Text(text.to_string()), &[clip], clip.info)
    }

    fn plugin(&self, clip: &Node, filter: &PluginFilter) -> Result<Node, EngineError> {
        if self.missing_plugins {
            return Err(EngineError::MissingPlugin(filter.host_name()));
        }
        self.record(Op::Plugin(filter.clone()), &[clip], clip.info)
    }
}
