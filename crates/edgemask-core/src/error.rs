/// An error raised by the host frame engine.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// The host rejected the filter invocation.
    #[error("{filter}: {message}")]
    Filter {
        /// Name of the host filter, e.g. `std.Convolution`.
        filter: &'static str,
        /// Message reported by the host.
        message: String,
    },

    /// The requested host plugin is not loaded.
    #[error("Plugin `{0}` is not available")]
    MissingPlugin(&'static str),
}

/// An error type for the mask operators and utilities.
#[derive(thiserror::Error, Debug)]
pub enum MaskError {
    /// Error when the clip does not carry a constant format.
    #[error("{0}: variable format not allowed")]
    VariableFormat(&'static str),

    /// Error when the clip does not carry a constant resolution.
    #[error("{0}: variable resolution not allowed")]
    VariableResolution(&'static str),

    /// Error when the sample depth is not 1 to 16 bits integer or 32 bits float.
    #[error("Unsupported sample depth of {0} bits")]
    UnsupportedDepth(u8),

    /// Error when an operator name cannot be resolved.
    #[error("Unknown edge operator `{0}`")]
    UnknownOperator(String),

    /// Error when ridge detection is requested from an operator without it.
    #[error("Operator `{0}` does not support ridge detection")]
    RidgeUnsupported(String),

    /// Error when a square mask does not fit inside the clip.
    #[error("Mask ({width}x{height} at {offset_x},{offset_y}) exceeds clip size ({clip_width}x{clip_height})")]
    MaskExceedsClip {
        /// Mask width.
        width: usize,
        /// Mask height.
        height: usize,
        /// Horizontal offset.
        offset_x: usize,
        /// Vertical offset.
        offset_y: usize,
        /// Clip width.
        clip_width: usize,
        /// Clip height.
        clip_height: usize,
    },

    /// Error when a mask window covers no pixel.
    #[error("Mask window of {width}x{height} is empty")]
    EmptyWindow {
        /// Window width.
        width: usize,
        /// Window height.
        height: usize,
    },

    /// Error when a mask function is used without a reference clip.
    #[error("This mask function requires a reference clip")]
    MissingReference,

    /// Error when an operation receives no clips.
    #[error("{0}: at least one clip is required")]
    EmptyInput(&'static str),

    /// Error when a frame range falls outside the clip.
    #[error("Frame range {0}..={1} is out of bounds for a clip of {2} frames")]
    InvalidFrameRange(usize, usize, usize),

    /// Error when a kernel definition is malformed.
    #[error("Invalid kernel: {0}")]
    InvalidKernel(String),

    /// Error coming from the host engine.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Error when a configuration document cannot be parsed.
    #[error("Invalid configuration")]
    Config(#[from] serde_json::Error),

    /// Error when a configuration file cannot be read.
    #[error("Failed to read configuration")]
    Io(#[from] std::io::Error),
}
