use serde::{Deserialize, Serialize};

use crate::error::MaskError;

/// Deepest integer sample format the operators accept.
pub const MAX_INTEGER_BITS: u8 = 16;

/// Colour family of a clip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFamily {
    /// Single luma plane.
    Gray,
    /// Three full resolution planes.
    Rgb,
    /// Luma plus two possibly subsampled chroma planes.
    Yuv,
}

/// Sample type of a clip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleType {
    /// Integer samples.
    Integer,
    /// Floating point samples.
    Float,
}

/// Colour range used when converting between bit depths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRange {
    /// Full range (pc).
    Full,
    /// Limited range (tv).
    Limited,
}

/// Constant sample format of a clip.
///
/// # Examples
///
/// ```
/// use edgemask_core::VideoFormat;
///
/// let yuv420p10 = VideoFormat::yuv(10, 1, 1);
/// assert_eq!(yuv420p10.peak_value(), 1023.0);
/// assert_eq!(yuv420p10.num_planes(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoFormat {
    /// Colour family.
    pub color_family: ColorFamily,
    /// Sample type.
    pub sample_type: SampleType,
    /// Bits per sample.
    pub bits_per_sample: u8,
    /// Horizontal chroma subsampling (log2).
    pub subsampling_w: u8,
    /// Vertical chroma subsampling (log2).
    pub subsampling_h: u8,
}

impl VideoFormat {
    /// Create a single plane format.
    pub fn gray(bits_per_sample: u8) -> Self {
        Self {
            color_family: ColorFamily::Gray,
            sample_type: sample_type_for_bits(bits_per_sample),
            bits_per_sample,
            subsampling_w: 0,
            subsampling_h: 0,
        }
    }

    /// Create a YUV format with the given subsampling.
    pub fn yuv(bits_per_sample: u8, subsampling_w: u8, subsampling_h: u8) -> Self {
        Self {
            color_family: ColorFamily::Yuv,
            sample_type: sample_type_for_bits(bits_per_sample),
            bits_per_sample,
            subsampling_w,
            subsampling_h,
        }
    }

    /// Create an RGB format.
    pub fn rgb(bits_per_sample: u8) -> Self {
        Self {
            color_family: ColorFamily::Rgb,
            sample_type: sample_type_for_bits(bits_per_sample),
            bits_per_sample,
            subsampling_w: 0,
            subsampling_h: 0,
        }
    }

    /// Whether the samples are floating point.
    pub fn is_float(&self) -> bool {
        self.sample_type == SampleType::Float
    }

    /// The largest representable sample value.
    pub fn peak_value(&self) -> f64 {
        if self.is_float() {
            1.0
        } else {
            1u64.checked_shl(u32::from(self.bits_per_sample))
                .map_or(u64::MAX, |v| v - 1) as f64
        }
    }

    /// Check the sample depth: 1 to 16 bits integer or 32 bits float.
    pub fn validate(&self) -> Result<(), MaskError> {
        let supported = match self.sample_type {
            SampleType::Integer => (1..=MAX_INTEGER_BITS).contains(&self.bits_per_sample),
            SampleType::Float => self.bits_per_sample == 32,
        };
        if supported {
            Ok(())
        } else {
            Err(MaskError::UnsupportedDepth(self.bits_per_sample))
        }
    }

    /// Number of planes for the colour family.
    pub fn num_planes(&self) -> usize {
        match self.color_family {
            ColorFamily::Gray => 1,
            ColorFamily::Rgb | ColorFamily::Yuv => 3,
        }
    }

    /// Same family and subsampling at a new bit depth.
    ///
    /// 32 bits selects float samples, anything else integer samples.
    pub fn with_bits(&self, bits_per_sample: u8) -> Self {
        Self {
            sample_type: sample_type_for_bits(bits_per_sample),
            bits_per_sample,
            ..*self
        }
    }

    /// Same family and depth without chroma subsampling.
    pub fn without_subsampling(&self) -> Self {
        Self {
            subsampling_w: 0,
            subsampling_h: 0,
            ..*self
        }
    }

    /// Single plane format at the same depth.
    pub fn as_gray(&self) -> Self {
        Self {
            color_family: ColorFamily::Gray,
            subsampling_w: 0,
            subsampling_h: 0,
            ..*self
        }
    }
}

impl std::fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let family = match self.color_family {
            ColorFamily::Gray => "Gray",
            ColorFamily::Rgb => "RGB",
            ColorFamily::Yuv => "YUV",
        };
        let kind = if self.is_float() { "S" } else { "" };
        write!(
            f,
            "{family}{kind}{} (ss {}x{})",
            self.bits_per_sample, self.subsampling_w, self.subsampling_h
        )
    }
}

fn sample_type_for_bits(bits_per_sample: u8) -> SampleType {
    if bits_per_sample == 32 {
        SampleType::Float
    } else {
        SampleType::Integer
    }
}

/// Clip metadata as reported by the engine.
///
/// A `width` or `height` of 0 marks a variable resolution clip and a missing
/// `format` marks a variable format clip.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    /// Sample format, `None` when variable.
    pub format: Option<VideoFormat>,
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Number of frames.
    pub num_frames: usize,
}

impl VideoInfo {
    /// Whether the clip has a constant, known resolution.
    pub fn has_constant_size(&self) -> bool {
        self.width != 0 && self.height != 0
    }

    /// Dimensions of the given plane, honouring chroma subsampling.
    pub fn plane_size(&self, plane: usize) -> (usize, usize) {
        match self.format {
            Some(fmt) if plane > 0 => (
                self.width >> fmt.subsampling_w,
                self.height >> fmt.subsampling_h,
            ),
            _ => (self.width, self.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_value() {
        assert_eq!(VideoFormat::gray(8).peak_value(), 255.0);
        assert_eq!(VideoFormat::yuv(16, 1, 1).peak_value(), 65535.0);
        assert_eq!(VideoFormat::rgb(32).peak_value(), 1.0);
        assert_eq!(VideoFormat::gray(64).peak_value(), u64::MAX as f64);
    }

    #[test]
    fn test_validate_depth() {
        assert!(VideoFormat::gray(1).validate().is_ok());
        assert!(VideoFormat::yuv(16, 1, 1).validate().is_ok());
        assert!(VideoFormat::rgb(32).validate().is_ok());
        for bits in [0, 17, 24, 64] {
            assert!(matches!(
                VideoFormat::gray(bits).validate(),
                Err(MaskError::UnsupportedDepth(b)) if b == bits
            ));
        }
        let half = VideoFormat {
            sample_type: SampleType::Float,
            ..VideoFormat::gray(16)
        };
        assert!(half.validate().is_err());
    }

    #[test]
    fn test_with_bits_switches_sample_type() {
        let fmt = VideoFormat::yuv(10, 1, 0);
        let float = fmt.with_bits(32);
        assert!(float.is_float());
        assert_eq!(float.subsampling_w, 1);
        assert_eq!(float.with_bits(10), fmt);
    }

    #[test]
    fn test_plane_size() {
        let info = VideoInfo {
            format: Some(VideoFormat::yuv(8, 1, 1)),
            width: 1920,
            height: 1080,
            num_frames: 10,
        };
        assert_eq!(info.plane_size(0), (1920, 1080));
        assert_eq!(info.plane_size(2), (960, 540));
        assert!(info.has_constant_size());
    }

    #[test]
    fn test_display() {
        assert_eq!(VideoFormat::yuv(10, 1, 1).to_string(), "YUV10 (ss 1x1)");
        assert_eq!(VideoFormat::gray(32).to_string(), "GrayS32 (ss 0x0)");
    }
}
