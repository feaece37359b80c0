use serde::Serialize;

use edgemask_core::engine::{ConvMode, Convolution};
use edgemask_core::MaskError;

/// Convolution matrices of a matrix based operator.
///
/// Matrices are row-major. Square matrices have 9 or 25 coefficients, one
/// dimensional ones any odd count from 3 to 25.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MatrixKernel {
    /// Coefficient matrices, one convolution each.
    pub matrices: &'static [&'static [f64]],
    /// Divisor per matrix, `None` lets the host normalise every matrix.
    pub divisors: Option<&'static [f64]>,
    /// Convolution mode per matrix, `None` means square for every matrix.
    pub modes: Option<&'static [ConvMode]>,
}

impl MatrixKernel {
    /// Kernel with square matrices and host normalisation.
    pub const fn new(matrices: &'static [&'static [f64]]) -> Self {
        Self {
            matrices,
            divisors: None,
            modes: None,
        }
    }

    /// Kernel with explicit divisors.
    pub const fn with_divisors(
        matrices: &'static [&'static [f64]],
        divisors: &'static [f64],
    ) -> Self {
        Self {
            matrices,
            divisors: Some(divisors),
            modes: None,
        }
    }

    /// Number of matrices.
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    /// Whether the kernel has no matrix at all.
    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    /// Divisor of the `index`-th matrix, 0 when unset.
    pub fn divisor(&self, index: usize) -> f64 {
        self.divisors
            .and_then(|divisors| divisors.get(index).copied())
            .unwrap_or(0.0)
    }

    /// Mode of the `index`-th matrix, square when unset.
    pub fn mode(&self, index: usize) -> ConvMode {
        self.modes
            .and_then(|modes| modes.get(index).copied())
            .unwrap_or_default()
    }

    /// Convolution call for the `index`-th matrix.
    pub fn convolution(&self, index: usize, saturate: bool) -> Convolution {
        Convolution {
            matrix: self.matrices[index].to_vec(),
            divisor: self.divisor(index),
            saturate,
            mode: self.mode(index),
        }
    }

    /// Whether results bleed on the right edge and must be cropped.
    ///
    /// This is the case for matrices wider than 3x3 and for one dimensional
    /// kernels.
    pub fn bleeds(&self) -> bool {
        let wide = self.matrices.first().is_some_and(|m| m.len() > 9);
        wide || self.mode(0) != ConvMode::Square
    }

    /// Check that every matrix has a shape the host accepts.
    pub fn validate(&self) -> Result<(), MaskError> {
        if self.matrices.is_empty() {
            return Err(MaskError::InvalidKernel("no matrix".to_string()));
        }

        for (i, matrix) in self.matrices.iter().enumerate() {
            let len = matrix.len();
            let ok = match self.mode(i) {
                ConvMode::Square => len == 9 || len == 25,
                ConvMode::Horizontal | ConvMode::Vertical => len % 2 == 1 && (3..=25).contains(&len),
            };
            if !ok {
                return Err(MaskError::InvalidKernel(format!(
                    "matrix {i} has {len} coefficients in mode {}",
                    self.mode(i).as_str()
                )));
            }
        }

        if let Some(divisors) = self.divisors {
            if divisors.len() != self.matrices.len() {
                return Err(MaskError::InvalidKernel(format!(
                    "{} divisors for {} matrices",
                    divisors.len(),
                    self.matrices.len()
                )));
            }
        }

        if let Some(modes) = self.modes {
            if modes.len() != self.matrices.len() {
                return Err(MaskError::InvalidKernel(format!(
                    "{} modes for {} matrices",
                    modes.len(),
                    self.matrices.len()
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREWITT: MatrixKernel = MatrixKernel::new(&[
        &[1.0, 0.0, -1.0, 1.0, 0.0, -1.0, 1.0, 0.0, -1.0],
        &[1.0, 1.0, 1.0, 0.0, 0.0, 0.0, -1.0, -1.0, -1.0],
    ]);

    #[test]
    fn test_defaults() {
        assert_eq!(PREWITT.len(), 2);
        assert_eq!(PREWITT.divisor(1), 0.0);
        assert_eq!(PREWITT.mode(1), ConvMode::Square);
        assert!(!PREWITT.bleeds());
        assert!(PREWITT.validate().is_ok());
    }

    #[test]
    fn test_one_dimensional_bleeds() {
        let kernel = MatrixKernel {
            matrices: &[&[-2.0, -1.0, 0.0, 1.0, 2.0], &[-2.0, -1.0, 0.0, 1.0, 2.0]],
            divisors: Some(&[10.0, 10.0]),
            modes: Some(&[ConvMode::Horizontal, ConvMode::Vertical]),
        };
        assert!(kernel.bleeds());
        assert!(kernel.validate().is_ok());

        let conv = kernel.convolution(1, false);
        assert_eq!(conv.mode, ConvMode::Vertical);
        assert_eq!(conv.divisor, 10.0);
        assert!(!conv.saturate);
    }

    #[test]
    fn test_validate_rejects_bad_shapes() {
        let square = MatrixKernel::new(&[&[1.0; 5]]);
        assert!(square.validate().is_err());

        let divisors = MatrixKernel::with_divisors(&[&[1.0; 9]], &[1.0, 2.0]);
        assert!(divisors.validate().is_err());

        assert!(MatrixKernel::new(&[]).validate().is_err());
    }
}
