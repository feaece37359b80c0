//! 3x3 operators.

use std::f64::consts::SQRT_2;

use edgemask_core::engine::PluginFilter;

use crate::kernel::MatrixKernel;
use crate::merge::MergeStrategy;
use crate::operator::{EdgeOperator, Family};

const fn single(
    name: &'static str,
    summary: &'static str,
    matrix: &'static [&'static [f64]],
) -> EdgeOperator {
    EdgeOperator::matrix(
        name,
        Family::Matrix3x3,
        summary,
        MatrixKernel::new(matrix),
        MergeStrategy::Single,
    )
}

const fn tcanny(name: &'static str, summary: &'static str, op: u8, scale: f64) -> EdgeOperator {
    EdgeOperator::plugin(
        name,
        Family::Matrix3x3,
        summary,
        PluginFilter::TCanny {
            sigma: 0.0,
            mode: 1,
            op,
            scale,
        },
    )
}

// single matrix

/// Pierre-Simon de Laplace operator 1st implementation.
pub const LAPLACIAN_1: EdgeOperator = single(
    "Laplacian1",
    "Pierre-Simon de Laplace operator 1st implementation.",
    &[&[0.0, -1.0, 0.0, -1.0, 4.0, -1.0, 0.0, -1.0, 0.0]],
);

/// Pierre-Simon de Laplace operator 2nd implementation.
pub const LAPLACIAN_2: EdgeOperator = single(
    "Laplacian2",
    "Pierre-Simon de Laplace operator 2nd implementation.",
    &[&[1.0, -2.0, 1.0, -2.0, 4.0, -2.0, 1.0, -2.0, 1.0]],
);

/// Pierre-Simon de Laplace operator 3rd implementation.
pub const LAPLACIAN_3: EdgeOperator = single(
    "Laplacian3",
    "Pierre-Simon de Laplace operator 3rd implementation.",
    &[&[2.0, -1.0, 2.0, -1.0, -4.0, -1.0, 2.0, -1.0, 2.0]],
);

/// Pierre-Simon de Laplace operator 4th implementation.
pub const LAPLACIAN_4: EdgeOperator = single(
    "Laplacian4",
    "Pierre-Simon de Laplace operator 4th implementation.",
    &[&[-1.0, -1.0, -1.0, -1.0, 8.0, -1.0, -1.0, -1.0, -1.0]],
);

/// Kayyali operator.
pub const KAYYALI: EdgeOperator = single(
    "Kayyali",
    "Kayyali operator.",
    &[&[6.0, 0.0, -6.0, 0.0, 0.0, 0.0, -6.0, 0.0, 6.0]],
);

// euclidean distance

/// Operator used in Tritical's original TCanny filter.
/// Plain and simple orthogonal first order derivative.
pub const TRITICAL: EdgeOperator = EdgeOperator::matrix(
    "Tritical",
    Family::Matrix3x3,
    "Operator used in Tritical's original TCanny filter.",
    MatrixKernel::new(&[
        &[0.0, 0.0, 0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0],
        &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0],
    ]),
    MergeStrategy::EuclideanDistance,
);

/// Tritical's operator through the TCanny plugin.
pub const TRITICAL_TCANNY: EdgeOperator = tcanny(
    "TriticalTCanny",
    "Operator used in Tritical's original TCanny filter.",
    0,
    1.0,
);

/// "HotDoG" Operator from AVS ExTools by Dogway.
/// Plain and simple cross first order derivative.
pub const CROSS: EdgeOperator = EdgeOperator::matrix(
    "Cross",
    Family::Matrix3x3,
    "\"HotDoG\" Operator from AVS ExTools by Dogway.",
    MatrixKernel::new(&[
        &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0],
        &[0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    ]),
    MergeStrategy::EuclideanDistance,
);

/// Judith M. S. Prewitt operator.
pub const PREWITT: EdgeOperator = EdgeOperator::matrix(
    "Prewitt",
    Family::Matrix3x3,
    "Judith M. S. Prewitt operator.",
    MatrixKernel::new(&[
        &[1.0, 0.0, -1.0, 1.0, 0.0, -1.0, 1.0, 0.0, -1.0],
        &[1.0, 1.0, 1.0, 0.0, 0.0, 0.0, -1.0, -1.0, -1.0],
    ]),
    MergeStrategy::EuclideanDistance,
);

/// Judith M. S. Prewitt Vapoursynth plugin operator.
pub const PREWITT_STD: EdgeOperator = EdgeOperator::plugin(
    "PrewittStd",
    Family::Matrix3x3,
    "Judith M. S. Prewitt Vapoursynth plugin operator.",
    PluginFilter::StdPrewitt,
);

/// Judith M. S. Prewitt TCanny plugin operator.
pub const PREWITT_TCANNY: EdgeOperator = tcanny(
    "PrewittTCanny",
    "Judith M. S. Prewitt TCanny plugin operator.",
    1,
    2.0,
);

/// Sobel-Feldman operator.
pub const SOBEL: EdgeOperator = EdgeOperator::matrix(
    "Sobel",
    Family::Matrix3x3,
    "Sobel-Feldman operator.",
    MatrixKernel::new(&[
        &[1.0, 0.0, -1.0, 2.0, 0.0, -2.0, 1.0, 0.0, -1.0],
        &[1.0, 2.0, 1.0, 0.0, 0.0, 0.0, -1.0, -2.0, -1.0],
    ]),
    MergeStrategy::EuclideanDistance,
);

/// Sobel-Feldman Vapoursynth plugin operator.
pub const SOBEL_STD: EdgeOperator = EdgeOperator::plugin(
    "SobelStd",
    Family::Matrix3x3,
    "Sobel-Feldman Vapoursynth plugin operator.",
    PluginFilter::StdSobel,
);

/// Sobel-Feldman TCanny plugin operator.
pub const SOBEL_TCANNY: EdgeOperator = tcanny(
    "SobelTCanny",
    "Sobel-Feldman TCanny plugin operator.",
    2,
    2.0,
);

/// Modified Sobel-Feldman operator from AWarpSharp.
///
/// The float plugin is picked for 32-bit input.
pub const ASOBEL: EdgeOperator = EdgeOperator::plugin(
    "ASobel",
    Family::Matrix3x3,
    "Modified Sobel-Feldman operator from AWarpSharp.",
    PluginFilter::ASobel {
        thresh: 255,
        float: false,
    },
);

/// Original H. Scharr optimised operator which attempts
/// to achieve the perfect rotational symmetry with coefficients 3 and 10.
pub const SCHARR: EdgeOperator = EdgeOperator::matrix(
    "Scharr",
    Family::Matrix3x3,
    "Original H. Scharr optimised operator.",
    MatrixKernel::with_divisors(
        &[
            &[-3.0, 0.0, 3.0, -10.0, 0.0, 10.0, -3.0, 0.0, 3.0],
            &[-3.0, -10.0, -3.0, 0.0, 0.0, 0.0, 3.0, 10.0, 3.0],
        ],
        &[3.0, 3.0],
    ),
    MergeStrategy::EuclideanDistance,
);

/// Refined H. Scharr operator to more accurately calculate
/// 1st derivatives for a 3x3 kernel with coeffs 47 and 162.
pub const RSCHARR: EdgeOperator = EdgeOperator::matrix(
    "RScharr",
    Family::Matrix3x3,
    "Refined H. Scharr operator.",
    MatrixKernel::with_divisors(
        &[
            &[-47.0, 0.0, 47.0, -162.0, 0.0, 162.0, -47.0, 0.0, 47.0],
            &[-47.0, -162.0, -47.0, 0.0, 0.0, 0.0, 47.0, 162.0, 47.0],
        ],
        &[47.0, 47.0],
    ),
    MergeStrategy::EuclideanDistance,
);

/// H. Scharr optimised TCanny Vapoursynth plugin operator.
pub const SCHARR_TCANNY: EdgeOperator = tcanny(
    "ScharrTCanny",
    "H. Scharr optimised TCanny Vapoursynth plugin operator.",
    3,
    4.0 / 3.0,
);

/// Dirk-Jan Kroon operator.
pub const KROON: EdgeOperator = EdgeOperator::matrix(
    "Kroon",
    Family::Matrix3x3,
    "Dirk-Jan Kroon operator.",
    MatrixKernel::new(&[
        &[-17.0, 0.0, 17.0, -61.0, 0.0, 61.0, -17.0, 0.0, 17.0],
        &[-17.0, -61.0, -17.0, 0.0, 0.0, 0.0, 17.0, 61.0, 17.0],
    ]),
    MergeStrategy::EuclideanDistance,
);

/// Dirk-Jan Kroon TCanny Vapoursynth plugin operator.
pub const KROON_TCANNY: EdgeOperator = tcanny(
    "KroonTCanny",
    "Dirk-Jan Kroon TCanny Vapoursynth plugin operator.",
    4,
    1.0,
);

const FREY_CHEN_MATRICES: [&[f64]; 9] = [
    &[1.0, SQRT_2, 1.0, 0.0, 0.0, 0.0, -1.0, -SQRT_2, -1.0],
    &[1.0, 0.0, -1.0, SQRT_2, 0.0, -SQRT_2, 1.0, 0.0, -1.0],
    &[0.0, -1.0, SQRT_2, 1.0, 0.0, -1.0, -SQRT_2, 1.0, 0.0],
    &[SQRT_2, -1.0, 0.0, -1.0, 0.0, 1.0, 0.0, 1.0, -SQRT_2],
    &[0.0, 1.0, 0.0, -1.0, 0.0, -1.0, 0.0, 1.0, 0.0],
    &[-1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0],
    &[1.0, -2.0, 1.0, -2.0, 4.0, -2.0, 1.0, -2.0, 1.0],
    &[-2.0, 1.0, -2.0, 1.0, 4.0, 1.0, -2.0, 1.0, -2.0],
    &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
];

const FREY_CHEN_DIVISORS: [f64; 9] = [
    2.0 * SQRT_2,
    2.0 * SQRT_2,
    2.0 * SQRT_2,
    2.0 * SQRT_2,
    2.0,
    2.0,
    6.0,
    6.0,
    3.0,
];

/// Chen Frei operator. 3x3 matrices properly implemented.
///
/// The nine basis projections are computed in float and merged as the ratio of
/// the edge subspace energy over the total energy.
pub const FREY_CHEN: EdgeOperator = EdgeOperator::matrix(
    "FreyChen",
    Family::Matrix3x3,
    "Chen Frei operator. 3x3 matrices properly implemented.",
    MatrixKernel::with_divisors(&FREY_CHEN_MATRICES, &FREY_CHEN_DIVISORS),
    MergeStrategy::FreiChen,
)
.in_float32();

/// "Chen Frei" operator. 3x3 matrices from G41Fun.
pub const FREY_CHEN_G41: EdgeOperator = EdgeOperator::matrix(
    "FreyChenG41",
    Family::Matrix3x3,
    "\"Chen Frei\" operator. 3x3 matrices from G41Fun.",
    MatrixKernel::with_divisors(
        &[
            &[-7.0, 0.0, 7.0, -10.0, 0.0, 10.0, -7.0, 0.0, 7.0],
            &[-7.0, -10.0, -7.0, 0.0, 0.0, 0.0, 7.0, 10.0, 7.0],
        ],
        &[7.0, 7.0],
    ),
    MergeStrategy::EuclideanDistance,
);

// max

/// Robinson compass operator level 3.
pub const ROBINSON_3: EdgeOperator = EdgeOperator::matrix(
    "Robinson3",
    Family::Matrix3x3,
    "Robinson compass operator level 3.",
    MatrixKernel::new(&[
        &[1.0, 1.0, 1.0, 0.0, 0.0, 0.0, -1.0, -1.0, -1.0],
        &[1.0, 1.0, 0.0, 1.0, 0.0, -1.0, 0.0, -1.0, -1.0],
        &[1.0, 0.0, -1.0, 1.0, 0.0, -1.0, 1.0, 0.0, -1.0],
        &[0.0, -1.0, -1.0, 1.0, 0.0, -1.0, 1.0, 1.0, 0.0],
    ]),
    MergeStrategy::Max,
);

/// Robinson compass operator level 5.
pub const ROBINSON_5: EdgeOperator = EdgeOperator::matrix(
    "Robinson5",
    Family::Matrix3x3,
    "Robinson compass operator level 5.",
    MatrixKernel::new(&[
        &[1.0, 2.0, 1.0, 0.0, 0.0, 0.0, -1.0, -2.0, -1.0],
        &[2.0, 1.0, 0.0, 1.0, 0.0, -1.0, 0.0, -1.0, -2.0],
        &[1.0, 0.0, -1.0, 2.0, 0.0, -2.0, 1.0, 0.0, -1.0],
        &[0.0, -1.0, -2.0, 1.0, 0.0, -1.0, 2.0, 1.0, 0.0],
    ]),
    MergeStrategy::Max,
);

/// TheToof compass operator from SharpAAMCmod.
pub const THE_TOOF: EdgeOperator = EdgeOperator::matrix(
    "TheToof",
    Family::Matrix3x3,
    "TheToof compass operator from SharpAAMCmod.",
    MatrixKernel::with_divisors(
        &[
            &[5.0, 10.0, 5.0, 0.0, 0.0, 0.0, -5.0, -10.0, -5.0],
            &[10.0, 5.0, 0.0, 5.0, 0.0, -5.0, 0.0, -5.0, -10.0],
            &[5.0, 0.0, -5.0, 10.0, 0.0, -10.0, 5.0, 0.0, -5.0],
            &[0.0, -5.0, -10.0, 5.0, 0.0, -5.0, 10.0, 5.0, 0.0],
        ],
        &[4.0; 4],
    ),
    MergeStrategy::Max,
);

/// Russell Kirsch compass operator.
pub const KIRSCH: EdgeOperator = EdgeOperator::matrix(
    "Kirsch",
    Family::Matrix3x3,
    "Russell Kirsch compass operator.",
    MatrixKernel::new(&[
        &[5.0, 5.0, 5.0, -3.0, 0.0, -3.0, -3.0, -3.0, -3.0],
        &[5.0, 5.0, -3.0, 5.0, 0.0, -3.0, -3.0, -3.0, -3.0],
        &[5.0, -3.0, -3.0, 5.0, 0.0, -3.0, 5.0, -3.0, -3.0],
        &[-3.0, -3.0, -3.0, 5.0, 0.0, -3.0, 5.0, 5.0, -3.0],
        &[-3.0, -3.0, -3.0, -3.0, 0.0, -3.0, 5.0, 5.0, 5.0],
        &[-3.0, -3.0, -3.0, -3.0, 0.0, 5.0, -3.0, 5.0, 5.0],
        &[-3.0, -3.0, 5.0, -3.0, 0.0, 5.0, -3.0, -3.0, 5.0],
        &[-3.0, 5.0, 5.0, -3.0, 0.0, 5.0, -3.0, -3.0, -3.0],
    ]),
    MergeStrategy::Max,
);

/// Russell Kirsch compass TCanny Vapoursynth plugin operator.
pub const KIRSCH_TCANNY: EdgeOperator = tcanny(
    "KirschTCanny",
    "Russell Kirsch compass TCanny Vapoursynth plugin operator.",
    5,
    1.0,
);

// misc

/// Min/max mask with the default radii, luma 2 and chroma 0.
pub const MIN_MAX: EdgeOperator = EdgeOperator::min_max(2, 0);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_derivative_kernels_sum_to_zero() {
        for op in [
            &TRITICAL, &CROSS, &PREWITT, &SOBEL, &SCHARR, &RSCHARR, &KROON, &FREY_CHEN_G41,
            &ROBINSON_3, &ROBINSON_5, &THE_TOOF, &KIRSCH, &KAYYALI, &LAPLACIAN_1, &LAPLACIAN_4,
        ] {
            for matrix in op.kernel().unwrap().matrices {
                assert_relative_eq!(matrix.iter().sum::<f64>(), 0.0);
            }
        }
    }

    #[test]
    fn test_frey_chen_basis() {
        let kernel = FREY_CHEN.kernel().unwrap();
        assert_eq!(kernel.len(), 9);
        assert!(kernel.validate().is_ok());
        assert_relative_eq!(kernel.divisor(0), 2.828_427_124_746_19, epsilon = 1e-12);
        assert_eq!(kernel.divisor(8), 3.0);
        assert_eq!(FREY_CHEN.merge_strategy(), Some(MergeStrategy::FreiChen));
    }

    #[test]
    fn test_single_matrix_helper() {
        let kernel = LAPLACIAN_2.kernel().unwrap();
        assert_eq!(kernel.len(), 1);
        assert_eq!(kernel.matrices[0][4], 4.0);
        assert_eq!(LAPLACIAN_2.merge_strategy(), Some(MergeStrategy::Single));
    }
}
