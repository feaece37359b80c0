//! 5x5 operators.
//!
//! Every matrix based operator in here bleeds on the right edge, see
//! [`MatrixKernel::bleeds`].

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
        Family::Matrix5x5,
        summary,
        MatrixKernel::new(matrix),
        MergeStrategy::Single,
    )
}

/// Extended Pierre-Simon de Laplace operator, 1st implementation.
pub const EX_LAPLACIAN_1: EdgeOperator = single(
    "ExLaplacian1",
    "Extended Pierre-Simon de Laplace operator, 1st implementation.",
    &[&[
        0.0, 0.0, -1.0, 0.0, 0.0, //
        0.0, 0.0, -1.0, 0.0, 0.0, //
        -1.0, -1.0, 8.0, -1.0, -1.0, //
        0.0, 0.0, -1.0, 0.0, 0.0, //
        0.0, 0.0, -1.0, 0.0, 0.0,
    ]],
);

/// Extended Pierre-Simon de Laplace operator, 2nd implementation.
pub const EX_LAPLACIAN_2: EdgeOperator = single(
    "ExLaplacian2",
    "Extended Pierre-Simon de Laplace operator, 2nd implementation.",
    &[&[
        0.0, 1.0, -1.0, 1.0, 0.0, //
        1.0, 1.0, -4.0, 1.0, 1.0, //
        -1.0, -4.0, 8.0, -4.0, -1.0, //
        1.0, 1.0, -4.0, 1.0, 1.0, //
        0.0, 1.0, -1.0, 1.0, 0.0,
    ]],
);

/// Extended Pierre-Simon de Laplace operator, 3rd implementation.
pub const EX_LAPLACIAN_3: EdgeOperator = single(
    "ExLaplacian3",
    "Extended Pierre-Simon de Laplace operator, 3rd implementation.",
    &[&[
        -1.0, 1.0, -1.0, 1.0, -1.0, //
        1.0, 2.0, -4.0, 2.0, 1.0, //
        -1.0, -4.0, 8.0, -4.0, -1.0, //
        1.0, 2.0, -4.0, 2.0, 1.0, //
        -1.0, 1.0, -1.0, 1.0, -1.0,
    ]],
);

/// Extended Pierre-Simon de Laplace operator, 4th implementation.
pub const EX_LAPLACIAN_4: EdgeOperator = single(
    "ExLaplacian4",
    "Extended Pierre-Simon de Laplace operator, 4th implementation.",
    &[&[
        -1.0, -1.0, -1.0, -1.0, -1.0, //
        -1.0, -1.0, -1.0, -1.0, -1.0, //
        -1.0, -1.0, 24.0, -1.0, -1.0, //
        -1.0, -1.0, -1.0, -1.0, -1.0, //
        -1.0, -1.0, -1.0, -1.0, -1.0,
    ]],
);

/// Laplacian of Gaussian operator.
pub const LOG: EdgeOperator = single(
    "LoG",
    "Laplacian of Gaussian operator.",
    &[&[
        0.0, 0.0, -1.0, 0.0, 0.0, //
        0.0, -1.0, -2.0, -1.0, 0.0, //
        -1.0, -2.0, 16.0, -2.0, -1.0, //
        0.0, -1.0, -2.0, -1.0, 0.0, //
        0.0, 0.0, -1.0, 0.0, 0.0,
    ]],
);

/// Extended Judith M. S. Prewitt operator.
pub const EX_PREWITT: EdgeOperator = EdgeOperator::matrix(
    "ExPrewitt",
    Family::Matrix5x5,
    "Extended Judith M. S. Prewitt operator.",
    MatrixKernel::new(&[
        &[
            2.0, 1.0, 0.0, -1.0, -2.0, //
            2.0, 1.0, 0.0, -1.0, -2.0, //
            2.0, 1.0, 0.0, -1.0, -2.0, //
            2.0, 1.0, 0.0, -1.0, -2.0, //
            2.0, 1.0, 0.0, -1.0, -2.0,
        ],
        &[
            2.0, 2.0, 2.0, 2.0, 2.0, //
            1.0, 1.0, 1.0, 1.0, 1.0, //
            0.0, 0.0, 0.0, 0.0, 0.0, //
            -1.0, -1.0, -1.0, -1.0, -1.0, //
            -2.0, -2.0, -2.0, -2.0, -2.0,
        ],
    ]),
    MergeStrategy::EuclideanDistance,
)
.with_ridge();

/// Extended Sobel-Feldman operator.
pub const EX_SOBEL: EdgeOperator = EdgeOperator::matrix(
    "ExSobel",
    Family::Matrix5x5,
    "Extended Sobel-Feldman operator.",
    MatrixKernel::new(&[
        &[
            2.0, 1.0, 0.0, -1.0, -2.0, //
            2.0, 1.0, 0.0, -1.0, -2.0, //
            4.0, 2.0, 0.0, -2.0, -4.0, //
            2.0, 1.0, 0.0, -1.0, -2.0, //
            2.0, 1.0, 0.0, -1.0, -2.0,
        ],
        &[
            2.0, 2.0, 4.0, 2.0, 2.0, //
            1.0, 1.0, 2.0, 1.0, 1.0, //
            0.0, 0.0, 0.0, 0.0, 0.0, //
            -1.0, -1.0, -2.0, -1.0, -1.0, //
            -2.0, -2.0, -4.0, -2.0, -2.0,
        ],
    ]),
    MergeStrategy::EuclideanDistance,
)
.with_ridge();

/// Flow-based Difference of Gaussian.
pub const FDOG: EdgeOperator = EdgeOperator::matrix(
    "FDoG",
    Family::Matrix5x5,
    "Flow-based Difference of Gaussian.",
    MatrixKernel::with_divisors(
        &[
            &[
                1.0, 1.0, 0.0, -1.0, -1.0, //
                2.0, 2.0, 0.0, -2.0, -2.0, //
                3.0, 3.0, 0.0, -3.0, -3.0, //
                2.0, 2.0, 0.0, -2.0, -2.0, //
                1.0, 1.0, 0.0, -1.0, -1.0,
            ],
            &[
                1.0, 2.0, 3.0, 2.0, 1.0, //
                1.0, 2.0, 3.0, 2.0, 1.0, //
                0.0, 0.0, 0.0, 0.0, 0.0, //
                -1.0, -2.0, -3.0, -2.0, -1.0, //
                -1.0, -2.0, -3.0, -2.0, -1.0,
            ],
        ],
        &[2.0, 2.0],
    ),
    MergeStrategy::EuclideanDistance,
)
.with_ridge();

/// Flow-based Difference of Gaussian TCanny Vapoursynth plugin.
pub const FDOG_TCANNY: EdgeOperator = EdgeOperator::plugin(
    "FDoGTCanny",
    Family::Matrix5x5,
    "Flow-based Difference of Gaussian TCanny Vapoursynth plugin.",
    PluginFilter::TCanny {
        sigma: 0.0,
        mode: 1,
        op: 6,
        scale: 0.5,
    },
);

/// Zero-cross (of the 2nd derivative) of a Difference of Gaussians.
///
/// The wide and narrow gaussians are computed in float and subtracted.
pub const DOG: EdgeOperator = EdgeOperator::matrix(
    "DoG",
    Family::Matrix5x5,
    "Zero-cross (of the 2nd derivative) of a Difference of Gaussians.",
    MatrixKernel::with_divisors(
        &[
            &[
                0.0, 0.0, 5.0, 0.0, 0.0, //
                0.0, 5.0, 10.0, 5.0, 0.0, //
                5.0, 10.0, 20.0, 10.0, 5.0, //
                0.0, 5.0, 10.0, 5.0, 0.0, //
                0.0, 0.0, 5.0, 0.0, 0.0,
            ],
            &[0.0, 25.0, 0.0, 25.0, 50.0, 25.0, 0.0, 25.0, 0.0],
        ],
        &[4.0, 6.0],
    ),
    MergeStrategy::Difference,
)
.in_float32();

const FA: f64 = 0.004127602875174862;
const FB: f64 = 0.027308149775363867;
const FC: f64 = 0.04673225765917656;
const FD: f64 = 0.010419993699470744;
const FE: f64 = 0.06893849946536831;
const FF: f64 = 0.11797400212587895;

/// Farid & Simoncelli operator.
pub const FARID: EdgeOperator = EdgeOperator::matrix(
    "Farid",
    Family::Matrix5x5,
    "Farid & Simoncelli operator.",
    MatrixKernel::new(&[
        &[
            FA, FB, FC, FB, FA, //
            FD, FE, FF, FE, FD, //
            0.0, 0.0, 0.0, 0.0, 0.0, //
            -FD, -FE, -FF, -FE, -FD, //
            -FA, -FB, -FC, -FB, -FA,
        ],
        &[
            FA, FD, 0.0, -FD, -FA, //
            FB, FE, 0.0, -FE, -FB, //
            FC, FF, 0.0, -FF, -FC, //
            FB, FE, 0.0, -FE, -FB, //
            FA, FD, 0.0, -FD, -FA,
        ],
    ]),
    MergeStrategy::EuclideanDistance,
)
.with_ridge()
.in_float32();

/// Extended Russell Kirsch compass operator. 5x5 matrices.
pub const EX_KIRSCH: EdgeOperator = EdgeOperator::matrix(
    "ExKirsch",
    Family::Matrix5x5,
    "Extended Russell Kirsch compass operator. 5x5 matrices.",
    MatrixKernel::new(&[
        &[
            9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 5.0, 5.0, 5.0, 9.0, -7.0, -3.0, 0.0, -3.0, -7.0, -7.0,
            -3.0, -3.0, -3.0, -7.0, -7.0, -7.0, -7.0, -7.0, -7.0,
        ],
        &[
            9.0, 9.0, 9.0, 9.0, -7.0, 9.0, 5.0, 5.0, -3.0, -7.0, 9.0, 5.0, 0.0, -3.0, -7.0, 9.0,
            -3.0, -3.0, -3.0, -7.0, -7.0, -7.0, -7.0, -7.0, -7.0,
        ],
        &[
            9.0, 9.0, -7.0, -7.0, -7.0, 9.0, 5.0, -3.0, -3.0, -7.0, 9.0, 5.0, 0.0, -3.0, -7.0, 9.0,
            5.0, -3.0, -3.0, -7.0, 9.0, 9.0, -7.0, -7.0, -7.0,
        ],
        &[
            -7.0, -7.0, -7.0, -7.0, -7.0, 9.0, -3.0, -3.0, -3.0, -7.0, 9.0, 5.0, 0.0, -3.0, -7.0,
            9.0, 5.0, 5.0, -3.0, -7.0, 9.0, 9.0, 9.0, 9.0, -7.0,
        ],
        &[
            -7.0, -7.0, -7.0, -7.0, -7.0, -7.0, -3.0, -3.0, -3.0, -7.0, -7.0, -3.0, 0.0, -3.0,
            -7.0, 9.0, 5.0, 5.0, 5.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0,
        ],
        &[
            -7.0, -7.0, -7.0, -7.0, -7.0, -7.0, -3.0, -3.0, -3.0, 9.0, -7.0, -3.0, 0.0, 5.0, 9.0,
            -7.0, -3.0, 5.0, 5.0, 9.0, -7.0, 9.0, 9.0, 9.0, 9.0,
        ],
        &[
            -7.0, -7.0, -7.0, 9.0, 9.0, -7.0, -3.0, -3.0, 5.0, 9.0, -7.0, -3.0, 0.0, 5.0, 9.0,
            -7.0, -3.0, -3.0, 5.0, 9.0, -7.0, -7.0, -7.0, 9.0, 9.0,
        ],
        &[
            -7.0, 9.0, 9.0, 9.0, 9.0, -7.0, -3.0, 5.0, 5.0, 9.0, -7.0, -3.0, 0.0, 5.0, 9.0, -7.0,
            -3.0, -3.0, -3.0, 9.0, -7.0, -7.0, -7.0, -7.0, -7.0,
        ],
    ]),
    MergeStrategy::Max,
);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_kernels_are_valid() {
        for op in [
            &EX_LAPLACIAN_1, &EX_LAPLACIAN_2, &EX_LAPLACIAN_3, &EX_LAPLACIAN_4, &LOG, &EX_PREWITT,
            &EX_SOBEL, &FDOG, &DOG, &FARID, &EX_KIRSCH,
        ] {
            let kernel = op.kernel().unwrap();
            assert!(kernel.validate().is_ok(), "{}", op.name);
            assert!(kernel.bleeds(), "{}", op.name);
        }
    }

    #[test]
    fn test_farid_gradients_are_transposed() {
        let kernel = FARID.kernel().unwrap();
        let (gy, gx) = (kernel.matrices[0], kernel.matrices[1]);
        for row in 0..5 {
            for col in 0..5 {
                assert_relative_eq!(gy[row * 5 + col], gx[col * 5 + row]);
            }
        }
        assert_relative_eq!(gy.iter().sum::<f64>(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_dog_mixes_kernel_sizes() {
        let kernel = DOG.kernel().unwrap();
        assert_eq!(kernel.matrices[0].len(), 25);
        assert_eq!(kernel.matrices[1].len(), 9);
        assert_eq!(kernel.divisor(1), 6.0);
        assert_eq!(DOG.merge_strategy(), Some(MergeStrategy::Difference));
        assert!(!DOG.ridge);
    }

    #[test]
    fn test_ex_kirsch_directions() {
        let kernel = EX_KIRSCH.kernel().unwrap();
        assert_eq!(kernel.len(), 8);
        for matrix in kernel.matrices {
            assert_eq!(matrix[12], 0.0);
            assert_relative_eq!(matrix.iter().sum::<f64>(), 0.0);
        }
    }
}
