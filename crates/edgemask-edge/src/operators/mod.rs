//! Every concrete operator, grouped by kernel size.

/// One dimensional operators.
pub mod one_dim;

/// 2x2 operators.
pub mod matrix2x2;

/// 3x3 operators.
pub mod matrix3x3;

/// 5x5 operators.
pub mod matrix5x5;

pub use matrix2x2::*;
pub use matrix3x3::*;
pub use matrix5x5::*;
pub use one_dim::*;

use crate::operator::EdgeOperator;

/// Operators outside the Savitzky-Golay family, in declaration order.
pub(crate) const NAMED: &[EdgeOperator] = &[
    TEDGE,
    TEDGE_TEDGEMASK,
    ROBERTS,
    LAPLACIAN_1,
    LAPLACIAN_2,
    LAPLACIAN_3,
    LAPLACIAN_4,
    KAYYALI,
    TRITICAL,
    TRITICAL_TCANNY,
    CROSS,
    PREWITT,
    PREWITT_STD,
    PREWITT_TCANNY,
    SOBEL,
    SOBEL_STD,
    SOBEL_TCANNY,
    ASOBEL,
    SCHARR,
    RSCHARR,
    SCHARR_TCANNY,
    KROON,
    KROON_TCANNY,
    FREY_CHEN,
    FREY_CHEN_G41,
    ROBINSON_3,
    ROBINSON_5,
    THE_TOOF,
    KIRSCH,
    KIRSCH_TCANNY,
    MIN_MAX,
    EX_LAPLACIAN_1,
    EX_LAPLACIAN_2,
    EX_LAPLACIAN_3,
    EX_LAPLACIAN_4,
    LOG,
    EX_PREWITT,
    EX_SOBEL,
    FDOG,
    FDOG_TCANNY,
    DOG,
    FARID,
    EX_KIRSCH,
];
