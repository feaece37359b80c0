use crate::kernel::MatrixKernel;
use crate::merge::MergeStrategy;
use crate::operator::{EdgeOperator, Family};

/// Lawrence Roberts operator. 2x2 matrices computed in 3x3 matrices.
pub const ROBERTS: EdgeOperator = EdgeOperator::matrix(
    "Roberts",
    Family::Matrix2x2,
    "Lawrence Roberts operator. 2x2 matrices computed in 3x3 matrices.",
    MatrixKernel::new(&[
        &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0],
        &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, 0.0],
    ]),
    MergeStrategy::EuclideanDistance,
)
.with_ridge();
