//! One dimensional operators, applied once horizontally and once vertically.

use edgemask_core::engine::{ConvMode, PluginFilter};

use crate::kernel::MatrixKernel;
use crate::merge::MergeStrategy;
use crate::operator::{EdgeOperator, Family};

const HV: &[ConvMode] = &[ConvMode::Horizontal, ConvMode::Vertical];

/// (TEdgeMask type=2) Avisynth plugin.
pub const TEDGE: EdgeOperator = EdgeOperator::matrix(
    "TEdge",
    Family::OneDimensional,
    "(TEdgeMask type=2) Avisynth plugin.",
    MatrixKernel {
        matrices: &[&[12.0, -74.0, 0.0, 74.0, -12.0], &[-12.0, 74.0, 0.0, -74.0, 12.0]],
        divisors: Some(&[62.0, 62.0]),
        modes: Some(HV),
    },
    MergeStrategy::EuclideanDistance,
);

/// `tedgemask.TEdgeMask(threshold=0.0, type=2)` Vapoursynth plugin.
pub const TEDGE_TEDGEMASK: EdgeOperator = EdgeOperator::plugin(
    "TEdgeTedgemask",
    Family::OneDimensional,
    "(tedgemask.TEdgeMask(threshold=0.0, type=2)) Vapoursynth plugin.",
    PluginFilter::TEdgeMask {
        threshold: 0.0,
        kind: 2,
    },
);

macro_rules! savitzky_golay {
    ($(
        $ident:ident => $name:literal,
            $summary:literal,
            [$($c:literal),* $(,)?] / $div:literal;
    )*) => {
        $(
            #[doc = $summary]
            pub const $ident: EdgeOperator = EdgeOperator::matrix(
                $name,
                Family::OneDimensional,
                $summary,
                MatrixKernel {
                    matrices: &[&[$($c as f64),*], &[$($c as f64),*]],
                    divisors: Some(&[$div as f64, $div as f64]),
                    modes: Some(HV),
                },
                MergeStrategy::EuclideanDistance,
            );
        )*

        /// Every Savitzky-Golay derivative operator.
        pub const SAVITZKY_GOLAY: &[EdgeOperator] = &[$($ident),*];
    };
}

savitzky_golay! {
    SAVITZKY_GOLAY_DERIV1_QUAD5 => "SavitzkyGolayDeriv1Quad5",
        "Savitzky-Golay first quadratic derivative operator of size 5.",
        [-2, -1, 0, 1, 2] / 10;
    SAVITZKY_GOLAY_DERIV1_QUAD7 => "SavitzkyGolayDeriv1Quad7",
        "Savitzky-Golay first quadratic derivative operator of size 7.",
        [-3, -2, -1, 0, 1, 2, 3] / 28;
    SAVITZKY_GOLAY_DERIV1_QUAD9 => "SavitzkyGolayDeriv1Quad9",
        "Savitzky-Golay first quadratic derivative operator of size 9.",
        [-4, -3, -2, -1, 0, 1, 2, 3, 4] / 60;
    SAVITZKY_GOLAY_DERIV1_QUAD11 => "SavitzkyGolayDeriv1Quad11",
        "Savitzky-Golay first quadratic derivative operator of size 11.",
        [-5, -4, -3, -2, -1, 0, 1, 2, 3, 4, 5] / 110;
    SAVITZKY_GOLAY_DERIV1_QUAD13 => "SavitzkyGolayDeriv1Quad13",
        "Savitzky-Golay first quadratic derivative operator of size 13.",
        [-6, -5, -4, -3, -2, -1, 0, 1, 2, 3, 4, 5, 6] / 182;
    SAVITZKY_GOLAY_DERIV1_QUAD15 => "SavitzkyGolayDeriv1Quad15",
        "Savitzky-Golay first quadratic derivative operator of size 15.",
        [-7, -6, -5, -4, -3, -2, -1, 0, 1, 2, 3, 4, 5, 6, 7] / 280;
    SAVITZKY_GOLAY_DERIV1_QUAD17 => "SavitzkyGolayDeriv1Quad17",
        "Savitzky-Golay first quadratic derivative operator of size 17.",
        [-8, -7, -6, -5, -4, -3, -2, -1, 0, 1, 2, 3, 4, 5, 6, 7, 8] / 408;
    SAVITZKY_GOLAY_DERIV1_QUAD19 => "SavitzkyGolayDeriv1Quad19",
        "Savitzky-Golay first quadratic derivative operator of size 19.",
        [-9, -8, -7, -6, -5, -4, -3, -2, -1, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9] / 570;
    SAVITZKY_GOLAY_DERIV1_QUAD21 => "SavitzkyGolayDeriv1Quad21",
        "Savitzky-Golay first quadratic derivative operator of size 21.",
        [-10, -9, -8, -7, -6, -5, -4, -3, -2, -1, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10] / 770;
    SAVITZKY_GOLAY_DERIV1_QUAD23 => "SavitzkyGolayDeriv1Quad23",
        "Savitzky-Golay first quadratic derivative operator of size 23.",
        [-11, -10, -9, -8, -7, -6, -5, -4, -3, -2, -1, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11] / 1012;
    SAVITZKY_GOLAY_DERIV1_QUAD25 => "SavitzkyGolayDeriv1Quad25",
        "Savitzky-Golay first quadratic derivative operator of size 25.",
        [
            -12, -11, -10, -9, -8, -7, -6, -5, -4, -3, -2, -1, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10,
            11, 12,
        ] / 1300;
    SAVITZKY_GOLAY_DERIV1_CUBIC5 => "SavitzkyGolayDeriv1Cubic5",
        "Savitzky-Golay first cubic/quartic derivative operator of size 5.",
        [1, -8, 0, 8, -1] / 12;
    SAVITZKY_GOLAY_DERIV1_CUBIC7 => "SavitzkyGolayDeriv1Cubic7",
        "Savitzky-Golay first cubic/quartic derivative operator of size 7.",
        [22, -67, -58, 0, 58, 67, -22] / 252;
    SAVITZKY_GOLAY_DERIV1_CUBIC9 => "SavitzkyGolayDeriv1Cubic9",
        "Savitzky-Golay first cubic/quartic derivative operator of size 9.",
        [86, -142, -193, -126, 0, 126, 193, 142, -86] / 1188;
    SAVITZKY_GOLAY_DERIV1_CUBIC11 => "SavitzkyGolayDeriv1Cubic11",
        "Savitzky-Golay first cubic/quartic derivative operator of size 11.",
        [300, -294, -532, -503, -296, 0, 296, 503, 532, 294, -300] / 5148;
    SAVITZKY_GOLAY_DERIV1_CUBIC13 => "SavitzkyGolayDeriv1Cubic13",
        "Savitzky-Golay first cubic/quartic derivative operator of size 13.",
        [1133, -660, -1578, -1796, -1489, -832, 0, 832, 1489, 1796, 1578, 660, -1133] / 24024;
    SAVITZKY_GOLAY_DERIV1_CUBIC15 => "SavitzkyGolayDeriv1Cubic15",
        "Savitzky-Golay first cubic/quartic derivative operator of size 15.",
        [
            12922, -4121, -14150, -18334, -17842, -13843, -7506, 0, 7506, 13843, 17842, 18334,
            14150, 4121, -12922,
        ] / 334152;
    SAVITZKY_GOLAY_DERIV1_CUBIC17 => "SavitzkyGolayDeriv1Cubic17",
        "Savitzky-Golay first cubic/quartic derivative operator of size 17.",
        [
            748, -98, -643, -930, -1002, -902, -673, -358, 0, 358, 673, 902, 1002, 930, 643, 98,
            -748,
        ] / 23256;
    SAVITZKY_GOLAY_DERIV1_CUBIC19 => "SavitzkyGolayDeriv1Cubic19",
        "Savitzky-Golay first cubic/quartic derivative operator of size 19.",
        [
            6936, 68, -4648, -7481, -8700, -8574, -7372, -5363, -2816, 0, 2816, 5363, 7372, 8574,
            8700, 7481, 4648, -68, -6936,
        ] / 255816;
    SAVITZKY_GOLAY_DERIV1_CUBIC21 => "SavitzkyGolayDeriv1Cubic21",
        "Savitzky-Golay first cubic/quartic derivative operator of size 21.",
        [
            84075, 10032, -43284, -78176, -96947, -101900, -95338, -79564, -56881, -29592, 0,
            29592, 56881, 79564, 95338, 101900, 96947, 78176, 43284, -10032, -84075,
        ] / 3634092;
    SAVITZKY_GOLAY_DERIV1_CUBIC23 => "SavitzkyGolayDeriv1Cubic23",
        "Savitzky-Golay first cubic/quartic derivative operator of size 23.",
        [
            3938, 815, -1518, -3140, -4130, -4567, -4530, -4098, -3350, -2365, -1222, 0, 1222,
            2365, 3350, 4098, 4530, 4567, 4130, 3140, 1518, -815, -3938,
        ] / 197340;
    SAVITZKY_GOLAY_DERIV1_CUBIC25 => "SavitzkyGolayDeriv1Cubic25",
        "Savitzky-Golay first cubic/quartic derivative operator of size 25.",
        [
            30866, 8602, -8525, -20982, -29236, -33754, -35003, -33450, -29562, -23806, -16649,
            -8558, 0, 8558, 16649, 23806, 29562, 33450, 35003, 33754, 29236, 20982, 8525, -8602,
            -30866,
        ] / 1776060;
    SAVITZKY_GOLAY_DERIV1_QUINT7 => "SavitzkyGolayDeriv1Quint7",
        "Savitzky-Golay first quintic/sextic derivative operator of size 7.",
        [-1, 9, -45, 0, 45, -9, 1] / 60;
    SAVITZKY_GOLAY_DERIV1_QUINT9 => "SavitzkyGolayDeriv1Quint9",
        "Savitzky-Golay first quintic/sextic derivative operator of size 9.",
        [-254, 1381, -2269, -2879, 0, 2879, 2269, -1381, 254] / 8580;
    SAVITZKY_GOLAY_DERIV1_QUINT11 => "SavitzkyGolayDeriv1Quint11",
        "Savitzky-Golay first quintic/sextic derivative operator of size 11.",
        [-573, 2166, -1249, -3774, -3084, 0, 3084, 3774, 1249, -2166, 573] / 17160;
    SAVITZKY_GOLAY_DERIV1_QUINT13 => "SavitzkyGolayDeriv1Quint13",
        "Savitzky-Golay first quintic/sextic derivative operator of size 13.",
        [
            -9647, 27093, -12, -33511, -45741, -31380, 0, 31380, 45741, 33511, 12, -27093, 9647,
        ] / 291720;
    SAVITZKY_GOLAY_DERIV1_QUINT15 => "SavitzkyGolayDeriv1Quint15",
        "Savitzky-Golay first quintic/sextic derivative operator of size 15.",
        [
            -78351, 169819, 65229, -130506, -266401, -279975, -175125, 0, 175125, 279975, 266401,
            130506, -65229, -169819, 78351,
        ] / 2519400;
    SAVITZKY_GOLAY_DERIV1_QUINT17 => "SavitzkyGolayDeriv1Quint17",
        "Savitzky-Golay first quintic/sextic derivative operator of size 17.",
        [
            -14404, 24661, 16679, -8671, -32306, -43973, -40483, -23945, 0, 23945, 40483, 43973,
            32306, 8671, -16679, -24661, 14404,
        ] / 503880;
    SAVITZKY_GOLAY_DERIV1_QUINT19 => "SavitzkyGolayDeriv1Quint19",
        "Savitzky-Golay first quintic/sextic derivative operator of size 19.",
        [
            -255102, 349928, 322378, 9473, -348823, -604484, -686099, -583549, -332684, 0, 332684,
            583549, 686099, 604484, 348823, -9473, -322378, -349928, 255102,
        ] / 9806280;
    SAVITZKY_GOLAY_DERIV1_QUINT21 => "SavitzkyGolayDeriv1Quint21",
        "Savitzky-Golay first quintic/sextic derivative operator of size 21.",
        [
            -15033066, 16649358, 19052988, 6402438, -10949942, -26040033, -34807914, -35613829,
            -28754154, -15977364, 0, 15977364, 28754154, 35613829, 34807914, 26040033, 10949942,
            -6402438, -19052988, -16649358, 15033066,
        ] / 637408200;
    SAVITZKY_GOLAY_DERIV1_QUINT23 => "SavitzkyGolayDeriv1Quint23",
        "Savitzky-Golay first quintic/sextic derivative operator of size 23.",
        [
            -400653, 359157, 489687, 265164, -106911, -478349, -752859, -878634, -840937, -654687,
            -357045, 0, 357045, 654687, 840937, 878634, 752859, 478349, 106911, -265164, -489687,
            -359157, 400653,
        ] / 18747300;
    SAVITZKY_GOLAY_DERIV1_QUINT25 => "SavitzkyGolayDeriv1Quint25",
        "Savitzky-Golay first quintic/sextic derivative operator of size 25.",
        [
            -8322182, 6024183, 9604353, 6671883, 544668, -6301491, -12139321, -15896511, -17062146,
            -15593141, -11820675, -6356625, 0, 6356625, 11820675, 15593141, 17062146, 15896511,
            12139321, 6301491, -544668, -6671883, -9604353, -6024183, 8322182,
        ] / 429214500;
    SAVITZKY_GOLAY_DERIV2_QUAD5 => "SavitzkyGolayDeriv2Quad5",
        "Savitzky-Golay second quadratic/cubic derivative operator of size 5.",
        [2, -1, -2, -1, 2] / 7;
    SAVITZKY_GOLAY_DERIV2_QUAD7 => "SavitzkyGolayDeriv2Quad7",
        "Savitzky-Golay second quadratic/cubic derivative operator of size 7.",
        [5, 0, -3, -4, -3, 0, 5] / 42;
    SAVITZKY_GOLAY_DERIV2_QUAD9 => "SavitzkyGolayDeriv2Quad9",
        "Savitzky-Golay second quadratic/cubic derivative operator of size 9.",
        [28, 7, -8, -17, -20, -17, -8, 7, 28] / 462;
    SAVITZKY_GOLAY_DERIV2_QUAD11 => "SavitzkyGolayDeriv2Quad11",
        "Savitzky-Golay second quadratic/cubic derivative operator of size 11.",
        [15, 6, -1, -6, -9, -10, -9, -6, -1, 6, 15] / 429;
    SAVITZKY_GOLAY_DERIV2_QUAD13 => "SavitzkyGolayDeriv2Quad13",
        "Savitzky-Golay second quadratic/cubic derivative operator of size 13.",
        [22, 11, 2, -5, -10, -13, -14, -13, -10, -5, 2, 11, 22] / 1001;
    SAVITZKY_GOLAY_DERIV2_QUAD15 => "SavitzkyGolayDeriv2Quad15",
        "Savitzky-Golay second quadratic/cubic derivative operator of size 15.",
        [91, 52, 19, -8, -29, -44, -53, -56, -53, -44, -29, -8, 19, 52, 91] / 6188;
    SAVITZKY_GOLAY_DERIV2_QUAD17 => "SavitzkyGolayDeriv2Quad17",
        "Savitzky-Golay second quadratic/cubic derivative operator of size 17.",
        [40, 25, 12, 1, -8, -15, -20, -23, -24, -23, -20, -15, -8, 1, 12, 25, 40] / 3876;
    SAVITZKY_GOLAY_DERIV2_QUAD19 => "SavitzkyGolayDeriv2Quad19",
        "Savitzky-Golay second quadratic/cubic derivative operator of size 19.",
        [51, 34, 19, 6, -5, -14, -21, -26, -29, -30, -29, -26, -21, -14, -5, 6, 19, 34, 51] / 6783;
    SAVITZKY_GOLAY_DERIV2_QUAD21 => "SavitzkyGolayDeriv2Quad21",
        "Savitzky-Golay second quadratic/cubic derivative operator of size 21.",
        [
            190, 133, 82, 37, -2, -35, -62, -83, -98, -107, -110, -107, -98, -83, -62, -35, -2, 37,
            82, 133, 190,
        ] / 33649;
    SAVITZKY_GOLAY_DERIV2_QUAD23 => "SavitzkyGolayDeriv2Quad23",
        "Savitzky-Golay second quadratic/cubic derivative operator of size 23.",
        [
            77, 56, 37, 20, 5, -8, -19, -28, -35, -40, -43, -44, -43, -40, -35, -28, -19, -8, 5,
            20, 37, 56, 77,
        ] / 17710;
    SAVITZKY_GOLAY_DERIV2_QUAD25 => "SavitzkyGolayDeriv2Quad25",
        "Savitzky-Golay second quadratic/cubic derivative operator of size 25.",
        [
            92, 69, 48, 29, 12, -3, -16, -27, -36, -43, -48, -51, -52, -51, -48, -43, -36, -27,
            -16, -3, 12, 29, 48, 69, 92,
        ] / 26910;
    SAVITZKY_GOLAY_DERIV2_QUART7 => "SavitzkyGolayDeriv2Quart7",
        "Savitzky-Golay second quartic/quintic derivative operator of size 7.",
        [-13, 67, -19, -70, -19, 67, -13] / 132;
    SAVITZKY_GOLAY_DERIV2_QUART9 => "SavitzkyGolayDeriv2Quart9",
        "Savitzky-Golay second quartic/quintic derivative operator of size 9.",
        [-126, 371, 151, -211, -370, -211, 151, 371, -126] / 1716;
    SAVITZKY_GOLAY_DERIV2_QUART11 => "SavitzkyGolayDeriv2Quart11",
        "Savitzky-Golay second quartic/quintic derivative operator of size 11.",
        [-90, 174, 146, 1, -136, -190, -136, 1, 146, 174, -90] / 1716;
    SAVITZKY_GOLAY_DERIV2_QUART13 => "SavitzkyGolayDeriv2Quart13",
        "Savitzky-Golay second quartic/quintic derivative operator of size 13.",
        [-2211, 2970, 3504, 1614, -971, -3016, -3780, -3016, -971, 1614, 3504, 2970, -2211] / 58344;
    SAVITZKY_GOLAY_DERIV2_QUART15 => "SavitzkyGolayDeriv2Quart15",
        "Savitzky-Golay second quartic/quintic derivative operator of size 15.",
        [
            -31031, 29601, 44495, 31856, 6579, -19751, -38859, -45780, -38859, -19751, 6579, 31856,
            44495, 29601, -31031,
        ] / 1108536;
    SAVITZKY_GOLAY_DERIV2_QUART17 => "SavitzkyGolayDeriv2Quart17",
        "Savitzky-Golay second quartic/quintic derivative operator of size 17.",
        [
            -2132, 1443, 2691, 2405, 1256, -207, -1557, -2489, -2820, -2489, -1557, -207, 1256,
            2405, 2691, 1443, -2132,
        ] / 100776;
    SAVITZKY_GOLAY_DERIV2_QUART19 => "SavitzkyGolayDeriv2Quart19",
        "Savitzky-Golay second quartic/quintic derivative operator of size 19.",
        [
            -32028, 15028, 35148, 36357, 25610, 8792, -9282, -24867, -35288, -38940, -35288,
            -24867, -9282, 8792, 25610, 36357, 35148, 15028, -32028,
        ] / 1961256;
    SAVITZKY_GOLAY_DERIV2_QUART21 => "SavitzkyGolayDeriv2Quart21",
        "Savitzky-Golay second quartic/quintic derivative operator of size 21.",
        [
            -12597, 3876, 11934, 13804, 11451, 6578, 626, -5226, -10061, -13224, -14322, -13224,
            -10061, -5226, 626, 6578, 11451, 13804, 11934, 3876, -12597,
        ] / 980628;
    SAVITZKY_GOLAY_DERIV2_QUART23 => "SavitzkyGolayDeriv2Quart23",
        "Savitzky-Golay second quartic/quintic derivative operator of size 23.",
        [
            -115577, 20615, 93993, 119510, 110545, 78903, 34815, -13062, -57645, -93425, -116467,
            -124410, -116467, -93425, -57645, -13062, 34815, 78903, 110545, 119510, 93993, 20615,
            -115577,
        ] / 11248380;
    SAVITZKY_GOLAY_DERIV2_QUART25 => "SavitzkyGolayDeriv2Quart25",
        "Savitzky-Golay second quartic/quintic derivative operator of size 25.",
        [
            -143198, 10373, 99385, 137803, 138262, 112067, 69193, 18285, -33342, -79703, -116143,
            -139337, -147290, -139337, -116143, -79703, -33342, 18285, 69193, 112067, 138262,
            137803, 99385, 10373, -143198,
        ] / 17168580;
}
