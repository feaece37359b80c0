use std::io::Write;

use edgemask_core::engine::{ConvMode, PluginFilter, ResizeKernel};
use edgemask_core::recording::{Op, RecordingEngine};
use edgemask_core::{ColorRange, EngineError, FrameEngine, MaskError, VideoFormat};
use edgemask_edge::merge::RIDGE_EXPR;
use edgemask_edge::operators::{ASOBEL, EX_SOBEL, FREY_CHEN, KIRSCH, PREWITT, TEDGE};
use edgemask_edge::{
    all_edge_operators, all_ridge_operators, get_all_edge_detects, get_all_ridge_detect,
    EdgeDetect, EdgeMaskConfig, MaskParams,
};

fn host_names(engine: &RecordingEngine) -> Vec<&'static str> {
    engine.calls().iter().map(|call| call.op.host_name()).collect()
}

#[test]
fn one_dimensional_kernels_crop_the_bleeding_edge() -> Result<(), MaskError> {
    let engine = RecordingEngine::default();
    let clip = engine.source(VideoFormat::yuv(8, 1, 1), 64, 48, 10);

    let mask = TEDGE.edge_mask(&engine, &clip, &MaskParams::default())?;

    assert_eq!(
        host_names(&engine),
        [
            "std.Convolution",
            "std.Convolution",
            "std.Expr",
            "std.Crop",
            "resize.Point"
        ]
    );

    let calls = engine.calls();
    match (&calls[0].op, &calls[1].op) {
        (Op::Convolution(h), Op::Convolution(v)) => {
            assert_eq!(h.mode, ConvMode::Horizontal);
            assert_eq!(v.mode, ConvMode::Vertical);
            assert_eq!(h.divisor, 62.0);
        }
        ops => panic!("unexpected {ops:?}"),
    }
    match &calls[3].op {
        Op::Crop(borders) => assert_eq!(borders.right, 2),
        op => panic!("unexpected {op:?}"),
    }
    match &calls[4].op {
        Op::Resize(params) => {
            assert_eq!(params.src_width, Some(64.0));
            assert_eq!(params.width, 64);
        }
        op => panic!("unexpected {op:?}"),
    }

    assert_eq!(engine.info(&mask).width, 64);
    assert_eq!(engine.info(&mask).format, clip.info.format);
    Ok(())
}

#[test]
fn frey_chen_computes_in_float() -> Result<(), MaskError> {
    let engine = RecordingEngine::default();
    let clip = engine.source(VideoFormat::gray(10), 64, 48, 1);

    let mask = FREY_CHEN.edge_mask(&engine, &clip, &MaskParams::default())?;

    assert_eq!(engine.count("std.Convolution"), 9);
    assert_eq!(engine.count("resize.Point"), 2);
    assert_eq!(engine.count("std.Crop"), 0);

    let calls = engine.calls();
    match &calls.last().map(|call| &call.op) {
        Some(Op::Resize(params)) => {
            assert_eq!(params.kernel, ResizeKernel::Point);
            assert_eq!(params.range_in, Some(ColorRange::Full));
            assert_eq!(params.range, Some(ColorRange::Full));
        }
        op => panic!("unexpected {op:?}"),
    }
    assert_eq!(mask.info.format, Some(VideoFormat::gray(10)));
    Ok(())
}

#[test]
fn compass_operators_take_the_maximum() -> Result<(), MaskError> {
    let engine = RecordingEngine::default();
    let clip = engine.source(VideoFormat::gray(10), 64, 48, 1);
    let params = MaskParams {
        lthr: 16.0,
        ..Default::default()
    };

    KIRSCH.edge_mask(&engine, &clip, &params)?;

    let calls = engine.calls();
    assert_eq!(calls.len(), 10);
    match &calls[8].op {
        Op::Expr { expr, .. } => {
            assert_eq!(expr, "x y max z max a max b max c max d max e max");
        }
        op => panic!("unexpected {op:?}"),
    }
    assert_eq!(calls[8].inputs.len(), 8);
    match &calls[9].op {
        Op::Lut(table) => {
            assert_eq!(table.len(), 1024);
            assert_eq!(table[16], 0);
            assert_eq!(table[17], 17);
        }
        op => panic!("unexpected {op:?}"),
    }
    Ok(())
}

#[test]
fn float_masks_use_expressions() -> Result<(), MaskError> {
    let engine = RecordingEngine::default();
    let clip = engine.source(VideoFormat::gray(32), 64, 48, 1);
    let params = MaskParams {
        lthr: 0.1,
        hthr: Some(0.9),
        multi: 2.0,
        clamp: true,
    };

    PREWITT.edge_mask(&engine, &clip, &params)?;

    let exprs: Vec<String> = engine
        .calls()
        .into_iter()
        .filter_map(|call| match call.op {
            Op::Expr { expr, .. } => Some(expr),
            _ => None,
        })
        .collect();
    assert_eq!(
        exprs,
        [
            "x x * y y * + sqrt",
            "x 2 *",
            "x 0.9 > 1 x 0.1 <= 0 x ? ?",
            "x 0 max 1 min"
        ]
    );
    assert_eq!(engine.count("std.Lut"), 0);
    Ok(())
}

#[test]
fn ridge_mask_builds_the_hessian() -> Result<(), MaskError> {
    let engine = RecordingEngine::default();
    let clip = engine.source(VideoFormat::gray(8), 64, 48, 1);

    let mask = EX_SOBEL.ridge_mask(&engine, &clip, &MaskParams::default())?;

    let calls = engine.calls();
    let convolutions: Vec<_> = calls
        .iter()
        .filter_map(|call| match &call.op {
            Op::Convolution(conv) => Some(conv),
            _ => None,
        })
        .collect();
    assert_eq!(convolutions.len(), 5);
    assert!(convolutions.iter().all(|conv| conv.saturate));

    // xx and xy both derive from the x gradient
    let gx = calls[1].output;
    assert_eq!(calls[3].inputs, vec![gx]);
    assert_eq!(calls[5].inputs, vec![gx]);

    match &calls[6].op {
        Op::Expr { expr, .. } => assert_eq!(expr, RIDGE_EXPR),
        op => panic!("unexpected {op:?}"),
    }
    // back to 8 bits, then the bleeding columns go
    assert_eq!(
        host_names(&engine)[7..],
        ["resize.Point", "std.Crop", "resize.Point"]
    );
    match &calls[7].op {
        Op::Resize(resize) => assert_eq!(resize.format, Some(VideoFormat::gray(8))),
        op => panic!("unexpected {op:?}"),
    }
    match &calls[9].op {
        Op::Resize(resize) => assert_eq!(resize.src_width, Some(64.0)),
        op => panic!("unexpected {op:?}"),
    }
    assert_eq!(mask.info.format, Some(VideoFormat::gray(8)));
    assert_eq!((mask.info.width, mask.info.height), (64, 48));
    Ok(())
}

#[test]
fn ridge_and_edge_masks_crop_alike() -> Result<(), MaskError> {
    let engine = RecordingEngine::default();
    let clip = engine.source(VideoFormat::yuv(8, 1, 1), 64, 48, 1);

    EX_SOBEL.edge_mask(&engine, &clip, &MaskParams::default())?;
    assert_eq!(engine.count("std.Crop"), 1);

    engine.clear();
    EX_SOBEL.ridge_mask(&engine, &clip, &MaskParams::default())?;
    assert_eq!(engine.count("std.Crop"), 1);
    match &engine.calls().last().map(|call| &call.op) {
        Some(Op::Resize(resize)) => assert_eq!(resize.src_width, Some(64.0)),
        op => panic!("unexpected {op:?}"),
    }
    Ok(())
}

#[test]
fn unsupported_depths_are_rejected() {
    let engine = RecordingEngine::default();
    for bits in [0, 17, 64] {
        let clip = engine.source(VideoFormat::gray(bits), 64, 48, 1);
        let params = MaskParams {
            multi: 2.0,
            ..Default::default()
        };
        assert!(matches!(
            PREWITT.edge_mask(&engine, &clip, &params),
            Err(MaskError::UnsupportedDepth(b)) if b == bits
        ));
    }
    assert!(engine.calls().is_empty());
}

#[test]
fn asobel_picks_the_float_plugin() -> Result<(), MaskError> {
    let engine = RecordingEngine::default();
    let integer = engine.source(VideoFormat::gray(16), 64, 48, 1);
    let float = engine.source(VideoFormat::gray(32), 64, 48, 1);

    ASOBEL.edge_mask(&engine, &integer, &MaskParams::default())?;
    ASOBEL.edge_mask(&engine, &float, &MaskParams::default())?;

    assert_eq!(host_names(&engine), ["warp.ASobel", "warpsf.ASobel"]);
    match &engine.calls()[1].op {
        Op::Plugin(PluginFilter::ASobel { thresh, float }) => {
            assert_eq!(*thresh, 255);
            assert!(*float);
        }
        op => panic!("unexpected {op:?}"),
    }
    Ok(())
}

#[test]
fn missing_plugins_are_reported() {
    let engine = RecordingEngine::without_plugins();
    let clip = engine.source(VideoFormat::gray(8), 64, 48, 1);
    let err = ASOBEL
        .edge_mask(&engine, &clip, &MaskParams::default())
        .unwrap_err();
    assert!(matches!(
        err,
        MaskError::Engine(EngineError::MissingPlugin("warp.ASobel"))
    ));
}

#[test]
fn every_operator_is_labelled() -> Result<(), MaskError> {
    let engine = RecordingEngine::default();
    let clip = engine.source(VideoFormat::yuv(16, 1, 1), 640, 480, 1);

    let masks = get_all_edge_detects(&engine, &clip, &MaskParams::default())?;
    assert_eq!(masks.len(), all_edge_operators().len());

    let labels: Vec<String> = engine
        .calls()
        .into_iter()
        .filter_map(|call| match call.op {
            Op::Text(text) => Some(text),
            _ => None,
        })
        .collect();
    let names: Vec<&str> = all_edge_operators().iter().map(|op| op.name).collect();
    assert_eq!(labels, names);

    for mask in &masks {
        assert_eq!(mask.info.width, 640);
        assert_eq!(mask.info.format, clip.info.format);
    }
    Ok(())
}

#[test]
fn every_ridge_operator_runs() -> Result<(), MaskError> {
    let engine = RecordingEngine::default();
    let clip = engine.source(VideoFormat::gray(8), 320, 240, 1);
    let masks = get_all_ridge_detect(&engine, &clip, &MaskParams::default())?;
    assert_eq!(masks.len(), all_ridge_operators().len());
    assert_eq!(engine.count("text.Text"), masks.len());
    Ok(())
}

#[test]
fn config_file_drives_a_mask() -> Result<(), MaskError> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"{{ "operator": "FDOG", "ridge": true, "params": {{ "multi": 2.0 }} }}"#
    )?;

    let config = EdgeMaskConfig::from_path(file.path())?;
    assert_eq!(config.build()?.name, "FDoG");

    let engine = RecordingEngine::default();
    let clip = engine.source(VideoFormat::gray(8), 64, 48, 1);
    let mask = config.apply(&engine, &clip)?;

    assert_eq!(engine.count("std.Lut"), 1);
    assert_eq!(mask.info.format, Some(VideoFormat::gray(8)));
    Ok(())
}

#[test]
fn missing_config_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = EdgeMaskConfig::from_path(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, MaskError::Io(_)));
}
