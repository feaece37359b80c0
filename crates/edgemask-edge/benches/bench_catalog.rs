use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use edgemask_core::recording::RecordingEngine;
use edgemask_core::VideoFormat;
use edgemask_edge::{get_all_edge_detects, EdgeDetect, EdgeOperator, MaskParams};

fn bench_single_operator(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_mask");
    let params = MaskParams {
        lthr: 8.0,
        multi: 2.0,
        ..Default::default()
    };

    for name in ["Sobel", "Kirsch", "FreyChen", "ExKirsch", "SavitzkyGolayDeriv2Quart25"] {
        let Ok(op) = EdgeOperator::from_name(name) else {
            continue;
        };
        for bits in [8u8, 16, 32] {
            let id = format!("{name}/{bits}");
            group.bench_with_input(BenchmarkId::new("plan", &id), &bits, |b, bits| {
                b.iter(|| {
                    let engine = RecordingEngine::default();
                    let clip = engine.source(VideoFormat::yuv(*bits, 1, 1), 1920, 1080, 1);
                    black_box(op.edge_mask(&engine, &clip, black_box(&params)))
                })
            });
        }
    }
    group.finish();
}

fn bench_catalog(c: &mut Criterion) {
    c.bench_function("get_all_edge_detects", |b| {
        b.iter(|| {
            let engine = RecordingEngine::default();
            let clip = engine.source(VideoFormat::gray(16), 1920, 1080, 1);
            black_box(get_all_edge_detects(&engine, &clip, &MaskParams::default()))
        })
    });
}

criterion_group!(benches, bench_single_operator, bench_catalog);
criterion_main!(benches);
