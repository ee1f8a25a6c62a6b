//! Benchmarks for the per-frame evaluation path

use arm_hold_test::{
    evaluator::PostureEvaluator,
    landmarks::{Landmark, LandmarkFrame},
    overlay::build_draw_list,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Deterministic pseudo-random landmark frames, jittered around a raised-arm
/// pose the way a real landmark engine jitters
fn synthetic_frames(count: usize) -> Vec<LandmarkFrame> {
    let mut rng: u32 = 12345;
    let mut next_noise = move || {
        rng = rng.wrapping_mul(1103515245).wrapping_add(12345);
        ((rng / 65536) % 1000) as f64 / 1000.0 - 0.5
    };

    (0..count)
        .map(|_| {
            let mut landmarks = vec![Landmark::new(0.5, 0.5); 33];
            for lm in &mut landmarks {
                lm.x = (lm.x + next_noise() * 0.01).clamp(0.0, 1.0);
                lm.y = (lm.y + next_noise() * 0.01).clamp(0.0, 1.0);
            }
            landmarks[11] = Landmark::new(0.3 + next_noise() * 0.01, 0.5 + next_noise() * 0.01);
            landmarks[15] = Landmark::new(0.45 + next_noise() * 0.01, 0.3 + next_noise() * 0.01);
            LandmarkFrame::new(landmarks)
        })
        .collect()
}

fn benchmark_evaluation(c: &mut Criterion) {
    let evaluator = PostureEvaluator::new(640, 480);
    let frames = synthetic_frames(100);

    c.bench_function("evaluate_single_frame", |b| {
        b.iter(|| black_box(evaluator.evaluate(black_box(&frames[0]))));
    });

    c.bench_function("evaluate_sequence_100", |b| {
        b.iter(|| {
            for frame in &frames {
                black_box(evaluator.evaluate(black_box(frame)));
            }
        });
    });

    c.bench_function("evaluate_and_build_draw_list", |b| {
        b.iter(|| {
            let result = evaluator.evaluate(black_box(&frames[0]));
            black_box(build_draw_list(&frames[0], &result, 640, 480))
        });
    });
}

criterion_group!(benches, benchmark_evaluation);
criterion_main!(benches);
