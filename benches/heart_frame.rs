use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_heart::core::{generate, transform, Angles, Animator, HeartConfig, Pose, Rasterizer};
use tui_heart::types::Style;

fn bench_generate(c: &mut Criterion) {
    let params = HeartConfig::for_style(Style::Deep).cloud;
    c.bench_function("generate_deep_cloud", |b| {
        b.iter(|| generate(black_box(&params), &mut StdRng::seed_from_u64(1)))
    });
}

fn bench_transform(c: &mut Criterion) {
    let params = HeartConfig::for_style(Style::Deep).cloud;
    let cloud = generate(&params, &mut StdRng::seed_from_u64(1));
    let pose = Pose {
        scale: 1.05,
        angles: Angles::new(0.1, 0.7, -0.05),
    };
    c.bench_function("transform_deep_cloud", |b| {
        b.iter(|| transform(black_box(cloud.points()), black_box(pose)))
    });
}

fn bench_rasterize(c: &mut Criterion) {
    let cfg = HeartConfig::for_style(Style::Deep);
    let cloud = generate(&cfg.cloud, &mut StdRng::seed_from_u64(1));
    let points = transform(cloud.points(), Pose::default());
    let rasterizer = Rasterizer::new(&cfg.ramp);
    c.bench_function("rasterize_deep_100x50", |b| {
        b.iter(|| rasterizer.rasterize(black_box(&points), cfg.width, cfg.height))
    });
}

fn bench_frame(c: &mut Criterion) {
    let cfg = HeartConfig::for_style(Style::Deep);
    let cloud = generate(&cfg.cloud, &mut StdRng::seed_from_u64(1));
    let mut animator = Animator::new(cloud, &cfg);
    let mut t = 0.0;
    c.bench_function("animator_frame_deep", |b| {
        b.iter(|| {
            t += 1.0 / 30.0;
            animator.render(black_box(t)).drawn()
        })
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_transform,
    bench_rasterize,
    bench_frame
);
criterion_main!(benches);
