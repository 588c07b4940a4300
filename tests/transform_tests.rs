//! Pulsation and rotation properties.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tui_heart::core::transform::flip_y;
use tui_heart::core::{pulsation, transform, Angles, Pose, Rasterizer, Rotation};
use tui_heart::types::{Point3, RAMP_CLASSIC};

fn random_point(rng: &mut StdRng) -> Point3 {
    Point3::new(
        rng.gen_range(-200.0..200.0),
        rng.gen_range(-200.0..200.0),
        rng.gen_range(-200.0..200.0),
    )
}

#[test]
fn zero_rotation_is_identity() {
    let mut rng = StdRng::seed_from_u64(11);
    let r = Rotation::from_angles(Angles::new(0.0, 0.0, 0.0));
    for _ in 0..500 {
        let p = random_point(&mut rng);
        let q = r.apply(p);
        assert!((p.x - q.x).abs() < 1e-9);
        assert!((p.y - q.y).abs() < 1e-9);
        assert!((p.z - q.z).abs() < 1e-9);
    }
}

#[test]
fn rotation_preserves_norm() {
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..200 {
        let angles = Angles::new(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        );
        let r = Rotation::from_angles(angles);
        for _ in 0..10 {
            let p = random_point(&mut rng);
            let q = r.apply(p);
            assert!((p.norm() - q.norm()).abs() < 1e-9 * p.norm().max(1.0));
        }
    }
}

#[test]
fn composition_matches_sequential_application() {
    let angles = Angles::new(0.3, -1.1, 2.4);
    let combined = Rotation::from_angles(angles);
    let p = Point3::new(1.0, 2.0, 3.0);
    let step = Rotation::about_z(angles.z)
        .apply(Rotation::about_y(angles.y).apply(Rotation::about_x(angles.x).apply(p)));
    let q = combined.apply(p);
    assert!((q.x - step.x).abs() < 1e-12);
    assert!((q.y - step.y).abs() < 1e-12);
    assert!((q.z - step.z).abs() < 1e-12);
}

#[test]
fn pulsation_stays_within_amplitude() {
    for &(a, w) in &[(0.05, 2.0), (0.08, 1.5)] {
        for i in 0..10_000 {
            let t = i as f64 * 0.0137;
            let s = pulsation(t, a, w);
            assert!(s >= 1.0 - a - 1e-12 && s <= 1.0 + a + 1e-12);
        }
    }
}

#[test]
fn transform_scales_then_flips() {
    let base = [Point3::new(1.0, 1.0, 1.0)];
    let out = transform(
        &base,
        Pose {
            scale: 2.0,
            angles: Angles::default(),
        },
    );
    assert_eq!(out[0], Point3::new(2.0, -2.0, 2.0));
    assert_eq!(flip_y(flip_y(base[0])), base[0]);
}

#[test]
fn top_of_heart_renders_at_top_of_grid() {
    // Lobes (positive y) and the tip (negative y) of the curve.
    let base = [Point3::new(0.0, 17.0, 0.0), Point3::new(0.0, -10.0, 1.0)];
    let pts = transform(&base, Pose::default());
    let frame = Rasterizer::new(RAMP_CLASSIC).rasterize(&pts, 20, 20);

    let lobe_row = (0..20).find(|&r| frame.get(10, r).is_some_and(|c| c.depth == 0.0));
    let tip_row = (0..20).find(|&r| frame.get(10, r).is_some_and(|c| c.depth == 1.0));
    let (lobe_row, tip_row) = (lobe_row.unwrap(), tip_row.unwrap());
    assert!(lobe_row < tip_row, "lobe {lobe_row} should be above tip {tip_row}");
}
