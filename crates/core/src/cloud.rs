//! Point cloud generation for the heart volume.
//!
//! The cloud is built once at startup from the parametric heart curve
//!
//! ```text
//! x(t) = 16 sin³t
//! y(t) = 13 cos t - 5 cos 2t - 2 cos 3t - cos 4t
//! ```
//!
//! in up to three passes:
//!
//! 1. **Outline layers**: shrinking copies of the curve stacked along `-z`.
//! 2. **Interior fill**: random points through a volumetric form of the curve.
//! 3. **Core fill** (optional): extra random points near the central plane.
//!
//! Layers are deterministic. The fill passes draw from the caller's RNG, so a
//! seeded generator gives a reproducible cloud.

use std::f64::consts::{PI, TAU};

use rand::Rng;

use crate::types::Point3;

/// How the outline layer scale shrinks with layer index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Falloff {
    /// `1 - i/n`
    Linear,
    /// `1 - (i/n)^p`; `p > 1` packs more layers near the surface.
    Power(f64),
}

impl Falloff {
    /// Scale factor for layer `i` of `n`.
    pub fn factor(self, i: usize, n: usize) -> f64 {
        let f = i as f64 / n as f64;
        match self {
            Falloff::Linear => 1.0 - f,
            Falloff::Power(p) => 1.0 - f.powf(p),
        }
    }
}

/// Random points spread through the solid interior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteriorFill {
    pub count: usize,
    /// Upper bound (exclusive) of the radial factor.
    pub radius: f64,
    /// Depth extent multiplied by `cos φ`.
    pub depth: f64,
}

/// Random points biased towards the central plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoreFill {
    pub count: usize,
    pub radius: f64,
    /// Total depth range, centred on `z = 0`.
    pub depth_span: f64,
}

/// Parameters for [`generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct CloudParams {
    pub scale: f64,
    /// Curve samples per outline layer.
    pub samples: usize,
    pub layers: usize,
    pub falloff: Falloff,
    /// Depth offset between consecutive layers.
    pub layer_depth_step: f64,
    pub interior: InteriorFill,
    pub core: Option<CoreFill>,
}

impl CloudParams {
    /// Number of points [`generate`] produces for these parameters.
    pub fn expected_len(&self) -> usize {
        self.samples * self.layers + self.interior.count + self.core.map_or(0, |c| c.count)
    }
}

/// Fixed point set describing the heart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointCloud {
    points: Vec<Point3>,
}

impl PointCloud {
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Heart curve at parameter `t`, as `(x, y)`.
#[inline]
pub fn heart_curve(t: f64) -> (f64, f64) {
    let s = t.sin();
    let x = 16.0 * s * s * s;
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    (x, y)
}

/// Build the heart cloud.
pub fn generate<R: Rng + ?Sized>(params: &CloudParams, rng: &mut R) -> PointCloud {
    let mut points = Vec::with_capacity(params.expected_len());

    let curve: Vec<(f64, f64)> = (0..params.samples)
        .map(|k| heart_curve(TAU * k as f64 / params.samples as f64))
        .collect();

    for i in 0..params.layers {
        let factor = params.falloff.factor(i, params.layers);
        let z = -(i as f64) * params.layer_depth_step;
        points.extend(
            curve
                .iter()
                .map(|&(x, y)| Point3::new(factor * x, factor * y, z)),
        );
    }

    let interior = params.interior;
    for _ in 0..interior.count {
        let r = rng.gen::<f64>() * interior.radius;
        let theta = rng.gen::<f64>() * TAU;
        let phi = rng.gen::<f64>() * PI;
        let (x, y) = heart_curve(theta);
        let sp = phi.sin();
        points.push(Point3::new(
            r * x * sp,
            r * y * sp,
            r * interior.depth * phi.cos(),
        ));
    }

    if let Some(core) = params.core {
        for _ in 0..core.count {
            let r = rng.gen::<f64>() * core.radius;
            let theta = rng.gen::<f64>() * TAU;
            let (x, y) = heart_curve(theta);
            let z = rng.gen::<f64>() * core.depth_span - core.depth_span / 2.0;
            points.push(Point3::new(r * x, r * y, z));
        }
    }

    for p in &mut points {
        *p = p.scaled(params.scale);
    }

    PointCloud { points }
}

/// Build the heart cloud from the thread-local RNG.
pub fn generate_default(params: &CloudParams) -> PointCloud {
    generate(params, &mut rand::thread_rng())
}
