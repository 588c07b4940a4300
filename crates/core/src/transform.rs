//! Per-frame pulsation and rotation.
//!
//! The base cloud is never modified; each frame writes transformed copies into
//! a caller-owned buffer.
//!
//! Orientation: after rotation the `y` axis is negated so that the top of the
//! heart (positive curve `y`) ends up on low row indices, matching terminal
//! rows that grow downwards. This is the only place the flip happens.

use crate::types::Point3;

/// Pulsation scale `1 + A·sin(ω·t)`, always within `[1-A, 1+A]`.
#[inline]
pub fn pulsation(elapsed: f64, amplitude: f64, rate: f64) -> f64 {
    1.0 + amplitude * (rate * elapsed).sin()
}

/// Rotation angles in radians around X, Y and Z.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angles {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Angles {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Everything the transformer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub scale: f64,
    pub angles: Angles,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            scale: 1.0,
            angles: Angles::default(),
        }
    }
}

/// 3x3 rotation matrix, row-major, applied to column vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    m: [[f64; 3]; 3],
}

impl Rotation {
    pub const IDENTITY: Rotation = Rotation {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    pub fn about_x(a: f64) -> Self {
        let (s, c) = a.sin_cos();
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]],
        }
    }

    pub fn about_y(a: f64) -> Self {
        let (s, c) = a.sin_cos();
        Self {
            m: [[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]],
        }
    }

    pub fn about_z(a: f64) -> Self {
        let (s, c) = a.sin_cos();
        Self {
            m: [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Combined `Rz·Ry·Rx`: X is applied first, then Y, then Z.
    pub fn from_angles(angles: Angles) -> Self {
        Self::about_z(angles.z)
            .compose(Self::about_y(angles.y))
            .compose(Self::about_x(angles.x))
    }

    /// Matrix product `self · rhs` (apply `rhs` first).
    pub fn compose(self, rhs: Rotation) -> Rotation {
        let mut m = [[0.0; 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = (0..3).map(|k| self.m[i][k] * rhs.m[k][j]).sum();
            }
        }
        Rotation { m }
    }

    #[inline]
    pub fn apply(&self, p: Point3) -> Point3 {
        let m = &self.m;
        Point3::new(
            m[0][0] * p.x + m[0][1] * p.y + m[0][2] * p.z,
            m[1][0] * p.x + m[1][1] * p.y + m[1][2] * p.z,
            m[2][0] * p.x + m[2][1] * p.y + m[2][2] * p.z,
        )
    }
}

/// Negate the vertical axis (math y-up to screen rows-down).
#[inline]
pub fn flip_y(p: Point3) -> Point3 {
    Point3::new(p.x, -p.y, p.z)
}

/// Scale, rotate and flip `base` into `out`.
///
/// `out` is cleared first; its allocation is reused across frames.
pub fn transform_into(base: &[Point3], pose: Pose, out: &mut Vec<Point3>) {
    let rot = Rotation::from_angles(pose.angles);
    out.clear();
    out.extend(base.iter().map(|&p| flip_y(rot.apply(p.scaled(pose.scale)))));
}

/// Allocating form of [`transform_into`].
pub fn transform(base: &[Point3], pose: Pose) -> Vec<Point3> {
    let mut out = Vec::with_capacity(base.len());
    transform_into(base, pose, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn close(a: Point3, b: Point3) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9 && (a.z - b.z).abs() < 1e-9
    }

    #[test]
    fn zero_angles_give_identity() {
        let r = Rotation::from_angles(Angles::default());
        let p = Point3::new(1.5, -2.0, 3.25);
        assert!(close(r.apply(p), p));
    }

    #[test]
    fn quarter_turn_about_y_maps_x_to_minus_z() {
        let r = Rotation::about_y(FRAC_PI_2);
        assert!(close(r.apply(Point3::new(1.0, 0.0, 0.0)), Point3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn x_is_applied_before_z() {
        // Rx(90°) takes +y to +z; Rz then leaves z alone.
        let r = Rotation::from_angles(Angles::new(FRAC_PI_2, 0.0, FRAC_PI_2));
        assert!(close(r.apply(Point3::new(0.0, 1.0, 0.0)), Point3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn transform_flips_y_and_leaves_base_untouched() {
        let base = vec![Point3::new(1.0, 2.0, 3.0)];
        let out = transform(&base, Pose::default());
        assert_eq!(out, vec![Point3::new(1.0, -2.0, 3.0)]);
        assert_eq!(base, vec![Point3::new(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn pulsation_bounds() {
        assert_eq!(pulsation(0.0, 0.08, 1.5), 1.0);
        let peak = pulsation(FRAC_PI_2 / 1.5, 0.08, 1.5);
        assert!((peak - 1.08).abs() < 1e-12);
    }
}
