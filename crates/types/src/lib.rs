//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the renderer.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (point generation, rasterization, terminal output).
//!
//! # Coordinate System
//!
//! World space is right-handed with `y` pointing up and `z` pointing towards
//! the viewer. Larger `z` means nearer; the rasterizer keeps the greatest `z`
//! per cell.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_INTERVAL_SECS` | 0.033 | Target frame interval (~30 FPS) |
//! | `CLASSIC_FPS_WINDOW` | 60 | Frame-rate window, classic style |
//! | `DEEP_FPS_WINDOW` | 30 | Frame-rate window, deep style |
//!
//! # Glyph Ramps
//!
//! Ramps are ordered from sparse (far) to dense (near):
//!
//! - [`RAMP_CLASSIC`]: 8 symbols
//! - [`RAMP_DETAILED`]: 70 symbols
//!
//! # Examples
//!
//! ```
//! use tui_heart_types::{Point3, RAMP_CLASSIC};
//!
//! let p = Point3::new(3.0, 4.0, 0.0);
//! assert_eq!(p.norm(), 5.0);
//! assert_eq!(p.scaled(2.0), Point3::new(6.0, 8.0, 0.0));
//!
//! assert_eq!(RAMP_CLASSIC.chars().count(), 8);
//! ```

/// Target frame interval in seconds (~30 FPS).
pub const FRAME_INTERVAL_SECS: f64 = 0.033;

/// Frame-rate estimation window for the classic style.
pub const CLASSIC_FPS_WINDOW: usize = 60;

/// Frame-rate estimation window for the deep style.
pub const DEEP_FPS_WINDOW: usize = 30;

/// Short glyph ramp, sparse to dense.
pub const RAMP_CLASSIC: &str = " .:!*OQ#";

/// Long glyph ramp, sparse to dense.
pub const RAMP_DETAILED: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Height in rows of a caption glyph.
pub const CAPTION_GLYPH_HEIGHT: usize = 5;

/// Width in columns of a caption glyph.
pub const CAPTION_GLYPH_WIDTH: usize = 5;

/// A point in 3D world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Point3 = Point3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Uniformly scale all three coordinates.
    #[inline]
    pub fn scaled(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }

    /// Euclidean distance from the origin.
    #[inline]
    pub fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Visual preset for the whole renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Light cloud, short ramp, spin around the vertical axis only.
    Classic,
    /// Dense cloud with a core pass, long ramp, spin plus tilt and roll.
    #[default]
    Deep,
}
