//! Startup configuration and validation.
//!
//! Every tunable is fixed once the loop starts. [`HeartConfig::for_style`]
//! provides the presets; callers may override individual fields and must
//! call [`HeartConfig::validate`] before building an animator.

use std::time::Duration;

use thiserror::Error;

use crate::cloud::{CloudParams, CoreFill, Falloff, InteriorFill};
use crate::shade::ColorMode;
use crate::types::{
    Style, CLASSIC_FPS_WINDOW, DEEP_FPS_WINDOW, FRAME_INTERVAL_SECS, RAMP_CLASSIC, RAMP_DETAILED,
};

/// Configuration errors detected before the terminal is touched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: u16, height: u16 },

    #[error("point cloud needs at least one sample and one layer (samples={samples}, layers={layers})")]
    EmptyCloud { samples: usize, layers: usize },

    #[error("glyph ramp must not be empty")]
    EmptyRamp,

    #[error("scale must be finite and positive, got {0}")]
    InvalidScale(f64),

    #[error("pulsation amplitude must be in [0, 1), got {0}")]
    InvalidAmplitude(f64),

    #[error("frame interval must be a positive, representable duration, got {0}s")]
    InvalidInterval(f64),

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("frame-rate window must hold at least 2 samples, got {0}")]
    WindowTooSmall(usize),
}

/// Time-derived animation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    /// Pulsation amplitude `A`; the scale stays within `[1-A, 1+A]`.
    pub pulse_amplitude: f64,
    /// Pulsation angular rate in radians per second.
    pub pulse_rate: f64,
    /// Rotation increment around the vertical axis, per frame.
    pub spin_step: f64,
    pub tilt_amplitude: f64,
    pub tilt_rate: f64,
    pub roll_amplitude: f64,
    pub roll_rate: f64,
}

impl AnimationConfig {
    pub fn for_style(style: Style) -> Self {
        match style {
            Style::Classic => Self {
                pulse_amplitude: 0.05,
                pulse_rate: 2.0,
                spin_step: 0.05,
                tilt_amplitude: 0.0,
                tilt_rate: 0.0,
                roll_amplitude: 0.0,
                roll_rate: 0.0,
            },
            Style::Deep => Self {
                pulse_amplitude: 0.08,
                pulse_rate: 1.5,
                spin_step: 0.04,
                tilt_amplitude: 0.2,
                tilt_rate: 0.5,
                roll_amplitude: 0.1,
                roll_rate: 0.3,
            },
        }
    }
}

/// Complete renderer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct HeartConfig {
    pub width: u16,
    pub height: u16,
    pub cloud: CloudParams,
    pub animation: AnimationConfig,
    pub ramp: String,
    pub color: ColorMode,
    pub frame_interval_secs: f64,
    pub fps_window: usize,
    pub caption: Option<String>,
}

impl HeartConfig {
    pub fn for_style(style: Style) -> Self {
        match style {
            Style::Classic => Self {
                width: 80,
                height: 40,
                cloud: CloudParams {
                    scale: 8.0,
                    samples: 1000,
                    layers: 30,
                    falloff: Falloff::Linear,
                    layer_depth_step: 0.5,
                    interior: InteriorFill {
                        count: 500,
                        radius: 0.8,
                        depth: 15.0,
                    },
                    core: None,
                },
                animation: AnimationConfig::for_style(style),
                ramp: RAMP_CLASSIC.to_string(),
                color: ColorMode::Plain,
                frame_interval_secs: FRAME_INTERVAL_SECS,
                fps_window: CLASSIC_FPS_WINDOW,
                caption: None,
            },
            Style::Deep => Self {
                width: 100,
                height: 50,
                cloud: CloudParams {
                    scale: 10.0,
                    samples: 3000,
                    layers: 70,
                    falloff: Falloff::Power(1.5),
                    layer_depth_step: 1.0 / 1.2,
                    interior: InteriorFill {
                        count: 6000,
                        radius: 0.95,
                        depth: 25.0,
                    },
                    core: Some(CoreFill {
                        count: 3000,
                        radius: 0.5,
                        depth_span: 20.0,
                    }),
                },
                animation: AnimationConfig::for_style(style),
                ramp: RAMP_DETAILED.to_string(),
                color: ColorMode::Red,
                frame_interval_secs: FRAME_INTERVAL_SECS,
                fps_window: DEEP_FPS_WINDOW,
                caption: None,
            },
        }
    }

    /// Set the target frame rate; non-positive rates are left to `validate`.
    pub fn with_target_fps(mut self, fps: f64) -> Self {
        self.frame_interval_secs = if fps > 0.0 { 1.0 / fps } else { f64::NAN };
        self
    }

    /// Frame interval as a [`Duration`].
    pub fn frame_interval(&self) -> Result<Duration, ConfigError> {
        let secs = self.frame_interval_secs;
        if secs.is_nan() || secs <= 0.0 {
            return Err(ConfigError::InvalidInterval(secs));
        }
        Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidInterval(secs))
    }

    /// Every float that feeds point generation or the per-frame pose.
    fn finite_fields(&self) -> impl Iterator<Item = (&'static str, f64)> {
        let cloud = &self.cloud;
        let anim = &self.animation;
        let power = match cloud.falloff {
            Falloff::Linear => 1.0,
            Falloff::Power(p) => p,
        };
        let core = cloud.core.map_or([0.0; 2], |c| [c.radius, c.depth_span]);
        [
            ("falloff power", power),
            ("layer depth step", cloud.layer_depth_step),
            ("interior radius", cloud.interior.radius),
            ("interior depth", cloud.interior.depth),
            ("core radius", core[0]),
            ("core depth span", core[1]),
            ("pulse rate", anim.pulse_rate),
            ("spin step", anim.spin_step),
            ("tilt amplitude", anim.tilt_amplitude),
            ("tilt rate", anim.tilt_rate),
            ("roll amplitude", anim.roll_amplitude),
            ("roll rate", anim.roll_rate),
        ]
        .into_iter()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if self.cloud.samples == 0 || self.cloud.layers == 0 {
            return Err(ConfigError::EmptyCloud {
                samples: self.cloud.samples,
                layers: self.cloud.layers,
            });
        }
        if self.ramp.is_empty() {
            return Err(ConfigError::EmptyRamp);
        }
        let scale = self.cloud.scale;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ConfigError::InvalidScale(scale));
        }
        let amp = self.animation.pulse_amplitude;
        if !(0.0..1.0).contains(&amp) {
            return Err(ConfigError::InvalidAmplitude(amp));
        }
        if let Some((field, value)) = self.finite_fields().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { field, value });
        }
        self.frame_interval()?;
        if self.fps_window < 2 {
            return Err(ConfigError::WindowTooSmall(self.fps_window));
        }
        Ok(())
    }
}

impl Default for HeartConfig {
    fn default() -> Self {
        Self::for_style(Style::default())
    }
}
