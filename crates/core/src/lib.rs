//! Core heart renderer - pure, deterministic given a seed, and testable
//!
//! This crate contains the geometry, projection and timing logic. It has
//! **no dependencies** on the terminal or any I/O, making it:
//!
//! - **Deterministic**: a seeded RNG produces the same cloud and frames
//! - **Testable**: every stage is a plain function or a small struct
//! - **Portable**: frames are plain grids; any display can consume them
//! - **Fast**: steady-state frames reuse all buffers and do not allocate
//!
//! # Module Structure
//!
//! - [`cloud`]: heart point cloud (outline layers, interior and core fill)
//! - [`transform`]: pulsation, `Rz·Ry·Rx` rotation, vertical flip
//! - [`raster`]: per-frame normalisation, depth buffer, glyph ramp
//! - [`shade`]: depth colouring (plain, red intensity, rainbow hue)
//! - [`clock`]: frame-rate window, pacing and animation state
//! - [`caption`]: block-letter caption with hue drift and sway
//! - [`config`]: presets and startup validation
//! - [`animation`]: composes the stages into one frame per call
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tui_heart_core::{generate, Animator, HeartConfig};
//! use tui_heart_core::types::Style;
//!
//! let mut config = HeartConfig::for_style(Style::Classic);
//! config.width = 40;
//! config.height = 20;
//! config.validate().unwrap();
//!
//! let cloud = generate(&config.cloud, &mut StdRng::seed_from_u64(1));
//! assert_eq!(cloud.len(), config.cloud.expected_len());
//!
//! let mut animator = Animator::new(cloud, &config);
//! let frame = animator.render(0.0);
//! assert!(frame.drawn() > 0);
//! ```

pub mod animation;
pub mod caption;
pub mod clock;
pub mod cloud;
pub mod config;
pub mod raster;
pub mod shade;
pub mod transform;

pub use tui_heart_types as types;

// Re-export commonly used types for convenience
pub use animation::Animator;
pub use caption::Caption;
pub use clock::{AnimationState, FrameClock};
pub use cloud::{generate, generate_default, CloudParams, CoreFill, Falloff, InteriorFill, PointCloud};
pub use config::{AnimationConfig, ConfigError, HeartConfig};
pub use raster::{Frame, Rasterizer, ScreenCell};
pub use shade::ColorMode;
pub use transform::{pulsation, transform, transform_into, Angles, Pose, Rotation};
