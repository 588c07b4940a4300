//! Animator: one heart frame per call, no I/O.
//!
//! Owns the base cloud, the per-frame transform buffer, the reusable
//! [`Frame`] and the [`AnimationState`]. After the first frame a render
//! reuses every buffer and does not allocate.

use crate::clock::AnimationState;
use crate::cloud::PointCloud;
use crate::config::{AnimationConfig, HeartConfig};
use crate::raster::{Frame, Rasterizer};
use crate::shade::ColorMode;
use crate::transform::{transform_into, Pose};
use crate::types::Point3;

pub struct Animator {
    cloud: PointCloud,
    animation: AnimationConfig,
    rasterizer: Rasterizer,
    color: ColorMode,
    width: u16,
    height: u16,
    state: AnimationState,
    scratch: Vec<Point3>,
    frame: Frame,
    last_pose: Pose,
}

impl Animator {
    pub fn new(cloud: PointCloud, config: &HeartConfig) -> Self {
        let scratch = Vec::with_capacity(cloud.len());
        Self {
            cloud,
            animation: config.animation,
            rasterizer: Rasterizer::new(&config.ramp),
            color: config.color,
            width: config.width,
            height: config.height,
            state: AnimationState::new(),
            scratch,
            frame: Frame::new(config.width, config.height),
            last_pose: Pose::default(),
        }
    }

    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color
    }

    /// Grid size as `(width, height)`.
    pub fn grid(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Pose used for the most recent frame.
    pub fn last_pose(&self) -> Pose {
        self.last_pose
    }

    /// Most recently rendered frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Render the frame for `elapsed` seconds, then advance the state.
    pub fn render(&mut self, elapsed: f64) -> &Frame {
        let pose = self.state.pose(&self.animation, elapsed);
        transform_into(self.cloud.points(), pose, &mut self.scratch);
        self.rasterizer
            .rasterize_into(&self.scratch, self.width, self.height, &mut self.frame);
        self.state.advance(&self.animation, elapsed);
        self.last_pose = pose;
        &self.frame
    }
}
