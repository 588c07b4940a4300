//! Animation loop - drives the core renderer against a display sink.
//!
//! The loop is a small state machine:
//!
//! ```text
//! Starting -> Running -> (Interrupted | Faulted) -> Stopped
//! ```
//!
//! Each iteration renders one whole frame, hands it to a [`FrameSink`],
//! records its timestamp and then waits on the [`StopSignal`] for whatever is
//! left of the frame interval. That wait is the only suspension point; a stop
//! request arriving during it ends the loop after the current frame.
//!
//! Display setup and restoration belong to the caller. The loop never touches
//! the terminal directly, which keeps it testable with in-memory sinks.

use std::fmt::Write as _;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

pub use tui_heart_core as core;
pub use tui_heart_types as types;

use crate::core::{
    Animator, Caption, ColorMode, ConfigError, Frame, FrameClock, HeartConfig, PointCloud,
};

/// Everything a display needs to show one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameOutput<'a> {
    pub frame: &'a Frame,
    pub color: ColorMode,
    pub caption: Option<&'a Caption>,
    /// Seconds since the loop started.
    pub elapsed: f64,
    pub status: &'a str,
    /// Zero-based frame number.
    pub index: u64,
}

/// Write-only destination for finished frames.
pub trait FrameSink {
    fn present(&mut self, out: &FrameOutput<'_>) -> Result<()>;
}

/// Out-of-band stop request.
pub trait StopSignal {
    /// Wait up to `timeout`; return `true` as soon as a stop is requested.
    ///
    /// A zero timeout only checks for a pending request.
    fn wait(&mut self, timeout: Duration) -> Result<bool>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    Starting,
    Running,
    Interrupted,
    Faulted,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The stop signal fired.
    Interrupted,
    /// The configured frame limit was reached.
    FrameLimit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopSummary {
    pub frames: u64,
    pub reason: StopReason,
    /// Frame rate at the moment the loop stopped.
    pub fps: f64,
}

/// Rewrite `out` with the status text for `fps`.
pub fn status_line(out: &mut String, fps: f64) {
    out.clear();
    write!(out, "FPS: {fps:.1} | Press q or Ctrl+C to exit")
        .expect("formatting into a String never fails");
}

pub struct HeartLoop {
    animator: Animator,
    clock: FrameClock,
    caption: Option<Caption>,
    phase: LoopPhase,
    exit_path: Option<LoopPhase>,
    frame_limit: Option<u64>,
    frames: u64,
    status: String,
}

impl HeartLoop {
    pub fn new(animator: Animator, clock: FrameClock) -> Self {
        Self {
            animator,
            clock,
            caption: None,
            phase: LoopPhase::Starting,
            exit_path: None,
            frame_limit: None,
            frames: 0,
            status: String::with_capacity(64),
        }
    }

    /// Build the loop for a generated cloud, validating `config` first.
    pub fn from_config(cloud: PointCloud, config: &HeartConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let clock = FrameClock::new(config.fps_window, config.frame_interval()?);
        let mut this = Self::new(Animator::new(cloud, config), clock);
        this.caption = config
            .caption
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(Caption::new);
        Ok(this)
    }

    /// Stop after `limit` frames.
    pub fn with_frame_limit(mut self, limit: Option<u64>) -> Self {
        self.frame_limit = limit;
        self
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    /// Phase the loop left `Running` through: `Interrupted`, `Faulted`, or
    /// `Running` itself when the frame limit ended it. `None` until a run ends.
    pub fn exit_path(&self) -> Option<LoopPhase> {
        self.exit_path
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Run until the stop signal fires, the frame limit is hit, or an error.
    ///
    /// Every run ends in [`LoopPhase::Stopped`]; [`HeartLoop::exit_path`]
    /// tells how it got there. On error the error is returned and the caller
    /// still owns display cleanup.
    pub fn run<S, T>(&mut self, sink: &mut S, stop: &mut T) -> Result<LoopSummary>
    where
        S: FrameSink + ?Sized,
        T: StopSignal + ?Sized,
    {
        self.phase = LoopPhase::Starting;
        self.exit_path = None;
        self.clock.restart(Instant::now());
        self.phase = LoopPhase::Running;

        let result = loop {
            match self.step(sink, stop) {
                Ok(None) => {}
                Ok(Some(reason)) => {
                    if reason == StopReason::Interrupted {
                        self.phase = LoopPhase::Interrupted;
                    }
                    break Ok(LoopSummary {
                        frames: self.frames,
                        reason,
                        fps: self.clock.fps(),
                    });
                }
                Err(e) => {
                    self.phase = LoopPhase::Faulted;
                    break Err(e);
                }
            }
        };

        self.exit_path = Some(self.phase);
        self.phase = LoopPhase::Stopped;
        result
    }

    fn limit_reached(&self) -> bool {
        self.frame_limit.is_some_and(|limit| self.frames >= limit)
    }

    /// One iteration: render, present, record, pace.
    fn step<S, T>(&mut self, sink: &mut S, stop: &mut T) -> Result<Option<StopReason>>
    where
        S: FrameSink + ?Sized,
        T: StopSignal + ?Sized,
    {
        if self.limit_reached() {
            return Ok(Some(StopReason::FrameLimit));
        }

        let frame_start = Instant::now();
        let elapsed = self.clock.elapsed(frame_start);

        let color = self.animator.color_mode();
        let frame = self.animator.render(elapsed);

        self.clock.record(self.clock.elapsed(Instant::now()));
        let fps = self.clock.fps();
        status_line(&mut self.status, fps);

        let out = FrameOutput {
            frame,
            color,
            caption: self.caption.as_ref(),
            elapsed,
            status: &self.status,
            index: self.frames,
        };
        sink.present(&out)
            .with_context(|| format!("failed to present frame {}", self.frames))?;
        self.frames += 1;

        if self.limit_reached() {
            return Ok(Some(StopReason::FrameLimit));
        }

        let wait = self
            .clock
            .remaining(frame_start.elapsed())
            .unwrap_or(Duration::ZERO);
        if stop.wait(wait).context("failed to wait for stop signal")? {
            return Ok(Some(StopReason::Interrupted));
        }
        Ok(None)
    }
}
