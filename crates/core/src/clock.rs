//! Frame timing and animation state.
//!
//! [`FrameClock`] keeps a bounded window of frame timestamps for the FPS
//! readout and computes how long to wait to hold the target interval.
//! [`AnimationState`] carries the rotation angles from frame to frame; it is
//! plain data owned by the loop so tests can drive it frame by frame.

use std::collections::VecDeque;
use std::f64::consts::TAU;
use std::time::{Duration, Instant};

use crate::config::AnimationConfig;
use crate::transform::{pulsation, Angles, Pose};

/// Elapsed time, frame-rate window and pacing.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    target: Duration,
    window: usize,
    stamps: VecDeque<f64>,
}

impl FrameClock {
    /// Start a clock now with a frame-rate window of `window` samples.
    pub fn new(window: usize, target: Duration) -> Self {
        Self::starting_at(Instant::now(), window, target)
    }

    pub fn starting_at(start: Instant, window: usize, target: Duration) -> Self {
        let window = window.max(1);
        Self {
            start,
            target,
            window,
            stamps: VecDeque::with_capacity(window),
        }
    }

    /// Restart the clock and drop all samples.
    pub fn restart(&mut self, start: Instant) {
        self.start = start;
        self.stamps.clear();
    }

    /// Seconds since start; 0 if `now` precedes the start.
    pub fn elapsed(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.start).as_secs_f64()
    }

    /// Record a frame completion timestamp (seconds since start).
    ///
    /// The oldest sample is dropped once the window is full.
    pub fn record(&mut self, timestamp: f64) {
        if self.stamps.len() == self.window {
            self.stamps.pop_front();
        }
        self.stamps.push_back(timestamp);
    }

    pub fn samples(&self) -> usize {
        self.stamps.len()
    }

    /// Frames per second over the window.
    ///
    /// Returns 0 with fewer than two samples or a non-positive time span.
    pub fn fps(&self) -> f64 {
        let (Some(&oldest), Some(&newest)) = (self.stamps.front(), self.stamps.back()) else {
            return 0.0;
        };
        if self.stamps.len() < 2 {
            return 0.0;
        }
        let span = newest - oldest;
        if span.is_nan() || span <= 0.0 {
            return 0.0;
        }
        self.stamps.len() as f64 / span
    }

    /// Time still to wait after a frame that took `frame_elapsed`.
    pub fn remaining(&self, frame_elapsed: Duration) -> Option<Duration> {
        self.target
            .checked_sub(frame_elapsed)
            .filter(|d| !d.is_zero())
    }
}

/// Rotation state threaded through the loop.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    pub angles: Angles,
    /// Elapsed seconds at the last [`AnimationState::advance`].
    pub elapsed: f64,
    pub frame: u64,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pose for a frame rendered at `elapsed` seconds.
    pub fn pose(&self, cfg: &AnimationConfig, elapsed: f64) -> Pose {
        Pose {
            scale: pulsation(elapsed, cfg.pulse_amplitude, cfg.pulse_rate),
            angles: self.angles,
        }
    }

    /// Move to the next frame after one rendered at `elapsed` seconds.
    ///
    /// The spin advances by a fixed step and wraps at 2π; tilt and roll are
    /// bounded sinusoids of time.
    pub fn advance(&mut self, cfg: &AnimationConfig, elapsed: f64) {
        self.angles.y = (self.angles.y + cfg.spin_step).rem_euclid(TAU);
        self.angles.x = cfg.tilt_amplitude * (elapsed * cfg.tilt_rate).sin();
        self.angles.z = cfg.roll_amplitude * (elapsed * cfg.roll_rate).cos();
        self.elapsed = elapsed;
        self.frame += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Style;

    #[test]
    fn fps_needs_two_samples() {
        let mut clock = FrameClock::new(30, Duration::from_millis(33));
        assert_eq!(clock.fps(), 0.0);
        clock.record(1.0);
        assert_eq!(clock.fps(), 0.0);
    }

    #[test]
    fn fps_guards_non_positive_span() {
        let mut clock = FrameClock::new(30, Duration::from_millis(33));
        clock.record(2.0);
        clock.record(2.0);
        assert_eq!(clock.fps(), 0.0);
        clock.record(1.0);
        assert_eq!(clock.fps(), 0.0);
    }

    #[test]
    fn window_is_bounded() {
        let mut clock = FrameClock::new(3, Duration::from_millis(33));
        for i in 0..10 {
            clock.record(i as f64);
        }
        assert_eq!(clock.samples(), 3);
        // 3 samples over 7..9
        assert!((clock.fps() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn remaining_is_none_when_late() {
        let clock = FrameClock::new(3, Duration::from_millis(33));
        assert_eq!(
            clock.remaining(Duration::from_millis(10)),
            Some(Duration::from_millis(23))
        );
        assert_eq!(clock.remaining(Duration::from_millis(33)), None);
        assert_eq!(clock.remaining(Duration::from_millis(50)), None);
    }

    #[test]
    fn elapsed_saturates_before_start() {
        let now = Instant::now();
        let clock = FrameClock::starting_at(now + Duration::from_secs(5), 3, Duration::ZERO);
        assert_eq!(clock.elapsed(now), 0.0);
    }

    #[test]
    fn spin_advances_by_constant_step() {
        let cfg = AnimationConfig::for_style(Style::Deep);
        let mut state = AnimationState::new();
        assert_eq!(state.pose(&cfg, 0.0).angles, Angles::default());

        state.advance(&cfg, 0.0);
        assert!((state.angles.y - 0.04).abs() < 1e-12);
        state.advance(&cfg, 0.1);
        assert!((state.angles.y - 0.08).abs() < 1e-12);
        assert_eq!(state.frame, 2);
    }

    #[test]
    fn secondary_axes_stay_bounded() {
        let cfg = AnimationConfig::for_style(Style::Deep);
        let mut state = AnimationState::new();
        for i in 0..5_000 {
            state.advance(&cfg, i as f64 * 0.033);
            assert!(state.angles.x.abs() <= cfg.tilt_amplitude + 1e-12);
            assert!(state.angles.z.abs() <= cfg.roll_amplitude + 1e-12);
            assert!((0.0..TAU).contains(&state.angles.y));
        }
    }
}
