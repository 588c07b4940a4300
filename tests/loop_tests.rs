//! The animation loop against in-memory sinks and stop signals.

use std::time::Duration;

use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_heart::core::{generate, ConfigError, HeartConfig};
use tui_heart::engine::{FrameOutput, FrameSink, HeartLoop, LoopPhase, StopReason, StopSignal};
use tui_heart::types::Style;

fn config() -> HeartConfig {
    let mut cfg = HeartConfig::for_style(Style::Classic);
    cfg.width = 24;
    cfg.height = 12;
    cfg.cloud.samples = 120;
    cfg.cloud.layers = 4;
    cfg.cloud.interior.count = 40;
    cfg.frame_interval_secs = 0.002;
    cfg.caption = Some("hey".into());
    cfg
}

fn heart_loop() -> HeartLoop {
    let cfg = config();
    HeartLoop::from_config(generate(&cfg.cloud, &mut StdRng::seed_from_u64(6)), &cfg).unwrap()
}

#[derive(Default)]
struct Collect {
    frames: Vec<String>,
    captions: usize,
}

impl FrameSink for Collect {
    fn present(&mut self, out: &FrameOutput<'_>) -> Result<()> {
        self.frames.push(out.frame.to_text());
        if out.caption.is_some() {
            self.captions += 1;
        }
        Ok(())
    }
}

/// Requests a stop on the n-th wait and records every timeout.
struct StopOn {
    n: usize,
    seen: Vec<Duration>,
}

impl StopSignal for StopOn {
    fn wait(&mut self, timeout: Duration) -> Result<bool> {
        self.seen.push(timeout);
        Ok(self.seen.len() >= self.n)
    }
}

struct FailingStop;

impl StopSignal for FailingStop {
    fn wait(&mut self, _timeout: Duration) -> Result<bool> {
        bail!("input closed")
    }
}

#[test]
fn interrupt_stops_after_whole_frames() {
    let mut lp = heart_loop();
    let mut sink = Collect::default();
    let mut stop = StopOn {
        n: 3,
        seen: Vec::new(),
    };
    let summary = lp.run(&mut sink, &mut stop).unwrap();

    assert_eq!(summary.reason, StopReason::Interrupted);
    assert_eq!(summary.frames, 3);
    assert_eq!(sink.frames.len(), 3);
    assert_eq!(sink.captions, 3);
    assert!(sink.frames.iter().all(|f| f.lines().count() == 12));
    assert_eq!(lp.exit_path(), Some(LoopPhase::Interrupted));
    assert_eq!(lp.phase(), LoopPhase::Stopped);

    // Pacing never asks for more than the frame interval.
    assert!(stop.seen.iter().all(|d| *d <= Duration::from_secs_f64(0.002)));
}

#[test]
fn stop_source_error_faults_after_presenting() {
    let mut lp = heart_loop();
    let mut sink = Collect::default();
    let err = lp.run(&mut sink, &mut FailingStop).unwrap_err();
    assert_eq!(lp.exit_path(), Some(LoopPhase::Faulted));
    assert_eq!(lp.phase(), LoopPhase::Stopped);
    assert_eq!(sink.frames.len(), 1);
    assert!(format!("{err:#}").contains("input closed"));
}

#[test]
fn frame_limit_ends_without_waiting_on_last_frame() {
    let mut lp = heart_loop().with_frame_limit(Some(4));
    let mut sink = Collect::default();
    let mut stop = StopOn {
        n: usize::MAX,
        seen: Vec::new(),
    };
    let summary = lp.run(&mut sink, &mut stop).unwrap();
    assert_eq!(summary.reason, StopReason::FrameLimit);
    assert_eq!(sink.frames.len(), 4);
    assert_eq!(stop.seen.len(), 3);
    assert!(summary.fps >= 0.0);
}

#[test]
fn zero_frame_limit_never_renders_or_waits() {
    let mut lp = heart_loop().with_frame_limit(Some(0));
    let mut sink = Collect::default();
    let mut stop = StopOn {
        n: usize::MAX,
        seen: Vec::new(),
    };
    let summary = lp.run(&mut sink, &mut stop).unwrap();
    assert_eq!(summary.frames, 0);
    assert!(sink.frames.is_empty());
    assert!(stop.seen.is_empty());
    assert_eq!(lp.exit_path(), Some(LoopPhase::Running));
}

#[test]
fn loop_rejects_interval_beyond_duration_range() {
    let cfg = config().with_target_fps(1e-20);
    let cloud = generate(&cfg.cloud, &mut StdRng::seed_from_u64(6));
    let err = HeartLoop::from_config(cloud, &cfg).err();
    assert!(matches!(err, Some(ConfigError::InvalidInterval(_))));
}
