//! Terminal heart animation (default binary).
//!
//! Generates the heart cloud once, then spins and pulses it at the target
//! frame rate until `q`, `Esc` or Ctrl+C. Rendering goes through a custom
//! framebuffer renderer on top of crossterm.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_heart::core::{generate, generate_default, Caption, ColorMode, HeartConfig};
use tui_heart::engine::{HeartLoop, LoopSummary, StopReason};
use tui_heart::input::KeyStopSignal;
use tui_heart::term::{extra_rows, AnchorY, HeartView, TerminalRenderer, TerminalSink, Viewport};
use tui_heart::types::Style;

#[derive(Parser, Debug)]
#[command(name = "tui-heart")]
#[command(about = "Rotating, pulsating 3D heart in the terminal")]
struct Cli {
    /// Visual preset
    #[arg(short, long, value_enum, default_value_t = StyleArg::Deep)]
    style: StyleArg,

    /// Depth colouring (defaults to the preset's)
    #[arg(short, long, value_enum)]
    color: Option<ColorArg>,

    /// Heart grid width in columns (defaults to the preset, clamped to the terminal)
    #[arg(long)]
    width: Option<u16>,

    /// Heart grid height in rows (defaults to the preset, clamped to the terminal)
    #[arg(long)]
    height: Option<u16>,

    /// Animated block-letter caption under the heart
    #[arg(long)]
    caption: Option<String>,

    /// Target frames per second
    #[arg(long)]
    fps: Option<f64>,

    /// Seed for the interior fill (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many frames
    #[arg(long)]
    frames: Option<u64>,

    /// Centre the picture vertically instead of anchoring it to the top
    #[arg(long)]
    center: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleArg {
    Classic,
    Deep,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ColorArg {
    Plain,
    Red,
    Rainbow,
}

impl From<StyleArg> for Style {
    fn from(s: StyleArg) -> Self {
        match s {
            StyleArg::Classic => Style::Classic,
            StyleArg::Deep => Style::Deep,
        }
    }
}

impl From<ColorArg> for ColorMode {
    fn from(c: ColorArg) -> Self {
        match c {
            ColorArg::Plain => ColorMode::Plain,
            ColorArg::Red => ColorMode::Red,
            ColorArg::Rainbow => ColorMode::Rainbow,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[heart] invalid configuration: {e:#}");
            return ExitCode::from(2);
        }
    };

    let mut term = TerminalRenderer::new();
    let result = term
        .enter()
        .context("failed to prepare terminal")
        .and_then(|_| run(&mut term, &cli, &config));

    // Always try to restore terminal state.
    let restored = term.exit();

    match result.and_then(|summary| restored.map(|_| summary)) {
        Ok(summary) => {
            report(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[heart] error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Resolve CLI flags against the preset and the current terminal size.
fn build_config(cli: &Cli) -> Result<HeartConfig> {
    let mut config = HeartConfig::for_style(cli.style.into());
    if let Some(color) = cli.color {
        config.color = color.into();
    }
    if let Some(fps) = cli.fps {
        config = config.with_target_fps(fps);
    }
    config.caption = cli.caption.clone().filter(|s| !s.trim().is_empty());

    let caption = config.caption.as_deref().map(Caption::new);
    let reserved = extra_rows(caption.as_ref());
    if let Ok((w, h)) = crossterm::terminal::size() {
        config.width = config.width.min(w);
        config.height = config.height.min(h.saturating_sub(reserved));
    }
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }

    config.validate()?;
    Ok(config)
}

fn run(term: &mut TerminalRenderer, cli: &Cli, config: &HeartConfig) -> Result<LoopSummary> {
    let cloud = match cli.seed {
        Some(seed) => generate(&config.cloud, &mut StdRng::seed_from_u64(seed)),
        None => generate_default(&config.cloud),
    };

    let mut heart = HeartLoop::from_config(cloud, config)?.with_frame_limit(cli.frames);

    let view = if cli.center {
        HeartView::new().with_anchor_y(AnchorY::Center)
    } else {
        HeartView::new()
    };
    let caption = config.caption.as_deref().map(Caption::new);
    let fallback = Viewport::new(
        config.width,
        config.height.saturating_add(extra_rows(caption.as_ref())),
    );
    let mut sink = TerminalSink::new(term, view, fallback);
    let mut stop = KeyStopSignal::new();

    heart.run(&mut sink, &mut stop)
}

fn report(summary: &LoopSummary) {
    match summary.reason {
        StopReason::Interrupted => println!(
            "[heart] stopped after {} frames ({:.1} fps)",
            summary.frames, summary.fps
        ),
        StopReason::FrameLimit => println!(
            "[heart] rendered {} frames ({:.1} fps)",
            summary.frames, summary.fps
        ),
    }
}
