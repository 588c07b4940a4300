//! Keyboard-driven stop signal.
//!
//! In raw mode Ctrl+C arrives as a key event rather than SIGINT, so the quit
//! keys are the only stop path. Waiting is `event::poll` with the pacing
//! timeout, which doubles as the frame sleep and returns early on input.
//! Resizes need no handling here: the renderer redraws fully whenever the
//! framebuffer size changes.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::engine::StopSignal;
use crate::map::should_quit;

/// Stop signal fed by crossterm key events.
#[derive(Debug, Default)]
pub struct KeyStopSignal;

impl KeyStopSignal {
    pub fn new() -> Self {
        Self
    }
}

impl StopSignal for KeyStopSignal {
    fn wait(&mut self, timeout: Duration) -> Result<bool> {
        let deadline = Instant::now() + timeout;
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            if !event::poll(left)? {
                return Ok(false);
            }
            if let Event::Key(key) = event::read()? {
                if should_quit(key) {
                    return Ok(true);
                }
            }
            if left.is_zero() {
                return Ok(false);
            }
        }
    }
}
