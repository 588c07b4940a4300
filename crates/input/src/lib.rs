//! Terminal input module (loop-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events to a stop request and implements the engine's
//! [`StopSignal`](crate::engine::StopSignal) on top of `event::poll`.

pub mod map;
pub mod signal;

pub use tui_heart_engine as engine;

pub use map::should_quit;
pub use signal::KeyStopSignal;
