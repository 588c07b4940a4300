//! Terminal "heart renderer" module.
//!
//! This is a small, animation-oriented rendering layer for the terminal.
//! It intentionally avoids widget/layout libraries and instead renders into a
//! simple framebuffer that is flushed through crossterm.
//!
//! Goals:
//! - Keep `core` pure and testable
//! - Emit whole frames only (compose first, then flush once)
//! - Restore the terminal on every exit path

pub mod fb;
pub mod heart_view;
pub mod renderer;
pub mod sink;

pub use tui_heart_core as core;
pub use tui_heart_engine as engine;
pub use tui_heart_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use heart_view::{extra_rows, AnchorY, HeartView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, encode_restore_into, TerminalRenderer};
pub use sink::TerminalSink;
