//! TUI Heart (workspace facade crate).
//!
//! This package exposes the `tui_heart::{core,engine,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use tui_heart_core as core;
pub use tui_heart_engine as engine;
pub use tui_heart_input as input;
pub use tui_heart_term as term;
pub use tui_heart_types as types;
