//! Terminal implementation of the loop's display sink.

use anyhow::Result;

use crate::engine::{FrameOutput, FrameSink};
use crate::fb::FrameBuffer;
use crate::heart_view::{HeartView, Viewport};
use crate::renderer::TerminalRenderer;

/// Composes each loop output into a framebuffer and flushes it.
///
/// Borrows the renderer so the caller keeps ownership of the terminal
/// session and can restore it after the loop ends, whatever the outcome.
pub struct TerminalSink<'a> {
    renderer: &'a mut TerminalRenderer,
    view: HeartView,
    fb: FrameBuffer,
    fallback: Viewport,
}

impl<'a> TerminalSink<'a> {
    /// `fallback` is used when the terminal size cannot be queried.
    pub fn new(renderer: &'a mut TerminalRenderer, view: HeartView, fallback: Viewport) -> Self {
        Self {
            renderer,
            view,
            fb: FrameBuffer::new(fallback.width, fallback.height),
            fallback,
        }
    }

    fn viewport(&self) -> Viewport {
        crossterm::terminal::size()
            .map(|(w, h)| Viewport::new(w, h))
            .unwrap_or(self.fallback)
    }
}

impl FrameSink for TerminalSink<'_> {
    fn present(&mut self, out: &FrameOutput<'_>) -> Result<()> {
        let viewport = self.viewport();
        self.view.render_into(out, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}
