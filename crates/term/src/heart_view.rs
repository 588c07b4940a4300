//! HeartView: maps a rendered heart frame into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom:
//!
//! ```text
//! heart grid            (frame.height rows, centred horizontally)
//! blank row             (only with a caption)
//! caption               (5 rows)
//! status line
//! ```

use crate::core::{Caption, ColorMode, Frame};
use crate::engine::FrameOutput;
use crate::fb::{CellStyle, FrameBuffer};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Rows the view needs below the heart grid.
pub fn extra_rows(caption: Option<&Caption>) -> u16 {
    let caption_rows = caption.map_or(0, |c| c.height() as u16 + 1);
    caption_rows + 1
}

pub struct HeartView {
    anchor_y: AnchorY,
}

impl Default for HeartView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Top,
        }
    }
}

impl HeartView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render one loop output into an existing framebuffer.
    ///
    /// The framebuffer is resized to the viewport and fully repainted, so the
    /// display only ever sees whole frames.
    pub fn render_into(&self, out: &FrameOutput<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame = out.frame;
        let block_h = frame.height() + extra_rows(out.caption);
        let start_x = viewport.width.saturating_sub(frame.width()) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(block_h) / 2,
            AnchorY::Top => 0,
        };

        self.draw_heart(fb, frame, out.color, out.elapsed, start_x, start_y);

        let mut y = start_y.saturating_add(frame.height());
        if let Some(caption) = out.caption {
            y = y.saturating_add(1);
            caption.for_each_cell(out.elapsed, viewport.width, |col, row, ch, color| {
                fb.set_signed(
                    col,
                    y as i32 + row as i32,
                    CellStyle::fg(color).into_cell(ch),
                );
            });
            y = y.saturating_add(caption.height() as u16);
        }

        fb.put_str(0, y, out.status, CellStyle::default().bold());
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, out: &FrameOutput<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(out, viewport, &mut fb);
        fb
    }

    fn draw_heart(
        &self,
        fb: &mut FrameBuffer,
        frame: &Frame,
        color: ColorMode,
        elapsed: f64,
        x0: u16,
        y0: u16,
    ) {
        for row in 0..frame.height() {
            for col in 0..frame.width() {
                let Some(cell) = frame.get(col, row) else {
                    continue;
                };
                let style = color
                    .color(cell.level, elapsed)
                    .map_or_else(CellStyle::default, CellStyle::fg);
                fb.put_char(
                    x0.saturating_add(col),
                    y0.saturating_add(row),
                    cell.glyph,
                    style,
                );
            }
        }
    }
}
