//! Projection and depth-buffered rasterization onto a character grid.
//!
//! Each pass is a pure function of the current point set:
//!
//! 1. Every axis is divided by its own max-abs value over the frame, then
//!    scaled to half the grid and centred. The projection always fits, at the
//!    cost of a small per-frame rescale when the extrema move.
//! 2. Points outside the grid are dropped.
//! 3. Surviving depths are normalized to `[0, 1]` and index the glyph ramp.
//! 4. A per-cell running maximum of `z` decides which point is drawn.

use crate::types::Point3;

/// One drawn cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenCell {
    pub glyph: char,
    /// Raw `z` of the winning point.
    pub depth: f64,
    /// Normalized depth in `[0, 1]`; 1 is nearest.
    pub level: f64,
}

/// Rasterized character grid plus its depth buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<Option<ScreenCell>>,
    depth: Vec<f64>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![None; len],
            depth: vec![f64::NEG_INFINITY; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Reset every cell to blank and every depth to `-inf`.
    ///
    /// Resizes in place when the dimensions change.
    pub fn reset(&mut self, width: u16, height: u16) {
        let len = (width as usize) * (height as usize);
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(len, None);
        self.depth.clear();
        self.depth.resize(len, f64::NEG_INFINITY);
    }

    #[inline(always)]
    fn idx(&self, col: u16, row: u16) -> Option<usize> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some((row as usize) * (self.width as usize) + (col as usize))
    }

    pub fn get(&self, col: u16, row: u16) -> Option<ScreenCell> {
        self.idx(col, row).and_then(|i| self.cells[i])
    }

    /// Glyph at a cell, `' '` when blank or out of range.
    pub fn glyph(&self, col: u16, row: u16) -> char {
        self.get(col, row).map_or(' ', |c| c.glyph)
    }

    pub fn depth_at(&self, col: u16, row: u16) -> f64 {
        self.idx(col, row)
            .map_or(f64::NEG_INFINITY, |i| self.depth[i])
    }

    /// Number of drawn cells.
    pub fn drawn(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Depth test: write `cell` when it is nearer than what the cell holds.
    fn plot(&mut self, col: u16, row: u16, cell: ScreenCell) {
        if let Some(i) = self.idx(col, row) {
            if cell.depth > self.depth[i] {
                self.depth[i] = cell.depth;
                self.cells[i] = Some(cell);
            }
        }
    }

    /// Rows joined with `\n`, cells left to right, blanks as spaces.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for row in 0..self.height {
            if row > 0 {
                out.push('\n');
            }
            for col in 0..self.width {
                out.push(self.glyph(col, row));
            }
        }
        out
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Maps points to a [`Frame`] through an ordered glyph ramp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rasterizer {
    ramp: Vec<char>,
}

impl Rasterizer {
    /// `ramp` runs from sparse (far) to dense (near). An empty ramp falls
    /// back to a single `'#'`.
    pub fn new(ramp: &str) -> Self {
        let mut ramp: Vec<char> = ramp.chars().collect();
        if ramp.is_empty() {
            ramp.push('#');
        }
        Self { ramp }
    }

    pub fn ramp(&self) -> &[char] {
        &self.ramp
    }

    /// Glyph used when every visible point shares one depth.
    pub fn mid_glyph(&self) -> char {
        self.ramp[(self.ramp.len() - 1) / 2]
    }

    /// Glyph for a normalized depth in `[0, 1]`.
    pub fn glyph_for(&self, level: f64) -> char {
        let last = self.ramp.len() - 1;
        let i = (level.clamp(0.0, 1.0) * last as f64) as usize;
        self.ramp[i.min(last)]
    }

    /// Rasterize `points` into `frame`, reusing its allocation.
    pub fn rasterize_into(&self, points: &[Point3], width: u16, height: u16, frame: &mut Frame) {
        frame.reset(width, height);
        if points.is_empty() || width == 0 || height == 0 {
            return;
        }

        let projection = Projection::fit(points, width, height);

        let mut z_min = f64::INFINITY;
        let mut z_max = f64::NEG_INFINITY;
        for &p in points {
            if projection.project(p).is_some() {
                z_min = z_min.min(p.z);
                z_max = z_max.max(p.z);
            }
        }
        if z_min > z_max {
            // Nothing landed on the grid.
            return;
        }

        let span = z_max - z_min;
        for &p in points {
            let Some((col, row)) = projection.project(p) else {
                continue;
            };
            let (glyph, level) = if span > 0.0 {
                let level = (p.z - z_min) / span;
                (self.glyph_for(level), level)
            } else {
                (self.mid_glyph(), 0.5)
            };
            frame.plot(
                col,
                row,
                ScreenCell {
                    glyph,
                    depth: p.z,
                    level,
                },
            );
        }
    }

    /// Allocating form of [`Rasterizer::rasterize_into`].
    pub fn rasterize(&self, points: &[Point3], width: u16, height: u16) -> Frame {
        let mut frame = Frame::new(width, height);
        self.rasterize_into(points, width, height, &mut frame);
        frame
    }
}

/// Per-frame screen mapping derived from the current extrema.
#[derive(Debug, Clone, Copy)]
struct Projection {
    inv_x: f64,
    inv_y: f64,
    half_w: f64,
    half_h: f64,
    width: f64,
    height: f64,
}

impl Projection {
    fn fit(points: &[Point3], width: u16, height: u16) -> Self {
        let mut max_x = 0.0f64;
        let mut max_y = 0.0f64;
        for p in points.iter().filter(|p| p.is_finite()) {
            max_x = max_x.max(p.x.abs());
            max_y = max_y.max(p.y.abs());
        }
        Self {
            inv_x: recip_or_one(max_x),
            inv_y: recip_or_one(max_y),
            half_w: (width / 2) as f64,
            half_h: (height / 2) as f64,
            width: width as f64,
            height: height as f64,
        }
    }

    /// Grid cell for `p`, or `None` when it falls off the grid.
    #[inline]
    fn project(&self, p: Point3) -> Option<(u16, u16)> {
        if !p.is_finite() {
            return None;
        }
        let col = (p.x * self.inv_x * self.half_w + self.half_w).trunc();
        let row = (p.y * self.inv_y * self.half_h + self.half_h).trunc();
        if col < 0.0 || col >= self.width || row < 0.0 || row >= self.height {
            return None;
        }
        Some((col as u16, row as u16))
    }
}

#[inline]
fn recip_or_one(max_abs: f64) -> f64 {
    if max_abs > 0.0 && max_abs.is_finite() {
        1.0 / max_abs
    } else {
        1.0
    }
}
