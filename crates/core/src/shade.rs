//! Depth-driven colouring.

use crate::types::Rgb;

/// How rasterized cells are coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Default terminal foreground; only the glyph carries depth.
    #[default]
    Plain,
    /// Red whose intensity grows with nearness.
    Red,
    /// Hue cycles with time and shifts with depth.
    Rainbow,
}

impl ColorMode {
    /// Colour for a cell at normalized depth `level` (0 = far, 1 = near).
    pub fn color(self, level: f64, elapsed: f64) -> Option<Rgb> {
        let level = level.clamp(0.0, 1.0);
        match self {
            ColorMode::Plain => None,
            ColorMode::Red => Some(Rgb::new(unit_to_u8(0.3 + 0.7 * level), 0, 0)),
            ColorMode::Rainbow => Some(hsv_to_rgb((elapsed + level).rem_euclid(1.0), 1.0, 1.0)),
        }
    }
}

#[inline]
fn unit_to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0) as u8
}

/// HSV to RGB with all components in `[0, 1]`.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let h = h.clamp(0.0, 1.0);
    if s <= 0.0 {
        let c = unit_to_u8(v);
        return Rgb::new(c, c, c);
    }
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match (sector as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb::new(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b))
}
