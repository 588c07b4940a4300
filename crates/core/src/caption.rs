//! Animated block-letter caption drawn under the heart.
//!
//! Each letter is a 5x5 bitmap. Letters get a hue that drifts with time and
//! with their position in the text, and each row sways sideways on its own
//! phase, which makes the text ripple.

use crate::shade::hsv_to_rgb;
use crate::types::{Rgb, CAPTION_GLYPH_HEIGHT, CAPTION_GLYPH_WIDTH};

type Bitmap = [&'static str; CAPTION_GLYPH_HEIGHT];

/// Columns between letters.
const LETTER_SPACING: usize = 1;

/// Character painted for a filled bitmap pixel.
pub const CAPTION_FILL: char = '█';

const BLANK: Bitmap = ["     ", "     ", "     ", "     ", "     "];

fn bitmap(ch: char) -> Bitmap {
    match ch {
        'A' => [" ### ", "#   #", "#####", "#   #", "#   #"],
        'B' => ["#### ", "#   #", "#### ", "#   #", "#### "],
        'C' => [" ####", "#    ", "#    ", "#    ", " ####"],
        'D' => ["#### ", "#   #", "#   #", "#   #", "#### "],
        'E' => ["#####", "#    ", "#### ", "#    ", "#####"],
        'F' => ["#####", "#    ", "#### ", "#    ", "#    "],
        'G' => [" ####", "#    ", "#  ##", "#   #", " ####"],
        'H' => ["#   #", "#   #", "#####", "#   #", "#   #"],
        'I' => ["#####", "  #  ", "  #  ", "  #  ", "#####"],
        'J' => ["#####", "   # ", "   # ", "#  # ", " ##  "],
        'K' => ["#   #", "#  # ", "###  ", "#  # ", "#   #"],
        'L' => ["#    ", "#    ", "#    ", "#    ", "#####"],
        'M' => ["#   #", "## ##", "# # #", "#   #", "#   #"],
        'N' => ["#   #", "##  #", "# # #", "#  ##", "#   #"],
        'O' => ["#####", "#   #", "#   #", "#   #", "#####"],
        'P' => ["#### ", "#   #", "#### ", "#    ", "#    "],
        'Q' => [" ### ", "#   #", "# # #", "#  # ", " ## #"],
        'R' => ["#### ", "#   #", "#### ", "#  # ", "#   #"],
        'S' => [" ####", "#    ", " ### ", "    #", "#### "],
        'T' => ["#####", "  #  ", "  #  ", "  #  ", "  #  "],
        'U' => ["#   #", "#   #", "#   #", "#   #", " ### "],
        'V' => ["#   #", "#   #", "#   #", " # # ", "  #  "],
        'W' => ["#   #", "#   #", "# # #", "## ##", "#   #"],
        'X' => ["#   #", " # # ", "  #  ", " # # ", "#   #"],
        'Y' => ["#   #", " # # ", "  #  ", "  #  ", "  #  "],
        'Z' => ["#####", "   # ", "  #  ", " #   ", "#####"],
        '0' => [" ### ", "#  ##", "# # #", "##  #", " ### "],
        '1' => ["  #  ", " ##  ", "  #  ", "  #  ", " ### "],
        '2' => [" ### ", "#   #", "  ## ", " #   ", "#####"],
        '3' => ["#### ", "    #", " ### ", "    #", "#### "],
        '4' => ["#   #", "#   #", "#####", "    #", "    #"],
        '5' => ["#####", "#    ", "#### ", "    #", "#### "],
        '6' => [" ### ", "#    ", "#### ", "#   #", " ### "],
        '7' => ["#####", "    #", "   # ", "  #  ", "  #  "],
        '8' => [" ### ", "#   #", " ### ", "#   #", " ### "],
        '9' => [" ### ", "#   #", " ####", "    #", " ### "],
        '!' => ["  #  ", "  #  ", "  #  ", "     ", "  #  "],
        '-' => ["     ", "     ", "#####", "     ", "     "],
        '.' => ["     ", "     ", "     ", "     ", "  #  "],
        '♥' | '❤' => [" # # ", "#####", "#####", " ### ", "  #  "],
        _ => BLANK,
    }
}

/// A caption ready to be laid out each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    text: String,
    glyphs: Vec<Bitmap>,
}

impl Caption {
    pub fn new(text: &str) -> Self {
        let text = text.to_uppercase();
        let glyphs = text.chars().map(bitmap).collect();
        Self { text, glyphs }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn height(&self) -> usize {
        CAPTION_GLYPH_HEIGHT
    }

    /// Total width in columns, trailing spacing included.
    pub fn width(&self) -> usize {
        self.glyphs.len() * (CAPTION_GLYPH_WIDTH + LETTER_SPACING)
    }

    /// Sideways sway of `row` at `elapsed`, in columns.
    pub fn sway(row: usize, elapsed: f64) -> i32 {
        (2.0 * (elapsed * 3.0 + row as f64 * 0.5).sin()) as i32
    }

    /// Colour of letter `index` at `elapsed`.
    pub fn letter_color(&self, index: usize, elapsed: f64) -> Rgb {
        let n = self.glyphs.len().max(1) as f64;
        let hue = (elapsed * 0.5 + index as f64 / n).rem_euclid(1.0);
        hsv_to_rgb(hue, 1.0, 1.0)
    }

    /// First column of `row`, centred in `width` and shifted by the sway.
    pub fn row_start(&self, row: usize, elapsed: f64, width: u16) -> i32 {
        let pad = (width as i32 - self.width() as i32).max(0) / 2;
        pad - Self::sway(row, elapsed)
    }

    /// Visit every filled pixel as `(col, row, ch, color)`.
    ///
    /// Columns may be negative or past `width`; callers clip.
    pub fn for_each_cell(&self, elapsed: f64, width: u16, mut f: impl FnMut(i32, usize, char, Rgb)) {
        for row in 0..CAPTION_GLYPH_HEIGHT {
            let start = self.row_start(row, elapsed, width);
            for (i, glyph) in self.glyphs.iter().enumerate() {
                let color = self.letter_color(i, elapsed);
                let base = start + (i * (CAPTION_GLYPH_WIDTH + LETTER_SPACING)) as i32;
                for (dx, px) in glyph[row].chars().enumerate() {
                    if px != ' ' {
                        f(base + dx as i32, row, CAPTION_FILL, color);
                    }
                }
            }
        }
    }
}
