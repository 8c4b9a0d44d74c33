//! Renderer: glyph, sprite, text and pixel drawing onto a [`FrameSurface`].
//!
//! Every drawing call goes through [`FrameSurface::write_byte`], so dirty
//! tracking stays exact no matter which primitive touched a page.

use arrayvec::ArrayVec;

use crate::glyphs::glyph_bytes;
use crate::surface::{DirtyPages, FrameSurface, PageSink};
use crate::types::{
    Glyph, SpriteId, CELL_WIDTH, HEIGHT, SCORE_DIGITS, SCORE_DISPLAY_MAX, WIDTH,
};

/// Decimal digits of `value`, most significant first.
///
/// The on-screen field is [`SCORE_DIGITS`] wide; values above
/// [`SCORE_DISPLAY_MAX`] saturate to all nines.
pub fn decimal_digits(value: u32) -> ArrayVec<Glyph, SCORE_DIGITS> {
    let mut rev: ArrayVec<u8, SCORE_DIGITS> = ArrayVec::new();
    let mut rest = value.min(SCORE_DISPLAY_MAX);
    loop {
        rev.push((rest % 10) as u8);
        rest /= 10;
        if rest == 0 || rev.is_full() {
            break;
        }
    }
    rev.iter().rev().map(|&d| Glyph::digit(d)).collect()
}

/// Draws into an owned frame surface.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    surface: FrameSurface,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            surface: FrameSurface::new(),
        }
    }

    pub fn surface(&self) -> &FrameSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut FrameSurface {
        &mut self.surface
    }

    /// Copy one 8x16 cell spanning `page` and `page + 1`.
    pub fn draw_glyph(&mut self, page: u8, column: u8, glyph: Glyph) {
        let bytes = glyph_bytes(glyph);
        let (upper, lower) = bytes.split_at(CELL_WIDTH as usize);
        for dx in 0..CELL_WIDTH {
            let Some(col) = column.checked_add(dx) else {
                break;
            };
            self.surface.write_byte(page, col, upper[dx as usize]);
            if let Some(next) = page.checked_add(1) {
                self.surface.write_byte(next, col, lower[dx as usize]);
            }
        }
    }

    /// Draw a 1- or 2-cell sprite with its top-left cell at (`page`, `column`).
    pub fn draw_sprite(&mut self, page: u8, column: u8, sprite: SpriteId) {
        self.draw_glyphs(page, column, sprite.cells());
    }

    /// Draw a horizontal run of cells, one every 8 columns.
    pub fn draw_glyphs(&mut self, page: u8, column: u8, glyphs: &[Glyph]) {
        for (i, &glyph) in glyphs.iter().enumerate() {
            let col = column as usize + i * CELL_WIDTH as usize;
            if col >= WIDTH {
                break;
            }
            self.draw_glyph(page, col as u8, glyph);
        }
    }

    /// Draw text; characters without a glyph render as blanks.
    pub fn draw_text(&mut self, page: u8, column: u8, text: &str) {
        let glyphs: ArrayVec<Glyph, { WIDTH / CELL_WIDTH as usize }> = text
            .chars()
            .take(WIDTH / CELL_WIDTH as usize)
            .map(|ch| Glyph::from_char(ch).unwrap_or(Glyph::BLANK))
            .collect();
        self.draw_glyphs(page, column, &glyphs);
    }

    /// Blank a footprint `width_cells` cells wide.
    pub fn erase(&mut self, page: u8, column: u8, width_cells: u8) {
        for i in 0..width_cells {
            let col = column as usize + i as usize * CELL_WIDTH as usize;
            if col >= WIDTH {
                break;
            }
            self.draw_glyph(page, col as u8, Glyph::BLANK);
        }
    }

    /// Draw `value` in decimal, left to right from the origin. Returns the digit count.
    pub fn draw_number(&mut self, page: u8, column: u8, value: u32) -> usize {
        let digits = decimal_digits(value);
        self.draw_glyphs(page, column, &digits);
        digits.len()
    }

    /// Set or clear one pixel. `x` in 0..128, `y` in 0..64; outside is clipped.
    pub fn set_pixel(&mut self, x: u8, y: u8, on: bool) {
        if x as usize >= WIDTH || y as usize >= HEIGHT {
            return;
        }
        let page = y / 8;
        let mask = 1u8 << (y % 8);
        let old = self.surface.read_byte(page, x);
        let new = if on { old | mask } else { old & !mask };
        self.surface.write_byte(page, x, new);
    }

    pub fn pixel(&self, x: u8, y: u8) -> bool {
        if x as usize >= WIDTH || y as usize >= HEIGHT {
            return false;
        }
        self.surface.read_byte(y / 8, x) & (1 << (y % 8)) != 0
    }

    /// Horizontal line from `x0` to `x1` inclusive.
    pub fn draw_hline(&mut self, x0: u8, x1: u8, y: u8, on: bool) {
        let (a, b) = ordered(x0, x1);
        for x in a..=b {
            self.set_pixel(x, y, on);
        }
    }

    /// Vertical line from `y0` to `y1` inclusive.
    pub fn draw_vline(&mut self, x: u8, y0: u8, y1: u8, on: bool) {
        let (a, b) = ordered(y0, y1);
        for y in a..=b {
            self.set_pixel(x, y, on);
        }
    }

    /// Rectangle outline with inclusive corners.
    pub fn draw_rect(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, on: bool) {
        self.draw_hline(x0, x1, y0, on);
        self.draw_hline(x0, x1, y1, on);
        self.draw_vline(x0, y0, y1, on);
        self.draw_vline(x1, y0, y1, on);
    }

    /// Filled rectangle with inclusive corners.
    pub fn fill_rect(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, on: bool) {
        let (ya, yb) = ordered(y0, y1);
        for y in ya..=yb {
            self.draw_hline(x0, x1, y, on);
        }
    }

    /// Blank the whole drawing buffer (dirty pages follow from the diff).
    pub fn clear(&mut self) {
        self.surface.clear();
    }

    /// Flush changed pages to `sink`.
    pub fn swap<S: PageSink>(&mut self, sink: &mut S) -> Result<DirtyPages, S::Error> {
        self.surface.swap(sink)
    }

    /// Flush every page to `sink`.
    pub fn force_flush<S: PageSink>(&mut self, sink: &mut S) -> Result<(), S::Error> {
        self.surface.force_flush(sink)
    }
}

fn ordered(a: u8, b: u8) -> (u8, u8) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
