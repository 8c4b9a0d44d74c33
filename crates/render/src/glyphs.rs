//! Static glyph table: one 8x16 cell per [`Glyph`] id.
//!
//! Each cell is 16 bytes: bytes 0..8 are the upper page (columns 0-7), bytes
//! 8..16 the lower page. Bit 0 of a byte is the top pixel of its page.

use crate::types::{Glyph, CELL_BYTES};

/// Look up the byte pattern for a glyph.
#[inline]
pub fn glyph_bytes(glyph: Glyph) -> &'static [u8; CELL_BYTES] {
    &GLYPHS[glyph.id() as usize]
}

static GLYPHS: [[u8; CELL_BYTES]; Glyph::COUNT] = [
    // '0'
    [0x00, 0xF8, 0x06, 0x86, 0x66, 0xF8, 0x00, 0x00, 0x00, 0x1F, 0x66, 0x61, 0x60, 0x1F, 0x00, 0x00],
    // '1'
    [0x00, 0x00, 0x18, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x7F, 0x60, 0x00, 0x00, 0x00],
    // '2'
    [0x00, 0x18, 0x06, 0x06, 0x86, 0x78, 0x00, 0x00, 0x00, 0x60, 0x78, 0x66, 0x61, 0x60, 0x00, 0x00],
    // '3'
    [0x00, 0x06, 0x06, 0x66, 0x9E, 0x06, 0x00, 0x00, 0x00, 0x18, 0x60, 0x60, 0x61, 0x1E, 0x00, 0x00],
    // '4'
    [0x00, 0x80, 0x60, 0x18, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x07, 0x06, 0x06, 0x7F, 0x06, 0x00, 0x00],
    // '5'
    [0x00, 0x7E, 0x66, 0x66, 0x66, 0x86, 0x00, 0x00, 0x00, 0x18, 0x60, 0x60, 0x60, 0x1F, 0x00, 0x00],
    // '6'
    [0x00, 0xE0, 0x98, 0x86, 0x86, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x61, 0x61, 0x61, 0x1E, 0x00, 0x00],
    // '7'
    [0x00, 0x06, 0x06, 0x86, 0x66, 0x1E, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x01, 0x00, 0x00, 0x00, 0x00],
    // '8'
    [0x00, 0x78, 0x86, 0x86, 0x86, 0x78, 0x00, 0x00, 0x00, 0x1E, 0x61, 0x61, 0x61, 0x1E, 0x00, 0x00],
    // '9'
    [0x00, 0x78, 0x86, 0x86, 0x86, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x61, 0x61, 0x19, 0x07, 0x00, 0x00],
    // 'A'
    [0x00, 0xF8, 0x86, 0x86, 0x86, 0xF8, 0x00, 0x00, 0x00, 0x7F, 0x01, 0x01, 0x01, 0x7F, 0x00, 0x00],
    // 'B'
    [0x00, 0xFE, 0x86, 0x86, 0x86, 0x78, 0x00, 0x00, 0x00, 0x7F, 0x61, 0x61, 0x61, 0x1E, 0x00, 0x00],
    // 'C'
    [0x00, 0xF8, 0x06, 0x06, 0x06, 0x18, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x60, 0x60, 0x18, 0x00, 0x00],
    // 'D'
    [0x00, 0xFE, 0x06, 0x06, 0x18, 0xE0, 0x00, 0x00, 0x00, 0x7F, 0x60, 0x60, 0x18, 0x07, 0x00, 0x00],
    // 'E'
    [0x00, 0xFE, 0x86, 0x86, 0x86, 0x06, 0x00, 0x00, 0x00, 0x7F, 0x61, 0x61, 0x61, 0x60, 0x00, 0x00],
    // 'F'
    [0x00, 0xFE, 0x86, 0x86, 0x86, 0x06, 0x00, 0x00, 0x00, 0x7F, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00],
    // 'G'
    [0x00, 0xF8, 0x06, 0x86, 0x86, 0x98, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x61, 0x61, 0x7F, 0x00, 0x00],
    // 'H'
    [0x00, 0xFE, 0x80, 0x80, 0x80, 0xFE, 0x00, 0x00, 0x00, 0x7F, 0x01, 0x01, 0x01, 0x7F, 0x00, 0x00],
    // 'I'
    [0x00, 0x00, 0x06, 0xFE, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x7F, 0x60, 0x00, 0x00, 0x00],
    // 'J'
    [0x00, 0x00, 0x00, 0x06, 0xFE, 0x06, 0x00, 0x00, 0x00, 0x18, 0x60, 0x60, 0x1F, 0x00, 0x00, 0x00],
    // 'K'
    [0x00, 0xFE, 0x80, 0x60, 0x18, 0x06, 0x00, 0x00, 0x00, 0x7F, 0x01, 0x06, 0x18, 0x60, 0x00, 0x00],
    // 'L'
    [0x00, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0x60, 0x60, 0x60, 0x60, 0x00, 0x00],
    // 'M'
    [0x00, 0xFE, 0x18, 0xE0, 0x18, 0xFE, 0x00, 0x00, 0x00, 0x7F, 0x00, 0x01, 0x00, 0x7F, 0x00, 0x00],
    // 'N'
    [0x00, 0xFE, 0x60, 0x80, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x7F, 0x00, 0x01, 0x06, 0x7F, 0x00, 0x00],
    // 'O'
    [0x00, 0xF8, 0x06, 0x06, 0x06, 0xF8, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x60, 0x60, 0x1F, 0x00, 0x00],
    // 'P'
    [0x00, 0xFE, 0x86, 0x86, 0x86, 0x78, 0x00, 0x00, 0x00, 0x7F, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00],
    // 'Q'
    [0x00, 0xF8, 0x06, 0x06, 0x06, 0xF8, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x66, 0x18, 0x67, 0x00, 0x00],
    // 'R'
    [0x00, 0xFE, 0x86, 0x86, 0x86, 0x78, 0x00, 0x00, 0x00, 0x7F, 0x01, 0x07, 0x19, 0x60, 0x00, 0x00],
    // 'S'
    [0x00, 0x78, 0x86, 0x86, 0x86, 0x06, 0x00, 0x00, 0x00, 0x60, 0x61, 0x61, 0x61, 0x1E, 0x00, 0x00],
    // 'T'
    [0x00, 0x06, 0x06, 0xFE, 0x06, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0x00, 0x00, 0x00, 0x00],
    // 'U'
    [0x00, 0xFE, 0x00, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x60, 0x60, 0x1F, 0x00, 0x00],
    // 'V'
    [0x00, 0xFE, 0x00, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x07, 0x18, 0x60, 0x18, 0x07, 0x00, 0x00],
    // 'W'
    [0x00, 0xFE, 0x00, 0x80, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x1F, 0x60, 0x1F, 0x00, 0x00],
    // 'X'
    [0x00, 0x1E, 0x60, 0x80, 0x60, 0x1E, 0x00, 0x00, 0x00, 0x78, 0x06, 0x01, 0x06, 0x78, 0x00, 0x00],
    // 'Y'
    [0x00, 0x7E, 0x80, 0x00, 0x80, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x01, 0x7E, 0x01, 0x00, 0x00, 0x00],
    // 'Z'
    [0x00, 0x06, 0x06, 0x86, 0x66, 0x1E, 0x00, 0x00, 0x00, 0x78, 0x66, 0x61, 0x60, 0x60, 0x00, 0x00],
    // blank
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // cactus big 0
    [0x00, 0xF0, 0xF0, 0x00, 0x00, 0xFE, 0xFF, 0xFF, 0x00, 0x03, 0x03, 0x02, 0x82, 0xFF, 0xFF, 0xFF],
    // cactus big 1
    [0xFE, 0x80, 0x80, 0xF8, 0xF8, 0x80, 0x00, 0x00, 0xFF, 0x82, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // cactus small 0
    [0xE0, 0x00, 0xF8, 0xFC, 0xFC, 0xF8, 0x00, 0xC0, 0x01, 0x81, 0xFF, 0xFF, 0xFF, 0xFF, 0x82, 0x03],
    // star 0
    [0x20, 0x60, 0x60, 0xE0, 0xE0, 0xE0, 0xF8, 0xFE, 0x00, 0x00, 0x30, 0x3C, 0x1F, 0x0F, 0x07, 0x07],
    // star 1
    [0xFE, 0xF8, 0xE0, 0x60, 0x60, 0x20, 0x00, 0x00, 0x0F, 0x1F, 0x3C, 0x30, 0x00, 0x00, 0x00, 0x00],
    // player stand 0
    [0xC0, 0x80, 0x00, 0x00, 0x00, 0x80, 0xC0, 0xFE, 0x03, 0x07, 0x0F, 0x1E, 0xFF, 0xFF, 0xBF, 0x1F],
    // player stand 1
    [0xFF, 0xFD, 0xFF, 0xBF, 0x2F, 0x2F, 0x0F, 0x0E, 0x3F, 0xFF, 0x8F, 0x07, 0x01, 0x02, 0x00, 0x00],
    // player run 1 0
    [0xC0, 0x80, 0x00, 0x00, 0x00, 0x80, 0xC0, 0xFE, 0x03, 0x07, 0x0F, 0x1E, 0xFF, 0x7F, 0x3F, 0x1F],
    // player run 1 1
    [0xFF, 0xFD, 0xFF, 0xBF, 0x2F, 0x2F, 0x0F, 0x0E, 0x3F, 0x7F, 0x4F, 0x07, 0x01, 0x02, 0x00, 0x00],
    // player run 2 0
    [0xC0, 0x80, 0x00, 0x00, 0x00, 0x80, 0xC0, 0xFE, 0x03, 0x07, 0x0F, 0x1E, 0x7F, 0x3F, 0x3F, 0x1F],
    // player run 2 1
    [0xFF, 0xFD, 0xFF, 0xBF, 0x2F, 0x2F, 0x0F, 0x0E, 0x3F, 0xFF, 0x8F, 0x07, 0x01, 0x02, 0x00, 0x00],
    // player dead 0
    [0xC0, 0x80, 0x00, 0x00, 0x00, 0x80, 0xC0, 0xFE, 0x03, 0x07, 0x0F, 0x1E, 0xFF, 0xFF, 0xBF, 0x1F],
    // player dead 1
    [0xD5, 0xDB, 0xD5, 0xDF, 0x1F, 0x3F, 0x1F, 0x1E, 0x3F, 0xFF, 0x8F, 0x07, 0x01, 0x02, 0x00, 0x00],
    // ground 0
    [0x01, 0x01, 0x05, 0x21, 0x01, 0x01, 0x09, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
];
