//! Bitmap-font text rendering into a [`Display`]
//!
//! Glyphs are painted at the text cursor, which then moves right by the glyph width. Glyph
//! cells are opaque: set bitmap bits are painted with the requested state and clear bits with
//! its complement, so whatever was underneath the cell is overwritten.
//!
//! The cursor never wraps to the next line, laying out multiple lines is up to the caller.

use crate::color::PixelState;
use crate::font::Font;
use crate::graphics::Display;
use bit_field::BitField;

/// Position where the next glyph is painted (its top left corner)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Column
    pub x: u32,
    /// Row
    pub y: u32,
}

/// Bit `i` of `byte`, counting from the most significant bit
pub(crate) fn msb_bit(byte: u8, i: u32) -> bool {
    byte.get_bit(7 - i as usize)
}

impl<const WIDTH: u32, const HEIGHT: u32, const BYTECOUNT: usize>
    Display<WIDTH, HEIGHT, BYTECOUNT>
{
    /// Moves the text cursor
    ///
    /// The position is not checked here, a glyph which does not fit is dropped when drawn.
    pub fn set_cursor(&mut self, x: u32, y: u32) {
        self.cursor = Cursor { x, y };
    }

    /// Current text cursor
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Draws the glyph for `code` using its own width
    ///
    /// See [`Display::draw_glyph_fixed_width`].
    pub fn draw_glyph(&mut self, code: u8, font: &Font<'_>, state: PixelState) -> bool {
        self.draw_glyph_fixed_width(code, font, 0, state)
    }

    /// Draws the glyph for `code` at the cursor and advances the cursor
    ///
    /// A `fixed_width` of 0 paints the glyph with its own width, any other value forces that
    /// width. Codes the font does not cover are drawn as its first glyph.
    ///
    /// Returns `false` without touching the buffer or the cursor if the glyph would not fit
    /// entirely on the display.
    pub fn draw_glyph_fixed_width(
        &mut self,
        code: u8,
        font: &Font<'_>,
        fixed_width: u8,
        state: PixelState,
    ) -> bool {
        let Some(glyph) = font.glyph(font.glyph_index(code)) else {
            log::trace!("no glyph for code {:#04x}", code);
            return false;
        };

        let width = u32::from(if fixed_width == 0 {
            glyph.width
        } else {
            fixed_width
        });

        let Cursor { x, y } = self.cursor;
        if x.saturating_add(width) > WIDTH || y.saturating_add(u32::from(glyph.height)) > HEIGHT {
            log::trace!("glyph {:#04x} clipped at ({}, {})", code, x, y);
            return false;
        }

        for j in 0..u32::from(glyph.height) {
            let mut remaining = width;
            for (w, &chr) in (0u32..).zip(glyph.row(j as usize).unwrap_or_default()) {
                let bits = remaining.min(8);
                remaining -= bits;

                for i in 0..bits {
                    let pixel = if msb_bit(chr, i) { state } else { !state };
                    self.set_pixel(x + i + w * 8, y + j, pixel);
                }
            }
        }

        self.cursor.x += width;
        true
    }

    /// Draws `text` glyph after glyph with their own widths
    ///
    /// See [`Display::draw_string_fixed_width`].
    pub fn draw_string(&mut self, text: &str, font: &Font<'_>, state: PixelState) -> usize {
        self.draw_string_fixed_width(text, font, 0, state)
    }

    /// Draws the bytes of `text` up to the first NUL, returns how many glyphs were painted
    ///
    /// Once a glyph does not fit the cursor stays put, so the rest of the line is dropped
    /// as well.
    pub fn draw_string_fixed_width(
        &mut self,
        text: &str,
        font: &Font<'_>,
        fixed_width: u8,
        state: PixelState,
    ) -> usize {
        text.bytes()
            .take_while(|&code| code != 0)
            .filter(|&code| self.draw_glyph_fixed_width(code, font, fixed_width, state))
            .count()
    }
}
