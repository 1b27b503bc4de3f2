//! Read-only bitmap font resource
//!
//! A [`Font`] maps a contiguous range of character codes, starting at `first_code`, to glyphs
//! stored back to back. Every glyph row is `glyph_bytes_width` bytes wide and read MSB first,
//! the leftmost pixel being bit 7 of the first byte.

/// Bitmap font with variable glyph widths and a fixed glyph height
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Font<'a> {
    first_code: u8,
    glyph_height: u8,
    glyph_bytes_width: u8,
    glyph_widths: &'a [u8],
    bitmaps: &'a [u8],
}

/// A single glyph of a [`Font`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph<'a> {
    /// Width in pixels
    pub width: u8,
    /// Height in pixels
    pub height: u8,
    /// Bytes per bitmap row
    pub bytes_width: u8,
    /// `height * bytes_width` bytes, row after row
    pub bitmap: &'a [u8],
}

impl<'a> Font<'a> {
    /// Creates a font, usable in const context so the tables can live in flash
    ///
    /// - `first_code`: code of the first glyph in the tables
    /// - `glyph_height`: height of every glyph in pixels
    /// - `glyph_bytes_width`: bytes per bitmap row, enough to cover the widest glyph
    /// - `glyph_widths`: one width per glyph
    /// - `bitmaps`: `glyph_widths.len() * glyph_height * glyph_bytes_width` bytes
    pub const fn new(
        first_code: u8,
        glyph_height: u8,
        glyph_bytes_width: u8,
        glyph_widths: &'a [u8],
        bitmaps: &'a [u8],
    ) -> Self {
        Self {
            first_code,
            glyph_height,
            glyph_bytes_width,
            glyph_widths,
            bitmaps,
        }
    }

    /// Code of the first glyph
    pub fn first_code(&self) -> u8 {
        self.first_code
    }

    /// Height shared by every glyph
    pub fn glyph_height(&self) -> u8 {
        self.glyph_height
    }

    /// Bytes per bitmap row
    pub fn glyph_bytes_width(&self) -> u8 {
        self.glyph_bytes_width
    }

    /// Number of glyphs in the font
    pub fn len(&self) -> usize {
        self.glyph_widths.len()
    }

    /// `true` if the font holds no glyph
    pub fn is_empty(&self) -> bool {
        self.glyph_widths.is_empty()
    }

    /// Glyph index for a character code
    ///
    /// Codes below `first_code` or past the last glyph fall back to glyph 0.
    pub fn glyph_index(&self, code: u8) -> usize {
        match code.checked_sub(self.first_code) {
            Some(index) if (index as usize) < self.len() => index as usize,
            _ => 0,
        }
    }

    /// Glyph at `index`, `None` if the tables are too short to hold it
    pub fn glyph(&self, index: usize) -> Option<Glyph<'a>> {
        let width = *self.glyph_widths.get(index)?;
        let size = self.glyph_height as usize * self.glyph_bytes_width as usize;
        let start = index * size;
        let bitmap = self.bitmaps.get(start..start + size)?;
        Some(Glyph {
            width,
            height: self.glyph_height,
            bytes_width: self.glyph_bytes_width,
            bitmap,
        })
    }
}

impl<'a> Glyph<'a> {
    /// Bitmap bytes of row `row`, `None` past the last row
    pub fn row(&self, row: usize) -> Option<&'a [u8]> {
        let bytes_width = self.bytes_width as usize;
        let start = row.checked_mul(bytes_width)?;
        self.bitmap.get(start..start.checked_add(bytes_width)?)
    }
}
