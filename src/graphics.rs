//! Page-addressed framebuffer and primitive drawing

use crate::color::PixelState;
use crate::text::Cursor;
use bit_field::BitField;

#[cfg(feature = "graphics")]
use embedded_graphics_core::{pixelcolor::BinaryColor, prelude::*};

/// Display buffer used for drawing, rendered on the OLED with
/// [`Ssd1306::display_frame`](crate::ssd1306::Ssd1306::display_frame)
///
/// - WIDTH: width in pixels
/// - HEIGHT: height in pixels
/// - BYTECOUNT: This is redundant with previous data and should be removed when const generic
///   expressions are stabilized, use [`crate::buffer_len`]
///
/// The buffer is organized in pages: each page is a row of `WIDTH` bytes and every byte holds
/// 8 vertically stacked pixels, bit 0 being the topmost one. Pixel `(x, y)` therefore lives in
/// byte `x + (y / 8) * WIDTH`, bit `y % 8`.
///
/// Nothing drawn outside of the buffer is an error: out of range pixels, lines and glyphs are
/// silently dropped.
///
/// A `BYTECOUNT` other than `buffer_len(WIDTH, HEIGHT)` is rejected at build time:
///
/// ```compile_fail
/// use ssd1306_page::graphics::Display;
///
/// let display = Display::<128, 64, 512>::default();
/// ```
pub struct Display<const WIDTH: u32, const HEIGHT: u32, const BYTECOUNT: usize> {
    buffer: [u8; BYTECOUNT],
    pub(crate) cursor: Cursor,
}

impl<const WIDTH: u32, const HEIGHT: u32, const BYTECOUNT: usize> Default
    for Display<WIDTH, HEIGHT, BYTECOUNT>
{
    /// Initialize the display with every pixel [`PixelState::Off`] and the cursor at the origin
    // inline is necessary here to allow heap allocation via Box on stack limited programs
    #[inline(always)]
    fn default() -> Self {
        let () = Self::BUFFER_LEN_MATCHES;
        Self {
            buffer: [0u8; BYTECOUNT],
            cursor: Cursor::default(),
        }
    }
}

/// For use with embedded_graphics
#[cfg(feature = "graphics")]
impl<const WIDTH: u32, const HEIGHT: u32, const BYTECOUNT: usize> DrawTarget
    for Display<WIDTH, HEIGHT, BYTECOUNT>
{
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // negative coordinates are clipped like any other out of range pixel
            if let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) {
                self.set_pixel(x, y, color.into());
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.into());
        Ok(())
    }
}

/// For use with embedded_graphics
#[cfg(feature = "graphics")]
impl<const WIDTH: u32, const HEIGHT: u32, const BYTECOUNT: usize> OriginDimensions
    for Display<WIDTH, HEIGHT, BYTECOUNT>
{
    fn size(&self) -> Size {
        Size::new(WIDTH, HEIGHT)
    }
}

impl<const WIDTH: u32, const HEIGHT: u32, const BYTECOUNT: usize>
    Display<WIDTH, HEIGHT, BYTECOUNT>
{
    // every in range pixel must be backed by a byte of the buffer
    const BUFFER_LEN_MATCHES: () = assert!(
        BYTECOUNT == crate::buffer_len(WIDTH as usize, HEIGHT as usize),
        "BYTECOUNT must be buffer_len(WIDTH, HEIGHT)"
    );

    /// get internal buffer to use it (to flush it to the oled)
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        WIDTH
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        HEIGHT
    }

    /// Number of 8 pixel tall pages
    pub const fn pages(&self) -> u32 {
        HEIGHT.div_ceil(8)
    }

    /// Sets every pixel to `state`
    pub fn fill(&mut self, state: PixelState) {
        self.buffer.fill(state.fill_byte());
    }

    /// Set a specific pixel, ignored if `(x, y)` is outside of the display
    pub fn set_pixel(&mut self, x: u32, y: u32, state: PixelState) {
        if let Some(index) = byte_index(WIDTH, HEIGHT, x, y) {
            self.buffer[index].set_bit((y % 8) as usize, state.is_on());
        }
    }

    /// Get a specific pixel, `None` if `(x, y)` is outside of the display
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<PixelState> {
        byte_index(WIDTH, HEIGHT, x, y)
            .map(|index| self.buffer[index].get_bit((y % 8) as usize).into())
    }

    /// Draws a line spanning the full height at column `x`
    ///
    /// Whole page bytes are written, so this is 8 times cheaper than setting the pixels one by
    /// one. Ignored if `x` is outside of the display.
    pub fn draw_vline(&mut self, x: u32, state: PixelState) {
        if x >= WIDTH {
            return;
        }
        let value = state.fill_byte();
        for page in 0..self.pages() {
            self.buffer[(x + page * WIDTH) as usize] = value;
        }
    }

    /// Draws a line spanning the full width at row `y`, ignored if `y` is outside of the display
    pub fn draw_hline(&mut self, y: u32, state: PixelState) {
        if y >= HEIGHT {
            return;
        }
        let mask = 1u8 << (y % 8);
        let start = ((y / 8) * WIDTH) as usize;
        for byte in &mut self.buffer[start..start + WIDTH as usize] {
            match state {
                PixelState::On => *byte |= mask,
                PixelState::Off => *byte &= !mask,
            }
        }
    }
}

// Position of the byte holding pixel (x, y), `None` when out of range.
fn byte_index(width: u32, height: u32, x: u32, y: u32) -> Option<usize> {
    if x >= width || y >= height {
        return None;
    }
    Some(x as usize + (y / 8) as usize * width as usize)
}
