//! A simple Driver for SSD1306 based monochrome OLED displays
//!
//! The crate keeps a page-addressed framebuffer in memory, draws pixels, full-width and
//! full-height lines and bitmap-font text into it, and flushes it to the controller over I2C
//! or 4-wire SPI.
//!
//! It uses the [embedded hal](https://github.com/rust-embedded/embedded-hal) and, with the
//! `graphics` feature, implements the `DrawTarget` trait from
//! [embedded-graphics](https://github.com/embedded-graphics/embedded-graphics).
//!
//! # Example
//!
//!```rust, no_run
//!# use embedded_hal_mock::eh1::*;
//!# fn main() -> Result<(), embedded_hal::i2c::ErrorKind> {
//!use ssd1306_page::{prelude::*, ssd1306::*};
//!
//!# let expectations: [i2c::Transaction; 0] = [];
//!# let i2c = i2c::Mock::new(&expectations);
//!let interface = I2cInterface::new(i2c);
//!let mut oled: Ssd1306<_> = Ssd1306::new(interface, Config::default());
//!let mut display = Display128x64::default();
//!
//!// Setup the controller, clears and flushes the framebuffer
//!oled.init(&mut display)?;
//!
//!const FONT: Font<'static> = Font::new(0x30, 1, 1, &[1], &[0x80]);
//!display.set_cursor(0, 0);
//!display.draw_string("000", &FONT, PixelState::On);
//!display.draw_hline(8, PixelState::On);
//!
//!oled.display_frame(&display)?;
//!oled.power_save(true)?;
//!# Ok(())
//!# }
//!```
//!
//! # References
//!
//! - [SSD1306 Datasheet](https://cdn-shop.adafruit.com/datasheets/SSD1306.pdf)
//!
#![no_std]
#![deny(missing_docs)]

#[cfg(test)]
extern crate std;

pub mod color;
pub mod font;
pub mod graphics;
pub mod interface;
pub mod ssd1306;
pub mod text;

/// Includes everything important besides the chosen display
pub mod prelude {
    pub use crate::color::PixelState;
    pub use crate::font::{Font, Glyph};
    pub use crate::graphics::Display;
    pub use crate::interface::{DisplayInterface, I2cInterface, SpiInterface};
    pub use crate::text::Cursor;
}

/// Computes the needed buffer length. Takes care of rounding up in case `height`
/// is not divisible by 8.
///
/// Every byte covers a column of 8 vertically stacked pixels (bit 0 on top), one row of
/// `width` bytes makes up a page:
///
/// ```text
///          width
/// <------------------------>
/// [page 0, x=0][x=1]...[x=w-1]  ^
/// [page 1, x=0][x=1]...[x=w-1]  | height / 8
/// [page 2, x=0][x=1]...[x=w-1]  v
/// ```
pub const fn buffer_len(width: usize, height: usize) -> usize {
    height.div_ceil(8) * width
}
