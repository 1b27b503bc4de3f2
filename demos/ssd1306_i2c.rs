use std::error::Error;

// This example draws a frame with full-size lines, a counter in a small bitmap font and some
// embedded-graphics text, then dims and switches the panel off and on again.
use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use embedded_hal::delay::DelayNs;
use linux_embedded_hal::{Delay, I2cdev};
use ssd1306_page::{prelude::*, ssd1306::*};

// Digits '0' to '9', 5 pixels wide and 7 tall, the leftmost pixel in bit 7
#[rustfmt::skip]
const DIGITS_5X7: Font<'static> = Font::new(b'0', 7, 1, &[5; 10], &[
    0x70, 0x88, 0x98, 0xA8, 0xC8, 0x88, 0x70, // 0
    0x20, 0x60, 0x20, 0x20, 0x20, 0x20, 0x70, // 1
    0x70, 0x88, 0x08, 0x10, 0x20, 0x40, 0xF8, // 2
    0xF8, 0x10, 0x20, 0x10, 0x08, 0x88, 0x70, // 3
    0x10, 0x30, 0x50, 0x90, 0xF8, 0x10, 0x10, // 4
    0xF8, 0x80, 0xF0, 0x08, 0x08, 0x88, 0x70, // 5
    0x30, 0x40, 0x80, 0xF0, 0x88, 0x88, 0x70, // 6
    0xF8, 0x08, 0x10, 0x20, 0x40, 0x40, 0x40, // 7
    0x70, 0x88, 0x88, 0x70, 0x88, 0x88, 0x70, // 8
    0x70, 0x88, 0x88, 0x78, 0x08, 0x10, 0x60, // 9
]);

fn main() -> Result<(), Box<dyn Error>> {
    // Set up the device
    let i2c = I2cdev::new("/dev/i2c-1")?;
    let mut delay = Delay {};

    let config = Builder::new().contrast(0x7F).build();
    let mut oled: Ssd1306<_> = Ssd1306::new(I2cInterface::new(i2c), config);
    let mut display = Display128x64::default();
    oled.init(&mut display).map_err(|e| format!("init: {e:?}"))?;
    println!("Device successfully initialized!");

    // Draw a frame
    display.draw_vline(0, PixelState::On);
    display.draw_vline(127, PixelState::On);
    display.draw_hline(0, PixelState::On);
    display.draw_hline(63, PixelState::On);

    let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    let _ = Text::with_baseline("Rust is awesome!", Point::new(16, 4), style, Baseline::Top)
        .draw(&mut display);
    oled.display_frame(&display).map_err(|e| format!("{e:?}"))?;

    println!("Counting");
    for n in 0..100u32 {
        display.set_cursor(52, 30);
        display.draw_string_fixed_width(&format!("{n:03}"), &DIGITS_5X7, 6, PixelState::On);
        oled.display_frame(&display).map_err(|e| format!("{e:?}"))?;
        delay.delay_ms(100);
    }

    println!("Dim and sleep");
    oled.set_contrast(0x01).map_err(|e| format!("{e:?}"))?;
    delay.delay_ms(2000);
    oled.power_save(true).map_err(|e| format!("{e:?}"))?;
    delay.delay_ms(2000);
    oled.power_save(false).map_err(|e| format!("{e:?}"))?;

    println!("Finished tests - going to sleep");
    oled.power_save(true).map_err(|e| format!("{e:?}"))?;
    Ok(())
}
