//! A simple Driver for SSD1306 based 128x64 and 128x32 OLED displays
//!
//! # References
//!
//! - [Datasheet](https://cdn-shop.adafruit.com/datasheets/SSD1306.pdf)
//!
//! The controller is driven in horizontal addressing mode: after the column and page window is
//! set, the whole framebuffer is streamed page by page in a single data write, which matches
//! the memory layout of [`Display`](crate::graphics::Display).

use crate::buffer_len;
use crate::color::PixelState;
use crate::graphics::Display;
use crate::interface::DisplayInterface;

pub(crate) mod command;
use self::command::Command;

/// Full size buffer for use with 128x64 panels
pub type Display128x64 = Display<128, 64, { buffer_len(128, 64) }>;

/// Full size buffer for use with 128x32 panels
pub type Display128x32 = Display<128, 32, { buffer_len(128, 32) }>;

/// Controller settings applied by [`Ssd1306::init`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    contrast: u8,
    flipped: bool,
    clock: u8,
    external_vcc: bool,
    inverted: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contrast: 0xFF,
            flipped: true,
            clock: 0xF0,
            external_vcc: false,
            inverted: false,
        }
    }
}

impl Config {
    /// Contrast, 0-255
    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    /// Whether the image is rotated by 180 degrees
    pub fn flipped(&self) -> bool {
        self.flipped
    }

    /// Oscillator frequency (high nibble) and clock divide ratio (low nibble)
    pub fn clock(&self) -> u8 {
        self.clock
    }

    /// Whether the panel is powered externally instead of by the charge pump
    pub fn external_vcc(&self) -> bool {
        self.external_vcc
    }

    /// Whether set pixels are dark
    pub fn inverted(&self) -> bool {
        self.inverted
    }
}

/// Builder for [`Config`]
///
/// ```
/// use ssd1306_page::ssd1306::Builder;
///
/// let config = Builder::new().contrast(0x20).flipped(false).build();
/// assert_eq!(config.contrast(), 0x20);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Starts from [`Config::default`]: full contrast, flipped, fastest oscillator,
    /// internal charge pump and normal (non inverted) pixels
    pub fn new() -> Self {
        Self::default()
    }

    /// Contrast, 0-255
    pub fn contrast(mut self, contrast: u8) -> Self {
        self.config.contrast = contrast;
        self
    }

    /// Rotates the image by 180 degrees, through segment remap and COM scan direction
    pub fn flipped(mut self, flipped: bool) -> Self {
        self.config.flipped = flipped;
        self
    }

    /// Raw `0xD5` argument, oscillator frequency (high nibble) and divide ratio (low nibble)
    pub fn clock(mut self, clock: u8) -> Self {
        self.config.clock = clock;
        self
    }

    /// Disables the internal charge pump
    pub fn external_vcc(mut self, external_vcc: bool) -> Self {
        self.config.external_vcc = external_vcc;
        self
    }

    /// Darkens set pixels instead of lighting them
    pub fn inverted(mut self, inverted: bool) -> Self {
        self.config.inverted = inverted;
        self
    }

    /// Finishes the configuration
    pub fn build(self) -> Config {
        self.config
    }
}

/// Ssd1306 driver
///
/// `WIDTH` and `HEIGHT` are the panel size in pixels, the framebuffer flushed to the controller
/// must have the same size.
pub struct Ssd1306<DI, const WIDTH: u32 = 128, const HEIGHT: u32 = 64> {
    /// Connection Interface
    interface: DI,
    /// Settings applied on init
    config: Config,
}

impl<DI, const WIDTH: u32, const HEIGHT: u32> Ssd1306<DI, WIDTH, HEIGHT>
where
    DI: DisplayInterface,
{
    /// Creates the driver, nothing is sent before [`Ssd1306::init`]
    pub fn new(interface: DI, config: Config) -> Self {
        Ssd1306 { interface, config }
    }

    /// Brings the controller into a known state, clears `display` and flushes it
    pub fn init<const BYTECOUNT: usize>(
        &mut self,
        display: &mut Display<WIDTH, HEIGHT, BYTECOUNT>,
    ) -> Result<(), DI::Error> {
        log::debug!("initializing {}x{} ssd1306 with {:?}", WIDTH, HEIGHT, self.config);

        let config = self.config;

        self.cmd(Command::DisplayOff)?;
        self.cmd_with_args(Command::MemoryAddressingMode, &[0x00])?; // horizontal
        self.cmd(Command::SetStartLine)?; // line 0
        if config.flipped {
            self.cmd(Command::SegmentRemapReverse)?;
            self.cmd(Command::ComScanReverse)?;
        } else {
            self.cmd(Command::SegmentRemapNormal)?;
            self.cmd(Command::ComScanNormal)?;
        }
        self.cmd_with_args(Command::SetContrast, &[config.contrast])?;
        self.cmd_with_args(Command::SetMultiplexRatio, &[(HEIGHT - 1) as u8])?;
        self.cmd_with_args(Command::SetClockDivide, &[config.clock])?;
        // 32 row panels only wire every other COM line
        let com_pins = if HEIGHT > 32 { 0x12 } else { 0x02 };
        self.cmd_with_args(Command::SetComPins, &[com_pins])?;
        self.cmd(if config.inverted {
            Command::InverseDisplay
        } else {
            Command::NormalDisplay
        })?;
        self.cmd(Command::ResumeToRam)?;
        let charge_pump = if config.external_vcc { 0x10 } else { 0x14 };
        self.cmd_with_args(Command::ChargePump, &[charge_pump])?;
        self.cmd(Command::DisplayOn)?;

        display.fill(PixelState::Off);
        self.display_frame(display)
    }

    /// Sends the whole framebuffer to the display RAM
    pub fn display_frame<const BYTECOUNT: usize>(
        &mut self,
        display: &Display<WIDTH, HEIGHT, BYTECOUNT>,
    ) -> Result<(), DI::Error> {
        log::trace!("flushing {} bytes", display.buffer().len());

        self.cmd_with_args(Command::SetColumnAddress, &[0, (WIDTH - 1) as u8])?;
        self.cmd_with_args(Command::SetPageAddress, &[0, (display.pages() - 1) as u8])?;
        self.interface.write_data(display.buffer())
    }

    /// Sets the contrast, the reset default is 0x7F
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), DI::Error> {
        log::trace!("contrast {:#04x}", contrast);

        self.cmd_with_args(Command::SetContrast, &[contrast])?;
        self.config.contrast = contrast;
        Ok(())
    }

    /// Turns the display off (`true`) or back on (`false`), the display RAM is kept
    pub fn power_save(&mut self, enable: bool) -> Result<(), DI::Error> {
        log::debug!("power save {}", enable);

        if enable {
            self.cmd(Command::DisplayOff)?;
            self.cmd(Command::EntireDisplayOn)
        } else {
            self.cmd(Command::ResumeToRam)?;
            self.cmd(Command::DisplayOn)
        }
    }

    /// Darkens set pixels and lights clear ones, the framebuffer is left untouched
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), DI::Error> {
        log::debug!("inverted {}", inverted);

        self.cmd(if inverted {
            Command::InverseDisplay
        } else {
            Command::NormalDisplay
        })?;
        self.config.inverted = inverted;
        Ok(())
    }

    /// Current settings
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Width of the display
    pub fn width(&self) -> u32 {
        WIDTH
    }

    /// Height of the display
    pub fn height(&self) -> u32 {
        HEIGHT
    }

    /// Gives back the interface
    pub fn release(self) -> DI {
        self.interface
    }

    fn cmd(&mut self, command: Command) -> Result<(), DI::Error> {
        self.interface.write_command(command.address())
    }

    fn cmd_with_args(&mut self, command: Command, args: &[u8]) -> Result<(), DI::Error> {
        self.cmd(command)?;
        for &arg in args {
            self.interface.write_command(arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[derive(Debug, PartialEq, Eq)]
    struct BusError;

    #[derive(Debug, PartialEq, Eq)]
    enum Write {
        Command(u8),
        Data(Vec<u8>),
    }

    /// Records every write, fails once `fail_after` writes went through
    #[derive(Default)]
    struct Recorder {
        writes: Vec<Write>,
        fail_after: Option<usize>,
    }

    impl Recorder {
        fn check(&self) -> Result<(), BusError> {
            match self.fail_after {
                Some(limit) if self.writes.len() >= limit => Err(BusError),
                _ => Ok(()),
            }
        }

        fn commands(&self) -> Vec<u8> {
            self.writes
                .iter()
                .filter_map(|write| match write {
                    Write::Command(byte) => Some(*byte),
                    Write::Data(_) => None,
                })
                .collect()
        }
    }

    impl DisplayInterface for Recorder {
        type Error = BusError;

        fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
            self.check()?;
            self.writes.push(Write::Command(command));
            Ok(())
        }

        fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.check()?;
            self.writes.push(Write::Data(data.to_vec()));
            Ok(())
        }
    }

    #[test]
    fn oled_size() {
        let oled: Ssd1306<_> = Ssd1306::new(Recorder::default(), Config::default());
        assert_eq!(oled.width(), 128);
        assert_eq!(oled.height(), 64);
        assert!(oled.release().writes.is_empty());
    }

    #[test]
    fn init_128x64() {
        let mut oled: Ssd1306<_> = Ssd1306::new(Recorder::default(), Config::default());
        let mut display = Display128x64::default();
        display.fill(PixelState::On);

        oled.init(&mut display).unwrap();

        assert!(display.buffer().iter().all(|&b| b == 0));
        let recorder = oled.release();
        assert_eq!(
            recorder.commands(),
            [
                0xAE, 0x20, 0x00, 0x40, 0xA1, 0xC8, 0x81, 0xFF, 0xA8, 0x3F, 0xD5, 0xF0, 0xDA,
                0x12, 0xA6, 0xA4, 0x8D, 0x14, 0xAF, // init
                0x21, 0x00, 0x7F, 0x22, 0x00, 0x07, // window
            ]
        );
        assert_eq!(recorder.writes.last(), Some(&Write::Data(std::vec![0; 1024])));
        assert_eq!(recorder.writes.len(), 26);
    }

    #[test]
    fn init_128x32_with_config() {
        let config = Builder::new()
            .contrast(0x20)
            .flipped(false)
            .clock(0x80)
            .external_vcc(true)
            .inverted(true)
            .build();
        let mut oled: Ssd1306<_, 128, 32> = Ssd1306::new(Recorder::default(), config);
        let mut display = Display128x32::default();

        oled.init(&mut display).unwrap();

        let recorder = oled.release();
        assert_eq!(
            recorder.commands(),
            [
                0xAE, 0x20, 0x00, 0x40, 0xA0, 0xC0, 0x81, 0x20, 0xA8, 0x1F, 0xD5, 0x80, 0xDA,
                0x02, 0xA7, 0xA4, 0x8D, 0x10, 0xAF, // init
                0x21, 0x00, 0x7F, 0x22, 0x00, 0x03, // window
            ]
        );
        assert_eq!(recorder.writes.last(), Some(&Write::Data(std::vec![0; 512])));
    }

    #[test]
    fn display_frame_streams_whole_buffer() {
        let mut oled: Ssd1306<_> = Ssd1306::new(Recorder::default(), Config::default());
        let mut display = Display128x64::default();
        display.draw_vline(3, PixelState::On);

        oled.display_frame(&display).unwrap();

        let recorder = oled.release();
        assert_eq!(recorder.commands(), [0x21, 0x00, 0x7F, 0x22, 0x00, 0x07]);
        let Some(Write::Data(data)) = recorder.writes.last() else {
            panic!("no data written");
        };
        assert_eq!(data.as_slice(), display.buffer());
        assert_eq!(data[3], 0xFF);
        assert_eq!(data[3 + 7 * 128], 0xFF);
    }

    #[test]
    fn contrast() {
        let mut oled: Ssd1306<_> = Ssd1306::new(Recorder::default(), Config::default());
        oled.set_contrast(0x20).unwrap();
        assert_eq!(oled.config().contrast(), 0x20);
        assert_eq!(oled.release().commands(), [0x81, 0x20]);
    }

    #[test]
    fn power_save() {
        let mut oled: Ssd1306<_> = Ssd1306::new(Recorder::default(), Config::default());
        oled.power_save(true).unwrap();
        oled.power_save(false).unwrap();
        assert_eq!(oled.release().commands(), [0xAE, 0xA5, 0xA4, 0xAF]);
    }

    #[test]
    fn inverted() {
        let mut oled: Ssd1306<_> = Ssd1306::new(Recorder::default(), Config::default());
        oled.set_inverted(true).unwrap();
        assert!(oled.config().inverted());
        oled.set_inverted(false).unwrap();
        assert_eq!(oled.release().commands(), [0xA7, 0xA6]);
    }

    #[test]
    fn bus_error_stops_init() {
        let recorder = Recorder {
            fail_after: Some(3),
            ..Default::default()
        };
        let mut oled: Ssd1306<_> = Ssd1306::new(recorder, Config::default());
        let mut display = Display128x64::default();

        assert_eq!(oled.init(&mut display), Err(BusError));
        assert_eq!(oled.release().commands(), [0xAE, 0x20, 0x00]);
    }

    #[test]
    fn bus_error_on_data_is_reported() {
        let recorder = Recorder {
            fail_after: Some(6),
            ..Default::default()
        };
        let mut oled: Ssd1306<_> = Ssd1306::new(recorder, Config::default());
        let display = Display128x64::default();

        assert_eq!(oled.display_frame(&display), Err(BusError));
    }

    #[test]
    fn failed_contrast_keeps_config() {
        let recorder = Recorder {
            fail_after: Some(0),
            ..Default::default()
        };
        let mut oled: Ssd1306<_> = Ssd1306::new(recorder, Config::default());
        assert_eq!(oled.set_contrast(0x10), Err(BusError));
        assert_eq!(oled.config().contrast(), 0xFF);
    }
}
