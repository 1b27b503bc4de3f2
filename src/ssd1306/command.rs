//! SPI/I2C Commands for the SSD1306 controller

/// SSD1306 commands
///
/// Arguments follow as further command bytes, for some commands (marked `+ n`) the argument is
/// or-ed into the command byte itself.
#[allow(dead_code)]
#[derive(Copy, Clone)]
pub(crate) enum Command {
    /// Contrast 0-255, followed by one byte
    SetContrast = 0x81,
    /// Follow the display RAM
    ResumeToRam = 0xA4,
    /// Light every pixel regardless of the display RAM
    EntireDisplayOn = 0xA5,
    /// A set RAM bit lights the pixel
    NormalDisplay = 0xA6,
    /// A set RAM bit darkens the pixel
    InverseDisplay = 0xA7,
    /// Sleep mode
    DisplayOff = 0xAE,
    /// Wake up
    DisplayOn = 0xAF,

    /// 0x0 horizontal, 0x1 vertical, 0x2 page addressing
    MemoryAddressingMode = 0x20,
    /// Start and end column, horizontal or vertical addressing only
    SetColumnAddress = 0x21,
    /// Start and end page, horizontal or vertical addressing only
    SetPageAddress = 0x22,

    /// `+ line`, 0-63
    SetStartLine = 0x40,
    /// Column 0 is mapped to SEG0
    SegmentRemapNormal = 0xA0,
    /// Column 127 is mapped to SEG0
    SegmentRemapReverse = 0xA1,
    /// Rows 16-64, followed by `rows - 1`
    SetMultiplexRatio = 0xA8,
    /// Scan from COM0
    ComScanNormal = 0xC0,
    /// Scan to COM0
    ComScanReverse = 0xC8,
    /// Vertical shift 0-63, followed by one byte
    SetDisplayOffset = 0xD3,
    /// 00xy0010: x sequential/alternative COM pins, y COM left/right remap
    SetComPins = 0xDA,

    /// A\[7:4\] oscillator frequency, A\[3:0\] clock divide ratio - 1
    SetClockDivide = 0xD5,
    /// A\[7:4\] phase 2, A\[3:0\] phase 1, in clocks
    SetPrechargePeriod = 0xD9,
    /// 0x00 0.65 Vcc, 0x20 0.77 Vcc, 0x30 0.83 Vcc
    SetVcomhDeselect = 0xDB,
    /// 0x14 enable, 0x10 disable
    ChargePump = 0x8D,

    /// No operation
    Nop = 0xE3,
}

impl Command {
    /// Returns the address of the command
    pub(crate) fn address(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_addr() {
        assert_eq!(Command::SetContrast.address(), 0x81);
        assert_eq!(Command::DisplayOn.address(), 0xAF);
        assert_eq!(Command::SetStartLine.address(), 0x40);
        assert_eq!(Command::Nop.address(), 0xE3);
    }
}
