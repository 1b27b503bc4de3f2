//! Connection to the controller: a command register and a data register
//!
//! The SSD1306 either sits on an I2C bus, where a control byte in front of every write selects
//! the register, or on a 4-wire SPI bus, where the DC pin does.

use embedded_hal::{
    digital::OutputPin,
    i2c::{I2c, Operation},
    spi::SpiDevice,
};

/// The two write operations the driver needs from a bus
pub trait DisplayInterface {
    /// Error returned by the underlying bus
    type Error: core::fmt::Debug;

    /// Sends a single byte to the command register
    fn write_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Sends a block of bytes to the display RAM
    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

/// Default 7-bit I2C address, `0x3D` when the SA0 pin is pulled high
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Control byte: the following byte is a command
const CONTROL_COMMAND: u8 = 0x00;
/// Control byte: the following bytes are display data
const CONTROL_DATA: u8 = 0x40;

/// I2C connection
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Connects to the display at [`DEFAULT_ADDRESS`]
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Connects to the display at a 7-bit `address`
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        I2cInterface { i2c, address }
    }

    /// Gives back the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> DisplayInterface for I2cInterface<I2C> {
    type Error = I2C::Error;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[CONTROL_COMMAND, command])
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        // adjacent writes of a transaction go out without a restart, as one bus transfer
        self.i2c.transaction(
            self.address,
            &mut [Operation::Write(&[CONTROL_DATA]), Operation::Write(data)],
        )
    }
}

/// 4-wire SPI connection, the DC pin selects the register
pub struct SpiInterface<SPI, DC> {
    spi: SPI,
    /// Data/Command Control Pin (High for data, Low for command)
    dc: DC,
}

impl<SPI, DC> SpiInterface<SPI, DC> {
    /// Creates a new `SpiInterface` object
    pub fn new(spi: SPI, dc: DC) -> Self {
        SpiInterface { spi, dc }
    }

    /// Gives back the bus and the DC pin
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }
}

impl<SPI: SpiDevice, DC: OutputPin> DisplayInterface for SpiInterface<SPI, DC> {
    type Error = SPI::Error;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        // low for commands
        let _ = self.dc.set_low();
        self.spi.write(&[command])
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        // high for data
        let _ = self.dc.set_high();
        self.spi.write(data)
    }
}
