//! Pixel states of a monochrome OLED

use core::ops::Not;

#[cfg(feature = "graphics")]
use embedded_graphics_core::pixelcolor::BinaryColor;

/// State of a single pixel, a lit (`On`) or dark (`Off`) OLED segment
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum PixelState {
    /// Pixel is dark
    #[default]
    Off,
    /// Pixel is lit
    On,
}

impl PixelState {
    /// Byte filling a whole page column with this state
    pub const fn fill_byte(self) -> u8 {
        match self {
            PixelState::On => 0xFF,
            PixelState::Off => 0x00,
        }
    }

    /// `true` for [`PixelState::On`]
    pub const fn is_on(self) -> bool {
        matches!(self, PixelState::On)
    }
}

/// The complement, used for the unset bits of a glyph cell
impl Not for PixelState {
    type Output = PixelState;

    fn not(self) -> Self::Output {
        match self {
            PixelState::On => PixelState::Off,
            PixelState::Off => PixelState::On,
        }
    }
}

impl From<bool> for PixelState {
    fn from(on: bool) -> Self {
        if on {
            PixelState::On
        } else {
            PixelState::Off
        }
    }
}

impl From<PixelState> for bool {
    fn from(state: PixelState) -> Self {
        state.is_on()
    }
}

#[cfg(feature = "graphics")]
impl From<BinaryColor> for PixelState {
    fn from(color: BinaryColor) -> Self {
        match color {
            BinaryColor::On => PixelState::On,
            BinaryColor::Off => PixelState::Off,
        }
    }
}

#[cfg(feature = "graphics")]
impl From<PixelState> for BinaryColor {
    fn from(state: PixelState) -> Self {
        match state {
            PixelState::On => BinaryColor::On,
            PixelState::Off => BinaryColor::Off,
        }
    }
}
