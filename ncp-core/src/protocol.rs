//! NCP5623C Register-Protokoll
//!
//! Jedes Byte auf dem Bus trägt oben 3 Bit Register-Selektor und unten
//! 5 Bit Intensität (0-31). Ein kompletter Farb-Update ist ein einzelner
//! 7-Byte-Transfer.

/// Primäre I2C-Adresse des NCP5623C
pub const ADDR: u8 = 0x39;

/// Alternative I2C-Adresse (Chip-Variante mit vertauschten R/B-Ausgängen)
pub const ALT_ADDR: u8 = 0x38;

/// Volle Intensität (5 Bit)
pub const LED_BRIGHT: u8 = 0x1f;

/// Aus
pub const LED_OFF: u8 = 0x00;

/// Latch/Advance-Marker zwischen den Inhalts-Bytes eines Frames
pub const FRAME_MARKER: u8 = 0x70;

/// Länge eines Render-Frames in Bytes
pub const FRAME_LEN: usize = 7;

const SELECTOR_MASK: u8 = 0xe0;
const INTENSITY_MASK: u8 = 0x1f;

/// Register-Selektoren des Chips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Register {
    /// Globaler Strom-Limit (ILED)
    Current = 0x20,
    Pwm0 = 0x40,
    Pwm1 = 0x60,
    Pwm2 = 0x80,
}

impl From<Register> for u8 {
    #[inline]
    fn from(register: Register) -> Self {
        register as u8
    }
}

/// Zuordnung Farbrolle → PWM-Register
///
/// Die Variante auf der alternativen Adresse hat PWM0 und PWM2 physisch
/// vertauscht. Grün liegt bei beiden Varianten auf PWM1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelMap {
    #[default]
    Default,
    Swapped,
}

impl ChannelMap {
    pub const fn red(self) -> Register {
        match self {
            ChannelMap::Default => Register::Pwm0,
            ChannelMap::Swapped => Register::Pwm2,
        }
    }

    pub const fn green(self) -> Register {
        Register::Pwm1
    }

    pub const fn blue(self) -> Register {
        match self {
            ChannelMap::Default => Register::Pwm2,
            ChannelMap::Swapped => Register::Pwm0,
        }
    }
}

/// Kodiert Register und Intensität in ein Bus-Byte
///
/// Die Intensität wird ohne Prüfung auf 5 Bit maskiert: 32 wird zu 0,
/// 63 zu 31 usw. Aufrufer müssen Werte in 0..=31 liefern.
///
/// ```
/// # use ncp_core::protocol::{Register, encode_byte};
/// assert_eq!(encode_byte(Register::Pwm0, 31), 0x5f);
/// assert_eq!(encode_byte(Register::Pwm0, 63), 0x5f);
/// ```
#[inline]
pub const fn encode_byte(register: Register, intensity: u8) -> u8 {
    (register as u8 & SELECTOR_MASK) | (intensity & INTENSITY_MASK)
}

/// Baut den 7-Byte Render-Frame
///
/// Reihenfolge ist vom Chip vorgegeben: ILED, Marker, Rot, Marker, Grün,
/// Marker, Blau.
#[inline]
pub const fn encode_frame(current: u8, red: u8, green: u8, blue: u8) -> [u8; FRAME_LEN] {
    [
        current,
        FRAME_MARKER,
        red,
        FRAME_MARKER,
        green,
        FRAME_MARKER,
        blue,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_byte_combines_selector_and_intensity() {
        assert_eq!(encode_byte(Register::Current, 0), 0x20);
        assert_eq!(encode_byte(Register::Pwm1, 10), 0x6a);
        assert_eq!(encode_byte(Register::Pwm2, LED_BRIGHT), 0x9f);
    }

    #[test]
    fn test_encode_byte_wraps_intensity() {
        assert_eq!(encode_byte(Register::Pwm0, 31), encode_byte(Register::Pwm0, 63));
        assert_eq!(encode_byte(Register::Pwm0, 32), encode_byte(Register::Pwm0, 0));
    }

    #[test]
    fn test_encode_frame_layout() {
        let frame = encode_frame(0x3f, 0x5f, 0x60, 0x80);
        assert_eq!(frame, [0x3f, 0x70, 0x5f, 0x70, 0x60, 0x70, 0x80]);
    }

    #[test]
    fn test_channel_map_swaps_red_and_blue() {
        assert_eq!(ChannelMap::Default.red(), ChannelMap::Swapped.blue());
        assert_eq!(ChannelMap::Default.blue(), ChannelMap::Swapped.red());
        assert_eq!(ChannelMap::Default.green(), ChannelMap::Swapped.green());
    }
}
