//! Core Types für den RGB-LED-Treiber
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

use crate::protocol::{ADDR, ChannelMap};

/// Benannte Farben der LED-Policy-Engine
///
/// Die Zahlenwerte entsprechen den Farb-IDs der `led_control` Nachricht.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum NamedColor {
    #[default]
    Off = 0,
    Red = 1,
    Green = 2,
    Blue = 3,
    Yellow = 4,
    Purple = 5,
    Amber = 6,
    Cyan = 7,
    White = 8,
}

impl NamedColor {
    /// Alle Farben in ID-Reihenfolge
    pub const ALL: [NamedColor; 9] = [
        NamedColor::Off,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Blue,
        NamedColor::Yellow,
        NamedColor::Purple,
        NamedColor::Amber,
        NamedColor::Cyan,
        NamedColor::White,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            NamedColor::Off => "off",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Blue => "blue",
            NamedColor::Yellow => "yellow",
            NamedColor::Purple => "purple",
            NamedColor::Amber => "amber",
            NamedColor::Cyan => "cyan",
            NamedColor::White => "white",
        }
    }
}

/// Unbekannte Farb-IDs werden zu `Off`
impl From<u8> for NamedColor {
    fn from(id: u8) -> Self {
        NamedColor::ALL
            .get(usize::from(id))
            .copied()
            .unwrap_or(NamedColor::Off)
    }
}

impl core::convert::TryFrom<&str> for NamedColor {
    type Error = ();

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        NamedColor::ALL
            .into_iter()
            .find(|color| color.name() == name)
            .ok_or(())
    }
}

/// Aktives Kommando der Policy-Engine: eine Farbe mit Helligkeit 0-255
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveCommand {
    pub color: NamedColor,
    pub brightness: u8,
}

impl ActiveCommand {
    pub const fn new(color: NamedColor, brightness: u8) -> Self {
        Self { color, brightness }
    }
}

/// Bus und Adresse für `start`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartOptions {
    /// Bus-Index (I2C0 = 0)
    pub bus: u8,
    /// Primäre Adresse, bei Fehlschlag wird `ALT_ADDR` probiert
    pub address: u8,
}

impl Default for StartOptions {
    fn default() -> Self {
        Self { bus: 0, address: ADDR }
    }
}

/// Momentaufnahme für `status`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeviceStatus {
    pub bus: u8,
    pub address: u8,
    pub channel_map: ChannelMap,
    pub color: RGB8,
    pub brightness: f32,
    pub max_brightness: f32,
    pub running: bool,
    pub transfer_errors: u32,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for NamedColor {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ActiveCommand {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "ActiveCommand {{ color: {}, brightness: {} }}",
            self.color,
            self.brightness
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StartOptions {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StartOptions {{ bus: {}, address: {=u8:#x} }}",
            self.bus,
            self.address
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DeviceStatus {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "DeviceStatus {{ bus: {}, address: {=u8:#x}, map: {}, rgb: ({}, {}, {}), brightness: {}, max: {}, running: {}, errors: {} }}",
            self.bus,
            self.address,
            self.channel_map,
            self.color.r,
            self.color.g,
            self.color.b,
            self.brightness,
            self.max_brightness,
            self.running,
            self.transfer_errors
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ChannelMap {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ChannelMap::Default => defmt::write!(fmt, "Default"),
            ChannelMap::Swapped => defmt::write!(fmt, "Swapped"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for crate::traits::LedError {
    fn format(&self, fmt: defmt::Formatter) {
        use crate::traits::LedError;
        match self {
            LedError::TransferFailed => defmt::write!(fmt, "TransferFailed"),
            LedError::DeviceNotFound => defmt::write!(fmt, "DeviceNotFound"),
            LedError::AlreadyRunning => defmt::write!(fmt, "AlreadyRunning"),
            LedError::NotRunning => defmt::write!(fmt, "NotRunning"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_color_from_id() {
        assert_eq!(NamedColor::from(1), NamedColor::Red);
        assert_eq!(NamedColor::from(6), NamedColor::Amber);
        assert_eq!(NamedColor::from(8), NamedColor::White);
    }

    #[test]
    fn test_named_color_unknown_id_is_off() {
        assert_eq!(NamedColor::from(9), NamedColor::Off);
        assert_eq!(NamedColor::from(255), NamedColor::Off);
    }

    #[test]
    fn test_named_color_try_from_name() {
        assert_eq!(NamedColor::try_from("cyan"), Ok(NamedColor::Cyan));
        assert_eq!(NamedColor::try_from("magenta"), Err(()));
    }

    #[test]
    fn test_start_options_default_address() {
        let options = StartOptions::default();
        assert_eq!(options.bus, 0);
        assert_eq!(options.address, 0x39);
    }
}
