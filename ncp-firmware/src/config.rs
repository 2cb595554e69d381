// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use ncp_core::logic::MAX_BRIGHTNESS_DEFAULT;
use ncp_core::protocol::ADDR;

// ============================================================================
// I2C Konfiguration
// ============================================================================

/// I2C Bus-Index (ESP32-C6 hat nur I2C0 als Master)
pub const I2C_BUS: u8 = 0;

/// I2C Taktfrequenz in kHz
/// 100 kHz Standard-Mode, der NCP5623C kann bis 1 MHz
pub const I2C_FREQUENCY_KHZ: u32 = 100;

/// Primäre Chip-Adresse für `start`
/// Bei Fehlschlag probiert der Treiber automatisch 0x38
pub const RGBLED_ADDRESS: u8 = ADDR;

// ============================================================================
// Treiber Konfiguration
// ============================================================================

/// Maximales Update-Intervall der Policy-Engine in Millisekunden
pub const LED_UPDATE_INTERVAL_MS: u64 = 50;

/// Mindestabstand zwischen zwei Parameter-Updates in Millisekunden
pub const PARAM_UPDATE_INTERVAL_MS: u64 = 1000;

/// Kommandozeilen, die main() nach dem Spawnen der Tasks ausführt
pub const STARTUP_COMMANDS: &[&str] = &["start", "status"];

/// Kommandozeile für die periodische Status-Abfrage
pub const STATUS_COMMAND: &str = "status";

/// Farbfolge des Demo-Tasks (Namen wie `NamedColor::name()`)
pub const DEMO_COLORS: &[&str] = &[
    "red", "green", "blue", "yellow", "purple", "amber", "cyan", "white", "off",
];

/// Helligkeit (0-255) der Demo-Farben
pub const DEMO_BRIGHTNESS: u8 = 255;

/// Wechsel-Intervall der Demo-Farben in Sekunden
pub const DEMO_INTERVAL_SECS: u64 = 1;

/// Roh-Wert des Parameters `LED_RGB1_MAXBRT`
///
/// Wird zur Build-Zeit aus der Environment Variable LED_RGB1_MAXBRT geladen
/// (siehe .env). Fehlt der Wert oder ist er keine Zahl, gilt 31.
/// Werte außerhalb 0..=31 klemmt der Treiber selbst.
pub fn max_brightness_param() -> i32 {
    option_env!("LED_RGB1_MAXBRT")
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(MAX_BRIGHTNESS_DEFAULT)
}
