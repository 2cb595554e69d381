//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::protocol::{LED_BRIGHT, LED_OFF};
use crate::types::NamedColor;

/// Default für `LED_RGB1_MAXBRT` wenn der Parameter nicht gesetzt ist
pub const MAX_BRIGHTNESS_DEFAULT: i32 = LED_BRIGHT as i32;

/// Übersetzt eine benannte Farbe in Kanal-Intensitäten (0 oder 31)
///
/// Amber wird wie Gelb dargestellt, `Off` ergibt Schwarz.
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use ncp_core::{NamedColor, resolve_color};
/// assert_eq!(resolve_color(NamedColor::Cyan), RGB8 { r: 0, g: 31, b: 31 });
/// assert_eq!(resolve_color(NamedColor::from(42)), RGB8 { r: 0, g: 0, b: 0 });
/// ```
pub fn resolve_color(color: NamedColor) -> RGB8 {
    const ON: u8 = LED_BRIGHT;
    const OFF: u8 = LED_OFF;

    let (r, g, b) = match color {
        NamedColor::Red => (ON, OFF, OFF),
        NamedColor::Green => (OFF, ON, OFF),
        NamedColor::Blue => (OFF, OFF, ON),
        // Amber hat keinen eigenen Farbton auf diesem Chip
        NamedColor::Amber | NamedColor::Yellow => (ON, ON, OFF),
        NamedColor::Purple => (ON, OFF, ON),
        NamedColor::Cyan => (OFF, ON, ON),
        NamedColor::White => (ON, ON, ON),
        NamedColor::Off => (OFF, OFF, OFF),
    };

    RGB8 { r, g, b }
}

/// Berechnet den Helligkeits-Deckel aus dem Roh-Parameter
///
/// Der Wert wird auf 0..=31 begrenzt, 0 wird zu 1 angehoben (der Chip soll
/// durch den Parameter allein nie komplett dunkel geschaltet werden).
/// Ergebnis liegt in (0.0, 1.0].
pub fn compute_max_brightness(raw: i32) -> f32 {
    let steps = raw.clamp(0, MAX_BRIGHTNESS_DEFAULT).max(1);
    steps as f32 / LED_BRIGHT as f32
}

/// Rechnet die 0-255 Helligkeit der Policy-Engine in einen Faktor um
pub fn brightness_fraction(brightness: u8) -> f32 {
    f32::from(brightness) / 255.0
}

/// Skaliert eine Intensität mit einem Faktor (abgerundet)
///
/// Negative oder zu große Produkte werden vom `as`-Cast gesättigt, das
/// Maskieren auf 5 Bit übernimmt der Encoder.
#[inline]
pub fn scale(intensity: u8, fraction: f32) -> u8 {
    (f32::from(intensity) * fraction) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_primary_colors() {
        assert_eq!(resolve_color(NamedColor::Red), RGB8 { r: 31, g: 0, b: 0 });
        assert_eq!(resolve_color(NamedColor::Green), RGB8 { r: 0, g: 31, b: 0 });
        assert_eq!(resolve_color(NamedColor::Blue), RGB8 { r: 0, g: 0, b: 31 });
    }

    #[test]
    fn test_resolve_amber_is_yellow() {
        assert_eq!(
            resolve_color(NamedColor::Amber),
            resolve_color(NamedColor::Yellow)
        );
        assert_eq!(
            resolve_color(NamedColor::Yellow),
            RGB8 { r: 31, g: 31, b: 0 }
        );
    }

    #[test]
    fn test_resolve_off() {
        assert_eq!(resolve_color(NamedColor::Off), RGB8 { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_max_brightness_zero_floor() {
        assert_eq!(compute_max_brightness(0), compute_max_brightness(1));
        assert_eq!(compute_max_brightness(0), 1.0 / 31.0);
        assert_eq!(compute_max_brightness(-5), 1.0 / 31.0);
    }

    #[test]
    fn test_max_brightness_clamps_above_range() {
        assert_eq!(compute_max_brightness(31), 1.0);
        assert_eq!(compute_max_brightness(40), 1.0);
        assert_eq!(compute_max_brightness(i32::MAX), 1.0);
    }

    #[test]
    fn test_scale_truncates() {
        assert_eq!(scale(31, 1.0), 31);
        assert_eq!(scale(31, 0.5), 15);
        assert_eq!(scale(31, 0.0), 0);
    }
}
