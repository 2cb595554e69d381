//! Hardware Abstraction Traits
//!
//! Diese Traits definieren die Schnittstellen zu den externen Kollaborateuren
//! des Treibers (I2C-Bus und LED-Policy-Engine) ohne konkrete Implementierung.

use core::fmt;
use core::time::Duration;

use crate::types::ActiveCommand;

/// Fehler-Typ für Treiber-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// Bus-Transfer fehlgeschlagen (NACK, Arbitration Lost, ...)
    TransferFailed,
    /// Chip hat weder auf der primären noch auf der alternativen Adresse geantwortet
    DeviceNotFound,
    /// `start` auf einem bereits laufenden Treiber
    AlreadyRunning,
    /// `stop` ohne laufenden Treiber
    NotRunning,
}

impl fmt::Display for LedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedError::TransferFailed => f.write_str("i2c transfer failed"),
            LedError::DeviceNotFound => f.write_str("ncp5623c not found on bus"),
            LedError::AlreadyRunning => f.write_str("driver already running"),
            LedError::NotRunning => f.write_str("driver not running"),
        }
    }
}

impl core::error::Error for LedError {}

/// Trait für I2C-Schreibzugriffe
///
/// Der NCP5623C ist ein reiner Write-Only-Chip, daher reicht ein einzelner
/// Write-Transfer an eine 7-Bit-Adresse.
///
/// # Implementierungen
/// - **Production:** EspI2cBus (ESP32 I2C0 Peripheral, blocking)
/// - **Testing:** MockBus (in-memory Mock)
pub trait I2cTransfer {
    /// Schreibt `data` in einem Transfer an `address`
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::TransferFailed` zurück wenn der Chip nicht antwortet
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), LedError>;
}

/// Upstream LED-Policy-Engine
///
/// Entscheidet aus priorisierten Blink-/Farb-Anfragen, welche eine Farbe
/// gerade angezeigt werden soll. Der Treiber rendert nur das Ergebnis.
pub trait LedController {
    /// Liefert das aktuell aktive Kommando, falls es eins gibt
    fn update(&mut self) -> Option<ActiveCommand>;

    /// Obergrenze für den Abstand zwischen zwei Reconcile-Ticks
    fn maximum_update_interval(&self) -> Duration;
}

impl<T: I2cTransfer + ?Sized> I2cTransfer for &mut T {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), LedError> {
        (**self).write(address, data)
    }
}

impl<T: LedController + ?Sized> LedController for &mut T {
    fn update(&mut self) -> Option<ActiveCommand> {
        (**self).update()
    }

    fn maximum_update_interval(&self) -> Duration {
        (**self).maximum_update_interval()
    }
}
