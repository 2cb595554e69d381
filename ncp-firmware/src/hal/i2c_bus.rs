// I2C Bus Adapter für den NCP5623C
//
// Implementiert den I2cTransfer Trait aus ncp-core über den blocking
// I2C-Master von esp-hal. Der Chip ist write-only, daher nur write().

use defmt::debug;
use esp_hal::Blocking;
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::i2c::master::{Config, ConfigError, I2c};
use esp_hal::time::Rate;

use ncp_core::{I2cTransfer, LedError};

/// Fehler beim Initialisieren des I2C-Peripherals
pub type I2cInitError = ConfigError;

/// Real Hardware I2C Bus
///
/// Nutzt das ESP32 I2C0 Peripheral im Blocking-Mode: ein Transfer blockiert
/// den Reconcile-Tick bis er abgeschlossen oder fehlgeschlagen ist.
pub struct EspI2cBus<'a> {
    i2c: I2c<'a, Blocking>,
}

impl<'a> EspI2cBus<'a> {
    /// Erstellt einen neuen EspI2cBus
    ///
    /// # Parameter
    /// - `i2c0`: I2C0 Peripheral
    /// - `sda`: GPIO für die Datenleitung
    /// - `scl`: GPIO für die Taktleitung
    /// - `frequency_khz`: Bus-Takt in kHz (z.B. 100)
    pub fn new(
        i2c0: esp_hal::peripherals::I2C0<'a>,
        sda: impl PeripheralOutput<'a>,
        scl: impl PeripheralOutput<'a>,
        frequency_khz: u32,
    ) -> Result<Self, I2cInitError> {
        let config = Config::default().with_frequency(Rate::from_khz(frequency_khz));
        let i2c = I2c::new(i2c0, config)?.with_sda(sda).with_scl(scl);

        Ok(Self { i2c })
    }
}

impl<'a> I2cTransfer for EspI2cBus<'a> {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), LedError> {
        self.i2c.write(address, data).map_err(|e| {
            debug!("I2C: write to {=u8:#x} failed: {}", address, e);
            LedError::TransferFailed
        })
    }
}
