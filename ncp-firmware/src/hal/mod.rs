// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter den Traits aus ncp-core,
// um Testbarkeit und Wartbarkeit zu verbessern.

pub mod i2c_bus;

pub use i2c_bus::{EspI2cBus, I2cInitError};
pub use ncp_core::{I2cTransfer, LedError};
