//! Modul-Lebenszyklus: `start`, `stop`, `status`
//!
//! Ein Modul verwaltet höchstens eine Treiber-Instanz. Rückgabewerte für
//! die Kommandozeile: 0 bei Erfolg, -1 bei Fehler.

use crate::driver::Ncp5623c;
use crate::probe::probe;
use crate::traits::{I2cTransfer, LedError};
use crate::types::{DeviceStatus, StartOptions};

/// Hilfetext für unbekannte Kommandos
pub const USAGE: &str = "rgbled_ncp5623c <command> [arguments...]\n\
    Commands:\n\
    \tstart    probe the device and start the update schedule\n\
    \t  -b <bus>      I2C bus index (default 0)\n\
    \t  -a <address>  I2C address (default 0x39, falls back to 0x38)\n\
    \tstop     stop the driver\n\
    \tstatus   print driver status\n";

/// Kommando-Verben der Prozess-Schnittstelle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Start,
    Stop,
    Status,
}

impl core::convert::TryFrom<&str> for Verb {
    type Error = ();

    fn try_from(verb: &str) -> Result<Self, Self::Error> {
        match verb {
            "start" => Ok(Verb::Start),
            "stop" => Ok(Verb::Stop),
            "status" => Ok(Verb::Status),
            _ => Err(()),
        }
    }
}

/// Zerlegt eine Kommandozeile wie `start -a 0x38 -b 0`
///
/// Optionen gelten nur für `start`. `None` bei unbekanntem Verb, unbekannter
/// Option oder fehlendem/ungültigem Wert; der Aufrufer gibt dann `USAGE` aus.
pub fn parse_command(line: &str, defaults: StartOptions) -> Option<(Verb, StartOptions)> {
    let mut words = line.split_whitespace();
    let verb = Verb::try_from(words.next()?).ok()?;
    let mut options = defaults;

    while let Some(flag) = words.next() {
        if verb != Verb::Start {
            return None;
        }
        let value = parse_u8(words.next()?)?;
        match flag {
            "-b" => options.bus = value,
            "-a" => options.address = value,
            _ => return None,
        }
    }

    Some((verb, options))
}

/// Dezimal oder hexadezimal mit `0x`-Präfix
fn parse_u8(word: &str) -> Option<u8> {
    match word.strip_prefix("0x") {
        Some(hex) => u8::from_str_radix(hex, 16).ok(),
        None => word.parse().ok(),
    }
}

/// Verwaltet die (einzige) Treiber-Instanz auf einem Bus
///
/// Der Bus gehört dem Modul: im Zustand `Idle` direkt, im Zustand `Running`
/// über die Instanz. `start` und `stop` verbrauchen das Modul und geben den
/// Folgezustand zurück, der Bus kann dabei nicht verloren gehen.
pub enum RgbledModule<B> {
    Idle(B),
    Running(Ncp5623c<B>),
}

impl<B: I2cTransfer> RgbledModule<B> {
    pub const fn new(bus: B) -> Self {
        Self::Idle(bus)
    }

    /// Attach + Probe. Bei Erfolg läuft die Instanz ab dem nächsten Tick.
    ///
    /// Schlägt die Probe fehl, bleibt das Modul `Idle` und der Bus
    /// verfügbar für einen neuen Versuch.
    pub fn start(
        self,
        options: StartOptions,
        max_brightness_raw: i32,
    ) -> (Self, Result<(), LedError>) {
        match self {
            Self::Running(driver) => (Self::Running(driver), Err(LedError::AlreadyRunning)),
            Self::Idle(mut bus) => match probe(&mut bus, options.address) {
                Ok(found) => {
                    let driver =
                        Ncp5623c::from_probe(bus, options.bus, found, max_brightness_raw);
                    (Self::Running(driver), Ok(()))
                }
                Err(e) => (Self::Idle(bus), Err(e)),
            },
        }
    }

    /// Stoppt und zerstört die Instanz
    pub fn stop(self) -> (Self, Result<(), LedError>) {
        match self {
            Self::Idle(bus) => (Self::Idle(bus), Err(LedError::NotRunning)),
            Self::Running(mut driver) => {
                driver.stop();
                (Self::Idle(driver.release()), Ok(()))
            }
        }
    }

    pub fn status(&self) -> Option<DeviceStatus> {
        self.driver().map(Ncp5623c::status)
    }

    pub fn is_running(&self) -> bool {
        self.driver().is_some_and(Ncp5623c::is_running)
    }

    pub fn driver(&self) -> Option<&Ncp5623c<B>> {
        match self {
            Self::Idle(_) => None,
            Self::Running(driver) => Some(driver),
        }
    }

    /// Zugriff auf die laufende Instanz für den Tick
    pub fn driver_mut(&mut self) -> Option<&mut Ncp5623c<B>> {
        match self {
            Self::Idle(_) => None,
            Self::Running(driver) => Some(driver),
        }
    }

    /// Löst das Modul auf und gibt den Bus zurück
    pub fn into_bus(self) -> B {
        match self {
            Self::Idle(bus) => bus,
            Self::Running(driver) => driver.release(),
        }
    }
}

/// Rückgabewert für die Kommandozeile
pub fn exit_code<T>(result: &Result<T, LedError>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(_) => -1,
    }
}
