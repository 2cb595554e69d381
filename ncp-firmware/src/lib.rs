// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod control;
pub mod hal;
pub mod shell;
pub mod tasks;

// Re-exports von ncp-core
pub use ncp_core::{ActiveCommand, DeviceStatus, LedError, NamedColor, StartOptions, Verb};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_sync::signal::Signal;

// ============================================================================
// Treiber-Kommandos (Prozess-Schnittstelle)
// ============================================================================

/// Kommando an den RGB-LED Task
#[derive(Clone, Copy, defmt::Format)]
pub enum DriverCommand {
    /// Attach + Probe, danach läuft der Reconcile-Schedule
    Start(StartOptions),
    /// Schedule anhalten und Instanz zerstören
    Stop,
    /// Status abfragen (Antwort über DriverReplySignal)
    Status,
    /// Neuer Roh-Wert für LED_RGB1_MAXBRT
    SetMaxBrightness(i32),
}

impl DriverCommand {
    /// Kommando zu einem Verb der Kommandozeile, Optionen zählen nur für `start`
    pub fn from_verb(verb: Verb, options: StartOptions) -> Self {
        match verb {
            Verb::Start => DriverCommand::Start(options),
            Verb::Stop => DriverCommand::Stop,
            Verb::Status => DriverCommand::Status,
        }
    }
}

/// Antwort des RGB-LED Tasks auf ein Kommando
#[derive(Clone, Copy, defmt::Format)]
pub struct DriverReply {
    /// 0 = Erfolg, -1 = Fehler
    pub code: i32,
    /// Nur bei `Status` und laufendem Treiber gesetzt
    pub status: Option<DeviceStatus>,
}

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Statt:  Sender<'static, NoopRawMutex, DriverCommand, 4>
// Nutze:  DriverCommandSender

/// Channel für Treiber-Kommandos (main → RGB-LED Task)
/// - 4: Nachrichten-Kapazität
pub type DriverCommandChannel = Channel<NoopRawMutex, DriverCommand, 4>;

/// Sender für Treiber-Kommandos
pub type DriverCommandSender = Sender<'static, NoopRawMutex, DriverCommand, 4>;

/// Receiver für Treiber-Kommandos (RGB-LED Task empfängt)
pub type DriverCommandReceiver = Receiver<'static, NoopRawMutex, DriverCommand, 4>;

/// Antwort-Slot für Treiber-Kommandos (letzte Antwort gewinnt)
pub type DriverReplySignal = Signal<NoopRawMutex, DriverReply>;

/// Aktives LED-Kommando der Policy-Engine (letztes Kommando gewinnt)
pub type LedControlSignal = Signal<NoopRawMutex, ActiveCommand>;
