// Policy-Engine Adapter
//
// Die eigentliche LED-Policy (Prioritäten, Blinken) lebt außerhalb des
// Treibers. Dieser Adapter liefert dem Treiber das zuletzt publizierte
// Kommando genau einmal.

use core::time::Duration;

use ncp_core::{ActiveCommand, LedController};

use crate::LedControlSignal;
use crate::config::LED_UPDATE_INTERVAL_MS;

/// LedController über ein Embassy Signal
///
/// Mehrere Kommandos zwischen zwei Ticks werden zusammengefasst, nur das
/// letzte wird gerendert.
pub struct SignalLedController {
    signal: &'static LedControlSignal,
}

impl SignalLedController {
    pub fn new(signal: &'static LedControlSignal) -> Self {
        Self { signal }
    }
}

impl LedController for SignalLedController {
    fn update(&mut self) -> Option<ActiveCommand> {
        self.signal.try_take()
    }

    fn maximum_update_interval(&self) -> Duration {
        Duration::from_millis(LED_UPDATE_INTERVAL_MS)
    }
}
