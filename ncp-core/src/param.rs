//! Parameter-Abo für `LED_RGB1_MAXBRT`
//!
//! Ein Slot statt Queue: neue Werte überschreiben ältere, und ausgeliefert
//! wird höchstens einmal pro Intervall.

use core::time::Duration;

/// Standard-Intervall zwischen zwei Auslieferungen
pub const PARAM_UPDATE_INTERVAL: Duration = Duration::from_secs(1);

/// Koaleszierendes Abo auf einen Integer-Parameter
#[derive(Debug, Clone)]
pub struct ParamSubscription {
    pending: Option<i32>,
    interval: Duration,
    last_delivery: Option<Duration>,
}

impl ParamSubscription {
    pub const fn new(interval: Duration) -> Self {
        Self {
            pending: None,
            interval,
            last_delivery: None,
        }
    }

    /// Producer-Seite: neuer Wert, last-write-wins
    pub fn publish(&mut self, value: i32) {
        self.pending = Some(value);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consumer-Seite: liefert den Wert, wenn das Intervall abgelaufen ist
    ///
    /// `now` ist eine monotone Zeit seit beliebigem Startpunkt.
    pub fn poll(&mut self, now: Duration) -> Option<i32> {
        let due = match self.last_delivery {
            Some(last) => now.saturating_sub(last) >= self.interval,
            None => true,
        };

        if !due {
            return None;
        }

        let value = self.pending.take()?;
        self.last_delivery = Some(now);
        Some(value)
    }
}

impl Default for ParamSubscription {
    fn default() -> Self {
        Self::new(PARAM_UPDATE_INTERVAL)
    }
}
