//! Test-Doubles für ncp-core
//!
//! Mock-Implementierungen der Hardware-Traits, geteilt von allen
//! Integration Tests in `tests/`.

use core::time::Duration;

use ncp_core::protocol::FRAME_LEN;
use ncp_core::{ActiveCommand, I2cTransfer, LedController, LedError};

// ============================================================================
// Mock I2C Bus
// ============================================================================

#[derive(Default)]
pub struct MockBus {
    /// Alle erfolgreichen Transfers (Adresse, Bytes)
    pub writes: Vec<(u8, Vec<u8>)>,
    /// Adressen, auf denen der Chip antwortet
    pub present_at: Vec<u8>,
    /// Nummern der write()-Aufrufe, die fehlschlagen sollen (0 = Probe)
    pub fail_attempts: Vec<usize>,
    pub attempts: usize,
}

impl MockBus {
    pub fn at(address: u8) -> Self {
        Self {
            present_at: vec![address],
            ..Self::default()
        }
    }

    pub fn frames(&self) -> Vec<Vec<u8>> {
        self.writes
            .iter()
            .filter(|(_, data)| data.len() == FRAME_LEN)
            .map(|(_, data)| data.clone())
            .collect()
    }

    pub fn last_frame(&self) -> Option<Vec<u8>> {
        self.frames().last().cloned()
    }
}

impl I2cTransfer for MockBus {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), LedError> {
        let attempt = self.attempts;
        self.attempts += 1;

        if self.fail_attempts.contains(&attempt) {
            return Err(LedError::TransferFailed);
        }
        if !self.present_at.contains(&address) {
            return Err(LedError::TransferFailed);
        }

        self.writes.push((address, data.to_vec()));
        Ok(())
    }
}

// ============================================================================
// Mock LED Controller (Policy-Engine)
// ============================================================================

pub struct MockController {
    /// Kommandos, die nacheinander von update() geliefert werden
    pub commands: Vec<Option<ActiveCommand>>,
    pub interval: Duration,
    pub update_count: usize,
}

impl MockController {
    pub fn new(commands: Vec<Option<ActiveCommand>>) -> Self {
        Self {
            commands,
            interval: Duration::from_millis(50),
            update_count: 0,
        }
    }
}

impl LedController for MockController {
    fn update(&mut self) -> Option<ActiveCommand> {
        self.update_count += 1;
        if self.commands.is_empty() {
            None
        } else {
            self.commands.remove(0)
        }
    }

    fn maximum_update_interval(&self) -> Duration {
        self.interval
    }
}
