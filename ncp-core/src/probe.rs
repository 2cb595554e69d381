//! Adress-Erkennung beim Attach
//!
//! Der NCP5623C existiert in zwei Varianten. Die Variante auf `ALT_ADDR` hat
//! die Ausgänge für Rot und Blau vertauscht, deshalb legt die Probe auch die
//! Kanal-Zuordnung fest.

use crate::protocol::{ALT_ADDR, ChannelMap, LED_OFF, Register, encode_byte};
use crate::traits::{I2cTransfer, LedError};

/// Ergebnis einer erfolgreichen Probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResult {
    pub address: u8,
    pub channel_map: ChannelMap,
}

/// Sucht den Chip auf `primary` und danach auf `ALT_ADDR`
///
/// Als Test-Schreibzugriff wird das Strom-Register auf 0 gesetzt, das ist
/// in jedem Zustand harmlos. Kein Retry: antwortet keine der beiden Adressen,
/// kommt `LedError::DeviceNotFound` zurück.
pub fn probe<B: I2cTransfer>(bus: &mut B, primary: u8) -> Result<ProbeResult, LedError> {
    let msg = [encode_byte(Register::Current, LED_OFF)];

    if bus.write(primary, &msg).is_ok() {
        return Ok(ProbeResult {
            address: primary,
            channel_map: ChannelMap::Default,
        });
    }

    bus.write(ALT_ADDR, &msg)
        .map(|()| ProbeResult {
            address: ALT_ADDR,
            channel_map: ChannelMap::Swapped,
        })
        .map_err(|_| LedError::DeviceNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ADDR;

    /// Antwortet nur auf einer Adresse
    struct OnlyAt(Option<u8>);

    impl I2cTransfer for OnlyAt {
        fn write(&mut self, address: u8, _data: &[u8]) -> Result<(), LedError> {
            match self.0 {
                Some(a) if a == address => Ok(()),
                _ => Err(LedError::TransferFailed),
            }
        }
    }

    #[test]
    fn test_probe_primary() {
        let result = probe(&mut OnlyAt(Some(ADDR)), ADDR).unwrap();
        assert_eq!(result.address, ADDR);
        assert_eq!(result.channel_map, ChannelMap::Default);
    }

    #[test]
    fn test_probe_alternate_swaps_channels() {
        let result = probe(&mut OnlyAt(Some(ALT_ADDR)), ADDR).unwrap();
        assert_eq!(result.address, ALT_ADDR);
        assert_eq!(result.channel_map, ChannelMap::Swapped);
    }

    #[test]
    fn test_probe_not_found() {
        assert_eq!(probe(&mut OnlyAt(None), ADDR), Err(LedError::DeviceNotFound));
    }
}
