//! NCP5623C Treiber-Instanz
//!
//! Hält den Gerätezustand eines Chips und gleicht ihn pro Tick mit der
//! Policy-Engine und dem Helligkeits-Parameter ab.

use core::time::Duration;

use rgb::RGB8;

use crate::logic::{brightness_fraction, compute_max_brightness, resolve_color, scale};
use crate::probe::{ProbeResult, probe};
use crate::protocol::{ChannelMap, FRAME_LEN, LED_BRIGHT, Register, encode_byte, encode_frame};
use crate::traits::{I2cTransfer, LedController, LedError};
use crate::types::{DeviceStatus, StartOptions};

/// Treiber für einen NCP5623C auf einem I2C-Bus
///
/// Der Zustand gehört exklusiv dieser Instanz. Ticks laufen strikt
/// sequentiell, daher kein Locking.
pub struct Ncp5623c<B> {
    bus: B,
    bus_index: u8,
    address: u8,
    channel_map: ChannelMap,
    /// Letzte Farbe der Policy-Engine, unskaliert (0-31 pro Kanal)
    color: RGB8,
    brightness: f32,
    max_brightness: f32,
    running: bool,
    /// Single-Slot: nur die letzte Änderung zwischen zwei Ticks zählt
    pending_param: Option<i32>,
    transfer_errors: u32,
}

impl<B: I2cTransfer> Ncp5623c<B> {
    /// Probt den Chip und erzeugt die Instanz
    ///
    /// Schlägt die Probe auf beiden Adressen fehl, wird keine Instanz
    /// erzeugt und der Bus verworfen.
    pub fn attach(
        mut bus: B,
        options: StartOptions,
        max_brightness_raw: i32,
    ) -> Result<Self, LedError> {
        let found = probe(&mut bus, options.address)?;
        Ok(Self::from_probe(bus, options.bus, found, max_brightness_raw))
    }

    /// Erzeugt die Instanz aus einer bereits erfolgreichen Probe
    pub fn from_probe(
        bus: B,
        bus_index: u8,
        found: ProbeResult,
        max_brightness_raw: i32,
    ) -> Self {
        let ProbeResult {
            address,
            channel_map,
        } = found;

        Self {
            bus,
            bus_index,
            address,
            channel_map,
            color: RGB8::default(),
            brightness: 1.0,
            max_brightness: compute_max_brightness(max_brightness_raw),
            running: true,
            pending_param: None,
            transfer_errors: 0,
        }
    }

    /// Merkt eine Parameter-Änderung für den nächsten Tick vor
    ///
    /// Mehrere Aufrufe zwischen zwei Ticks überschreiben sich.
    pub fn notify_param_update(&mut self, max_brightness_raw: i32) {
        self.pending_param = Some(max_brightness_raw);
    }

    /// Ein Reconcile-Durchlauf
    ///
    /// 1. Steht eine Parameter-Änderung an, wird der Deckel neu berechnet und
    ///    sofort neu gerendert.
    /// 2. Hat die Policy-Engine ein aktives Kommando, wird dessen Farbe
    ///    übernommen und gerendert. Ohne Kommando bleibt der Chip unverändert.
    ///
    /// Gibt das Intervall bis zum nächsten Tick zurück, `None` nach `stop()`.
    pub fn tick<C: LedController>(&mut self, controller: &mut C) -> Option<Duration> {
        if !self.running {
            return None;
        }

        if let Some(raw) = self.pending_param.take() {
            self.max_brightness = compute_max_brightness(raw);
            // Fehler sind bereits gezählt, der nächste Tick rendert ohnehin neu
            let _ = self.render();
        }

        if let Some(command) = controller.update() {
            self.color = resolve_color(command.color);
            self.brightness = brightness_fraction(command.brightness);
            let _ = self.render();
        }

        Some(controller.maximum_update_interval())
    }

    /// Schreibt den aktuellen Zustand als einen 7-Byte-Transfer
    ///
    /// Kein Retry. Fehlschläge werden nur gezählt.
    pub fn render(&mut self) -> Result<(), LedError> {
        let frame = self.frame();
        let result = self.bus.write(self.address, &frame);
        if result.is_err() {
            self.transfer_errors = self.transfer_errors.saturating_add(1);
        }
        result
    }

    /// Der Frame, den `render()` senden würde
    pub fn frame(&self) -> [u8; FRAME_LEN] {
        let map = self.channel_map;
        let current = scale(LED_BRIGHT, self.max_brightness);

        encode_frame(
            encode_byte(Register::Current, current),
            encode_byte(map.red(), scale(self.color.r, self.brightness)),
            encode_byte(map.green(), scale(self.color.g, self.brightness)),
            encode_byte(map.blue(), scale(self.color.b, self.brightness)),
        )
    }

    /// Beendet den Schedule; ein laufender Transfer ist bereits abgeschlossen
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn channel_map(&self) -> ChannelMap {
        self.channel_map
    }

    pub fn color(&self) -> RGB8 {
        self.color
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn max_brightness(&self) -> f32 {
        self.max_brightness
    }

    /// Anzahl fehlgeschlagener Render-Transfers seit Attach
    pub fn transfer_errors(&self) -> u32 {
        self.transfer_errors
    }

    pub fn status(&self) -> DeviceStatus {
        DeviceStatus {
            bus: self.bus_index,
            address: self.address,
            channel_map: self.channel_map,
            color: self.color,
            brightness: self.brightness,
            max_brightness: self.max_brightness,
            running: self.running,
            transfer_errors: self.transfer_errors,
        }
    }

    /// Gibt den Bus wieder frei
    pub fn release(self) -> B {
        self.bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ADDR;
    use crate::types::{ActiveCommand, NamedColor};

    struct NullBus;

    impl I2cTransfer for NullBus {
        fn write(&mut self, _address: u8, _data: &[u8]) -> Result<(), LedError> {
            Ok(())
        }
    }

    struct Once(Option<ActiveCommand>);

    impl LedController for Once {
        fn update(&mut self) -> Option<ActiveCommand> {
            self.0.take()
        }

        fn maximum_update_interval(&self) -> Duration {
            Duration::from_millis(50)
        }
    }

    #[test]
    fn test_initial_frame_is_dark_at_full_current() {
        let driver = Ncp5623c::attach(NullBus, StartOptions::default(), 31).unwrap();
        assert_eq!(driver.address(), ADDR);
        assert_eq!(driver.frame(), [0x3f, 0x70, 0x40, 0x70, 0x60, 0x70, 0x80]);
    }

    #[test]
    fn test_tick_applies_command() {
        let mut driver = Ncp5623c::attach(NullBus, StartOptions::default(), 31).unwrap();
        let mut controller = Once(Some(ActiveCommand::new(NamedColor::Purple, 255)));

        assert_eq!(driver.tick(&mut controller), Some(Duration::from_millis(50)));
        assert_eq!(driver.color(), RGB8 { r: 31, g: 0, b: 31 });
        assert_eq!(driver.frame(), [0x3f, 0x70, 0x5f, 0x70, 0x60, 0x70, 0x9f]);
    }

    #[test]
    fn test_half_brightness_scales_channels() {
        let mut driver = Ncp5623c::attach(NullBus, StartOptions::default(), 31).unwrap();
        let mut controller = Once(Some(ActiveCommand::new(NamedColor::Red, 128)));

        driver.tick(&mut controller);
        // 31 * 128/255 = 15.56 -> 15
        assert_eq!(driver.frame()[2], 0x40 | 15);
    }

    #[test]
    fn test_stop_ends_schedule() {
        let mut driver = Ncp5623c::attach(NullBus, StartOptions::default(), 31).unwrap();
        driver.stop();
        assert!(!driver.is_running());
        assert_eq!(driver.tick(&mut Once(None)), None);
    }

    #[test]
    fn test_pending_param_last_write_wins() {
        let mut driver = Ncp5623c::attach(NullBus, StartOptions::default(), 31).unwrap();
        driver.notify_param_update(0);
        driver.notify_param_update(40);
        driver.tick(&mut Once(None));
        assert_eq!(driver.max_brightness(), 1.0);
    }
}
