// RGB-LED Task - Hält den NCP5623C synchron mit der Policy-Engine
use defmt::{debug, error, info, warn};
use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Instant, Timer};

use ncp_core::{
    I2cTransfer, LedController, ParamSubscription, RgbledModule, StartOptions, exit_code,
};

use crate::config::{PARAM_UPDATE_INTERVAL_MS, max_brightness_param};
use crate::control::SignalLedController;
use crate::hal::EspI2cBus;
use crate::{
    DriverCommand, DriverCommandReceiver, DriverReply, DriverReplySignal, LedControlSignal,
};

/// RGB-LED Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Wartet gleichzeitig auf den nächsten Tick und auf Kommandos:
/// - Tick: Parameter-Abo prüfen, Reconcile-Durchlauf, Timer neu setzen
/// - Kommando: start / stop / status / Parameter ändern
///
/// Ein Tick läuft immer komplett durch bevor der nächste Timer gesetzt
/// wird. Nach `stop` wird kein Timer mehr gesetzt.
///
/// # Trait-basierte Abstraktion
/// - `B: I2cTransfer`: EspI2cBus im Production-Code, Mock in Tests
/// - `C: LedController`: Policy-Engine (hier SignalLedController)
pub async fn rgbled_logic<B: I2cTransfer, C: LedController>(
    bus: B,
    mut controller: C,
    command_receiver: DriverCommandReceiver,
    replies: &'static DriverReplySignal,
) -> ! {
    let mut module = RgbledModule::new(bus);
    let mut params = ParamSubscription::new(core::time::Duration::from_millis(
        PARAM_UPDATE_INTERVAL_MS,
    ));

    // Parameter-Speicher: gilt für jeden folgenden `start`
    let mut max_brightness = max_brightness_param();

    // None = kein Schedule aktiv
    let mut next_tick: Option<Instant> = None;

    loop {
        let deadline = next_tick.unwrap_or(Instant::MAX);

        match select(Timer::at(deadline), command_receiver.receive()).await {
            Either::First(()) => {
                next_tick = reconcile(&mut module, &mut controller, &mut params);
            }
            Either::Second(command) => {
                debug!("RGBLED: command {}", command);

                let reply = match command {
                    DriverCommand::Start(options) => {
                        let (next, result) = start(module, options, max_brightness);
                        module = next;
                        if result.is_ok() {
                            // Erster Tick sofort
                            next_tick = Some(Instant::now());
                        }
                        DriverReply {
                            code: exit_code(&result),
                            status: module.status(),
                        }
                    }
                    DriverCommand::Stop => {
                        let (next, result) = module.stop();
                        module = next;
                        match result {
                            Ok(()) => info!("RGBLED: stopped"),
                            Err(e) => warn!("RGBLED: stop failed: {}", e),
                        }
                        next_tick = None;
                        DriverReply {
                            code: exit_code(&result),
                            status: None,
                        }
                    }
                    DriverCommand::Status => {
                        let status = module.status();
                        match status {
                            Some(status) => info!("RGBLED: running, {}", status),
                            None => info!("RGBLED: not running"),
                        }
                        DriverReply {
                            code: if module.is_running() { 0 } else { -1 },
                            status,
                        }
                    }
                    DriverCommand::SetMaxBrightness(raw) => {
                        info!("RGBLED: LED_RGB1_MAXBRT = {}", raw);
                        max_brightness = raw;
                        params.publish(raw);
                        DriverReply {
                            code: 0,
                            status: None,
                        }
                    }
                };

                replies.signal(reply);
            }
        }
    }
}

/// Attach + Probe mit Logging
fn start<B: I2cTransfer>(
    module: RgbledModule<B>,
    options: StartOptions,
    max_brightness: i32,
) -> (RgbledModule<B>, Result<(), ncp_core::LedError>) {
    info!("RGBLED: starting ({})", options);

    let (module, result) = module.start(options, max_brightness);
    match (&result, module.status()) {
        (Ok(()), Some(status)) => info!(
            "RGBLED: found NCP5623C at {=u8:#x}, channel map {}",
            status.address, status.channel_map
        ),
        (Ok(()), None) => {}
        (Err(e), _) => error!("RGBLED: start failed: {}", e),
    }
    (module, result)
}

/// Ein Reconcile-Tick, gibt den Zeitpunkt des nächsten Ticks zurück
fn reconcile<B: I2cTransfer, C: LedController>(
    module: &mut RgbledModule<B>,
    controller: &mut C,
    params: &mut ParamSubscription,
) -> Option<Instant> {
    let driver = module.driver_mut()?;

    let since_boot = core::time::Duration::from_micros(Instant::now().as_micros());
    if let Some(raw) = params.poll(since_boot) {
        driver.notify_param_update(raw);
    }

    let errors_before = driver.transfer_errors();
    let interval = driver.tick(controller)?;

    // Kein Retry: der nächste Tick schreibt den kompletten Zustand ohnehin neu
    if driver.transfer_errors() != errors_before {
        debug!(
            "RGBLED: transfer failed ({} total)",
            driver.transfer_errors()
        );
    }

    // Intervalle jenseits von u64 Ticks: praktisch nie wieder
    let interval = Duration::try_from(interval).unwrap_or(Duration::MAX);
    Some(Instant::now().checked_add(interval).unwrap_or(Instant::MAX))
}

/// RGB-LED Task - Embassy Task für parallele Ausführung
///
/// Übernimmt den fertig initialisierten I2C-Bus und ruft dann die testbare
/// `rgbled_logic()` Funktion auf.
///
/// # Parameter
/// - `bus`: I2C-Bus Adapter (I2C0)
/// - `led_control`: Signal mit dem aktiven Kommando der Policy-Engine
/// - `command_receiver`: Channel Receiver für start/stop/status
/// - `replies`: Antwort-Slot für Kommandos
#[embassy_executor::task]
pub async fn rgbled_task(
    bus: EspI2cBus<'static>,
    led_control: &'static LedControlSignal,
    command_receiver: DriverCommandReceiver,
    replies: &'static DriverReplySignal,
) -> ! {
    let controller = SignalLedController::new(led_control);
    rgbled_logic(bus, controller, command_receiver, replies).await
}
