// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::error;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use ncp5623c_rgbled::config::{I2C_FREQUENCY_KHZ, STARTUP_COMMANDS, STATUS_COMMAND};
use ncp5623c_rgbled::hal::EspI2cBus;
use ncp5623c_rgbled::shell::run_command;
use ncp5623c_rgbled::tasks::{led_demo_task, rgbled_task};
use ncp5623c_rgbled::{DriverCommandChannel, DriverReplySignal, LedControlSignal};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Status-Abfrage Intervall in Sekunden
const STATUS_INTERVAL_SECS: u64 = 60;

/// Main Entry Point
///
/// Initialisiert Hardware und I2C, startet Embassy Runtime, spawnt Tasks und
/// führt die Start-Kommandos aus (`STARTUP_COMMANDS`). Danach fragt main()
/// nur noch periodisch den Status ab.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // I2C0 initialisieren: SDA = GPIO6, SCL = GPIO7 (Pinbelegung des Boards)
    let bus = EspI2cBus::new(
        peripherals.I2C0,
        peripherals.GPIO6,
        peripherals.GPIO7,
        I2C_FREQUENCY_KHZ,
    )
    .expect("Failed to initialize I2C0");

    // Policy-Signal: letztes aktives LED-Kommando (Demo → RGB-LED Task)
    static LED_CONTROL: static_cell::StaticCell<LedControlSignal> = static_cell::StaticCell::new();
    let led_control = &*LED_CONTROL.init(LedControlSignal::new());

    // Kommando-Channel und Antwort-Slot (main → RGB-LED Task → main)
    static COMMAND_CHANNEL: static_cell::StaticCell<DriverCommandChannel> =
        static_cell::StaticCell::new();
    let command_channel = &*COMMAND_CHANNEL.init(DriverCommandChannel::new());
    let command_sender = command_channel.sender();

    static REPLIES: static_cell::StaticCell<DriverReplySignal> = static_cell::StaticCell::new();
    let replies = &*REPLIES.init(DriverReplySignal::new());

    // Spawn RGB-LED Task (besitzt den I2C-Bus)
    spawner
        .spawn(rgbled_task(
            bus,
            led_control,
            command_channel.receiver(),
            replies,
        ))
        .unwrap();

    // Spawn Demo-Task als Stellvertreter für die Policy-Engine
    spawner.spawn(led_demo_task(led_control)).unwrap();

    // start: Attach + Probe + Schedule
    for line in STARTUP_COMMANDS {
        if run_command(line, command_sender, replies).await != 0 {
            error!("rgbled: '{}' failed", line);
        }
    }

    // Main-Loop: periodischer Status
    loop {
        Timer::after(Duration::from_secs(STATUS_INTERVAL_SECS)).await;
        run_command(STATUS_COMMAND, command_sender, replies).await;
    }
}
