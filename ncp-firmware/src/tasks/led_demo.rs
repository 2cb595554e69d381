// LED Demo Task - Stellvertreter für die Upstream Policy-Engine
use defmt::{info, warn};
use embassy_time::{Duration, Timer};

use ncp_core::{ActiveCommand, NamedColor};

use crate::LedControlSignal;
use crate::config::{DEMO_BRIGHTNESS, DEMO_COLORS, DEMO_INTERVAL_SECS};

/// LED Demo Task - publiziert reihum die Farben aus `DEMO_COLORS`
///
/// Der Treiber selbst animiert nichts. Ohne echte Policy-Engine sorgt dieser
/// Task dafür, dass auf dem Board überhaupt etwas zu sehen ist.
///
/// # Parameter
/// - `led_control`: Signal, aus dem der SignalLedController liest
#[embassy_executor::task]
pub async fn led_demo_task(led_control: &'static LedControlSignal) -> ! {
    let mut names = DEMO_COLORS.iter().cycle();

    loop {
        // Leere Farbliste: nur warten
        if let Some(name) = names.next() {
            match NamedColor::try_from(*name) {
                Ok(color) => {
                    info!("Demo: {}", color);
                    led_control.signal(ActiveCommand::new(color, DEMO_BRIGHTNESS));
                }
                Err(()) => warn!("Demo: unknown color '{}'", name),
            }
        }

        Timer::after(Duration::from_secs(DEMO_INTERVAL_SECS)).await;
    }
}
