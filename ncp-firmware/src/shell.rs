// Kommandozeile - start / stop / status als Text an den RGB-LED Task
use defmt::{error, info};

use ncp_core::{USAGE, parse_command};

use crate::config::{I2C_BUS, RGBLED_ADDRESS};
use crate::{DriverCommand, DriverCommandSender, DriverReplySignal, StartOptions};

/// Führt eine Kommandozeile aus und gibt den Rückgabewert zurück
///
/// Unbekannte Kommandos geben `USAGE` aus und liefern -1, ohne den
/// RGB-LED Task zu behelligen.
///
/// # Parameter
/// - `line`: z.B. `"start -a 0x38"`
/// - `sender`: Channel zum RGB-LED Task
/// - `replies`: Antwort-Slot des RGB-LED Tasks
pub async fn run_command(
    line: &str,
    sender: DriverCommandSender,
    replies: &DriverReplySignal,
) -> i32 {
    let defaults = StartOptions {
        bus: I2C_BUS,
        address: RGBLED_ADDRESS,
    };

    let Some((verb, options)) = parse_command(line, defaults) else {
        error!("rgbled: unknown command '{}'", line);
        info!("{}", USAGE);
        return -1;
    };

    sender.send(DriverCommand::from_verb(verb, options)).await;
    let reply = replies.wait().await;

    match reply.status {
        Some(status) => info!("rgbled: '{}' -> {} ({})", line, reply.code, status),
        None => info!("rgbled: '{}' -> {}", line, reply.code),
    }
    reply.code
}
