//! NCP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, das Register-Protokoll des NCP5623C und die
//! Reconcile-Logik des Treibers.

#![no_std]

pub mod driver;
pub mod logic;
pub mod module;
pub mod param;
pub mod probe;
pub mod protocol;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use driver::Ncp5623c;
pub use logic::{compute_max_brightness, resolve_color};
pub use module::{RgbledModule, USAGE, Verb, exit_code, parse_command};
pub use param::ParamSubscription;
pub use probe::{ProbeResult, probe};
pub use protocol::{ChannelMap, Register, encode_byte, encode_frame};
pub use traits::{I2cTransfer, LedController, LedError};
pub use types::{ActiveCommand, DeviceStatus, NamedColor, StartOptions};
