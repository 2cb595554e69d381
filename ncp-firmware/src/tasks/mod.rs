// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Tasks kommunizieren über Embassy Channels und Signals
// (main → RGB-LED Task, Demo → Policy-Signal → RGB-LED Task).

pub mod led_demo;
pub mod rgbled;

// Re-export Tasks für einfachen Import
pub use led_demo::led_demo_task;
pub use rgbled::rgbled_task;
