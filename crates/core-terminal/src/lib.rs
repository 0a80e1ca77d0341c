//! Terminal environment probing.
//!
//! Output is line oriented and never enters raw mode or the alternate
//! screen, so the only terminal facts the binary needs are the ones probed
//! here once at startup.

pub mod capabilities;
pub use capabilities::{DEFAULT_COLUMNS, TerminalCapabilities};
