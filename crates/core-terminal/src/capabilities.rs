//! Terminal capability probing.
//!
//! Records the handful of facts the binary consults when choosing a
//! renderer and a default layout width:
//! * `columns` – current terminal width, `None` when stdout is not a
//!   terminal or the size query fails.
//! * `is_tty` – whether stdout is attached to a terminal.
//! * `no_color` – the `NO_COLOR` convention: any non-empty value opts out of
//!   color when the config leaves the choice on `auto`.
//!
//! Detection runs once; a failed size query is logged at debug and never
//! treated as an error.

use crossterm::tty::IsTty;
use std::io::stdout;
use tracing::debug;

/// Width assumed when the terminal cannot be asked.
pub const DEFAULT_COLUMNS: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct TerminalCapabilities {
    pub columns: Option<u16>,
    pub is_tty: bool,
    pub no_color: bool,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        let is_tty = stdout().is_tty();
        let columns = if is_tty {
            match crossterm::terminal::size() {
                Ok((cols, _rows)) if cols > 0 => Some(cols),
                Ok(_) => None,
                Err(err) => {
                    debug!(target: "terminal", error = %err, "size_query_failed");
                    None
                }
            }
        } else {
            None
        };
        let caps = Self::from_parts(columns, is_tty, std::env::var_os("NO_COLOR").as_deref());
        debug!(
            target: "terminal",
            columns = ?caps.columns,
            is_tty = caps.is_tty,
            no_color = caps.no_color,
            "capabilities_detected"
        );
        caps
    }

    /// Build from already-probed values; `no_color_var` is the raw
    /// `NO_COLOR` value, where only a non-empty value counts.
    pub fn from_parts(
        columns: Option<u16>,
        is_tty: bool,
        no_color_var: Option<&std::ffi::OsStr>,
    ) -> Self {
        Self {
            columns,
            is_tty,
            no_color: no_color_var.is_some_and(|v| !v.is_empty()),
        }
    }

    /// Detected column count, or `default` when unknown.
    pub fn columns_or(&self, default: usize) -> usize {
        self.columns.map_or(default, usize::from)
    }
}
