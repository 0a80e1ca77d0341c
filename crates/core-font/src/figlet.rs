//! External `figlet`-compatible driver.
//!
//! Runs `<command> -f <font> <text>` as a child process (no shell, so no
//! quoting concerns), with stdout captured and stderr discarded. The call
//! blocks for at most `timeout`: stdout is drained on a helper thread while
//! the child is polled with `try_wait`; on expiry the child is killed.
//!
//! Output lines are trimmed of trailing whitespace and trailing blank lines
//! are dropped. Exit status 0 with non-empty output is the only success.

use crate::{Art, FontDriver};
use std::io::{self, Read};
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

pub const DEFAULT_COMMAND: &str = "figlet";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);
const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("`{command}` did not finish within {timeout:?}")]
    Timeout { command: String, timeout: Duration },
    #[error("`{command}` exited with {status}")]
    Exit { command: String, status: ExitStatus },
    #[error("`{command}` produced no output")]
    EmptyOutput { command: String },
    #[error("`{command}` produced output that is not UTF-8")]
    InvalidOutput { command: String },
    #[error("i/o error while waiting for `{command}`: {source}")]
    Io {
        command: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct FigletDriver {
    command: String,
    timeout: Duration,
}

impl Default for FigletDriver {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND)
    }
}

impl FigletDriver {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run the external command and return its art or the reason it failed.
    pub fn try_render(&self, text: &str, font: &str) -> Result<String, FontError> {
        let mut child = Command::new(&self.command)
            .arg("-f")
            .arg(font)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| FontError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        let reader = child.stdout.take().map(|mut stdout| {
            thread::spawn(move || {
                let mut buf = Vec::new();
                stdout.read_to_end(&mut buf).map(|_| buf)
            })
        });

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(FontError::Timeout {
                        command: self.command.clone(),
                        timeout: self.timeout,
                    });
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(source) => {
                    let _ = child.kill();
                    return Err(self.io_error(source));
                }
            }
        };

        let bytes = match reader {
            Some(handle) => handle
                .join()
                .map_err(|_| self.io_error(io::Error::other("stdout reader panicked")))?
                .map_err(|source| self.io_error(source))?,
            None => Vec::new(),
        };

        if !status.success() {
            return Err(FontError::Exit {
                command: self.command.clone(),
                status,
            });
        }
        let output = String::from_utf8(bytes).map_err(|_| FontError::InvalidOutput {
            command: self.command.clone(),
        })?;
        let art = tidy_output(&output);
        if art.is_empty() {
            return Err(FontError::EmptyOutput {
                command: self.command.clone(),
            });
        }
        Ok(art)
    }

    fn io_error(&self, source: io::Error) -> FontError {
        FontError::Io {
            command: self.command.clone(),
            source,
        }
    }
}

fn tidy_output(output: &str) -> String {
    let lines: Vec<&str> = output.lines().map(str::trim_end).collect();
    let keep = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .map_or(0, |last| last + 1);
    lines[..keep].join("\n")
}

impl FontDriver for FigletDriver {
    fn name(&self) -> &'static str {
        "figlet"
    }

    fn render_art(&self, text: &str, font: &str) -> Art {
        let started = Instant::now();
        match self.try_render(text, font) {
            Ok(art) => {
                debug!(
                    target: "font.figlet",
                    font,
                    lines = art.lines().count(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "art_rendered"
                );
                Art::Rendered(art)
            }
            Err(err) => {
                debug!(target: "font.figlet", font, error = %err, "art_unavailable");
                Art::Unavailable
            }
        }
    }
}
