//! Configuration loading and parsing.
//!
//! Parses `tabula.toml` (or an override path provided by the binary). Every
//! section and field is optional; absent values take the defaults below and
//! unknown fields are ignored so the file can evolve without warnings. A file
//! that fails to parse falls back to defaults with a `warn!` under the
//! `config` target rather than aborting.
//!
//! ```toml
//! [display]
//! color = "auto"          # auto | always | never
//! width_mode = "unicode"  # unicode | bytes
//!
//! [font]
//! command = "figlet"
//! name = "standard"
//! timeout_ms = 2000
//!
//! [progress]
//! width = 30
//!
//! [style]
//! fg = "cyan"
//! bold = true
//! ```

use anyhow::Result;
use core_render::Style;
use core_text::WidthMode;
use serde::Deserialize;
use std::time::Duration;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const FILE_NAME: &str = "tabula.toml";

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WidthModeSetting {
    #[default]
    Unicode,
    Bytes,
}

impl From<WidthModeSetting> for WidthMode {
    fn from(setting: WidthModeSetting) -> Self {
        match setting {
            WidthModeSetting::Unicode => WidthMode::Unicode,
            WidthModeSetting::Bytes => WidthMode::Bytes,
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct DisplayConfig {
    #[serde(default)]
    pub color: ColorChoice,
    #[serde(default)]
    pub width_mode: WidthModeSetting,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FontConfig {
    #[serde(default = "FontConfig::default_command")]
    pub command: String,
    #[serde(default = "FontConfig::default_name")]
    pub name: String,
    #[serde(default = "FontConfig::default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            command: Self::default_command(),
            name: Self::default_name(),
            timeout_ms: Self::default_timeout_ms(),
        }
    }
}

impl FontConfig {
    fn default_command() -> String {
        "figlet".to_string()
    }
    fn default_name() -> String {
        "standard".to_string()
    }
    const fn default_timeout_ms() -> u64 {
        2000
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProgressConfig {
    #[serde(default = "ProgressConfig::default_width")]
    pub width: usize,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
        }
    }
}

impl ProgressConfig {
    const fn default_width() -> usize {
        30
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub font: FontConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
    #[serde(default)]
    pub style: Option<Style>,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub path: Option<PathBuf>, // file the values came from, if any
    pub raw: Option<String>,   // original file string (optional)
    pub file: ConfigFile,      // parsed (or default) data
}

/// Best-effort config path: working directory first, then the platform
/// config dir (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("tabula").join(FILE_NAME);
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                path: Some(path),
                raw: Some(content),
                file,
            })
        }
        Err(err) => {
            warn!(
                target: "config",
                path = %path.display(),
                error = %err.message(),
                "config_parse_error_using_defaults"
            );
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Resolve the `color` setting against whether stdout is a terminal and
    /// whether the environment opted out (`NO_COLOR`).
    pub fn color_enabled(&self, is_tty: bool, no_color: bool) -> bool {
        match self.file.display.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => is_tty && !no_color,
        }
    }

    pub fn width_mode(&self) -> WidthMode {
        self.file.display.width_mode.into()
    }

    /// Default style for emitted text; `None` when the file sets none.
    pub fn default_style(&self) -> Option<Style> {
        self.file.style.filter(|s| !s.is_plain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_render::Color;
    use std::io::Write;
    use std::sync::{Arc, Mutex, MutexGuard};
    use tracing::Level;
    use tracing::subscriber::with_default;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone)]
    struct BufferWriter {
        inner: Arc<Mutex<Vec<u8>>>,
    }

    impl BufferWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buf = Arc::new(Mutex::new(Vec::new()));
            (Self { inner: buf.clone() }, buf)
        }
    }

    struct LockedWriter<'a> {
        guard: MutexGuard<'a, Vec<u8>>,
    }

    impl<'a> Write for LockedWriter<'a> {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.guard.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for BufferWriter {
        type Writer = LockedWriter<'a>;

        fn make_writer(&'a self) -> Self::Writer {
            LockedWriter {
                guard: self.inner.lock().expect("log buffer poisoned"),
            }
        }
    }

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), body).unwrap();
        tmp
    }

    #[test]
    fn default_config_when_missing_file() {
        let cfg = load_from(Some(PathBuf::from("__nonexistent_hopefully__.toml"))).unwrap();
        assert!(cfg.path.is_none());
        assert_eq!(cfg.file.display.color, ColorChoice::Auto);
        assert_eq!(cfg.width_mode(), WidthMode::Unicode);
        assert_eq!(cfg.file.font.command, "figlet");
        assert_eq!(cfg.file.font.name, "standard");
        assert_eq!(cfg.file.font.timeout(), Duration::from_millis(2000));
        assert_eq!(cfg.file.progress.width, 30);
        assert!(cfg.default_style().is_none());
    }

    #[test]
    fn parses_all_sections() {
        let tmp = write_config(
            "[display]\ncolor = \"never\"\nwidth_mode = \"bytes\"\n\
             [font]\ncommand = \"toilet\"\nname = \"slant\"\ntimeout_ms = 250\n\
             [progress]\nwidth = 12\n\
             [style]\nfg = \"bright_green\"\nbold = true\n",
        );
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file.display.color, ColorChoice::Never);
        assert_eq!(cfg.width_mode(), WidthMode::Bytes);
        assert_eq!(cfg.file.font.command, "toilet");
        assert_eq!(cfg.file.font.name, "slant");
        assert_eq!(cfg.file.font.timeout(), Duration::from_millis(250));
        assert_eq!(cfg.file.progress.width, 12);
        assert_eq!(
            cfg.default_style(),
            Some(Style::new().fg(Color::BrightGreen).bold())
        );
    }

    #[test]
    fn partial_sections_keep_field_defaults() {
        let tmp = write_config("[font]\nname = \"big\"\n[unknown]\nkey = 1\n");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file.font.name, "big");
        assert_eq!(cfg.file.font.command, "figlet");
        assert_eq!(cfg.file.font.timeout_ms, 2000);
    }

    #[test]
    fn color_choice_resolution() {
        let mut cfg = Config::default();
        assert!(cfg.color_enabled(true, false));
        assert!(!cfg.color_enabled(false, false));
        assert!(!cfg.color_enabled(true, true));
        cfg.file.display.color = ColorChoice::Always;
        assert!(cfg.color_enabled(false, true));
        cfg.file.display.color = ColorChoice::Never;
        assert!(!cfg.color_enabled(true, false));
    }

    #[test]
    fn parse_error_falls_back_and_logs() {
        let tmp = write_config("[display]\ncolor = \"sometimes\"\n");
        let (writer, buffer) = BufferWriter::new();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::WARN)
            .with_target(true)
            .with_ansi(false)
            .without_time()
            .with_writer(writer)
            .finish();

        let cfg = with_default(subscriber, || {
            load_from(Some(tmp.path().to_path_buf())).unwrap()
        });

        let log_output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(log_output.contains("WARN config:"));
        assert!(log_output.contains("config_parse_error_using_defaults"));
        assert_eq!(cfg.file.display.color, ColorChoice::Auto);
        assert!(cfg.raw.is_none());
    }
}
