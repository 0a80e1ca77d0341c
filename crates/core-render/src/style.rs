//! Style descriptors.
//!
//! A `Style` is an immutable value describing foreground/background color
//! and the bold/underline attributes for one emitted line or block. The
//! default style applies nothing. Renderers decide how (or whether) to encode
//! it; `sgr` provides the SGR escape used by the ANSI renderer.
//!
//! Color codes follow the classic 16-color table: normal foregrounds are
//! 30–37, bright foregrounds 90–97, and each background is its foreground
//! code + 10.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::BrightBlack => "bright_black",
            Color::BrightRed => "bright_red",
            Color::BrightGreen => "bright_green",
            Color::BrightYellow => "bright_yellow",
            Color::BrightBlue => "bright_blue",
            Color::BrightMagenta => "bright_magenta",
            Color::BrightCyan => "bright_cyan",
            Color::BrightWhite => "bright_white",
        }
    }

    /// SGR foreground code.
    pub fn fg_code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
            Color::BrightBlack => 90,
            Color::BrightRed => 91,
            Color::BrightGreen => 92,
            Color::BrightYellow => 93,
            Color::BrightBlue => 94,
            Color::BrightMagenta => 95,
            Color::BrightCyan => 96,
            Color::BrightWhite => 97,
        }
    }

    /// SGR background code.
    pub fn bg_code(self) -> u8 {
        self.fg_code() + 10
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color `{0}`")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    /// Accepts the snake_case names (`bright_red`); `-` is treated as `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Color::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

pub const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub underline: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// True when no attribute or color is set.
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    /// SGR parameter list in emission order: bold, underline, fg, bg.
    pub fn sgr_codes(&self) -> Vec<u8> {
        let mut codes = Vec::with_capacity(4);
        if self.bold {
            codes.push(1);
        }
        if self.underline {
            codes.push(4);
        }
        if let Some(fg) = self.fg {
            codes.push(fg.fg_code());
        }
        if let Some(bg) = self.bg {
            codes.push(bg.bg_code());
        }
        codes
    }

    /// `ESC[<codes>m`, or an empty string when no code applies.
    pub fn sgr(&self) -> String {
        let codes = self.sgr_codes();
        if codes.is_empty() {
            return String::new();
        }
        let params: Vec<String> = codes.iter().map(u8::to_string).collect();
        format!("\x1b[{}m", params.join(";"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sgr_order_is_bold_underline_fg_bg() {
        let style = Style::new().fg(Color::Red).bg(Color::Blue).bold().underline();
        assert_eq!(style.sgr(), "\x1b[1;4;31;44m");
    }

    #[test]
    fn bright_background_adds_ten() {
        assert_eq!(Color::BrightWhite.bg_code(), 107);
        assert_eq!(Style::new().bg(Color::BrightBlack).sgr(), "\x1b[100m");
    }

    #[test]
    fn default_style_is_plain() {
        assert!(Style::default().is_plain());
        assert_eq!(Style::default().sgr(), "");
        assert!(!Style::new().bold().is_plain());
    }

    #[test]
    fn parses_color_names() {
        assert_eq!("cyan".parse::<Color>(), Ok(Color::Cyan));
        assert_eq!("Bright-Red".parse::<Color>(), Ok(Color::BrightRed));
        assert!("purple".parse::<Color>().is_err());
        for color in Color::ALL {
            assert_eq!(color.name().parse::<Color>(), Ok(color));
        }
    }
}
