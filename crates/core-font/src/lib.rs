//! Font-art driver abstraction.
//!
//! A `FontDriver` converts a short string into multi-line large-scale art
//! for a named font. Drivers never fail loudly: anything that prevents art
//! from being produced (missing tool, unknown font, timeout) is reported as
//! `Art::Unavailable`, and the caller takes its own fallback path (the
//! display draws a box instead).
//!
//! Design Notes:
//! - Process spawning stays inside `figlet`; layout code only ever sees the
//!   `Art` sum type.
//! - Drivers are `Send + Sync` so a display can be shared across threads.
//! - `NoopFontDriver` is the default when no external tool is configured.

pub mod figlet;

pub use figlet::{FigletDriver, FontError};

/// Result of a font-art request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Art {
    Rendered(String),
    Unavailable,
}

impl Art {
    pub fn is_available(&self) -> bool {
        matches!(self, Art::Rendered(_))
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            Art::Rendered(art) => Some(art),
            Art::Unavailable => None,
        }
    }
}

pub trait FontDriver: Send + Sync {
    /// Stable human-readable driver identifier (for logs / diagnostics).
    fn name(&self) -> &'static str;
    /// Render `text` in `font`, or report `Art::Unavailable`.
    fn render_art(&self, text: &str, font: &str) -> Art;
}

impl<T: FontDriver + ?Sized> FontDriver for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }
    fn render_art(&self, text: &str, font: &str) -> Art {
        (**self).render_art(text, font)
    }
}

impl<T: FontDriver + ?Sized> FontDriver for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }
    fn render_art(&self, text: &str, font: &str) -> Art {
        (**self).render_art(text, font)
    }
}

/// Driver that never produces art.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopFontDriver;

impl FontDriver for NoopFontDriver {
    fn name(&self) -> &'static str {
        "noop-font-driver"
    }
    fn render_art(&self, _text: &str, _font: &str) -> Art {
        Art::Unavailable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_driver_is_always_unavailable() {
        let driver = NoopFontDriver;
        assert_eq!(driver.render_art("hi", "standard"), Art::Unavailable);
        let boxed: Box<dyn FontDriver> = Box::new(NoopFontDriver);
        assert!(!boxed.render_art("hi", "slant").is_available());
    }

    #[test]
    fn art_into_option() {
        assert_eq!(Art::Rendered("x".into()).into_option(), Some("x".to_string()));
        assert_eq!(Art::Unavailable.into_option(), None);
    }
}
