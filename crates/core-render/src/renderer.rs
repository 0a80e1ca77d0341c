//! Styled renderer backends.
//!
//! A `Renderer` turns one line or block of plain text plus an optional
//! `Style` into the string that is actually written. It is called once per
//! emitted line, never inside width or layout math, so decoration never
//! affects measurement.
//!
//! Backends:
//! * `AnsiRenderer` – SGR prefix + reset suffix whenever a style is given.
//! * `PlainRenderer` – ignores styles and strips any escapes already present
//!   (for pipes and log files).
//! * `NoopRenderer` – identity; text passes through untouched.
//!
//! Rendering without a style is idempotent for every backend.

use crate::ansi::strip_ansi;
use crate::style::{RESET, Style};

pub trait Renderer: Send + Sync {
    /// Stable identifier for logs.
    fn name(&self) -> &'static str;
    fn render(&self, text: &str, style: Option<&Style>) -> String;
}

impl<T: Renderer + ?Sized> Renderer for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }
    fn render(&self, text: &str, style: Option<&Style>) -> String {
        (**self).render(text, style)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiRenderer;

impl Renderer for AnsiRenderer {
    fn name(&self) -> &'static str {
        "ansi"
    }

    fn render(&self, text: &str, style: Option<&Style>) -> String {
        match style {
            Some(style) => {
                let prefix = style.sgr();
                let mut out = String::with_capacity(prefix.len() + text.len() + RESET.len());
                out.push_str(&prefix);
                out.push_str(text);
                out.push_str(RESET);
                out
            }
            None => text.to_string(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn render(&self, text: &str, _style: Option<&Style>) -> String {
        strip_ansi(text).into_owned()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn render(&self, text: &str, _style: Option<&Style>) -> String {
        text.to_string()
    }
}
