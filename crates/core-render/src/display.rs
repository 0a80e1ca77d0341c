//! Display façade: layout + renderer + optional font driver + output sink.
//!
//! Each operation computes plain, fully padded lines with `core-layout`,
//! passes every line (or the single art block for headers) through the
//! active `Renderer`, queues it on the writer and flushes once per call.
//! Layout math never sees decoration, so styled and unstyled output have
//! identical geometry.
//!
//! Backends are injected: the default is `AnsiRenderer` with no font driver
//! and Unicode width measurement.

use crate::renderer::{AnsiRenderer, Renderer};
use crate::style::{Color, Style};
use anyhow::Result;
use core_font::{Art, FontDriver};
use core_layout::{ProgressBar, boxed_with, center_with, is_complete, table_with};
use core_text::{Measurer, WidthMode, wrap_with};
use crossterm::{queue, style::Print};
use std::fmt;
use std::io::{Stdout, Write, stdout};
use tracing::debug;

pub struct Display<W: Write> {
    out: W,
    renderer: Box<dyn Renderer>,
    font_driver: Option<Box<dyn FontDriver>>,
    measurer: Measurer,
}

impl Display<Stdout> {
    pub fn stdout() -> Self {
        Self::new(stdout())
    }
}

impl<W: Write> Display<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            renderer: Box::new(AnsiRenderer),
            font_driver: None,
            measurer: Measurer::unicode(),
        }
    }

    pub fn with_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn with_font_driver(mut self, driver: impl FontDriver + 'static) -> Self {
        self.font_driver = Some(Box::new(driver));
        self
    }

    pub fn with_width_mode(mut self, mode: WidthMode) -> Self {
        self.measurer = Measurer::new(mode);
        self
    }

    pub fn set_renderer(&mut self, renderer: Box<dyn Renderer>) {
        self.renderer = renderer;
    }

    pub fn set_font_driver(&mut self, driver: Box<dyn FontDriver>) {
        self.font_driver = Some(driver);
    }

    pub fn renderer_name(&self) -> &'static str {
        self.renderer.name()
    }

    pub fn measurer(&self) -> Measurer {
        self.measurer
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Emit `text` as a single line.
    pub fn text(&mut self, text: &str, style: Option<&Style>) -> Result<()> {
        self.emit_block(text, style)
    }

    /// Emit large font art for `text`, or a box around it when the font
    /// driver is absent or reports the art unavailable.
    pub fn header(&mut self, text: &str, font: &str, style: Option<&Style>) -> Result<()> {
        if let Some(driver) = self.font_driver.as_ref() {
            match driver.render_art(text, font) {
                Art::Rendered(art) => return self.emit_block(&art, style),
                Art::Unavailable => {
                    debug!(
                        target: "render.header",
                        driver = driver.name(),
                        font,
                        "art_unavailable_box_fallback"
                    );
                }
            }
        }
        let lines = boxed_with(&self.measurer, text, 0);
        self.emit_lines(&lines, style)
    }

    /// Emit `text` inside a bordered box; `width == 0` sizes to content.
    pub fn boxed(&mut self, text: &str, width: usize, style: Option<&Style>) -> Result<()> {
        let lines = boxed_with(&self.measurer, text, width);
        self.emit_lines(&lines, style)
    }

    pub fn table<C: fmt::Display>(
        &mut self,
        rows: &[Vec<C>],
        style: Option<&Style>,
        has_header: bool,
    ) -> Result<()> {
        let lines = table_with(&self.measurer, rows, has_header);
        self.emit_lines(&lines, style)
    }

    pub fn center(&mut self, text: &str, width: usize, style: Option<&Style>) -> Result<()> {
        let line = center_with(&self.measurer, text, width);
        self.emit_block(&line, style)
    }

    pub fn wrap(&mut self, text: &str, width: usize, style: Option<&Style>) -> Result<()> {
        let lines = wrap_with(&self.measurer, text, width);
        self.emit_lines(&lines, style)
    }

    /// Emit one progress line. The line starts with a carriage return and
    /// is only terminated by a newline once `current >= total`.
    pub fn progress(
        &mut self,
        current: u64,
        total: u64,
        label: &str,
        width: usize,
        style: Option<&Style>,
    ) -> Result<()> {
        let line = ProgressBar::new(current, total, width).line(label);
        let rendered = self.renderer.render(&line, style);
        queue!(self.out, Print(rendered))?;
        if is_complete(current, total) {
            queue!(self.out, Print("\n"))?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Return `text` decorated with the given colors without emitting it.
    pub fn color_text(&self, text: &str, fg: Color, bg: Option<Color>, bold: bool) -> String {
        let style = Style {
            fg: Some(fg),
            bg,
            bold,
            underline: false,
        };
        self.renderer.render(text, Some(&style))
    }

    fn emit_block(&mut self, block: &str, style: Option<&Style>) -> Result<()> {
        let rendered = self.renderer.render(block, style);
        queue!(self.out, Print(rendered), Print("\n"))?;
        self.out.flush()?;
        Ok(())
    }

    fn emit_lines(&mut self, lines: &[String], style: Option<&Style>) -> Result<()> {
        for line in lines {
            let rendered = self.renderer.render(line, style);
            queue!(self.out, Print(rendered), Print("\n"))?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{NoopRenderer, PlainRenderer};
    use core_font::NoopFontDriver;
    use pretty_assertions::assert_eq;

    struct FixedArt(&'static str);

    impl FontDriver for FixedArt {
        fn name(&self) -> &'static str {
            "fixed"
        }
        fn render_art(&self, _text: &str, _font: &str) -> Art {
            Art::Rendered(self.0.to_string())
        }
    }

    fn output(display: Display<Vec<u8>>) -> String {
        String::from_utf8(display.into_inner()).unwrap()
    }

    fn plain() -> Display<Vec<u8>> {
        Display::new(Vec::new()).with_renderer(NoopRenderer)
    }

    #[test]
    fn text_appends_newline() {
        let mut d = plain();
        d.text("hello", None).unwrap();
        assert_eq!(output(d), "hello\n");
    }

    #[test]
    fn ansi_styles_every_box_line() {
        let mut d = Display::new(Vec::new());
        let style = Style::new().fg(Color::Cyan);
        d.boxed("ab", 0, Some(&style)).unwrap();
        assert_eq!(
            output(d),
            "\x1b[36m┌────┐\x1b[0m\n\x1b[36m│ ab │\x1b[0m\n\x1b[36m└────┘\x1b[0m\n"
        );
    }

    #[test]
    fn header_uses_font_art_when_available() {
        let mut d = plain().with_font_driver(FixedArt(" _\n|_|"));
        d.header("x", "standard", None).unwrap();
        assert_eq!(output(d), " _\n|_|\n");
    }

    #[test]
    fn header_falls_back_to_box() {
        let mut d = plain().with_font_driver(NoopFontDriver);
        d.header("見出し", "standard", None).unwrap();
        assert_eq!(
            output(d),
            "┌────────┐\n│ 見出し │\n└────────┘\n"
        );
    }

    #[test]
    fn header_without_driver_is_boxed() {
        let mut d = plain();
        d.header("hi", "big", None).unwrap();
        assert_eq!(output(d), "┌────┐\n│ hi │\n└────┘\n");
    }

    #[test]
    fn table_and_center_lines() {
        let mut d = plain();
        d.table(&[vec!["k", "value"], vec!["key", "v"]], None, true)
            .unwrap();
        d.center("mid", 7, None).unwrap();
        assert_eq!(
            output(d),
            " k   | value\n --- | -----\n key | v\n  mid  \n"
        );
    }

    #[test]
    fn wrap_emits_one_line_per_chunk() {
        let mut d = plain();
        d.wrap("abcdefg", 3, None).unwrap();
        assert_eq!(output(d), "abc\ndef\ng\n");
    }

    #[test]
    fn progress_terminates_only_when_complete() {
        let mut d = plain();
        d.progress(1, 2, "job", 4, None).unwrap();
        d.progress(2, 2, "job", 4, None).unwrap();
        assert_eq!(
            output(d),
            "\rjob [██  ] 1/2  50%\rjob [████] 2/2 100%\n"
        );
    }

    #[test]
    fn color_text_uses_active_renderer() {
        let d = Display::new(Vec::new());
        assert_eq!(
            d.color_text("warn", Color::Yellow, Some(Color::Black), true),
            "\x1b[1;33;40mwarn\x1b[0m"
        );
        let d = Display::new(Vec::new()).with_renderer(PlainRenderer);
        assert_eq!(d.color_text("warn", Color::Yellow, None, true), "warn");
    }

    #[test]
    fn bytes_mode_changes_geometry() {
        let mut d = plain().with_width_mode(WidthMode::Bytes);
        d.center("あ", 5, None).unwrap();
        // Three bytes leave two columns of padding.
        assert_eq!(output(d), " あ \n");
    }

    #[test]
    fn swapping_renderer_at_runtime() {
        let mut d = Display::new(Vec::new());
        assert_eq!(d.renderer_name(), "ansi");
        d.set_renderer(Box::new(PlainRenderer));
        d.text("\x1b[1mx\x1b[0m", Some(&Style::new().bold())).unwrap();
        assert_eq!(output(d), "x\n");
    }
}
