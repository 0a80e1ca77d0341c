//! Single-line progress bar.
//!
//! Format: `"\r{label} [{bar}] {current}/{total} {pct:>3}%"`. The leading
//! carriage return lets successive calls overwrite the same terminal row;
//! callers add a newline once [`is_complete`] reports true.

/// Default bar width in columns.
pub const DEFAULT_BAR_WIDTH: usize = 30;

const FILLED: char = '█';

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBar {
    pub current: u64,
    pub total: u64,
    pub width: usize,
}

impl ProgressBar {
    pub fn new(current: u64, total: u64, width: usize) -> Self {
        Self {
            current,
            total,
            width,
        }
    }

    /// Completed fraction clamped to `[0, 1]`; zero when `total` is zero.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.current as f64 / self.total as f64).clamp(0.0, 1.0)
    }

    pub fn filled(&self) -> usize {
        ((self.width as f64 * self.ratio()).round() as usize).min(self.width)
    }

    pub fn percent(&self) -> u8 {
        (self.ratio() * 100.0) as u8
    }

    pub fn bar(&self) -> String {
        let filled = self.filled();
        let mut bar: String = std::iter::repeat_n(FILLED, filled).collect();
        bar.push_str(&" ".repeat(self.width - filled));
        bar
    }

    pub fn line(&self, label: &str) -> String {
        format!(
            "\r{label} [{}] {}/{} {:>3}%",
            self.bar(),
            self.current,
            self.total,
            self.percent()
        )
    }
}

/// Render one progress line.
pub fn progress_line(current: u64, total: u64, label: &str, width: usize) -> String {
    ProgressBar::new(current, total, width).line(label)
}

/// True once `current` has reached `total`.
pub fn is_complete(current: u64, total: u64) -> bool {
    current >= total
}
