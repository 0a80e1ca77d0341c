//! Styled output: style descriptors, renderer backends and the display
//! façade that ties layout, rendering and font art together.
//!
//! Exposed Components:
//! - `style`: `Color` + `Style` value types and their SGR encoding.
//! - `renderer`: `Renderer` trait with ANSI, plain and no-op backends.
//! - `ansi`: escape-sequence stripping used by the plain backend.
//! - `display`: `Display<W>` emitting layout results through a renderer.
//!
//! Invariants:
//! - Renderers run once per emitted line/block, after layout; decoration
//!   never participates in width math.
//! - Rendering without a style is idempotent for every backend.

pub mod ansi;
pub mod display;
pub mod renderer;
pub mod style;

pub use display::Display;
pub use renderer::{AnsiRenderer, NoopRenderer, PlainRenderer, Renderer};
pub use style::{Color, RESET, Style, UnknownColor};
