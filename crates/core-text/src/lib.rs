//! Text measurement primitives: display width, unit segmentation, wrapping
//! and input normalization.
//!
//! Everything here is a pure function of its inputs; a [`Measurer`] carries
//! only its [`WidthMode`] and may be shared across threads.

pub mod encoding;
pub mod segment;
pub mod width;
pub mod wrap;

pub use width::{Measurer, WidthMode, egc_width, width, width_bytes};
pub use wrap::{wrap, wrap_with};
