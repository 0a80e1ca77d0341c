//! Width-aware layout: centering, bordered boxes, column-aligned tables and
//! progress bars.
//!
//! Every operation is pure and returns a `Vec<String>` (or a single
//! `String`) of fully padded lines; nothing here touches a terminal. All
//! column math goes through a `core_text::Measurer` so padding stays correct
//! in the presence of wide characters.
//!
//! Invalid geometry is normalized rather than rejected: the engine always
//! produces output and never truncates text.

pub mod boxed;
pub mod center;
pub mod progress;
pub mod table;

pub use boxed::{boxed, boxed_with};
pub use center::{center, center_with};
pub use progress::{ProgressBar, is_complete, progress_line};
pub use table::{column_widths, table, table_with};

