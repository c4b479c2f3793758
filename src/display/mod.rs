//! Terminal display module
//!
//! Banners, `[WARNING]`/`[INFO]` messages, color detection and screen
//! clearing.

mod formatter;
pub(crate) mod terminal;

pub use formatter::{home_banner, info, setup_banner, warning};
pub use terminal::{clearer_for, should_use_colors, ScreenClearer};
