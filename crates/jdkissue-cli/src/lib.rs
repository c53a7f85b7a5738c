// Rust guideline compliant 2026-02-09

//! `jdki` CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod output;
pub mod progress;
pub mod terminal;

pub use output::{create_formatter, OutputFormatter, SearchView};
pub use terminal::{get_terminal_width, should_use_color, wrap_text};
