//! Command-line interface module
//!
//! Implements the CLI entry points:
//! - (default): run the interactive journal, optionally with `-m N`
//! - config init: Initialize configuration file
pub mod config;
pub mod run;
