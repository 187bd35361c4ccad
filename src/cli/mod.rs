//! CLI layer
//!
//! Command handlers and terminal output shared by both binaries.

pub mod commands;
pub mod output;

pub use output::Output;
