//! Utility functions and helpers

pub mod cmd;

pub use cmd::{log_cmd, shell_line, shell_quote};
