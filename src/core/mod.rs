//! Core logic shared by the repokit tools

pub mod config;
pub mod ini;
pub mod project;
pub mod python;

pub use config::VenverConfig;
pub use ini::{IniDocument, IniError};
pub use python::{resolve_python_executable, sanitize_python_name, PythonExecutable};
