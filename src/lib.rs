//! repokit - small repository chores
//!
//! Two tools share this library:
//! - `gitter` lists every git repository under a directory as shell commands
//!   that clone it again somewhere else
//! - `venver` rebuilds a Python project's virtual environment from scratch

pub mod cli;
pub mod core;
pub mod git;
pub mod telemetry;
pub mod util;
pub mod venv;

pub use core::config::VenverConfig;
pub use git::RepoTarget;
pub use venv::VenverError;
