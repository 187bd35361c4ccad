//! Virtual environment rebuild
//!
//! Clears stale state left by a previous environment and drives the
//! external `venv`/`pip` processes that create the new one.

pub mod build;
pub mod reset;

pub use build::{BuildPlan, BuildStep, StepOutput};
pub use reset::{clear_caches, clear_existing_venv};

use std::path::PathBuf;
use thiserror::Error;

use crate::core::IniError;

/// Errors that can occur while rebuilding a venv
#[derive(Error, Debug)]
pub enum VenverError {
    #[error(
        "Couldn't find a repo at or above current location ({}). Must be run from within a repo",
        start.display()
    )]
    RepoRootNotFound { start: PathBuf },

    #[error("Couldn't get supported python version out of '{requested}'")]
    UnsupportedVersion { requested: String },

    #[error("Couldn't find a suitable executable for {name} to make a venv with")]
    InterpreterNotFound { name: String },

    #[error("Refusing to replace {} because it contains the project", path.display())]
    UnsafeDestination { path: PathBuf },

    #[error(transparent)]
    Config(#[from] IniError),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to scan {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to start `{step}`: {source}")]
    Spawn {
        step: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{step}` exited with {status}")]
    StepFailed { step: String, status: String },
}

impl VenverError {
    /// Short name of the failure, shown as `Failed. <kind> encountered`
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RepoRootNotFound { .. } => "RepoRootNotFound",
            Self::UnsupportedVersion { .. } => "UnsupportedVersion",
            Self::InterpreterNotFound { .. } => "InterpreterNotFound",
            Self::UnsafeDestination { .. } => "UnsafeDestination",
            Self::Config(_) => "ConfigError",
            Self::Io { .. } | Self::Scan { .. } => "IoError",
            Self::Spawn { .. } => "SpawnError",
            Self::StepFailed { .. } => "StepFailed",
        }
    }
}
