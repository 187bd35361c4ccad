//! Git repository discovery
//!
//! Finds `.git/config` files and reads their `origin` remote through
//! `git2`'s config parser. No git process is spawned.

pub mod config;
pub mod discover;
pub mod script;

pub use config::origin_url;
pub use discover::{find_git_configs, list_repo_targets, trim_path, RepoTarget, ScanReport};
pub use script::CloneScript;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading git metadata
#[derive(Error, Debug)]
pub enum GitConfigError {
    #[error("error processing {}: couldn't find valid remote origin", path.display())]
    MissingOrigin { path: PathBuf },

    #[error("error processing {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("error scanning {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GitConfigError {
    /// Whether this error concerns a single repository and can be skipped
    pub fn is_per_repo(&self) -> bool {
        matches!(self, Self::MissingOrigin { .. } | Self::Parse { .. })
    }
}
