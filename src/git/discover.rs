//! Repository discovery under a directory tree

use serde::Serialize;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::config::origin_url;
use super::GitConfigError;

/// A repository to re-create: where to clone it and from where
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoTarget {
    /// Destination relative to the working directory
    pub path: PathBuf,
    /// `origin` remote URL
    pub url: String,
}

/// Result of scanning a tree
#[derive(Debug, Default)]
pub struct ScanReport {
    pub targets: Vec<RepoTarget>,
    /// Per-repository failures that were skipped
    pub skipped: Vec<GitConfigError>,
}

/// Find every `.git/config` file below `root`, in file-name order.
///
/// The walk does not descend into `.git` directories. Unreadable
/// subdirectories are logged and skipped.
pub fn find_git_configs(root: &Path) -> Result<Vec<PathBuf>, GitConfigError> {
    let mut configs = Vec::new();
    let mut it = WalkDir::new(root).sort_by_file_name().into_iter();

    while let Some(entry) = it.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() > 0 => {
                warn!(error = %e, "skipping unreadable path");
                continue;
            }
            Err(source) => {
                return Err(GitConfigError::Walk {
                    path: root.to_path_buf(),
                    source,
                })
            }
        };

        if entry.file_type().is_dir() && entry.file_name() == ".git" {
            let config = entry.path().join("config");
            if config.is_file() {
                debug!(config = %config.display(), "found git config");
                configs.push(config);
            }
            it.skip_current_dir();
        }
    }

    Ok(configs)
}

/// Destination for the repository owning `config_path`.
///
/// Takes the repository directory (the config file's grandparent) and drops
/// as many leading components as `cwd` has. Both paths must be absolute.
/// The result is only meaningful relative to `cwd`.
pub fn trim_path(config_path: &Path, cwd: &Path) -> PathBuf {
    let repo_dir = config_path
        .parent()
        .and_then(Path::parent)
        .unwrap_or(config_path);
    let depth = cwd.components().count();

    let trimmed: PathBuf = repo_dir
        .components()
        .skip(depth)
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    if trimmed.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        trimmed
    }
}

/// Scan `root` and build a clone target for every repository found.
///
/// `root` and `cwd` should be canonical. With `skip_invalid`, repositories
/// whose config lacks an origin URL are reported in
/// [`ScanReport::skipped`]; otherwise the first one fails the scan.
pub fn list_repo_targets(
    root: &Path,
    cwd: &Path,
    skip_invalid: bool,
) -> Result<ScanReport, GitConfigError> {
    let mut report = ScanReport::default();

    for config in find_git_configs(root)? {
        match origin_url(&config) {
            Ok(url) => {
                let path = trim_path(&config, cwd);
                debug!(path = %path.display(), %url, "repo target");
                report.targets.push(RepoTarget { path, url });
            }
            Err(e) if skip_invalid && e.is_per_repo() => {
                warn!(error = %e, "skipping repository");
                report.skipped.push(e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}
