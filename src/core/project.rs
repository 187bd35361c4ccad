//! Python project discovery
//!
//! Finds the project root above a directory and reads venver settings from
//! the project's `setup.cfg`.

use std::path::{Component, Path, PathBuf};
use tracing::debug;

use super::config::VenverConfig;
use super::ini::IniDocument;
use crate::venv::VenverError;

/// Whether `dir` contains every configured marker
pub fn is_repo_root(dir: &Path, config: &VenverConfig) -> bool {
    config
        .marker_files
        .iter()
        .all(|marker| dir.join(marker).exists())
}

/// Walk up from `start` to the nearest directory holding all markers.
///
/// `start` itself is checked first.
pub fn find_repo_root(start: &Path, config: &VenverConfig) -> Result<PathBuf, VenverError> {
    let mut search_path = start;
    loop {
        if is_repo_root(search_path, config) {
            debug!(root = %search_path.display(), "found repo root");
            return Ok(search_path.to_path_buf());
        }

        match search_path.parent() {
            Some(parent) => search_path = parent,
            None => {
                return Err(VenverError::RepoRootNotFound {
                    start: start.to_path_buf(),
                })
            }
        }
    }
}

/// Resolve `.` and `..` components without touching the filesystem
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Extras listed in the project config file.
///
/// A missing file, section or key yields an empty list.
pub fn read_configured_extras(root: &Path, config: &VenverConfig) -> Result<Vec<String>, VenverError> {
    let path = root.join(&config.config_file);
    if !path.is_file() {
        debug!(path = %path.display(), "no project config file");
        return Ok(Vec::new());
    }

    let doc = IniDocument::load(&path)?;
    let extras = doc
        .get(&config.config_section, &config.extras_key)
        .map(split_extras)
        .unwrap_or_default();
    debug!(?extras, "configured extras");
    Ok(extras)
}

/// Split a comma or newline separated extras value
pub fn split_extras(value: &str) -> Vec<String> {
    value
        .split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Merge extras groups in priority order, keeping the first occurrence of each name
pub fn merge_extras<'a, I>(groups: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut merged: Vec<String> = Vec::new();
    for name in groups.into_iter().flatten() {
        if !merged.contains(name) {
            merged.push(name.clone());
        }
    }
    merged
}
