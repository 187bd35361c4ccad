//! Removal of bytecode caches and old environments

use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use super::VenverError;
use crate::core::VenverConfig;

/// Bytecode cache directories under the project source tree
pub fn find_caches(root: &Path, config: &VenverConfig) -> Result<Vec<PathBuf>, VenverError> {
    let source = root.join(&config.source_dir);
    if !source.is_dir() {
        return Ok(Vec::new());
    }

    let mut caches = Vec::new();
    let mut it = WalkDir::new(&source).into_iter();
    while let Some(entry) = it.next() {
        let entry = entry.map_err(|source_err| VenverError::Scan {
            path: source.clone(),
            source: source_err,
        })?;
        if entry.file_type().is_dir() && entry.file_name() == config.cache_dir_name.as_str() {
            caches.push(entry.into_path());
            it.skip_current_dir();
        }
    }
    Ok(caches)
}

/// Delete every bytecode cache under the source tree; returns how many were removed
pub fn clear_caches(
    root: &Path,
    config: &VenverConfig,
    progress: &ProgressBar,
) -> Result<usize, VenverError> {
    let caches = find_caches(root, config)?;
    progress.set_length(caches.len() as u64);

    for cache in &caches {
        debug!(path = %cache.display(), "removing cache");
        std::fs::remove_dir_all(cache).map_err(|source| VenverError::Io {
            path: cache.clone(),
            source,
        })?;
        progress.inc(1);
    }

    progress.finish_and_clear();
    info!(count = caches.len(), "cleared bytecode caches");
    Ok(caches.len())
}

/// Delete the directory at `venv`, if any; returns whether something was removed
pub fn clear_existing_venv(venv: &Path) -> Result<bool, VenverError> {
    if !venv.is_dir() {
        return Ok(false);
    }

    std::fs::remove_dir_all(venv).map_err(|source| VenverError::Io {
        path: venv.to_path_buf(),
        source,
    })?;
    info!(path = %venv.display(), "removed existing venv");
    Ok(true)
}
