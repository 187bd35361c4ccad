//! Git helper utilities for integration tests.
//!
//! Creates real repositories with `git2` so discovery runs against the
//! config files git itself writes. No network and no git CLI.

use git2::Repository;
use std::fs;
use std::path::Path;

/// Initialize a non-bare repository at `path` with an `origin` remote.
pub fn init_repo_with_origin(path: &Path, url: &str) {
    let repo = init_repo(path);
    repo.remote("origin", url)
        .unwrap_or_else(|e| panic!("failed to add origin to {}: {}", path.display(), e));
}

/// Initialize a non-bare repository at `path` without remotes.
pub fn init_repo(path: &Path) -> Repository {
    fs::create_dir_all(path).unwrap();
    Repository::init(path)
        .unwrap_or_else(|e| panic!("failed to init repo at {}: {}", path.display(), e))
}

/// Add a remote to an existing repository.
pub fn add_remote(path: &Path, name: &str, url: &str) {
    let repo = Repository::open(path).unwrap();
    repo.remote(name, url).unwrap();
}
