//! Test fixtures for repository trees and Python projects.
//!
//! Builders create everything inside a `TempDir` that is removed on drop.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::git_helpers;

/// A directory tree holding git repositories.
pub struct RepoTreeFixture {
    pub _temp: TempDir,
    /// Canonical root of the tree
    pub root: PathBuf,
}

impl RepoTreeFixture {
    /// Absolute path of a directory inside the tree.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }
}

/// Builder for repository trees.
pub struct RepoTreeBuilder {
    repos: Vec<(String, Option<String>)>,
}

impl RepoTreeBuilder {
    pub fn new() -> Self {
        Self { repos: Vec::new() }
    }

    /// Add a repository at `rel` whose origin is `url`.
    pub fn add_repo(mut self, rel: &str, url: &str) -> Self {
        self.repos.push((rel.to_string(), Some(url.to_string())));
        self
    }

    /// Add a repository at `rel` with no remotes.
    pub fn add_local_repo(mut self, rel: &str) -> Self {
        self.repos.push((rel.to_string(), None));
        self
    }

    pub fn build(self) -> RepoTreeFixture {
        let temp = TempDir::new().expect("failed to create temp dir");
        let root = temp.path().canonicalize().unwrap();

        for (rel, url) in &self.repos {
            let path = root.join(rel);
            match url {
                Some(url) => git_helpers::init_repo_with_origin(&path, url),
                None => {
                    git_helpers::init_repo(&path);
                }
            }
        }

        RepoTreeFixture { _temp: temp, root }
    }
}

/// A Python project laid out the way `venver` expects.
pub struct ProjectFixture {
    pub _temp: TempDir,
    /// Canonical project root (contains `setup.cfg` and `src/`)
    pub root: PathBuf,
}

impl ProjectFixture {
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }
}

/// Builder for Python projects.
pub struct ProjectBuilder {
    setup_cfg: String,
    caches: Vec<String>,
    existing_venv: Option<String>,
}

impl ProjectBuilder {
    pub fn new() -> Self {
        Self {
            setup_cfg: "[metadata]\nname = demo\n".to_string(),
            caches: Vec::new(),
            existing_venv: None,
        }
    }

    /// Add a `[venver]` section with an `extras` key.
    pub fn with_extras(mut self, extras: &str) -> Self {
        self.setup_cfg
            .push_str(&format!("\n[venver]\nextras = {}\n", extras));
        self
    }

    /// Create a `__pycache__` directory under `src/<package>`.
    pub fn with_cache(mut self, package: &str) -> Self {
        self.caches.push(package.to_string());
        self
    }

    /// Create a stale venv directory at `rel`.
    pub fn with_existing_venv(mut self, rel: &str) -> Self {
        self.existing_venv = Some(rel.to_string());
        self
    }

    pub fn build(self) -> ProjectFixture {
        let temp = TempDir::new().expect("failed to create temp dir");
        let root = temp.path().canonicalize().unwrap();

        fs::create_dir_all(root.join("src").join("demo")).unwrap();
        fs::write(root.join("src").join("demo").join("__init__.py"), "").unwrap();
        fs::write(root.join("setup.cfg"), &self.setup_cfg).unwrap();

        for package in &self.caches {
            let cache = root.join("src").join(package).join("__pycache__");
            fs::create_dir_all(&cache).unwrap();
            fs::write(cache.join("mod.cpython-38.pyc"), b"\x00").unwrap();
        }

        if let Some(rel) = &self.existing_venv {
            let venv = root.join(rel);
            fs::create_dir_all(venv.join("bin")).unwrap();
            fs::write(venv.join("stale-marker"), "old").unwrap();
        }

        ProjectFixture { _temp: temp, root }
    }
}

/// Write a fake `python3.<minor>` into `bin_dir`.
///
/// The script appends every invocation to `log`. `-m venv <dir>` creates
/// `<dir>/bin/python` as a copy of itself, so later pip steps are logged too.
#[cfg(unix)]
pub fn write_fake_python(bin_dir: &Path, name: &str, log: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    fs::create_dir_all(bin_dir).unwrap();
    let script = format!(
        r#"#!/bin/sh
echo "$0 $*" >> "{log}"
if [ "$1" = "-m" ] && [ "$2" = "venv" ]; then
  mkdir -p "$3/bin"
  cp "$0" "$3/bin/python"
fi
exit 0
"#,
        log = log.display()
    );
    let path = bin_dir.join(name);
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}
