//! Python interpreter selection
//!
//! Turns a loosely written version (`py38`, `3.8`, `python311`) into a
//! normalized minor version and finds an interpreter for it.

use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

use super::config::VenverConfig;
use crate::util::log_cmd;
use crate::venv::VenverError;

/// Normalize an interpreter name or version token to its minor version.
///
/// Strips `python`/`py` characters from both ends, then any `3` at either
/// end, then every `.`. `python3.8`, `py38`, `3.8` and `38` all become `8`.
///
/// Known issue: a `3` at the end is also stripped, so `313` becomes `1`.
pub fn sanitize_python_name(token: &str) -> String {
    token
        .trim_matches(|c: char| "python".contains(c))
        .trim_matches(|c: char| "py".contains(c))
        .trim_matches('3')
        .replace('.', "")
}

/// Looks up interpreters on the host
pub trait InterpreterFinder {
    /// Full path of an executable on `PATH`, if any
    fn find(&self, name: &str) -> Option<PathBuf>;

    /// Output of `<executable> --version`, if it ran
    fn version_of(&self, executable: &Path) -> Option<String>;
}

/// Finder backed by `PATH` and real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemFinder;

impl InterpreterFinder for SystemFinder {
    fn find(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }

    fn version_of(&self, executable: &Path) -> Option<String> {
        let mut cmd = Command::new(executable);
        cmd.arg("--version");
        log_cmd(&cmd);
        let output = cmd.output().ok()?;
        // Python 2 printed its version on stderr
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Some(text.trim().to_string())
    }
}

/// A resolved interpreter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonExecutable {
    pub path: PathBuf,
    /// Normalized minor version it was resolved for
    pub version: String,
}

impl PythonExecutable {
    /// Executable file name, e.g. `python3.8`
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Default venv directory name for this interpreter, e.g. `v8`
    pub fn default_venv_name(&self) -> String {
        format!("v{}", self.version)
    }
}

/// Resolve an interpreter for a version token.
///
/// Prefers `python3.<minor>` on `PATH`, then falls back to `python3` when it
/// reports the requested minor version.
pub fn resolve_python_executable(
    requested: &str,
    config: &VenverConfig,
    finder: &dyn InterpreterFinder,
) -> Result<PythonExecutable, VenverError> {
    let version = sanitize_python_name(requested);
    if !config.supports(&version) {
        return Err(VenverError::UnsupportedVersion {
            requested: requested.to_string(),
        });
    }

    let exec_name = format!("python3.{}", version);
    if let Some(path) = finder.find(&exec_name) {
        debug!(path = %path.display(), "found versioned interpreter");
        return Ok(PythonExecutable { path, version });
    }

    if let Some(fallback) = finder.find("python3") {
        let reported = finder.version_of(&fallback).unwrap_or_default();
        debug!(path = %fallback.display(), %reported, "checking python3 fallback");
        if reports_minor(&reported, &version) {
            return Ok(PythonExecutable {
                path: fallback,
                version,
            });
        }
    }

    Err(VenverError::InterpreterNotFound { name: exec_name })
}

/// Whether `Python 3.8.10` style output names minor version `minor`
fn reports_minor(reported: &str, minor: &str) -> bool {
    let wanted = format!("3.{}", minor);
    reported.split_whitespace().any(|word| {
        word == wanted
            || word
                .strip_prefix(&wanted)
                .is_some_and(|rest| rest.starts_with('.'))
    })
}
