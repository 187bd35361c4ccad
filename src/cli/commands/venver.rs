//! Venv rebuilder implementation
//!
//! Finds the project root, clears caches and any old venv, then creates a
//! fresh venv and installs the project into it.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::cli::output::Output;
use crate::core::project::{find_repo_root, merge_extras, normalize_path, read_configured_extras};
use crate::core::python::{resolve_python_executable, InterpreterFinder};
use crate::core::VenverConfig;
use crate::venv::{clear_caches, clear_existing_venv, BuildPlan, VenverError};

/// Options for a venv rebuild
#[derive(Debug, Clone)]
pub struct VenverOptions {
    /// Loosely written Python version (`3.8`, `py38`, ...)
    pub python_version: String,
    /// Where to put the venv; defaults to `<root>/v<minor>`
    pub venv_destination: Option<PathBuf>,
    /// Install with `pip install --editable`
    pub editable: bool,
    /// Extras requested on the command line
    pub extras: Vec<String>,
}

impl Default for VenverOptions {
    fn default() -> Self {
        Self {
            python_version: "3.6".to_string(),
            venv_destination: None,
            editable: false,
            extras: Vec::new(),
        }
    }
}

/// Everything decided before anything is deleted
#[derive(Debug, Clone)]
pub struct VenverPlan {
    pub repo_root: PathBuf,
    pub venv: PathBuf,
    pub extras: Vec<String>,
    pub build: BuildPlan,
}

/// Resolve the root, interpreter, destination and extras for a rebuild
pub fn plan_venver(
    cwd: &Path,
    options: &VenverOptions,
    config: &VenverConfig,
    finder: &dyn InterpreterFinder,
) -> Result<VenverPlan, VenverError> {
    let repo_root = find_repo_root(cwd, config)?;
    let python = resolve_python_executable(&options.python_version, config, finder)?;

    let venv = match &options.venv_destination {
        Some(dest) => normalize_path(&cwd.join(dest)),
        None => repo_root.join(python.default_venv_name()),
    };
    if repo_root.starts_with(&venv) {
        return Err(VenverError::UnsafeDestination { path: venv });
    }

    let configured = read_configured_extras(&repo_root, config)?;
    let extras = merge_extras([
        configured.as_slice(),
        options.extras.as_slice(),
        config.default_extras.as_slice(),
    ]);

    let build = BuildPlan::new(&python, &venv, &repo_root, &extras, options.editable);
    Ok(VenverPlan {
        repo_root,
        venv,
        extras,
        build,
    })
}

/// Run the venv rebuild
pub fn run_venver(
    cwd: &Path,
    options: &VenverOptions,
    config: &VenverConfig,
    finder: &dyn InterpreterFinder,
) -> Result<(), VenverError> {
    let plan = plan_venver(cwd, options, config, finder)?;
    let python = &plan.build.steps()[0].program;

    Output::kv("Repo root", &Output::path(&plan.repo_root));
    Output::info(&format!(
        "Will be making a venv with '{}' at '{}'",
        python.display(),
        plan.venv.display()
    ));

    let progress = Output::progress_bar(0, "Clearing bytecode caches");
    let cleared = clear_caches(&plan.repo_root, config, &progress)?;
    Output::success(&format!("Cleared {} bytecode cache(s)", cleared));

    if clear_existing_venv(&plan.venv)? {
        Output::success(&format!(
            "Deleted existing venv at {}",
            Output::path(&plan.venv)
        ));
    }

    plan.build.run(|step| Output::step(&step.display()))?;

    info!(venv = %plan.venv.display(), extras = ?plan.extras, "venv rebuilt");
    Output::success(&format!("Venv ready at {}", Output::path(&plan.venv)));
    Ok(())
}
