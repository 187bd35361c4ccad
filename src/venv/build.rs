//! External process steps that create and populate a venv

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

use super::VenverError;
use crate::core::PythonExecutable;
use crate::util::{log_cmd, shell_line};

/// What happens to a step's stdout/stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutput {
    /// Passed straight through to the terminal
    Inherit,
    /// Captured and only logged at debug level
    Silent,
}

/// One external command of the build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStep {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub output: StepOutput,
}

impl BuildStep {
    fn new<I, S>(program: &Path, args: I, output: StepOutput) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            program: program.to_path_buf(),
            args: args.into_iter().map(Into::into).collect(),
            output,
        }
    }

    /// Command line with the interpreter shortened to its file name
    pub fn display(&self) -> String {
        let program = self.program.file_name().unwrap_or(self.program.as_os_str());
        shell_line(program, self.args.iter().map(OsString::as_os_str))
    }

    /// Build the process command for this step
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }

    /// Run the step and wait for it
    pub fn run(&self) -> Result<(), VenverError> {
        let mut cmd = self.command();
        log_cmd(&cmd);
        let spawn_err = |source: std::io::Error| VenverError::Spawn {
            step: self.display(),
            source,
        };

        let status = match self.output {
            StepOutput::Inherit => cmd.status().map_err(spawn_err)?,
            StepOutput::Silent => {
                let output = cmd
                    .stdin(Stdio::null())
                    .output()
                    .map_err(spawn_err)?;
                let captured = format!(
                    "{}{}",
                    String::from_utf8_lossy(&output.stdout),
                    String::from_utf8_lossy(&output.stderr)
                );
                if output.status.success() {
                    debug!(step = %self.display(), output = %captured.trim(), "step output");
                } else {
                    warn!(step = %self.display(), output = %captured.trim(), "step failed");
                }
                output.status
            }
        };

        if status.success() {
            Ok(())
        } else {
            Err(VenverError::StepFailed {
                step: self.display(),
                status: status.to_string(),
            })
        }
    }
}

/// Ordered steps that turn an empty location into an installed venv
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    steps: Vec<BuildStep>,
}

impl BuildPlan {
    /// Plan `venv` creation, a pip upgrade and installation of `root` with `extras`
    pub fn new(
        python: &PythonExecutable,
        venv: &Path,
        root: &Path,
        extras: &[String],
        editable: bool,
    ) -> Self {
        let venv_python = venv_python(venv);

        let create = BuildStep::new(
            &python.path,
            [OsString::from("-m"), "venv".into(), venv.as_os_str().to_owned()],
            StepOutput::Inherit,
        );

        let upgrade_pip = BuildStep::new(
            &venv_python,
            ["-m", "pip", "install", "--upgrade", "pip"],
            StepOutput::Silent,
        );

        let mut install_args: Vec<OsString> = vec!["-m".into(), "pip".into(), "install".into()];
        if editable {
            install_args.push("--editable".into());
        }
        install_args.push(install_target(root, extras));
        let install = BuildStep::new(&venv_python, install_args, StepOutput::Inherit);

        Self {
            steps: vec![create, upgrade_pip, install],
        }
    }

    pub fn steps(&self) -> &[BuildStep] {
        &self.steps
    }

    /// Run every step in order, calling `announce` before each
    pub fn run<F>(&self, mut announce: F) -> Result<(), VenverError>
    where
        F: FnMut(&BuildStep),
    {
        for step in &self.steps {
            announce(step);
            step.run()?;
        }
        Ok(())
    }
}

/// Interpreter inside a venv
pub fn venv_python(venv: &Path) -> PathBuf {
    if cfg!(windows) {
        venv.join("Scripts").join("python.exe")
    } else {
        venv.join("bin").join("python")
    }
}

/// `pip install` requirement for a local project, e.g. `/repo[test,docs]`
pub fn install_target(root: &Path, extras: &[String]) -> OsString {
    let mut target = root.as_os_str().to_owned();
    if !extras.is_empty() {
        target.push(format!("[{}]", extras.join(",")));
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;

    fn python() -> PythonExecutable {
        PythonExecutable {
            path: PathBuf::from("/usr/bin/python3.8"),
            version: "8".to_string(),
        }
    }

    #[test]
    fn test_plan_steps() {
        let plan = BuildPlan::new(
            &python(),
            Path::new("/repo/v8"),
            Path::new("/repo"),
            &["test".to_string()],
            false,
        );
        let steps = plan.steps();
        assert_eq!(steps.len(), 3);

        assert_eq!(steps[0].program, PathBuf::from("/usr/bin/python3.8"));
        assert_eq!(steps[0].display(), "python3.8 -m venv /repo/v8");
        assert_eq!(steps[0].output, StepOutput::Inherit);

        assert_eq!(steps[1].program, venv_python(Path::new("/repo/v8")));
        assert!(steps[1].display().ends_with("-m pip install --upgrade pip"));
        assert_eq!(steps[1].output, StepOutput::Silent);

        assert!(steps[2].display().ends_with("-m pip install '/repo[test]'"));
        assert_eq!(steps[2].output, StepOutput::Inherit);
    }

    #[test]
    fn test_plan_editable() {
        let plan = BuildPlan::new(&python(), Path::new("v8"), Path::new("/repo"), &[], true);
        let install = &plan.steps()[2];
        assert!(install.args.contains(&OsString::from("--editable")));
        assert_eq!(install.args.last(), Some(&OsString::from("/repo")));
    }

    #[test]
    fn test_install_target() {
        assert_eq!(install_target(Path::new("/repo"), &[]), OsString::from("/repo"));
        assert_eq!(
            install_target(Path::new("/repo"), &["test".to_string(), "docs".to_string()]),
            OsString::from("/repo[test,docs]")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_step_failure_reported() {
        let step = BuildStep::new(Path::new("false"), Vec::<String>::new(), StepOutput::Silent);
        let err = step.run().unwrap_err();
        assert!(matches!(err, VenverError::StepFailed { ref step, .. } if step == "false"));
    }

    #[cfg(unix)]
    #[test]
    fn test_step_success() {
        let step = BuildStep::new(Path::new("true"), Vec::<String>::new(), StepOutput::Silent);
        step.run().unwrap();
    }

    #[test]
    fn test_missing_program() {
        let step = BuildStep::new(
            Path::new("repokit-no-such-program"),
            ["--version"],
            StepOutput::Silent,
        );
        assert!(matches!(step.run().unwrap_err(), VenverError::Spawn { .. }));
    }
}
