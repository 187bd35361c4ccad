//! Repo lister implementation
//!
//! Prints shell commands (or JSON) that re-clone every repository found
//! under a directory, relative to the current working directory.

use std::io::Write;
use std::path::Path;

use crate::cli::output::Output;
use crate::git::{list_repo_targets, CloneScript};

/// Options for the repo lister
#[derive(Debug, Clone, Copy, Default)]
pub struct GitterOptions {
    /// Print targets as JSON instead of shell commands
    pub json: bool,
    /// Warn about repositories without an origin instead of failing
    pub skip_invalid: bool,
}

/// Run the repo lister, writing commands to `out`
pub fn run_gitter<W: Write>(
    out: &mut W,
    target: &Path,
    cwd: &Path,
    options: GitterOptions,
) -> anyhow::Result<()> {
    let report = list_repo_targets(target, cwd, options.skip_invalid)?;

    for skipped in &report.skipped {
        Output::warning(&skipped.to_string());
    }

    if options.json {
        serde_json::to_writer_pretty(&mut *out, &report.targets)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", CloneScript::new(&report.targets))?;
    }
    out.flush()?;

    tracing::info!(
        repos = report.targets.len(),
        skipped = report.skipped.len(),
        "listed repositories"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_repo(root: &Path, rel: &str, url: &str) {
        let git_dir = root.join(rel).join(".git");
        fs::create_dir_all(&git_dir).unwrap();
        fs::write(
            git_dir.join("config"),
            format!("[remote \"origin\"]\n\turl = {}\n", url),
        )
        .unwrap();
    }

    #[test]
    fn test_run_gitter_shell() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        write_repo(&root, "code/app", "git@h:o/app.git");

        let mut out = Vec::new();
        run_gitter(&mut out, &root, &root, GitterOptions::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "mkdir -p code &>/dev/null\ngit clone git@h:o/app.git code/app\n"
        );
    }

    #[test]
    fn test_run_gitter_json() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        write_repo(&root, "app", "https://h/o/app.git");

        let mut out = Vec::new();
        let options = GitterOptions {
            json: true,
            ..Default::default()
        };
        run_gitter(&mut out, &root, &root, options).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["path"], "app");
        assert_eq!(value[0]["url"], "https://h/o/app.git");
    }

    #[test]
    fn test_run_gitter_empty_tree() {
        let temp = TempDir::new().unwrap();
        let mut out = Vec::new();
        run_gitter(&mut out, temp.path(), temp.path(), GitterOptions::default()).unwrap();
        assert!(out.is_empty());
    }
}
