//! Shell command generation for re-cloning repositories

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use super::RepoTarget;
use crate::util::shell_quote;

/// Shell commands that recreate a set of clones relative to the working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneScript {
    /// Unique parent directories to create, sorted
    pub directories: Vec<PathBuf>,
    /// One `git clone` per target, in scan order
    pub clones: Vec<(String, PathBuf)>,
}

impl CloneScript {
    pub fn new(targets: &[RepoTarget]) -> Self {
        let directories: BTreeSet<PathBuf> = targets
            .iter()
            .filter_map(|t| t.path.parent())
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .collect();

        Self {
            directories: directories.into_iter().collect(),
            clones: targets
                .iter()
                .map(|t| (t.url.clone(), t.path.clone()))
                .collect(),
        }
    }

    /// Rendered command lines
    pub fn lines(&self) -> Vec<String> {
        let mkdirs = self
            .directories
            .iter()
            .map(|dir| format!("mkdir -p {} &>/dev/null", shell_quote(&dir.to_string_lossy())));
        let clones = self.clones.iter().map(|(url, path)| {
            format!(
                "git clone {} {}",
                shell_quote(url),
                shell_quote(&path.to_string_lossy())
            )
        });
        mkdirs.chain(clones).collect()
    }
}

impl fmt::Display for CloneScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
