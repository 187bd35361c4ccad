//! Remote URL lookup in `.git/config`

use git2::{Config, ErrorCode};
use std::path::Path;

use super::GitConfigError;

const ORIGIN_URL_KEY: &str = "remote.origin.url";

/// Get the `origin` URL from a git config file
pub fn origin_url(config_path: &Path) -> Result<String, GitConfigError> {
    // libgit2 treats a missing file as an empty config
    std::fs::metadata(config_path).map_err(|source| GitConfigError::Io {
        path: config_path.to_path_buf(),
        source,
    })?;

    let parse_err = |source: git2::Error| GitConfigError::Parse {
        path: config_path.to_path_buf(),
        source,
    };
    let config = Config::open(config_path).map_err(parse_err)?;

    match config.get_string(ORIGIN_URL_KEY) {
        Ok(url) if !url.trim().is_empty() => Ok(url),
        Ok(_) => Err(GitConfigError::MissingOrigin {
            path: config_path.to_path_buf(),
        }),
        Err(e) if e.code() == ErrorCode::NotFound => Err(GitConfigError::MissingOrigin {
            path: config_path.to_path_buf(),
        }),
        Err(e) => Err(parse_err(e)),
    }
}
