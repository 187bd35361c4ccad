//! Venv rebuild configuration
//!
//! Values that drive repo-root detection, interpreter selection and the
//! install step. Passed explicitly to every resolver.

/// Configuration for `venver`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenverConfig {
    /// Minor versions of Python 3 that may be used, already normalized (`"8"`, `"11"`)
    pub supported_versions: Vec<String>,
    /// Extras always installed (`pip install pkg[test]`)
    pub default_extras: Vec<String>,
    /// Names that must all exist in a directory for it to count as the project root
    pub marker_files: Vec<String>,
    /// Project config file read for extra extras, relative to the root
    pub config_file: String,
    /// Section of `config_file` holding venver settings
    pub config_section: String,
    /// Key within `config_section` listing extras
    pub extras_key: String,
    /// Source directory whose bytecode caches get cleared
    pub source_dir: String,
    /// Directory name of bytecode caches
    pub cache_dir_name: String,
}

impl Default for VenverConfig {
    fn default() -> Self {
        Self {
            supported_versions: ["6", "8", "10", "11"].map(String::from).to_vec(),
            default_extras: vec!["test".to_string()],
            marker_files: vec!["setup.cfg".to_string(), "src".to_string()],
            config_file: "setup.cfg".to_string(),
            config_section: "venver".to_string(),
            extras_key: "extras".to_string(),
            source_dir: "src".to_string(),
            cache_dir_name: "__pycache__".to_string(),
        }
    }
}

impl VenverConfig {
    /// Replace the supported version list
    pub fn with_supported_versions<I, S>(mut self, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported_versions = versions.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the default extras
    pub fn with_default_extras<I, S>(mut self, extras: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_extras = extras.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the project root markers
    pub fn with_marker_files<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.marker_files = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a normalized version token is allowed
    pub fn supports(&self, version: &str) -> bool {
        self.supported_versions.iter().any(|v| v == version)
    }
}
