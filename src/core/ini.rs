//! Minimal `setup.cfg` parsing
//!
//! Follows Python configparser defaults: `key = value` or `key: value`,
//! case-insensitive keys, case-sensitive section names, and indented lines
//! continuing the previous value.

use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading an INI file
#[derive(Error, Debug)]
pub enum IniError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed section header on line {line}: {text}")]
    BadSection { line: usize, text: String },

    #[error("Entry outside of any section on line {line}: {text}")]
    OrphanEntry { line: usize, text: String },
}

/// One `[section]` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniSection {
    pub name: String,
    entries: Vec<(String, String)>,
}

impl IniSection {
    fn new(name: String) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    /// Last value for a key (case-insensitive)
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// A parsed INI document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    sections: Vec<IniSection>,
}

impl IniDocument {
    /// Parse INI text
    pub fn parse(content: &str) -> Result<Self, IniError> {
        let mut sections: Vec<IniSection> = Vec::new();
        // Whether the previous line was an entry that a continuation may extend
        let mut continuable = false;

        for (idx, raw) in content.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = raw.trim();

            if trimmed.is_empty() {
                continuable = false;
                continue;
            }
            if trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            let indented = raw.starts_with(|c: char| c.is_whitespace());
            if indented && continuable {
                if let Some((_, value)) = sections.last_mut().and_then(|s| s.entries.last_mut()) {
                    if !value.is_empty() {
                        value.push('\n');
                    }
                    value.push_str(trimmed);
                    continue;
                }
            }

            if trimmed.starts_with('[') {
                let name = parse_header(trimmed).ok_or_else(|| IniError::BadSection {
                    line: line_no,
                    text: trimmed.to_string(),
                })?;
                sections.push(IniSection::new(name));
                continuable = false;
                continue;
            }

            let section = sections.last_mut().ok_or_else(|| IniError::OrphanEntry {
                line: line_no,
                text: trimmed.to_string(),
            })?;
            let (key, value) = split_entry(trimmed);
            section.entries.push((key.to_string(), value.to_string()));
            continuable = true;
        }

        Ok(Self { sections })
    }

    /// Read and parse an INI file
    pub fn load(path: &Path) -> Result<Self, IniError> {
        let content = std::fs::read_to_string(path).map_err(|source| IniError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    /// All sections in file order
    pub fn sections(&self) -> &[IniSection] {
        &self.sections
    }

    /// Last section with exactly this name
    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.iter().rev().find(|s| s.name == name)
    }

    /// Look up `key` in the named section; repeated sections are merged
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .rev()
            .filter(|s| s.name == section)
            .find_map(|s| s.get(key))
    }
}

fn parse_header(line: &str) -> Option<String> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?.trim();
    (!inner.is_empty()).then(|| inner.to_string())
}

fn split_entry(line: &str) -> (&str, &str) {
    match line.find(['=', ':']) {
        Some(pos) => (line[..pos].trim(), line[pos + 1..].trim()),
        None => (line, ""),
    }
}
