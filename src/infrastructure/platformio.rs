//! `platformio.ini` reader
//!
//! Supports the subset of Python `configparser` syntax PlatformIO projects
//! use: `[section]` headers, `key = value` / `key: value`, full-line `;` and
//! `#` comments, and indented continuation lines. Keys keep their case.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FwkitError, FwkitResult};

/// Shared section every `[env:*]` inherits from
const COMMON_ENV: &str = "env";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    path: Option<PathBuf>,
    sections: Vec<Section>,
}

impl IniDocument {
    /// Read and parse an ini file. A missing file is `FileNotFound`.
    pub fn load(path: &Path) -> FwkitResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FwkitError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => FwkitError::Io(e),
        })?;
        let mut doc = Self::parse(&text);
        doc.path = Some(path.to_path_buf());
        Ok(doc)
    }

    pub fn parse(text: &str) -> Self {
        let mut sections: Vec<Section> = Vec::new();
        // Index of the entry a continuation line extends
        let mut last_key: Option<usize> = None;

        for raw in text.lines() {
            let trimmed = raw.trim();

            if trimmed.is_empty() {
                last_key = None;
                continue;
            }
            if trimmed.starts_with(';') || trimmed.starts_with('#') {
                continue;
            }

            let indented = raw.starts_with(' ') || raw.starts_with('\t');
            if indented {
                if let (Some(section), Some(idx)) = (sections.last_mut(), last_key) {
                    let value = &mut section.entries[idx].1;
                    if !value.is_empty() {
                        value.push('\n');
                    }
                    value.push_str(trimmed);
                    continue;
                }
            }

            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                let name = trimmed[1..trimmed.len() - 1].trim().to_string();
                sections.push(Section {
                    name,
                    entries: Vec::new(),
                });
                last_key = None;
                continue;
            }

            let Some(section) = sections.last_mut() else {
                continue;
            };
            let Some(split) = trimmed.find(['=', ':']) else {
                continue;
            };

            let key = trimmed[..split].trim().to_string();
            let value = trimmed[split + 1..].trim().to_string();
            if section.get(&key).is_some() {
                last_key = None;
                continue;
            }
            section.entries.push((key, value));
            last_key = Some(section.entries.len() - 1);
        }

        Self {
            path: None,
            sections,
        }
    }

    /// Path the document was loaded from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.name == section)
            .and_then(|s| s.get(key))
    }

    /// Value from `[env:<env>]`, falling back to the shared `[env]` section.
    pub fn env_value(&self, env: &str, key: &str) -> Option<&str> {
        self.get(&format!("env:{}", env), key)
            .or_else(|| self.get(COMMON_ENV, key))
    }

    /// Value strictly from `[env:<env>]`; the shared `[env]` section is not consulted.
    pub fn require_env_value(&self, env: &str, key: &str) -> FwkitResult<String> {
        let section = format!("env:{}", env);
        self.get(&section, key)
            .map(|v| v.trim().to_string())
            .ok_or_else(|| FwkitError::MissingConfigKey {
                key: key.to_string(),
                section,
                file: self
                    .path
                    .clone()
                    .unwrap_or_else(|| PathBuf::from("platformio.ini")),
            })
    }

    /// First of `[platformio] default_envs`, else the first `[env:*]` section.
    pub fn default_env(&self) -> Option<String> {
        if let Some(envs) = self.get("platformio", "default_envs") {
            if let Some(first) = envs
                .split(|c: char| c == ',' || c.is_whitespace())
                .find(|s| !s.is_empty())
            {
                return Some(first.to_string());
            }
        }
        self.sections
            .iter()
            .find_map(|s| s.name.strip_prefix("env:").map(str::to_string))
    }
}
