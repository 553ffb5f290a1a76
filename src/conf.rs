use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::path::Path;

/// The configuration record an external documentation generator consumes.
///
/// The record is read once per invocation and never mutated; `init` is the
/// only writer. Extension order is preserved because it may determine
/// registration order downstream.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DocConfig {
    pub project: String,
    pub copyright: String,
    pub author: String,
    pub version: String,
    pub release: String,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_theme: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub html_theme_options: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_domain: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfError {
    #[error("empty value for field: {0}")]
    EmptyField(&'static str),
    #[error("empty extension identifier at position {0}")]
    EmptyExtension(usize),
    #[error("duplicate extension identifier: {0}")]
    DuplicateExtension(String),
}

/// The shipped default record, as consumed by the Godot CMake docs build.
pub fn sample() -> DocConfig {
    let mut theme_options = Map::new();
    // 0 means "do not limit the global toc depth" in sphinx_material.
    theme_options.insert("globaltoc_depth".to_string(), Value::from(0));

    DocConfig {
        project: "Godot CMake".to_string(),
        copyright: "2020, Felix Morgner".to_string(),
        author: "Felix Morgner <felix.morgner@gmail.com>".to_string(),
        version: "1.0".to_string(),
        release: "1.0.0".to_string(),
        extensions: vec!["sphinxcontrib.moderncmakedomain".to_string()],
        html_theme: Some("sphinx_material".to_string()),
        html_theme_options: theme_options,
        primary_domain: Some("cmake".to_string()),
    }
}

pub fn load(path: &str) -> anyhow::Result<DocConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path, e))?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn save(path: &str, conf: &DocConfig) -> anyhow::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, format!("{}\n", serde_json::to_string_pretty(conf)?))?;
    Ok(())
}

/// Invariant checks. Loading never validates; a malformed record is the
/// consuming generator's problem until someone runs `validate`.
pub fn validate(conf: &DocConfig) -> Result<(), ConfError> {
    let required: [(&'static str, &str); 5] = [
        ("project", &conf.project),
        ("copyright", &conf.copyright),
        ("author", &conf.author),
        ("version", &conf.version),
        ("release", &conf.release),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(ConfError::EmptyField(name));
        }
    }
    if matches!(&conf.html_theme, Some(t) if t.trim().is_empty()) {
        return Err(ConfError::EmptyField("html_theme"));
    }
    if matches!(&conf.primary_domain, Some(d) if d.trim().is_empty()) {
        return Err(ConfError::EmptyField("primary_domain"));
    }

    let mut seen = HashSet::new();
    for (i, ext) in conf.extensions.iter().enumerate() {
        if ext.trim().is_empty() {
            return Err(ConfError::EmptyExtension(i));
        }
        if !seen.insert(ext) {
            return Err(ConfError::DuplicateExtension(ext.clone()));
        }
    }
    Ok(())
}
