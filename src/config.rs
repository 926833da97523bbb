// Driver settings: log filter, colour, and the remote control's key bindings.
// Every field has a default, so an empty file (or no file) is valid.

use crate::error::{PatternError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightAction {
    On,
    Off,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Binding {
    pub name: String,
    pub action: LightAction,
}

impl Binding {
    pub fn new(name: impl Into<String>, action: LightAction) -> Self {
        Self {
            name: name.into(),
            action,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RemoteSettings {
    pub bindings: Vec<Binding>,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            bindings: vec![
                Binding::new("on", LightAction::On),
                Binding::new("off", LightAction::Off),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log_filter: String,
    pub color: bool,
    pub remote: RemoteSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            color: true,
            remote: RemoteSettings::default(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|err| PatternError::config("<toml>", err.to_string()))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|err| {
            PatternError::config(
                "<json>",
                format!("line {}, column {}: {err}", err.line(), err.column()),
            )
        })
    }

    /// Reads a settings file, picking the format from the extension and
    /// falling back to sniffing the first non-blank character.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let parsed = match format.as_deref() {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ => {
                let trimmed = content.trim_start();
                if trimmed.starts_with('{') {
                    Self::from_json_str(&content)
                } else {
                    Self::from_toml_str(&content)
                }
            }
        };

        parsed.map_err(|err| match err {
            PatternError::Config { message, .. } => {
                PatternError::config(path.display().to_string(), message)
            }
            other => other,
        })
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }
}
