//! Manifest for a local template directory (`<dir>/template.yaml`)

use crate::error::{ScaffoldError, ScaffoldResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Describes a template set and the CLI version it targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateManifest {
    /// Display name of the template set
    pub name: String,

    /// Description of what the template set provides
    #[serde(default)]
    pub description: String,

    /// Semver version for CLI compatibility checking
    pub version: String,
}

impl TemplateManifest {
    pub fn from_yaml(content: &str) -> ScaffoldResult<Self> {
        serde_yaml::from_str(content).map_err(|e| ScaffoldError::Validation {
            message: format!("Failed to parse template manifest: {}", e),
        })
    }

    pub fn from_file(path: &Path) -> ScaffoldResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ScaffoldError::fs(path, source))?;
        Self::from_yaml(&content)
    }
}
