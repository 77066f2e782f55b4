//! Error types for project generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`ScaffoldError`]
pub type ScaffoldResult<T> = std::result::Result<T, ScaffoldError>;

/// Fatal failures while creating a project
///
/// Cancelling the wizard is not an error; see [`crate::create::CreateOutcome`].
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Preconditions failed before any interactive step
    #[error("{message}")]
    Validation { message: String },

    /// Target directory already exists
    #[error("directory {} already exists", path.display())]
    TargetExists { path: PathBuf },

    /// A required template is not registered in the repository
    #[error("Template not found: {id}")]
    TemplateNotFound { id: String },

    /// Template body is not valid template syntax
    #[error("Failed to parse template {id}: {message}")]
    TemplateParse { id: String, message: String },

    /// Template parsed but could not be rendered with the project config
    #[error("Failed to render template {id}: {message}")]
    TemplateRender { id: String, message: String },

    /// Directory or file creation failed
    #[error("Failed to write {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The interactive front end failed
    #[error("Terminal error: {0}")]
    Terminal(#[source] std::io::Error),
}

impl ScaffoldError {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Raised before the wizard starts
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ScaffoldError::Validation { .. } | ScaffoldError::TargetExists { .. }
        )
    }

    /// Any template lookup, parse or render failure
    pub fn is_template(&self) -> bool {
        matches!(
            self,
            ScaffoldError::TemplateNotFound { .. }
                | ScaffoldError::TemplateParse { .. }
                | ScaffoldError::TemplateRender { .. }
        )
    }
}
