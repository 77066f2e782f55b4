//! End-to-end `create` flow: validate, collect a config, generate

use crate::catalog::OptionCatalog;
use crate::config::ProjectConfig;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::templates::{GenerateReport, TemplateEngine, TemplateRepository, WritePolicy};
use crate::wizard::WizardOutcome;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the generated API serves its playground
pub const PLAYGROUND_URL: &str = "http://localhost:8080/playground";

/// Input for [`create_project`]
#[derive(Debug, Clone)]
pub struct CreateRequest {
    /// Positional argument: project name and directory
    pub project_name: String,
    /// Base for resolving a relative project directory
    pub cwd: PathBuf,
    pub policy: WritePolicy,
}

impl CreateRequest {
    pub fn new(project_name: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            project_name: project_name.into(),
            cwd: cwd.into(),
            policy: WritePolicy::default(),
        }
    }
}

/// How a create run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created {
        config: ProjectConfig,
        report: GenerateReport,
    },
    /// The user backed out; nothing was written
    Cancelled,
}

/// Absolute project directory for `name`. It must not exist; its parent must.
pub fn resolve_target(name: &str, cwd: &Path) -> ScaffoldResult<PathBuf> {
    if name.trim().is_empty() {
        return Err(ScaffoldError::Validation {
            message: "Project name must not be empty".to_string(),
        });
    }

    let path = PathBuf::from(name);
    let path = if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    };

    if path.exists() {
        return Err(ScaffoldError::TargetExists { path });
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(ScaffoldError::Validation {
                message: format!("Parent directory does not exist: {}", parent.display()),
            });
        }
    }

    Ok(path)
}

/// Run a full create.
///
/// `collect` supplies the configuration (interactive wizard or pre-seeded
/// answers). It is only invoked once the target directory has been validated.
pub async fn create_project<R, F>(
    request: &CreateRequest,
    repository: R,
    collect: F,
) -> ScaffoldResult<CreateOutcome>
where
    R: TemplateRepository,
    F: FnOnce(&OptionCatalog, &str) -> ScaffoldResult<WizardOutcome>,
{
    let target = resolve_target(&request.project_name, &request.cwd)?;
    let catalog = OptionCatalog::new();

    let outcome = collect(&catalog, &request.project_name)?;
    if outcome.cancelled {
        debug!("Wizard cancelled; nothing generated");
        return Ok(CreateOutcome::Cancelled);
    }

    let report = TemplateEngine::new(repository)
        .with_policy(request.policy)
        .generate(&outcome.config, &target)
        .await?;

    Ok(CreateOutcome::Created {
        config: outcome.config,
        report,
    })
}

/// Commands to run after generation
pub fn next_steps(project_name: &str, config: &ProjectConfig) -> Vec<String> {
    let mut steps = vec![format!("cd {}", project_name), "go mod download".to_string()];

    if config.docker != "None" {
        steps.push("docker compose up -d".to_string());
    }

    steps.push("make run".to_string());
    steps
}
