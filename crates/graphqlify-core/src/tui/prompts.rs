//! Charm-style framing around the wizard using cliclack

use super::app::run_wizard;
use crate::config::Answers;
use crate::create::{self, CreateOutcome, CreateRequest, PLAYGROUND_URL};
use crate::templates::{
    check_compatibility, BundledTemplates, LocalTemplates, TemplateRepository, WritePolicy,
};
use crate::wizard::WizardOutcome;
use anyhow::{Context, Result};
use std::cell::Cell;
use std::path::PathBuf;
use tracing::debug;

/// Environment override for `--template-dir`
pub const TEMPLATE_DIR_ENV: &str = "GRAPHQLIFY_TEMPLATE_DIR";

const UPGRADE_COMMAND: &str = "cargo install graphqlify-cli --force";

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name, also the directory created under the working directory
    pub project_name: String,

    /// Local directory to read templates from instead of the bundled set
    pub template_dir: Option<PathBuf>,

    /// YAML answers file; skips the interactive wizard
    pub answers: Option<PathBuf>,

    /// Write straight into the target instead of staging
    pub in_place: bool,
}

/// Run `create` with interactive prompts
pub async fn run(args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro("GoGraphQLify")?;

    let repository = setup_repository(&args, cli_version)?;

    let answers = match &args.answers {
        Some(path) => {
            cliclack::log::info(format!("Using answers from {}", path.display()))?;
            Some(Answers::from_file(path)?)
        }
        None => None,
    };

    let cwd = std::env::current_dir().context("Failed to read the working directory")?;
    let mut request = CreateRequest::new(&args.project_name, cwd);
    if args.in_place {
        request.policy = WritePolicy::InPlace;
    }

    let spinner = cliclack::spinner();
    let generating = Cell::new(false);
    let result = create::create_project(&request, repository, |catalog, name| {
        let outcome = match answers {
            Some(answers) => WizardOutcome {
                config: answers.into_config(name, catalog)?,
                cancelled: false,
            },
            None => run_wizard(catalog, name)?,
        };
        if !outcome.cancelled {
            spinner.start("Crafting your GraphQL API...");
            generating.set(true);
        }
        Ok(outcome)
    })
    .await;

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            if generating.get() {
                spinner.error(format!("{}", e));
            }
            return Err(e.into());
        }
    };

    let (config, report) = match outcome {
        CreateOutcome::Cancelled => {
            cliclack::outro_cancel("Project creation cancelled")?;
            return Ok(());
        }
        CreateOutcome::Created { config, report } => (config, report),
    };

    spinner.stop(format!(
        "Project created at {} ({} files)",
        report.root.display(),
        report.written.len()
    ));

    for template in &report.skipped {
        cliclack::log::warning(format!("Template {} not found; skipped", template))?;
    }

    if config.uses_auth() {
        cliclack::log::info(format!(
            "{} settings live in config/config.yaml; replace the placeholders before deploying",
            config.auth
        ))?;
    }

    println!();
    println!("  Next steps");
    println!();
    for (i, step) in create::next_steps(&args.project_name, &config)
        .iter()
        .enumerate()
    {
        println!("  {}.  {}", i + 1, step);
    }
    println!();

    cliclack::outro(format!(
        "Your GraphQL playground will be at {}",
        PLAYGROUND_URL
    ))?;

    Ok(())
}

fn setup_repository(args: &CreateArgs, cli_version: &str) -> Result<Box<dyn TemplateRepository>> {
    let template_dir = args
        .template_dir
        .clone()
        .or_else(|| std::env::var_os(TEMPLATE_DIR_ENV).map(PathBuf::from));

    let Some(path) = template_dir else {
        debug!("Using bundled templates");
        return Ok(Box::new(BundledTemplates));
    };

    cliclack::log::info(format!("Using local templates from {}", path.display()))?;
    let local = LocalTemplates::open(&path)?;

    if let Some(manifest) = local.manifest() {
        if let Some(warning) =
            check_compatibility(cli_version, &manifest.version, UPGRADE_COMMAND)
        {
            cliclack::log::warning(format!(
                "Version warning: {}",
                warning.lines().next().unwrap_or(&warning)
            ))?;
        }
    }

    Ok(Box::new(local))
}
