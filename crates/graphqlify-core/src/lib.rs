//! GraphQLify Core - Wizard and template engine behind `go-graphqlify`
//!
//! This library collects a project configuration through a step-by-step
//! selection wizard and renders a Go GraphQL API skeleton from it.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Model** - The option catalog and the `ProjectConfig` it fills
//! - **Layer 2: Workflow** - The `Wizard` state machine, the `TemplateEngine`
//!   and `create_project`, which ties them together
//! - **Layer 3: CLI/TUI Interface** - Optional ratatui wizard and cliclack
//!   prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the terminal front end
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use graphqlify_core::{create_project, Answers, BundledTemplates, CreateRequest, WizardOutcome};
//!
//! let answers = Answers::from_yaml("database: MySQL\nauth: None\n")?;
//! let request = CreateRequest::new("shop", std::env::current_dir()?);
//! let outcome = create_project(&request, BundledTemplates, |catalog, name| {
//!     Ok(WizardOutcome {
//!         config: answers.into_config(name, catalog)?,
//!         cancelled: false,
//!     })
//! })
//! .await?;
//! ```

pub mod catalog;
pub mod config;
pub mod create;
pub mod error;
pub mod templates;
pub mod wizard;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{Choice, OptionCatalog};
pub use config::{Answers, FeatureSet, ProjectConfig};
pub use create::{create_project, next_steps, CreateOutcome, CreateRequest};
pub use error::{ScaffoldError, ScaffoldResult};
pub use templates::{
    BundledTemplates, GenerateReport, LocalTemplates, TemplateEngine, TemplateRepository,
    WritePolicy,
};
pub use wizard::{Step, Wizard, WizardEvent, WizardOutcome};

#[cfg(feature = "tui")]
pub use tui::run;
