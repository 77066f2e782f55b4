//! Terminal front end: the full-screen wizard and the cliclack prompts around it
//!
//! This module is optional and only available when the `tui` feature is enabled.

mod app;
mod keys;
mod prompts;
mod screens;

pub use app::run_wizard;
pub use keys::map_key;
pub use prompts::{run, CreateArgs, TEMPLATE_DIR_ENV};
