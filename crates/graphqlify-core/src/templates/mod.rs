//! Template selection, rendering and writing
//!
//! This module provides:
//! - Template repositories (bundled into the binary, or a local directory)
//! - Binding computation: which templates apply and where they are written
//! - The render context exposed to templates
//! - The engine that renders bindings into a project tree
//! - Version compatibility checking for local template sets

pub mod binding;
pub mod context;
pub mod engine;
pub mod manifest;
pub mod repository;
pub mod version;

pub use binding::{compute_bindings, TemplateBinding};
pub use context::RenderContext;
pub use engine::{GenerateReport, TemplateEngine, WritePolicy};
pub use manifest::TemplateManifest;
pub use repository::{BundledTemplates, LocalTemplates, TemplateRepository};
pub use version::check_compatibility;
