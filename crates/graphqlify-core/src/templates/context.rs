//! Data and helpers visible to templates
//!
//! Templates see exactly what [`RenderContext`] serializes plus two helpers:
//!
//! - `has_feature(name="Redis Caching")`: true when the feature was selected
//! - `| lowercase`: Unicode lowercasing filter
//!
//! Bump [`CONTEXT_VERSION`] whenever a field is renamed or removed.

use crate::config::{FeatureSet, ProjectConfig};
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera, Value};

pub const CONTEXT_VERSION: u32 = 1;

/// Everything a template may reference
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext<'a> {
    pub context_version: u32,
    pub config: &'a ProjectConfig,
    /// Go module path derived from the project name
    pub module_name: String,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a ProjectConfig) -> Self {
        Self {
            context_version: CONTEXT_VERSION,
            config,
            module_name: module_name(&config.project_name),
        }
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.config.has_feature(feature)
    }

    pub fn to_tera_context(&self) -> tera::Result<Context> {
        Context::from_serialize(self)
    }

    /// Install `has_feature` and `lowercase` on a Tera instance
    pub fn register_helpers(&self, tera: &mut Tera) {
        tera.register_function(
            "has_feature",
            HasFeature {
                features: self.config.features.clone(),
            },
        );
        tera.register_filter("lowercase", lowercase_filter);
    }
}

pub fn lowercase(value: &str) -> String {
    value.to_lowercase()
}

/// Lowercased project name with whitespace replaced by dashes
pub fn module_name(project_name: &str) -> String {
    lowercase(project_name.trim())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Feature membership test bound to one project's selection
struct HasFeature {
    features: FeatureSet,
}

impl tera::Function for HasFeature {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let name = args
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| tera::Error::msg("has_feature requires a string `name` argument"))?;
        Ok(Value::Bool(self.features.contains(name)))
    }

    fn is_safe(&self) -> bool {
        true
    }
}

fn lowercase_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("lowercase expects a string"))?;
    Ok(Value::String(lowercase(text)))
}
