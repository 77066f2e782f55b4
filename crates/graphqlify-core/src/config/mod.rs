//! Project configuration collected by the wizard

pub mod answers;

use crate::catalog::{self, OptionCatalog};
use crate::wizard::Step;
use serde::{Deserialize, Serialize};

pub use answers::Answers;

/// Ordered feature selection: insertion order, no duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSet(Vec<String>);

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `feature` if present, otherwise append it
    pub fn toggle(&mut self, feature: &str) {
        match self.0.iter().position(|f| f == feature) {
            Some(idx) => {
                self.0.remove(idx);
            }
            None => self.0.push(feature.to_string()),
        }
    }

    /// Add `feature` unless it is already selected
    pub fn insert(&mut self, feature: &str) {
        if !self.contains(feature) {
            self.0.push(feature.to_string());
        }
    }

    pub fn contains(&self, feature: &str) -> bool {
        self.0.iter().any(|f| f == feature)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = FeatureSet::new();
        for feature in iter {
            set.insert(feature.as_ref());
        }
        set
    }
}

/// The choices that drive template rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub project_name: String,
    pub database: String,
    pub orm: String,
    pub auth: String,
    pub docker: String,
    pub features: FeatureSet,
    pub graphql_library: String,
}

pub const DEFAULT_DATABASE: &str = "PostgreSQL";
pub const DEFAULT_AUTH: &str = "JWT";
pub const DEFAULT_DOCKER: &str = "Full (development + production)";
pub const DEFAULT_GRAPHQL_LIBRARY: &str = "gqlgen";

impl ProjectConfig {
    /// Defaults used when the wizard starts
    pub fn with_defaults(project_name: impl Into<String>) -> Self {
        let orm = catalog::orm_options(DEFAULT_DATABASE)
            .first()
            .map(|c| c.name)
            .unwrap_or("GORM");

        Self {
            project_name: project_name.into(),
            database: DEFAULT_DATABASE.to_string(),
            orm: orm.to_string(),
            auth: DEFAULT_AUTH.to_string(),
            docker: DEFAULT_DOCKER.to_string(),
            features: FeatureSet::new(),
            graphql_library: DEFAULT_GRAPHQL_LIBRARY.to_string(),
        }
    }

    /// Record a single-choice answer for a step
    pub(crate) fn set(&mut self, step: Step, value: &str) {
        let field = match step {
            Step::Database => &mut self.database,
            Step::Orm => &mut self.orm,
            Step::Auth => &mut self.auth,
            Step::Docker => &mut self.docker,
            Step::Features | Step::Confirm => return,
        };
        *field = value.to_string();
    }

    /// Value currently recorded for a single-choice step
    pub fn get(&self, step: Step) -> Option<&str> {
        match step {
            Step::Database => Some(&self.database),
            Step::Orm => Some(&self.orm),
            Step::Auth => Some(&self.auth),
            Step::Docker => Some(&self.docker),
            Step::Features | Step::Confirm => None,
        }
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }

    /// True when authentication files should be generated
    pub fn uses_auth(&self) -> bool {
        matches!(self.auth.as_str(), "JWT" | "OAuth")
    }

    /// Human-readable summary lines, in wizard order
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        let features = if self.features.is_empty() {
            "None".to_string()
        } else {
            self.features.iter().collect::<Vec<_>>().join(", ")
        };

        vec![
            ("Project Name", self.project_name.clone()),
            ("Database", self.database.clone()),
            ("ORM/DB Access", self.orm.clone()),
            ("Authentication", self.auth.clone()),
            ("Docker", self.docker.clone()),
            ("Features", features),
            ("GraphQL Library", self.graphql_library.clone()),
        ]
    }

    /// Check every value against the catalog it must come from
    pub fn unknown_values(&self, catalog: &OptionCatalog) -> Vec<String> {
        let mut problems = Vec::new();

        for step in [Step::Database, Step::Orm, Step::Auth, Step::Docker] {
            if let Some(value) = self.get(step) {
                if !catalog.offers(step, &self.database, value) {
                    problems.push(format!("{} '{}'", step.label(), value));
                }
            }
        }

        for feature in self.features.iter() {
            if !catalog.offers(Step::Features, &self.database, feature) {
                problems.push(format!("feature '{}'", feature));
            }
        }

        if !catalog
            .graphql_libraries()
            .iter()
            .any(|c| c.name == self.graphql_library)
        {
            problems.push(format!("GraphQL library '{}'", self.graphql_library));
        }

        problems
    }
}
