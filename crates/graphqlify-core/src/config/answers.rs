//! Pre-seeded wizard answers loaded from YAML
//!
//! ```yaml
//! database: MongoDB
//! orm: mgm
//! auth: OAuth
//! docker: Development only
//! features:
//!   - Redis Caching
//! graphql_library: gqlgen
//! ```
//!
//! Every key is optional. A missing `orm` resolves to the first ORM offered
//! for the chosen database.

use super::{FeatureSet, ProjectConfig};
use crate::catalog::{self, OptionCatalog};
use crate::error::{ScaffoldError, ScaffoldResult};
use serde::Deserialize;
use std::path::Path;

/// Subset of [`ProjectConfig`] fields that may be supplied up front
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Answers {
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub orm: Option<String>,
    #[serde(default)]
    pub auth: Option<String>,
    #[serde(default)]
    pub docker: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub graphql_library: Option<String>,
}

impl Answers {
    pub fn from_yaml(content: &str) -> ScaffoldResult<Self> {
        serde_yaml::from_str(content).map_err(|e| ScaffoldError::Validation {
            message: format!("Failed to parse answers: {}", e),
        })
    }

    pub fn from_file(path: &Path) -> ScaffoldResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ScaffoldError::Filesystem {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Merge onto the wizard defaults and validate against the catalog
    pub fn into_config(
        self,
        project_name: &str,
        catalog: &OptionCatalog,
    ) -> ScaffoldResult<ProjectConfig> {
        let mut config = ProjectConfig::with_defaults(project_name);

        if let Some(database) = self.database {
            config.database = database;
        }
        config.orm = match self.orm {
            Some(orm) => orm,
            None => catalog::orm_options(&config.database)
                .first()
                .map(|c| c.name.to_string())
                .unwrap_or(config.orm),
        };
        if let Some(auth) = self.auth {
            config.auth = auth;
        }
        if let Some(docker) = self.docker {
            config.docker = docker;
        }
        if let Some(library) = self.graphql_library {
            config.graphql_library = library;
        }
        config.features = self.features.iter().collect::<FeatureSet>();

        let problems = config.unknown_values(catalog);
        if !problems.is_empty() {
            return Err(ScaffoldError::Validation {
                message: format!("Unsupported answers: {}", problems.join(", ")),
            });
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_answers_match_wizard_defaults() {
        let catalog = OptionCatalog::new();
        let config = Answers::from_yaml("{}")
            .unwrap()
            .into_config("shop", &catalog)
            .unwrap();
        assert_eq!(config, ProjectConfig::with_defaults("shop"));
    }

    #[test]
    fn test_missing_orm_follows_database() {
        let catalog = OptionCatalog::new();
        let config = Answers::from_yaml("database: MongoDB\n")
            .unwrap()
            .into_config("shop", &catalog)
            .unwrap();
        assert_eq!(config.orm, "Official Go Driver");
    }

    #[test]
    fn test_full_answers() {
        let yaml = r#"
database: SQLite
orm: Ent
auth: None
docker: Development only
features:
  - Background Jobs
  - Redis Caching
  - Background Jobs
graphql_library: graphql-go
"#;
        let catalog = OptionCatalog::new();
        let config = Answers::from_yaml(yaml)
            .unwrap()
            .into_config("shop", &catalog)
            .unwrap();
        assert_eq!(config.database, "SQLite");
        assert_eq!(config.orm, "Ent");
        assert_eq!(config.auth, "None");
        assert_eq!(
            config.features.iter().collect::<Vec<_>>(),
            ["Background Jobs", "Redis Caching"]
        );
        assert_eq!(config.graphql_library, "graphql-go");
    }

    #[test]
    fn test_orm_must_match_database() {
        let catalog = OptionCatalog::new();
        let err = Answers::from_yaml("database: MongoDB\norm: GORM\n")
            .unwrap()
            .into_config("shop", &catalog)
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::Validation { .. }));
        assert!(err.to_string().contains("ORM 'GORM'"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Answers::from_yaml("databse: MySQL\n").is_err());
    }
}
