//! Render the applicable templates into a new project tree

use super::binding::{compute_bindings, TemplateBinding, SKELETON_DIRS};
use super::context::RenderContext;
use super::repository::TemplateRepository;
use crate::config::ProjectConfig;
use crate::error::{ScaffoldError, ScaffoldResult};
use std::error::Error as _;
use std::path::{Path, PathBuf};
use tera::Tera;
use tokio::fs;
use tracing::{debug, warn};

/// How files reach the target directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WritePolicy {
    /// Render into a sibling staging directory and rename it onto the target
    /// once every file is written. A failure leaves no target behind.
    #[default]
    Staged,
    /// Create the target first and write into it. A failure leaves a
    /// partially populated tree.
    InPlace,
}

/// What a generation run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub root: PathBuf,
    /// Written files relative to `root`, in write order
    pub written: Vec<PathBuf>,
    /// Conditional templates the repository did not provide
    pub skipped: Vec<&'static str>,
}

/// Renders a [`ProjectConfig`] through a [`TemplateRepository`]
pub struct TemplateEngine<R> {
    repository: R,
    policy: WritePolicy,
}

impl<R: TemplateRepository> TemplateEngine<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            policy: WritePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: WritePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Generate the project at `target`, which must not exist yet
    pub async fn generate(
        &self,
        config: &ProjectConfig,
        target: &Path,
    ) -> ScaffoldResult<GenerateReport> {
        debug!(
            "Generating {} with {} ({:?})",
            target.display(),
            self.repository.describe(),
            self.policy
        );

        match self.policy {
            WritePolicy::InPlace => {
                fs::create_dir_all(target)
                    .await
                    .map_err(|e| ScaffoldError::fs(target, e))?;
                self.write_tree(config, target).await
            }
            WritePolicy::Staged => self.generate_staged(config, target).await,
        }
    }

    async fn generate_staged(
        &self,
        config: &ProjectConfig,
        target: &Path,
    ) -> ScaffoldResult<GenerateReport> {
        let staging = staging_dir(target)?;

        // Leftover from an interrupted run
        if fs::metadata(&staging).await.is_ok() {
            fs::remove_dir_all(&staging)
                .await
                .map_err(|e| ScaffoldError::fs(&staging, e))?;
        }
        fs::create_dir_all(&staging)
            .await
            .map_err(|e| ScaffoldError::fs(&staging, e))?;

        let result = match self.write_tree(config, &staging).await {
            Ok(report) => self.promote(&staging, target, report).await,
            Err(e) => Err(e),
        };

        if result.is_err() {
            if let Err(e) = fs::remove_dir_all(&staging).await {
                warn!("Failed to remove {}: {}", staging.display(), e);
            }
        }

        result
    }

    async fn promote(
        &self,
        staging: &Path,
        target: &Path,
        report: GenerateReport,
    ) -> ScaffoldResult<GenerateReport> {
        if fs::metadata(target).await.is_ok() {
            return Err(ScaffoldError::TargetExists {
                path: target.to_path_buf(),
            });
        }
        fs::rename(staging, target)
            .await
            .map_err(|e| ScaffoldError::fs(target, e))?;

        Ok(GenerateReport {
            root: target.to_path_buf(),
            ..report
        })
    }

    async fn write_tree(&self, config: &ProjectConfig, root: &Path) -> ScaffoldResult<GenerateReport> {
        for dir in SKELETON_DIRS {
            let path = root.join(dir);
            fs::create_dir_all(&path)
                .await
                .map_err(|e| ScaffoldError::fs(&path, e))?;
        }

        let context = RenderContext::new(config);
        let tera_context = context
            .to_tera_context()
            .map_err(|e| ScaffoldError::TemplateRender {
                id: "<context>".to_string(),
                message: error_chain(&e),
            })?;

        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        context.register_helpers(&mut tera);

        let mut report = GenerateReport {
            root: root.to_path_buf(),
            written: Vec::new(),
            skipped: Vec::new(),
        };

        for binding in compute_bindings(config).into_iter().filter(|b| b.included) {
            let Some(rendered) = self.render(&mut tera, &binding, &tera_context)? else {
                report.skipped.push(binding.template_id);
                continue;
            };

            let dest = root.join(binding.destination);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| ScaffoldError::fs(parent, e))?;
            }
            fs::write(&dest, rendered.as_bytes())
                .await
                .map_err(|e| ScaffoldError::fs(&dest, e))?;

            debug!("Wrote {}", binding.destination);
            report.written.push(PathBuf::from(binding.destination));
        }

        Ok(report)
    }

    /// `None` when a conditional template is missing from the repository
    fn render(
        &self,
        tera: &mut Tera,
        binding: &TemplateBinding,
        context: &tera::Context,
    ) -> ScaffoldResult<Option<String>> {
        let id = binding.template_id;
        let bytes = match self.repository.read_template(id) {
            Ok(bytes) => bytes,
            Err(ScaffoldError::TemplateNotFound { .. }) if binding.conditional => {
                debug!("Skipping conditional template {}: not provided", id);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let body = String::from_utf8(bytes).map_err(|e| ScaffoldError::TemplateParse {
            id: id.to_string(),
            message: e.to_string(),
        })?;

        tera.add_raw_template(id, &body)
            .map_err(|e| ScaffoldError::TemplateParse {
                id: id.to_string(),
                message: error_chain(&e),
            })?;

        debug!("Rendering template: {}", id);
        tera.render(id, context)
            .map(Some)
            .map_err(|e| ScaffoldError::TemplateRender {
                id: id.to_string(),
                message: error_chain(&e),
            })
    }
}

/// `<parent>/.<name>.graphqlify-staging`
pub fn staging_dir(target: &Path) -> ScaffoldResult<PathBuf> {
    let name = target.file_name().ok_or_else(|| ScaffoldError::Validation {
        message: format!("Invalid project directory: {}", target.display()),
    })?;
    let parent = target.parent().unwrap_or_else(|| Path::new("."));
    Ok(parent.join(format!(
        ".{}.graphqlify-staging",
        name.to_string_lossy()
    )))
}

/// Tera nests the useful message in the source chain
fn error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::binding::FIXED_TEMPLATES;
    use crate::templates::repository::BundledTemplates;
    use std::collections::HashMap;

    /// In-memory repository for exercising failure paths
    struct MapTemplates(HashMap<&'static str, &'static str>);

    impl MapTemplates {
        fn minimal() -> Self {
            let mut map = HashMap::new();
            for (id, _) in FIXED_TEMPLATES {
                map.insert(*id, "{{ config.project_name }}\n");
            }
            Self(map)
        }
    }

    impl TemplateRepository for MapTemplates {
        fn read_template(&self, id: &str) -> ScaffoldResult<Vec<u8>> {
            self.0
                .get(id)
                .map(|body| body.as_bytes().to_vec())
                .ok_or_else(|| ScaffoldError::TemplateNotFound { id: id.to_string() })
        }

        fn describe(&self) -> String {
            "in-memory templates".to_string()
        }
    }

    fn config(auth: &str) -> ProjectConfig {
        let mut config = ProjectConfig::with_defaults("acme");
        config.auth = auth.to_string();
        config
    }

    #[tokio::test]
    async fn test_generate_jwt_project_with_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("acme");
        let engine = TemplateEngine::new(BundledTemplates);

        let report = engine.generate(&config("JWT"), &target).await.unwrap();

        assert_eq!(report.root, target);
        assert_eq!(report.written.len(), FIXED_TEMPLATES.len() + 2);
        assert!(report.skipped.is_empty());
        for (_, dest) in FIXED_TEMPLATES {
            assert!(target.join(dest).is_file(), "missing {}", dest);
        }
        assert!(target.join("internal/auth/jwt.go").is_file());
        assert!(target.join("internal/auth/middleware.go").is_file());
        assert!(!target.join("internal/auth/oauth.go").exists());
        assert!(target.join("db/migrations").is_dir());
        assert!(target.join("pkg/utils").is_dir());
        assert!(!staging_dir(&target).unwrap().exists());

        let go_mod = std::fs::read_to_string(target.join("go.mod")).unwrap();
        assert!(go_mod.starts_with("module acme"));
    }

    #[tokio::test]
    async fn test_generate_each_option_renders() {
        // Every catalog value must render without template errors
        let combos = [
            ("PostgreSQL", "GORM", "OAuth", "None"),
            ("MySQL", "Ent", "None", "Development only"),
            ("SQLite", "SQLC", "JWT", "Full (development + production)"),
            ("PostgreSQL", "Raw SQL", "None", "None"),
            ("MongoDB", "Official Go Driver", "JWT", "Development only"),
            ("MongoDB", "mgm", "OAuth", "None"),
            ("MongoDB", "Raw Driver", "None", "Full (development + production)"),
        ];
        for (i, (database, orm, auth, docker)) in combos.into_iter().enumerate() {
            let dir = tempfile::tempdir().unwrap();
            let target = dir.path().join(format!("svc{}", i));
            let mut config = config(auth);
            config.database = database.to_string();
            config.orm = orm.to_string();
            config.docker = docker.to_string();
            for feature in crate::catalog::FEATURES.iter().take(i % 6) {
                config.features.insert(feature.name);
            }
            if i % 2 == 1 {
                config.graphql_library = "graphql-go".to_string();
            }

            TemplateEngine::new(BundledTemplates)
                .generate(&config, &target)
                .await
                .unwrap_or_else(|e| panic!("{:?} failed: {}", config, e));
        }
    }

    #[tokio::test]
    async fn test_missing_conditional_template_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("acme");
        let engine = TemplateEngine::new(MapTemplates::minimal());

        let report = engine.generate(&config("OAuth"), &target).await.unwrap();
        assert_eq!(report.skipped, ["oauth.go.tera", "middleware.go.tera"]);
        assert_eq!(report.written.len(), FIXED_TEMPLATES.len());
        assert_eq!(
            std::fs::read_to_string(target.join("README.md")).unwrap(),
            "acme\n"
        );
    }

    #[tokio::test]
    async fn test_missing_fixed_template_is_fatal_and_staged_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("acme");
        let mut templates = MapTemplates::minimal();
        templates.0.remove("Makefile.tera");

        let err = TemplateEngine::new(templates)
            .generate(&config("None"), &target)
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::TemplateNotFound { ref id } if id == "Makefile.tera"));
        assert!(!target.exists());
        assert!(!staging_dir(&target).unwrap().exists());
    }

    #[tokio::test]
    async fn test_in_place_failure_leaves_partial_tree() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("acme");
        let mut templates = MapTemplates::minimal();
        templates.0.insert("Makefile.tera", "{% if %}");

        let err = TemplateEngine::new(templates)
            .with_policy(WritePolicy::InPlace)
            .generate(&config("None"), &target)
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::TemplateParse { ref id, .. } if id == "Makefile.tera"));
        // Files before the Makefile in write order are already on disk
        assert!(target.join("go.mod").is_file());
        assert!(target.join("docker-compose.yml").is_file());
        assert!(!target.join("README.md").exists());
    }

    #[tokio::test]
    async fn test_render_error_names_template() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("acme");
        let mut templates = MapTemplates::minimal();
        templates.0.insert("go.mod.tera", "{{ config.nope }}");

        let err = TemplateEngine::new(templates)
            .generate(&config("None"), &target)
            .await
            .unwrap_err();

        assert!(err.is_template());
        assert!(err.to_string().contains("go.mod.tera"));
    }

    #[tokio::test]
    async fn test_stale_staging_dir_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("acme");
        let staging = staging_dir(&target).unwrap();
        std::fs::create_dir_all(staging.join("junk")).unwrap();

        TemplateEngine::new(MapTemplates::minimal())
            .generate(&config("None"), &target)
            .await
            .unwrap();

        assert!(!target.join("junk").exists());
        assert!(!staging.exists());
    }

    #[test]
    fn test_staging_dir_is_sibling() {
        let staging = staging_dir(Path::new("/tmp/work/acme")).unwrap();
        assert_eq!(staging, PathBuf::from("/tmp/work/.acme.graphqlify-staging"));
    }
}
