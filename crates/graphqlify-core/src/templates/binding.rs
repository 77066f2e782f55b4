//! Which templates apply to a project and where they land

use crate::config::ProjectConfig;

/// Templates rendered for every project: (template id, destination)
pub const FIXED_TEMPLATES: &[(&str, &str)] = &[
    ("go.mod.tera", "go.mod"),
    ("main.go.tera", "cmd/server/main.go"),
    ("config.go.tera", "config/config.go"),
    ("config.yaml.tera", "config/config.yaml"),
    ("db_connection.go.tera", "internal/models/db.go"),
    ("user_model.go.tera", "internal/models/user.go"),
    ("user_service.go.tera", "internal/services/user_service.go"),
    ("schema.graphqls.tera", "graph/schema/schema.graphqls"),
    ("Dockerfile.tera", "Dockerfile"),
    ("docker-compose.yml.tera", "docker-compose.yml"),
    ("Makefile.tera", "Makefile"),
    ("README.md.tera", "README.md"),
    ("gqlgen.yml.tera", "gqlgen.yml"),
    ("gitignore.tera", ".gitignore"),
];

/// Templates gated on the authentication method: (template id, destination, auth values)
pub const CONDITIONAL_TEMPLATES: &[(&str, &str, &[&str])] = &[
    ("jwt.go.tera", "internal/auth/jwt.go", &["JWT"]),
    ("oauth.go.tera", "internal/auth/oauth.go", &["OAuth"]),
    (
        "middleware.go.tera",
        "internal/auth/middleware.go",
        &["JWT", "OAuth"],
    ),
];

/// Directories created in every project, even when no template writes into them
pub const SKELETON_DIRS: &[&str] = &[
    "cmd/server",
    "internal/auth",
    "internal/models",
    "internal/services",
    "pkg/utils",
    "graph/schema",
    "graph/resolvers",
    "db/migrations",
    "config",
];

/// A template paired with its destination and whether it applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateBinding {
    pub template_id: &'static str,
    /// Relative to the project root, `/`-separated
    pub destination: &'static str,
    pub included: bool,
    /// Conditional templates may be absent from a repository
    pub conditional: bool,
}

/// Every binding for `config`, fixed ones first, in write order
pub fn compute_bindings(config: &ProjectConfig) -> Vec<TemplateBinding> {
    let fixed = FIXED_TEMPLATES
        .iter()
        .map(|&(template_id, destination)| TemplateBinding {
            template_id,
            destination,
            included: true,
            conditional: false,
        });

    let conditional = CONDITIONAL_TEMPLATES
        .iter()
        .map(|&(template_id, destination, auth)| TemplateBinding {
            template_id,
            destination,
            included: auth.contains(&config.auth.as_str()),
            conditional: true,
        });

    fixed.chain(conditional).collect()
}
