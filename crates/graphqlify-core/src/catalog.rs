//! Selectable options for each wizard step
//!
//! The Database, Auth, Docker, Features and GraphQL library lists are fixed.
//! The ORM list is derived from the chosen database and is recomputed by the
//! wizard whenever the database changes.

use crate::wizard::Step;

/// A single selectable choice with the text shown under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub name: &'static str,
    pub description: &'static str,
}

impl Choice {
    const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}

pub const DATABASES: &[Choice] = &[
    Choice::new(
        "PostgreSQL",
        "A powerful, open source object-relational database system",
    ),
    Choice::new(
        "MongoDB",
        "A NoSQL document database with JSON-like documents",
    ),
    Choice::new(
        "MySQL",
        "The world's most popular open source relational database",
    ),
    Choice::new(
        "SQLite",
        "A lightweight disk-based database that doesn't require a server",
    ),
];

const SQL_ORMS: &[Choice] = &[
    Choice::new("GORM", "The most popular Go ORM with full-featured support"),
    Choice::new("Ent", "An entity framework from Facebook with code generation"),
    Choice::new(
        "SQLC",
        "Generate type-safe code from SQL, not an ORM but very efficient",
    ),
    Choice::new("Raw SQL", "Direct database access with no ORM abstraction"),
];

const MONGO_ORMS: &[Choice] = &[
    Choice::new("Official Go Driver", "The official MongoDB driver for Go"),
    Choice::new("mgm", "A MongoDB object-document-mapper for Go"),
    Choice::new(
        "Raw Driver",
        "Direct MongoDB driver access with no abstraction",
    ),
];

/// Fallback for databases the catalog does not know about
const DEFAULT_ORMS: &[Choice] = &[Choice::new(
    "GORM",
    "The most popular Go ORM with full-featured support",
)];

pub const AUTH_METHODS: &[Choice] = &[
    Choice::new("JWT", "JSON Web Tokens for stateless authentication"),
    Choice::new(
        "OAuth",
        "Delegated authorization framework for third-party access",
    ),
    Choice::new(
        "None",
        "No authentication, suitable for internal or public APIs",
    ),
];

pub const DOCKER_SETUPS: &[Choice] = &[
    Choice::new("None", "No Docker configuration"),
    Choice::new("Development only", "Docker setup for local development only"),
    Choice::new(
        "Full (development + production)",
        "Complete Docker configuration for both dev and production",
    ),
];

pub const FEATURES: &[Choice] = &[
    Choice::new(
        "WebSocket Subscriptions",
        "Real-time updates with GraphQL subscriptions",
    ),
    Choice::new("Redis Caching", "Performance improvement with Redis caching"),
    Choice::new(
        "Background Jobs",
        "Async task processing with background workers",
    ),
    Choice::new(
        "Metrics & Monitoring",
        "Built-in observability with Prometheus and OpenTelemetry",
    ),
    Choice::new(
        "File Upload Support",
        "Support for file uploads through GraphQL mutations",
    ),
];

pub const GRAPHQL_LIBRARIES: &[Choice] = &[
    Choice::new("gqlgen", "Schema-first GraphQL server generator"),
    Choice::new("graphql-go", "Code-first GraphQL implementation for Go"),
];

/// ORM choices for a database. Never empty; the first entry is the default.
pub fn orm_options(database: &str) -> &'static [Choice] {
    match database {
        "PostgreSQL" | "MySQL" | "SQLite" => SQL_ORMS,
        "MongoDB" => MONGO_ORMS,
        _ => DEFAULT_ORMS,
    }
}

/// The option lists a wizard session draws from
///
/// Constructed once and handed to the wizard by reference. Only the ORM list
/// depends on earlier answers, and it is computed on demand from the database.
#[derive(Debug, Clone)]
pub struct OptionCatalog {
    databases: &'static [Choice],
    auth: &'static [Choice],
    docker: &'static [Choice],
    features: &'static [Choice],
    graphql_libraries: &'static [Choice],
}

impl Default for OptionCatalog {
    fn default() -> Self {
        Self {
            databases: DATABASES,
            auth: AUTH_METHODS,
            docker: DOCKER_SETUPS,
            features: FEATURES,
            graphql_libraries: GRAPHQL_LIBRARIES,
        }
    }
}

impl OptionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed options for a step. ORM and Confirm have no static list.
    pub fn static_options(&self, step: Step) -> &'static [Choice] {
        match step {
            Step::Database => self.databases,
            Step::Auth => self.auth,
            Step::Docker => self.docker,
            Step::Features => self.features,
            Step::Orm | Step::Confirm => &[],
        }
    }

    pub fn orm_options(&self, database: &str) -> &'static [Choice] {
        orm_options(database)
    }

    pub fn graphql_libraries(&self) -> &'static [Choice] {
        self.graphql_libraries
    }

    /// Check whether `name` is offered at `step` (ORM is checked against `database`)
    pub fn offers(&self, step: Step, database: &str, name: &str) -> bool {
        let options = match step {
            Step::Orm => self.orm_options(database),
            other => self.static_options(other),
        };
        options.iter().any(|c| c.name == name)
    }
}
