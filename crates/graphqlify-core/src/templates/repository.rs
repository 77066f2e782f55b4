//! Sources of template bodies
//!
//! The engine only needs `read_template(id)`. The bundled catalog is compiled
//! into the binary; a directory on disk can stand in for it during template
//! development.

use super::manifest::TemplateManifest;
use crate::error::{ScaffoldError, ScaffoldResult};
use rust_embed::RustEmbed;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Read-only lookup of template bodies by id
pub trait TemplateRepository {
    /// Raw template body. Unknown ids fail with [`ScaffoldError::TemplateNotFound`].
    fn read_template(&self, id: &str) -> ScaffoldResult<Vec<u8>>;

    /// Where templates come from, for log output
    fn describe(&self) -> String;
}

impl<R: TemplateRepository + ?Sized> TemplateRepository for &R {
    fn read_template(&self, id: &str) -> ScaffoldResult<Vec<u8>> {
        (**self).read_template(id)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<R: TemplateRepository + ?Sized> TemplateRepository for Box<R> {
    fn read_template(&self, id: &str) -> ScaffoldResult<Vec<u8>> {
        (**self).read_template(id)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../templates/go-graphql/"]
#[prefix = ""]
struct BundledFiles;

/// Templates compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledTemplates;

impl BundledTemplates {
    /// Ids of every bundled template
    pub fn ids() -> Vec<String> {
        BundledFiles::iter().map(|f| f.to_string()).collect()
    }
}

impl TemplateRepository for BundledTemplates {
    fn read_template(&self, id: &str) -> ScaffoldResult<Vec<u8>> {
        BundledFiles::get(id)
            .map(|file| file.data.into_owned())
            .ok_or_else(|| ScaffoldError::TemplateNotFound { id: id.to_string() })
    }

    fn describe(&self) -> String {
        "bundled templates".to_string()
    }
}

/// Manifest file name inside a local template directory
pub const MANIFEST_FILE: &str = "template.yaml";

/// Templates read from a directory on disk
#[derive(Debug, Clone)]
pub struct LocalTemplates {
    root: PathBuf,
    index: BTreeMap<String, PathBuf>,
    manifest: Option<TemplateManifest>,
}

impl LocalTemplates {
    /// Index every file under `root`. Ids are `/`-separated relative paths.
    pub fn open(root: &Path) -> ScaffoldResult<Self> {
        if !root.is_dir() {
            return Err(ScaffoldError::Validation {
                message: format!("Template directory not found: {}", root.display()),
            });
        }

        let mut index = BTreeMap::new();
        for entry in WalkDir::new(root).follow_links(true) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                ScaffoldError::fs(path, e.into())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            let id = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            if id == MANIFEST_FILE {
                continue;
            }
            index.insert(id, entry.path().to_path_buf());
        }

        let manifest_path = root.join(MANIFEST_FILE);
        let manifest = if manifest_path.is_file() {
            Some(TemplateManifest::from_file(&manifest_path)?)
        } else {
            None
        };

        debug!(
            "Indexed {} templates in {}",
            index.len(),
            root.display()
        );

        Ok(Self {
            root: root.to_path_buf(),
            index,
            manifest,
        })
    }

    pub fn manifest(&self) -> Option<&TemplateManifest> {
        self.manifest.as_ref()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }
}

impl TemplateRepository for LocalTemplates {
    fn read_template(&self, id: &str) -> ScaffoldResult<Vec<u8>> {
        let path = self
            .index
            .get(id)
            .ok_or_else(|| ScaffoldError::TemplateNotFound { id: id.to_string() })?;
        std::fs::read(path).map_err(|source| ScaffoldError::fs(path, source))
    }

    fn describe(&self) -> String {
        format!("local templates from {}", self.root.display())
    }
}
