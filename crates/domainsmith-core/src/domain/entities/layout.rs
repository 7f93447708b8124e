//! Where generated artifacts land on disk, and which namespace they live in.
//!
//! ```text
//! <root>/
//! ├── <app>/
//! │   ├── Domains/<Dir>[/<SubDir>]/{Entities,Repositories,DomainServices,DataTransferObjects}
//! │   ├── Actions/<Dir>[/<SubDir>]/
//! │   ├── Models/  Observers/  Policies/
//! │   ├── Infrastructure/Persistence/Repositories/
//! │   ├── ValueObjects/
//! │   └── Providers/RepositoryServiceProvider.php
//! └── <database>/{factories,migrations}/
//! ```
//!
//! All paths are pure joins; nothing here touches the filesystem.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::names::DerivedNames;

pub const DEFAULT_APP_DIR: &str = "app";
pub const DEFAULT_DATABASE_DIR: &str = "database";
pub const DEFAULT_PROVIDER_FILE: &str = "app/Providers/RepositoryServiceProvider.php";
pub const DEFAULT_NAMESPACE_ROOT: &str = "App";

/// Subfolders created inside every domain directory.
pub const DOMAIN_SUBDIRECTORIES: [&str; 4] = [
    "Entities",
    "Repositories",
    "DomainServices",
    "DataTransferObjects",
];

/// Project geometry: root directory, configured folders, and namespace root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLayout {
    root: PathBuf,
    app_dir: PathBuf,
    database_dir: PathBuf,
    provider_file: PathBuf,
    namespace_root: String,
}

impl ProjectLayout {
    /// Layout with the conventional folder names under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            app_dir: PathBuf::from(DEFAULT_APP_DIR),
            database_dir: PathBuf::from(DEFAULT_DATABASE_DIR),
            provider_file: PathBuf::from(DEFAULT_PROVIDER_FILE),
            namespace_root: DEFAULT_NAMESPACE_ROOT.to_string(),
        }
    }

    /// Application folder, relative to the root (absolute paths are kept as is).
    pub fn with_app_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.app_dir = dir.into();
        self
    }

    pub fn with_database_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.database_dir = dir.into();
        self
    }

    pub fn with_provider_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.provider_file = file.into();
        self
    }

    pub fn with_namespace_root(mut self, namespace: impl Into<String>) -> Self {
        let namespace: String = namespace.into();
        self.namespace_root = namespace.trim_matches('\\').to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn namespace_root(&self) -> &str {
        &self.namespace_root
    }

    pub fn app_dir(&self) -> PathBuf {
        self.root.join(&self.app_dir)
    }

    pub fn database_dir(&self) -> PathBuf {
        self.root.join(&self.database_dir)
    }

    // ── Domain tree ──────────────────────────────────────────────────────────

    pub fn domains_dir(&self) -> PathBuf {
        self.app_dir().join("Domains")
    }

    /// `Domains/<Dir>` or, for a subdomain, `Domains/<ParentDir>/<Dir>`.
    pub fn domain_dir(&self, names: &DerivedNames, parent: Option<&DerivedNames>) -> PathBuf {
        match parent {
            Some(parent) => self
                .domains_dir()
                .join(parent.directory())
                .join(names.directory()),
            None => self.domains_dir().join(names.directory()),
        }
    }

    pub fn domain_subdirectories(&self, domain_dir: &Path) -> Vec<PathBuf> {
        DOMAIN_SUBDIRECTORIES
            .iter()
            .map(|sub| domain_dir.join(sub))
            .collect()
    }

    pub fn actions_dir(&self, names: &DerivedNames, parent: Option<&DerivedNames>) -> PathBuf {
        let actions = self.app_dir().join("Actions");
        match parent {
            Some(parent) => actions.join(parent.directory()).join(names.directory()),
            None => actions.join(names.directory()),
        }
    }

    // ── Application-root folders ─────────────────────────────────────────────

    pub fn models_dir(&self) -> PathBuf {
        self.app_dir().join("Models")
    }

    pub fn observers_dir(&self) -> PathBuf {
        self.app_dir().join("Observers")
    }

    pub fn policies_dir(&self) -> PathBuf {
        self.app_dir().join("Policies")
    }

    pub fn infrastructure_repositories_dir(&self) -> PathBuf {
        self.app_dir()
            .join("Infrastructure")
            .join("Persistence")
            .join("Repositories")
    }

    pub fn provider_path(&self) -> PathBuf {
        self.root.join(&self.provider_file)
    }

    // ── Database folders ─────────────────────────────────────────────────────

    pub fn factories_dir(&self) -> PathBuf {
        self.database_dir().join("factories")
    }

    pub fn migrations_dir(&self) -> PathBuf {
        self.database_dir().join("migrations")
    }

    /// `<timestamp>_create_<table>_table.php`
    pub fn migration_file_name(timestamp: &str, table: &str) -> String {
        format!("{timestamp}_{}", Self::migration_suffix(table))
    }

    /// The timestamp-independent tail of a migration file name.
    pub fn migration_suffix(table: &str) -> String {
        format!("create_{table}_table.php")
    }

    // ── Value objects ────────────────────────────────────────────────────────

    /// Target directory for a value object.
    ///
    /// `subdomain` is ignored unless `domain` is set; callers reject that
    /// combination before getting here.
    pub fn value_objects_dir(&self, domain: Option<&str>, subdomain: Option<&str>) -> PathBuf {
        match (domain, subdomain) {
            (Some(domain), Some(sub)) => {
                self.domains_dir().join(domain).join(sub).join("ValueObjects")
            }
            (Some(domain), None) => self.domains_dir().join(domain).join("ValueObjects"),
            (None, _) => self.app_dir().join("ValueObjects"),
        }
    }

    pub fn value_objects_namespace(&self, domain: Option<&str>, subdomain: Option<&str>) -> String {
        let root = &self.namespace_root;
        match (domain, subdomain) {
            (Some(domain), Some(sub)) => format!("{root}\\Domains\\{domain}\\{sub}\\ValueObjects"),
            (Some(domain), None) => format!("{root}\\Domains\\{domain}\\ValueObjects"),
            (None, _) => format!("{root}\\ValueObjects"),
        }
    }
}
