//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`ProjectLayout`]
//! built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables `DOMAINSMITH__<SECTION>__<KEY>`
//! 3. Config file: `--config FILE`, else `<root>/domainsmith.toml` over the
//!    per-user file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use domainsmith_core::domain::{
    ProjectLayout,
    entities::layout::{
        DEFAULT_APP_DIR, DEFAULT_DATABASE_DIR, DEFAULT_NAMESPACE_ROOT, DEFAULT_PROVIDER_FILE,
    },
};

/// Name of the project-level configuration file.
pub const PROJECT_CONFIG_FILE: &str = "domainsmith.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where generated files go, relative to the project root.
    pub paths: PathsConfig,
    /// PHP namespace settings.
    pub namespace: NamespaceConfig,
    /// Stub override settings.
    pub stubs: StubsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub app: PathBuf,
    pub database: PathBuf,
    pub provider: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            app: PathBuf::from(DEFAULT_APP_DIR),
            database: PathBuf::from(DEFAULT_DATABASE_DIR),
            provider: PathBuf::from(DEFAULT_PROVIDER_FILE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceConfig {
    pub root: String,
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_NAMESPACE_ROOT.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StubsConfig {
    /// Override directory; `None` searches `$DOMAINSMITH_STUBS_DIR` and
    /// `stubs/domainsmith`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    pub builtin_fallback: bool,
}

impl Default for StubsConfig {
    fn default() -> Self {
        Self {
            directory: None,
            builtin_fallback: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration for the project at `root`.
    ///
    /// An explicit `config_file` must exist; the implicit project and user
    /// files are optional.
    pub fn load(config_file: Option<&Path>, root: &Path) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode default configuration")?;
        let mut builder = Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "Using explicit config file");
                builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
            }
            None => {
                if let Some(user) = Self::user_config_path() {
                    builder = builder
                        .add_source(File::from(user).format(FileFormat::Toml).required(false));
                }
                builder = builder.add_source(
                    File::from(root.join(PROJECT_CONFIG_FILE))
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        builder
            .add_source(
                Environment::with_prefix("DOMAINSMITH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// The project layout rooted at `root`.
    pub fn layout(&self, root: &Path) -> ProjectLayout {
        ProjectLayout::new(root)
            .with_app_dir(&self.paths.app)
            .with_database_dir(&self.paths.database)
            .with_provider_file(&self.paths.provider)
            .with_namespace_root(&self.namespace.root)
    }

    /// Value of a dotted key, as printed by `config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "paths.app" => self.paths.app.display().to_string(),
            "paths.database" => self.paths.database.display().to_string(),
            "paths.provider" => self.paths.provider.display().to_string(),
            "namespace.root" => self.namespace.root.clone(),
            "stubs.directory" => self
                .stubs
                .directory
                .as_ref()
                .map(|d| d.display().to_string())
                .unwrap_or_default(),
            "stubs.builtin_fallback" => self.stubs.builtin_fallback.to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Per-user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "domainsmith", "domainsmith")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// The file the active configuration most likely came from.
    pub fn active_path(config_file: Option<&Path>, root: &Path) -> PathBuf {
        if let Some(path) = config_file {
            return path.to_path_buf();
        }
        let project = root.join(PROJECT_CONFIG_FILE);
        if project.is_file() {
            return project;
        }
        Self::user_config_path().unwrap_or(project)
    }
}
