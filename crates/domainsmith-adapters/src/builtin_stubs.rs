//! Built-in stub catalogue and stub-directory discovery.
//!
//! Every [`StubId`] has an embedded copy compiled into the binary, so the
//! tool works in a project that never published its own stubs. A project
//! may override any of them by placing a file with the same relative path
//! in a stub directory.
//!
//! # Search order for the override directory
//!
//! 1. The directory configured with `stubs.directory`
//! 2. `$DOMAINSMITH_STUBS_DIR`
//! 3. `<project root>/stubs/domainsmith`
//!
//! The first candidate that is an existing directory wins. Relative
//! candidates are resolved against the project root.

use std::path::{Path, PathBuf};

use domainsmith_core::domain::StubId;
use tracing::{debug, info};

/// Environment variable naming a stub override directory.
pub const STUBS_DIR_ENV: &str = "DOMAINSMITH_STUBS_DIR";

/// Conventional override location inside a project.
pub const DEFAULT_STUBS_SUBDIR: &str = "stubs/domainsmith";

/// The embedded text of `stub`.
pub fn builtin_stub(stub: StubId) -> &'static str {
    match stub {
        StubId::Entity => include_str!("../stubs/domain/Entity.stub"),
        StubId::RepositoryInterface => include_str!("../stubs/domain/RepositoryInterface.stub"),
        StubId::RepositoryInterfaceSoft => {
            include_str!("../stubs/domain/RepositoryInterface.soft.stub")
        }
        StubId::DomainService => include_str!("../stubs/domain/DomainService.stub"),
        StubId::DomainServiceSoft => include_str!("../stubs/domain/DomainService.soft.stub"),
        StubId::DataTransferObject => include_str!("../stubs/domain/DataTransferObject.stub"),
        StubId::ValueObject => include_str!("../stubs/domain/ValueObject.stub"),
        StubId::Observer => include_str!("../stubs/domain/Observer.stub"),
        StubId::ObserverSoft => include_str!("../stubs/domain/Observer.soft.stub"),
        StubId::Policy => include_str!("../stubs/domain/Policy.stub"),
        StubId::PolicySoft => include_str!("../stubs/domain/Policy.soft.stub"),
        StubId::BaseModel => include_str!("../stubs/model/BaseModel.stub"),
        StubId::Model => include_str!("../stubs/model/Model.stub"),
        StubId::ModelSoft => include_str!("../stubs/model/Model.soft.stub"),
        StubId::Factory => include_str!("../stubs/model/Factory.stub"),
        StubId::Migration => include_str!("../stubs/model/Migration.stub"),
        StubId::MigrationSoft => include_str!("../stubs/model/Migration.soft.stub"),
        StubId::Repository => include_str!("../stubs/infrastructure/Repository.stub"),
        StubId::RepositorySoft => include_str!("../stubs/infrastructure/Repository.soft.stub"),
        StubId::ActionCreate => include_str!("../stubs/actions/Create.stub"),
        StubId::ActionUpdate => include_str!("../stubs/actions/Update.stub"),
        StubId::ActionDelete => include_str!("../stubs/actions/Delete.stub"),
        StubId::ActionIndex => include_str!("../stubs/actions/Index.stub"),
        StubId::ActionShow => include_str!("../stubs/actions/Show.stub"),
        StubId::ActionRestore => include_str!("../stubs/actions/Restore.stub"),
        StubId::ActionForceDelete => include_str!("../stubs/actions/ForceDelete.stub"),
        StubId::RepositoryServiceProvider => {
            include_str!("../stubs/provider/RepositoryServiceProvider.stub")
        }
    }
}

/// Candidate override directories in search order.
pub fn stub_directory_candidates(configured: Option<&Path>, project_root: &Path) -> Vec<PathBuf> {
    candidates_from(
        configured,
        std::env::var(STUBS_DIR_ENV).ok(),
        project_root,
    )
}

fn candidates_from(
    configured: Option<&Path>,
    env_dir: Option<String>,
    project_root: &Path,
) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);

    if let Some(dir) = configured {
        let p = project_root.join(dir);
        debug!(path = %p.display(), "candidate from configuration");
        paths.push(p);
    }

    if let Some(dir) = env_dir.filter(|d| !d.trim().is_empty()) {
        let p = project_root.join(dir);
        debug!(path = %p.display(), "candidate from ${STUBS_DIR_ENV}");
        paths.push(p);
    }

    paths.push(project_root.join(DEFAULT_STUBS_SUBDIR));
    paths
}

/// The first candidate that exists as a directory, if any.
pub fn resolve_stub_directory(configured: Option<&Path>, project_root: &Path) -> Option<PathBuf> {
    let found = stub_directory_candidates(configured, project_root)
        .into_iter()
        .find(|p| p.is_dir());

    match &found {
        Some(dir) => info!(path = %dir.display(), "Using stub override directory"),
        None => debug!("No stub override directory, using built-in stubs"),
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use domainsmith_core::domain::PlaceholderMap;

    #[test]
    fn every_stub_is_embedded() {
        for stub in StubId::ALL {
            assert!(
                builtin_stub(stub).starts_with("<?php"),
                "{stub} should be a PHP file"
            );
        }
    }

    #[test]
    fn only_soft_variants_mention_soft_deletes() {
        assert!(builtin_stub(StubId::ModelSoft).contains("use SoftDeletes;"));
        assert!(!builtin_stub(StubId::Model).contains("SoftDeletes"));
        assert!(builtin_stub(StubId::MigrationSoft).contains("$table->softDeletes();"));
        assert!(!builtin_stub(StubId::Migration).contains("softDeletes"));
    }

    #[test]
    fn value_object_stub_only_uses_value_object_tokens() {
        let map = PlaceholderMap::for_value_object("MoneyValueObject", "App\\ValueObjects", "App");
        let rendered = map.render(builtin_stub(StubId::ValueObject));
        assert!(PlaceholderMap::unresolved_tokens(&rendered).is_empty());
    }

    #[test]
    fn provider_stub_has_an_empty_register_method() {
        let rendered = PlaceholderMap::for_root("Acme").render(builtin_stub(
            StubId::RepositoryServiceProvider,
        ));
        assert!(rendered.contains("namespace Acme\\Providers;"));
        assert!(rendered.contains("public function register(): void"));
    }

    #[test]
    fn candidates_keep_search_order() {
        let root = Path::new("/project");
        let paths = candidates_from(
            Some(Path::new("custom")),
            Some("/shared/stubs".into()),
            root,
        );
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/project/custom"),
                PathBuf::from("/shared/stubs"),
                PathBuf::from("/project/stubs/domainsmith"),
            ]
        );
    }

    #[test]
    fn blank_env_value_is_ignored() {
        let paths = candidates_from(None, Some("  ".into()), Path::new("/p"));
        assert_eq!(paths, vec![PathBuf::from("/p/stubs/domainsmith")]);
    }

    #[test]
    fn resolve_picks_existing_project_directory() {
        let temp = tempfile::tempdir().unwrap();
        let custom = temp.path().join("my-stubs");
        std::fs::create_dir_all(&custom).unwrap();

        let found = resolve_stub_directory(Some(Path::new("my-stubs")), temp.path());
        assert_eq!(found, Some(custom));
    }
}
