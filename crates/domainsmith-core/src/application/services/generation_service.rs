//! Generation Service - main application orchestrator.
//!
//! Every request runs in two phases:
//!
//! 1. **Plan**: validate input, derive names, check preconditions and build a
//!    `GenerationPlan`. Planning may read the filesystem but never writes.
//! 2. **Execute**: walk the plan, rendering and materializing each artifact
//!    and patching the provider. Per-step failures are recorded in the
//!    `GenerationReport` and the run keeps going.
//!
//! A dry run stops after phase 1.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::materializer::FileMaterializer;
use super::provider_patcher::ProviderPatcher;
use super::report::{
    ArtifactOutcome, ArtifactReport, BindingReport, DirectoryReport, GenerationReport,
};
use super::stub_renderer::StubRenderer;
use crate::{
    application::{
        ApplicationError,
        ports::{Clock, Console, Filesystem, ProviderScaffolder, StubStore},
    },
    domain::{
        ActionKind, ArtifactKind, ArtifactSpec, BindingRecord, DerivedNames, DomainError,
        DomainValidator as validator, GenerationFlags, GenerationPlan, PlaceholderMap, PlanStep,
        ProjectLayout, StubId, WritePolicy, studly, value_object_class,
    },
    error::{SmithError, SmithResult},
};

/// Generate a top-level domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRequest {
    pub name: String,
    pub flags: GenerationFlags,
}

/// Generate a subdomain inside an existing domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdomainRequest {
    pub parent: String,
    pub name: String,
    pub flags: GenerationFlags,
}

/// Generate a single value object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueObjectRequest {
    pub name: String,
    pub domain: Option<String>,
    pub subdomain: Option<String>,
    pub force: bool,
}

/// Main generation service.
///
/// Owns its adapters; components borrow them per run.
pub struct GenerationService {
    layout: ProjectLayout,
    filesystem: Box<dyn Filesystem>,
    stubs: Box<dyn StubStore>,
    console: Box<dyn Console>,
    scaffolder: Box<dyn ProviderScaffolder>,
    clock: Box<dyn Clock>,
}

impl GenerationService {
    /// Create a new generation service with the given adapters.
    pub fn new(
        layout: ProjectLayout,
        filesystem: Box<dyn Filesystem>,
        stubs: Box<dyn StubStore>,
        console: Box<dyn Console>,
        scaffolder: Box<dyn ProviderScaffolder>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            layout,
            filesystem,
            stubs,
            console,
            scaffolder,
            clock,
        }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    // -------------------------------------------------------------------------
    // Domain
    // -------------------------------------------------------------------------

    #[instrument(skip_all, fields(domain = %request.name))]
    pub fn plan_domain(&self, request: &DomainRequest) -> SmithResult<GenerationPlan> {
        let raw = validator::validate_name("domain name", &request.name)?;
        let names = DerivedNames::derive(raw);

        Ok(self.plan_unit(
            &names,
            None,
            request.flags,
            format!("Creating domain: {}", names.directory()),
        ))
    }

    pub fn generate_domain(&self, request: &DomainRequest) -> SmithResult<GenerationReport> {
        let plan = self.plan_domain(request)?;
        Ok(self.execute(&plan))
    }

    // -------------------------------------------------------------------------
    // Subdomain
    // -------------------------------------------------------------------------

    /// # Errors
    ///
    /// - `ParentDomainMissing` when `Domains/<Parent>` is not a directory
    /// - `SubdomainExists` when the subdomain directory exists and `force` is off
    #[instrument(skip_all, fields(parent = %request.parent, subdomain = %request.name))]
    pub fn plan_subdomain(&self, request: &SubdomainRequest) -> SmithResult<GenerationPlan> {
        let parent_raw = validator::validate_name("parent domain", &request.parent)?;
        let raw = validator::validate_name("subdomain name", &request.name)?;
        let parent = DerivedNames::derive(parent_raw);
        let names = DerivedNames::derive(raw);

        let parent_dir = self.layout.domains_dir().join(parent.directory());
        if !self.filesystem.is_dir(&parent_dir) {
            warn!(path = %parent_dir.display(), "Parent domain missing");
            return Err(ApplicationError::ParentDomainMissing {
                parent: parent.directory().to_string(),
                path: parent_dir,
            }
            .into());
        }

        let dir = self.layout.domain_dir(&names, Some(&parent));
        if self.filesystem.exists(&dir) && !request.flags.force {
            return Err(ApplicationError::SubdomainExists {
                name: names.directory().to_string(),
                path: dir,
            }
            .into());
        }

        Ok(self.plan_unit(
            &names,
            Some(&parent),
            request.flags,
            format!(
                "Creating subdomain: {} under parent domain: {}",
                names.directory(),
                parent.directory()
            ),
        ))
    }

    pub fn generate_subdomain(&self, request: &SubdomainRequest) -> SmithResult<GenerationReport> {
        let plan = self.plan_subdomain(request)?;
        Ok(self.execute(&plan))
    }

    // -------------------------------------------------------------------------
    // Value object
    // -------------------------------------------------------------------------

    #[instrument(skip_all, fields(value_object = %request.name))]
    pub fn plan_value_object(&self, request: &ValueObjectRequest) -> SmithResult<GenerationPlan> {
        let raw = validator::validate_name("value object name", &request.name)?;

        if request.subdomain.is_some() && request.domain.is_none() {
            return Err(DomainError::MissingRequiredOption {
                option: "subdomain",
                requires: "domain",
            }
            .into());
        }

        let domain = request
            .domain
            .as_deref()
            .map(|d| validator::validate_name("domain", d).map(studly))
            .transpose()?;
        let subdomain = request
            .subdomain
            .as_deref()
            .map(|s| validator::validate_name("subdomain", s).map(studly))
            .transpose()?;

        let class = value_object_class(raw);
        let directory = self
            .layout
            .value_objects_dir(domain.as_deref(), subdomain.as_deref());
        let namespace = self
            .layout
            .value_objects_namespace(domain.as_deref(), subdomain.as_deref());
        let map = PlaceholderMap::for_value_object(&class, &namespace, self.layout.namespace_root());

        let mut plan = GenerationPlan::new(format!("Creating value object: {class}"), request.force);
        plan.ensure_directory(&directory);
        plan.materialize(ArtifactSpec::new(
            ArtifactKind::ValueObject,
            ArtifactKind::ValueObject.stub(false),
            directory.join(format!("{class}.php")),
            Arc::new(map),
        ));
        Ok(plan)
    }

    /// # Errors
    ///
    /// `StubUnavailable` when the value-object stub is missing; checked
    /// before anything is written.
    pub fn generate_value_object(
        &self,
        request: &ValueObjectRequest,
    ) -> SmithResult<GenerationReport> {
        let plan = self.plan_value_object(request)?;

        let stub = ArtifactKind::ValueObject.stub(false);
        match self.stubs.load(stub) {
            Ok(_) => {}
            Err(SmithError::Application(ApplicationError::StubNotFound { .. })) => {
                return Err(ApplicationError::StubUnavailable { stub }.into());
            }
            Err(e) => return Err(e),
        }

        Ok(self.execute(&plan))
    }

    // -------------------------------------------------------------------------
    // Execution
    // -------------------------------------------------------------------------

    /// Run every step of `plan`, recording one outcome per step.
    #[instrument(skip_all, fields(plan = %plan.title(), steps = plan.len()))]
    pub fn execute(&self, plan: &GenerationPlan) -> GenerationReport {
        let materializer = FileMaterializer::new(self.filesystem.as_ref(), self.console.as_ref());
        let renderer = StubRenderer::new(self.stubs.as_ref());
        let patcher = ProviderPatcher::new(
            self.filesystem.as_ref(),
            self.scaffolder.as_ref(),
            self.console.as_ref(),
        );

        self.console.info(plan.title());
        let mut report = GenerationReport::new(plan.title());

        for step in plan.steps() {
            match step {
                PlanStep::EnsureDirectory(path) => report.directories.push(DirectoryReport {
                    path: path.clone(),
                    outcome: materializer.ensure_directory(path),
                }),
                PlanStep::Materialize(target) => {
                    let outcome = match renderer.render_stub(target.stub, &target.placeholders) {
                        Ok(text) => match target.policy {
                            WritePolicy::Standard => {
                                materializer.materialize(&target.destination, &text, plan.force())
                            }
                            WritePolicy::OnlyIfAbsent => {
                                materializer.create_if_absent(&target.destination, &text)
                            }
                        },
                        Err(e) => self.stub_failure(target, e),
                    };
                    report.artifacts.push(ArtifactReport {
                        kind: target.kind,
                        stub: target.stub,
                        path: target.destination.clone(),
                        outcome,
                    });
                }
                PlanStep::Bind { provider, record } => report.bindings.push(BindingReport {
                    provider: provider.clone(),
                    signature: record.signature(),
                    outcome: patcher.ensure_binding(provider, record),
                }),
            }
        }

        info!(summary = %report.summary(), "Generation finished");
        report
    }

    fn stub_failure(&self, target: &ArtifactSpec, error: SmithError) -> ArtifactOutcome {
        warn!(stub = %target.stub, path = %target.destination.display(), error = %error, "Artifact not generated");
        match error {
            SmithError::Application(ApplicationError::StubNotFound { stub, location }) => {
                self.console.warn(&format!(
                    "Stub file not found: {} (in {location})",
                    stub.relative_path()
                ));
                ArtifactOutcome::StubMissing
            }
            other => {
                self.console.warn(&format!(
                    "Could not render {}: {other}",
                    target.destination.display()
                ));
                ArtifactOutcome::Failed {
                    reason: other.to_string(),
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Plan shared by domains and subdomains.
    fn plan_unit(
        &self,
        names: &DerivedNames,
        parent: Option<&DerivedNames>,
        flags: GenerationFlags,
        title: String,
    ) -> GenerationPlan {
        let layout = &self.layout;
        let root = layout.namespace_root();
        let map = Arc::new(PlaceholderMap::for_domain(names, parent, root));
        let soft = flags.soft_deletes;
        let class = names.class();

        let domain_dir = layout.domain_dir(names, parent);
        let actions_dir = layout.actions_dir(names, parent);

        let mut plan = GenerationPlan::new(title, flags.force);

        // Directories
        plan.ensure_directory(&domain_dir);
        for sub in layout.domain_subdirectories(&domain_dir) {
            plan.ensure_directory(sub);
        }
        plan.ensure_directory(layout.models_dir());
        plan.ensure_directory(layout.observers_dir());
        plan.ensure_directory(layout.policies_dir());
        plan.ensure_directory(layout.infrastructure_repositories_dir());
        plan.ensure_directory(&actions_dir);

        // Domain core
        let artifact = |kind: ArtifactKind, destination: PathBuf| {
            ArtifactSpec::new(kind, kind.stub(soft), destination, Arc::clone(&map))
        };
        plan.materialize(artifact(
            ArtifactKind::Entity,
            domain_dir.join("Entities").join(format!("{class}.php")),
        ));
        plan.materialize(artifact(
            ArtifactKind::RepositoryInterface,
            domain_dir
                .join("Repositories")
                .join(format!("{class}RepositoryInterface.php")),
        ));
        plan.materialize(artifact(
            ArtifactKind::DomainService,
            domain_dir
                .join("DomainServices")
                .join(format!("{class}Service.php")),
        ));
        plan.materialize(artifact(
            ArtifactKind::DataTransferObject,
            domain_dir
                .join("DataTransferObjects")
                .join(format!("{class}Data.php")),
        ));

        // Models and friends
        let base_model = layout.models_dir().join("BaseModel.php");
        if !self.filesystem.exists(&base_model) {
            plan.materialize(
                ArtifactSpec::new(
                    ArtifactKind::BaseModel,
                    StubId::BaseModel,
                    base_model,
                    Arc::new(PlaceholderMap::for_root(root)),
                )
                .only_if_absent(),
            );
        }
        plan.materialize(artifact(
            ArtifactKind::Model,
            layout.models_dir().join(format!("{class}.php")),
        ));
        plan.materialize(artifact(
            ArtifactKind::Factory,
            layout.factories_dir().join(format!("{class}Factory.php")),
        ));
        plan.materialize(artifact(
            ArtifactKind::Observer,
            layout.observers_dir().join(format!("{class}Observer.php")),
        ));
        plan.materialize(artifact(
            ArtifactKind::Policy,
            layout.policies_dir().join(format!("{class}Policy.php")),
        ));
        plan.materialize(artifact(
            ArtifactKind::Repository,
            layout
                .infrastructure_repositories_dir()
                .join(format!("{class}Repository.php")),
        ));
        if flags.migration {
            plan.materialize(artifact(
                ArtifactKind::Migration,
                self.migration_path(names.table()),
            ));
        }

        // Registration
        plan.bind(
            layout.provider_path(),
            BindingRecord::repository(
                &PlaceholderMap::domain_namespace(names, parent, root),
                root,
                class,
            ),
        );

        // Actions
        for action in ActionKind::for_flags(soft) {
            plan.materialize(artifact(
                ArtifactKind::Action(*action),
                actions_dir.join(format!("{}.php", action.class_name())),
            ));
        }

        plan
    }

    /// Reuse an existing `*_create_<table>_table.php`, else a fresh timestamped name.
    fn migration_path(&self, table: &str) -> PathBuf {
        let dir = self.layout.migrations_dir();
        let suffix = format!("_{}", ProjectLayout::migration_suffix(table));

        if self.filesystem.is_dir(&dir) {
            match self.filesystem.list_dir(&dir) {
                Ok(entries) => {
                    let existing = entries.into_iter().find(|p| {
                        p.file_name()
                            .and_then(|n| n.to_str())
                            .is_some_and(|n| n.ends_with(&suffix))
                    });
                    if let Some(path) = existing {
                        info!(path = %path.display(), "Reusing existing migration");
                        return path;
                    }
                }
                Err(e) => warn!(error = %e, "Could not list migrations"),
            }
        }

        dir.join(ProjectLayout::migration_file_name(
            &self.clock.migration_timestamp(),
            table,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        MockClock, MockConsole, MockFilesystem, MockProviderScaffolder, MockStubStore,
    };
    use std::path::Path;

    fn clock() -> MockClock {
        let mut clock = MockClock::new();
        clock
            .expect_migration_timestamp()
            .return_const("2026_10_19_120000".to_string());
        clock
    }

    /// Filesystem where nothing exists and nothing may be written.
    fn empty_readonly_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_is_dir().return_const(false);
        fs.expect_write_file().never();
        fs.expect_create_dir_all().never();
        fs
    }

    fn service(fs: MockFilesystem, stubs: MockStubStore) -> GenerationService {
        GenerationService::new(
            ProjectLayout::new("/p"),
            Box::new(fs),
            Box::new(stubs),
            Box::new(MockConsole::new()),
            Box::new(MockProviderScaffolder::new()),
            Box::new(clock()),
        )
    }

    fn destinations(plan: &GenerationPlan) -> Vec<String> {
        plan.destinations()
            .map(|p| p.display().to_string())
            .collect()
    }

    #[test]
    fn domain_plan_has_fixed_artifact_order() {
        let svc = service(empty_readonly_fs(), MockStubStore::new());
        let plan = svc
            .plan_domain(&DomainRequest {
                name: "Users".into(),
                flags: GenerationFlags::default(),
            })
            .unwrap();

        assert_eq!(
            destinations(&plan),
            vec![
                "/p/app/Domains/Users/Entities/User.php",
                "/p/app/Domains/Users/Repositories/UserRepositoryInterface.php",
                "/p/app/Domains/Users/DomainServices/UserService.php",
                "/p/app/Domains/Users/DataTransferObjects/UserData.php",
                "/p/app/Models/BaseModel.php",
                "/p/app/Models/User.php",
                "/p/database/factories/UserFactory.php",
                "/p/app/Observers/UserObserver.php",
                "/p/app/Policies/UserPolicy.php",
                "/p/app/Infrastructure/Persistence/Repositories/UserRepository.php",
                "/p/app/Actions/Users/Create.php",
                "/p/app/Actions/Users/Update.php",
                "/p/app/Actions/Users/Delete.php",
                "/p/app/Actions/Users/Index.php",
                "/p/app/Actions/Users/Show.php",
            ]
        );
    }

    #[test]
    fn binding_follows_repository_and_precedes_actions() {
        let svc = service(empty_readonly_fs(), MockStubStore::new());
        let plan = svc
            .plan_domain(&DomainRequest {
                name: "Users".into(),
                flags: GenerationFlags::default(),
            })
            .unwrap();

        let bind_at = plan
            .steps()
            .iter()
            .position(|s| matches!(s, PlanStep::Bind { .. }))
            .unwrap();
        let steps = plan.steps();
        assert!(matches!(
            &steps[bind_at - 1],
            PlanStep::Materialize(target) if target.kind == ArtifactKind::Repository
        ));
        assert!(matches!(
            &steps[bind_at + 1],
            PlanStep::Materialize(target) if target.kind == ArtifactKind::Action(ActionKind::Create)
        ));
        match &steps[bind_at] {
            PlanStep::Bind { provider, record } => {
                assert_eq!(
                    provider,
                    Path::new("/p/app/Providers/RepositoryServiceProvider.php")
                );
                assert_eq!(
                    record.signature(),
                    "\\App\\Domains\\Users\\Repositories\\UserRepositoryInterface::class"
                );
            }
            other => panic!("unexpected step {other:?}"),
        }
    }

    #[test]
    fn soft_deletes_select_variants_and_extra_actions() {
        let svc = service(empty_readonly_fs(), MockStubStore::new());
        let plan = svc
            .plan_domain(&DomainRequest {
                name: "Users".into(),
                flags: GenerationFlags {
                    migration: true,
                    soft_deletes: true,
                    force: true,
                },
            })
            .unwrap();

        let stubs: Vec<StubId> = plan
            .steps()
            .iter()
            .filter_map(|s| match s {
                PlanStep::Materialize(target) => Some(target.stub),
                _ => None,
            })
            .collect();
        for expected in [
            StubId::RepositoryInterfaceSoft,
            StubId::DomainServiceSoft,
            StubId::ModelSoft,
            StubId::ObserverSoft,
            StubId::PolicySoft,
            StubId::RepositorySoft,
            StubId::MigrationSoft,
            StubId::ActionRestore,
            StubId::ActionForceDelete,
        ] {
            assert!(stubs.contains(&expected), "missing {expected}");
        }
        assert!(
            destinations(&plan)
                .contains(&"/p/database/migrations/2026_10_19_120000_create_users_table.php".to_string())
        );
        assert!(plan.force());
    }

    #[test]
    fn existing_base_model_is_not_planned() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p.ends_with("BaseModel.php"));
        fs.expect_is_dir().return_const(false);
        let svc = service(fs, MockStubStore::new());

        let plan = svc
            .plan_domain(&DomainRequest {
                name: "Users".into(),
                flags: GenerationFlags::default(),
            })
            .unwrap();
        assert!(!destinations(&plan).iter().any(|d| d.ends_with("BaseModel.php")));
    }

    #[test]
    fn existing_migration_is_reused() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_is_dir()
            .returning(|p| p == Path::new("/p/database/migrations"));
        fs.expect_list_dir().returning(|_| {
            Ok(vec![
                PathBuf::from("/p/database/migrations/2020_01_01_000000_create_test_users_table.php"),
                PathBuf::from("/p/database/migrations/2021_05_05_101010_create_users_table.php"),
            ])
        });
        let mut stubs_clock = MockClock::new();
        stubs_clock.expect_migration_timestamp().never();
        let svc = GenerationService::new(
            ProjectLayout::new("/p"),
            Box::new(fs),
            Box::new(MockStubStore::new()),
            Box::new(MockConsole::new()),
            Box::new(MockProviderScaffolder::new()),
            Box::new(stubs_clock),
        );

        let plan = svc
            .plan_domain(&DomainRequest {
                name: "Users".into(),
                flags: GenerationFlags {
                    migration: true,
                    ..GenerationFlags::default()
                },
            })
            .unwrap();
        assert!(destinations(&plan).contains(
            &"/p/database/migrations/2021_05_05_101010_create_users_table.php".to_string()
        ));
    }

    #[test]
    fn invalid_name_fails_before_planning() {
        let svc = service(empty_readonly_fs(), MockStubStore::new());
        let err = svc
            .generate_domain(&DomainRequest {
                name: "  ".into(),
                flags: GenerationFlags::default(),
            })
            .unwrap_err();
        assert!(matches!(err, SmithError::Domain(DomainError::EmptyName { .. })));
    }

    #[test]
    fn subdomain_without_parent_writes_nothing() {
        let svc = service(empty_readonly_fs(), MockStubStore::new());
        let err = svc
            .generate_subdomain(&SubdomainRequest {
                parent: "Users".into(),
                name: "Profiles".into(),
                flags: GenerationFlags::default(),
            })
            .unwrap_err();
        assert!(matches!(
            err,
            SmithError::Application(ApplicationError::ParentDomainMissing { .. })
        ));
    }

    #[test]
    fn existing_subdomain_requires_force() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_exists().return_const(true);
        fs.expect_write_file().never();
        let svc = service(fs, MockStubStore::new());

        let request = SubdomainRequest {
            parent: "Users".into(),
            name: "Profiles".into(),
            flags: GenerationFlags::default(),
        };
        let err = svc.plan_subdomain(&request).unwrap_err();
        assert!(matches!(
            err,
            SmithError::Application(ApplicationError::SubdomainExists { .. })
        ));

        let forced = SubdomainRequest {
            flags: GenerationFlags {
                force: true,
                ..GenerationFlags::default()
            },
            ..request
        };
        let plan = svc.plan_subdomain(&forced).unwrap();
        assert!(
            destinations(&plan)
                .contains(&"/p/app/Domains/Users/Profiles/Entities/Profile.php".to_string())
        );
        assert!(
            destinations(&plan)
                .contains(&"/p/app/Actions/Users/Profiles/Create.php".to_string())
        );
    }

    #[test]
    fn value_object_subdomain_requires_domain() {
        let svc = service(empty_readonly_fs(), MockStubStore::new());
        let err = svc
            .plan_value_object(&ValueObjectRequest {
                name: "Email".into(),
                subdomain: Some("Profiles".into()),
                ..ValueObjectRequest::default()
            })
            .unwrap_err();
        assert!(matches!(
            err,
            SmithError::Domain(DomainError::MissingRequiredOption { .. })
        ));
    }

    #[test]
    fn value_object_plan_is_a_single_file() {
        let svc = service(empty_readonly_fs(), MockStubStore::new());
        let plan = svc
            .plan_value_object(&ValueObjectRequest {
                name: "email".into(),
                domain: Some("users".into()),
                subdomain: Some("profiles".into()),
                force: false,
            })
            .unwrap();

        assert_eq!(
            destinations(&plan),
            vec!["/p/app/Domains/Users/Profiles/ValueObjects/EmailValueObject.php"]
        );
        assert_eq!(plan.len(), 2);
        assert!(!plan.steps().iter().any(|s| matches!(s, PlanStep::Bind { .. })));
    }

    #[test]
    fn missing_value_object_stub_aborts_before_writing() {
        let mut stubs = MockStubStore::new();
        stubs.expect_load().returning(|stub| {
            Err(ApplicationError::StubNotFound {
                stub,
                location: "/stubs".into(),
            }
            .into())
        });
        let svc = service(empty_readonly_fs(), stubs);

        let err = svc
            .generate_value_object(&ValueObjectRequest {
                name: "Email".into(),
                ..ValueObjectRequest::default()
            })
            .unwrap_err();
        assert_eq!(
            err,
            SmithError::Application(ApplicationError::StubUnavailable {
                stub: StubId::ValueObject
            })
        );
    }
}
