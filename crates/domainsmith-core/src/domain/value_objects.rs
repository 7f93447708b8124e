//! Domain value objects: generation flags, artifact kinds and stub identifiers.
//!
//! # Design
//!
//! Stub variant selection is a single lookup (`ArtifactKind::stub`) keyed by
//! artifact kind and the soft-delete flag. Call sites never build stub file
//! names by hand.
//!
//! # Adding a new stub
//!
//! 1. Add the `StubId` variant and its `relative_path` arm
//! 2. Add it to `StubId::ALL`
//! 3. Map an `ArtifactKind` to it in `ArtifactKind::stub`
//! 4. Ship the file under `stubs/` in the adapters crate

use serde::Serialize;
use std::fmt;

// ── GenerationFlags ──────────────────────────────────────────────────────────

/// Options shared by the domain and subdomain flows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenerationFlags {
    /// Also generate a `create_<table>_table` migration.
    pub migration: bool,
    /// Use soft-delete stub variants and add restore/force-delete actions.
    pub soft_deletes: bool,
    /// Overwrite existing files without asking.
    pub force: bool,
}

// ── StubId ───────────────────────────────────────────────────────────────────

/// Every template shipped with the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum StubId {
    Entity,
    RepositoryInterface,
    RepositoryInterfaceSoft,
    DomainService,
    DomainServiceSoft,
    DataTransferObject,
    ValueObject,
    Observer,
    ObserverSoft,
    Policy,
    PolicySoft,
    BaseModel,
    Model,
    ModelSoft,
    Factory,
    Migration,
    MigrationSoft,
    Repository,
    RepositorySoft,
    ActionCreate,
    ActionUpdate,
    ActionDelete,
    ActionIndex,
    ActionShow,
    ActionRestore,
    ActionForceDelete,
    RepositoryServiceProvider,
}

impl StubId {
    pub const ALL: [StubId; 27] = [
        Self::Entity,
        Self::RepositoryInterface,
        Self::RepositoryInterfaceSoft,
        Self::DomainService,
        Self::DomainServiceSoft,
        Self::DataTransferObject,
        Self::ValueObject,
        Self::Observer,
        Self::ObserverSoft,
        Self::Policy,
        Self::PolicySoft,
        Self::BaseModel,
        Self::Model,
        Self::ModelSoft,
        Self::Factory,
        Self::Migration,
        Self::MigrationSoft,
        Self::Repository,
        Self::RepositorySoft,
        Self::ActionCreate,
        Self::ActionUpdate,
        Self::ActionDelete,
        Self::ActionIndex,
        Self::ActionShow,
        Self::ActionRestore,
        Self::ActionForceDelete,
        Self::RepositoryServiceProvider,
    ];

    /// Path of the stub relative to a stub directory.
    pub const fn relative_path(self) -> &'static str {
        match self {
            Self::Entity => "domain/Entity.stub",
            Self::RepositoryInterface => "domain/RepositoryInterface.stub",
            Self::RepositoryInterfaceSoft => "domain/RepositoryInterface.soft.stub",
            Self::DomainService => "domain/DomainService.stub",
            Self::DomainServiceSoft => "domain/DomainService.soft.stub",
            Self::DataTransferObject => "domain/DataTransferObject.stub",
            Self::ValueObject => "domain/ValueObject.stub",
            Self::Observer => "domain/Observer.stub",
            Self::ObserverSoft => "domain/Observer.soft.stub",
            Self::Policy => "domain/Policy.stub",
            Self::PolicySoft => "domain/Policy.soft.stub",
            Self::BaseModel => "model/BaseModel.stub",
            Self::Model => "model/Model.stub",
            Self::ModelSoft => "model/Model.soft.stub",
            Self::Factory => "model/Factory.stub",
            Self::Migration => "model/Migration.stub",
            Self::MigrationSoft => "model/Migration.soft.stub",
            Self::Repository => "infrastructure/Repository.stub",
            Self::RepositorySoft => "infrastructure/Repository.soft.stub",
            Self::ActionCreate => "actions/Create.stub",
            Self::ActionUpdate => "actions/Update.stub",
            Self::ActionDelete => "actions/Delete.stub",
            Self::ActionIndex => "actions/Index.stub",
            Self::ActionShow => "actions/Show.stub",
            Self::ActionRestore => "actions/Restore.stub",
            Self::ActionForceDelete => "actions/ForceDelete.stub",
            Self::RepositoryServiceProvider => "provider/RepositoryServiceProvider.stub",
        }
    }
}

impl fmt::Display for StubId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.relative_path())
    }
}

// ── ActionKind ───────────────────────────────────────────────────────────────

/// One CRUD action class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ActionKind {
    Create,
    Update,
    Delete,
    Index,
    Show,
    Restore,
    ForceDelete,
}

impl ActionKind {
    const BASIC: [ActionKind; 5] = [
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::Index,
        Self::Show,
    ];

    const WITH_SOFT_DELETES: [ActionKind; 7] = [
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::Index,
        Self::Show,
        Self::Restore,
        Self::ForceDelete,
    ];

    /// The action set generated for a domain, in generation order.
    pub fn for_flags(soft_deletes: bool) -> &'static [ActionKind] {
        if soft_deletes {
            &Self::WITH_SOFT_DELETES
        } else {
            &Self::BASIC
        }
    }

    /// Class (and file) name of the action.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Update => "Update",
            Self::Delete => "Delete",
            Self::Index => "Index",
            Self::Show => "Show",
            Self::Restore => "Restore",
            Self::ForceDelete => "ForceDelete",
        }
    }
}

// ── ArtifactKind ─────────────────────────────────────────────────────────────

/// What a generated file is, independent of where it lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArtifactKind {
    Entity,
    RepositoryInterface,
    DomainService,
    DataTransferObject,
    BaseModel,
    Model,
    Factory,
    Observer,
    Policy,
    Repository,
    Migration,
    Action(ActionKind),
    ValueObject,
    Provider,
}

impl ArtifactKind {
    /// Stub variant for this artifact.
    ///
    /// ```
    /// use domainsmith_core::domain::{ArtifactKind, StubId};
    ///
    /// assert_eq!(ArtifactKind::Model.stub(false), StubId::Model);
    /// assert_eq!(ArtifactKind::Model.stub(true), StubId::ModelSoft);
    /// assert_eq!(ArtifactKind::Entity.stub(true), StubId::Entity);
    /// ```
    pub const fn stub(self, soft_deletes: bool) -> StubId {
        match (self, soft_deletes) {
            (Self::Entity, _) => StubId::Entity,
            (Self::RepositoryInterface, false) => StubId::RepositoryInterface,
            (Self::RepositoryInterface, true) => StubId::RepositoryInterfaceSoft,
            (Self::DomainService, false) => StubId::DomainService,
            (Self::DomainService, true) => StubId::DomainServiceSoft,
            (Self::DataTransferObject, _) => StubId::DataTransferObject,
            (Self::BaseModel, _) => StubId::BaseModel,
            (Self::Model, false) => StubId::Model,
            (Self::Model, true) => StubId::ModelSoft,
            (Self::Factory, _) => StubId::Factory,
            (Self::Observer, false) => StubId::Observer,
            (Self::Observer, true) => StubId::ObserverSoft,
            (Self::Policy, false) => StubId::Policy,
            (Self::Policy, true) => StubId::PolicySoft,
            (Self::Repository, false) => StubId::Repository,
            (Self::Repository, true) => StubId::RepositorySoft,
            (Self::Migration, false) => StubId::Migration,
            (Self::Migration, true) => StubId::MigrationSoft,
            (Self::Action(ActionKind::Create), _) => StubId::ActionCreate,
            (Self::Action(ActionKind::Update), _) => StubId::ActionUpdate,
            (Self::Action(ActionKind::Delete), _) => StubId::ActionDelete,
            (Self::Action(ActionKind::Index), _) => StubId::ActionIndex,
            (Self::Action(ActionKind::Show), _) => StubId::ActionShow,
            (Self::Action(ActionKind::Restore), _) => StubId::ActionRestore,
            (Self::Action(ActionKind::ForceDelete), _) => StubId::ActionForceDelete,
            (Self::ValueObject, _) => StubId::ValueObject,
            (Self::Provider, _) => StubId::RepositoryServiceProvider,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::RepositoryInterface => "repository interface",
            Self::DomainService => "domain service",
            Self::DataTransferObject => "data transfer object",
            Self::BaseModel => "base model",
            Self::Model => "model",
            Self::Factory => "factory",
            Self::Observer => "observer",
            Self::Policy => "policy",
            Self::Repository => "repository",
            Self::Migration => "migration",
            Self::Action(_) => "action",
            Self::ValueObject => "value object",
            Self::Provider => "service provider",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Action(action) => write!(f, "{} action", action.class_name()),
            other => f.write_str(other.label()),
        }
    }
}
