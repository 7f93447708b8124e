// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for domainsmith.
//!
//! This module contains pure logic: name derivation, inflection, placeholder
//! maps, project layout and generation plans. All I/O is handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, console, or clock access
//! - **Immutable values**: Plans and maps are built once, then only read
//! - **Total derivation**: Any validated name derives every name form

// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod inflector;
pub mod value_objects;

mod validation;

pub use entities::{
    binding::BindingRecord,
    layout::ProjectLayout,
    names::{DerivedNames, studly, value_object_class},
    placeholders::{PlaceholderMap, PlaceholderMapBuilder, tokens},
    plan::{ArtifactSpec, GenerationPlan, PlanStep, WritePolicy},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{ActionKind, ArtifactKind, GenerationFlags, StubId};

pub use validation::DomainValidator;
