//! Application layer for domainsmith.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerationService) and the
//!   components it sequences (StubRenderer, FileMaterializer, ProviderPatcher)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but performs no I/O
//! itself. All I/O goes through `ports`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ArtifactOutcome, BindingOutcome, DirectoryOutcome, DomainRequest, GenerationReport,
    GenerationService, SubdomainRequest, ValueObjectRequest,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Clock, Console, Filesystem, ProviderScaffolder, StubStore};

pub use error::ApplicationError;
