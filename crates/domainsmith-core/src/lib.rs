//! domainsmith Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the domainsmith
//! Laravel domain scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         domainsmith-cli (CLI)           │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (GenerationService, ProviderPatcher)   │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, StubStore, Console, Clock) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   domainsmith-adapters (Infrastructure) │
//! │ (LocalFilesystem, DirectoryStubStore..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (DerivedNames, PlaceholderMap, Plans)   │
//! │               No I/O                    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use domainsmith_core::prelude::*;
//!
//! let service = GenerationService::new(layout, filesystem, stubs, console, scaffolder, clock);
//! let report = service.generate_domain(&DomainRequest {
//!     name: "Users".into(),
//!     flags: GenerationFlags { migration: true, ..Default::default() },
//! })?;
//! println!("{}", report.summary());
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DomainRequest, GenerationReport, GenerationService, SubdomainRequest,
        ValueObjectRequest,
        ports::{Clock, Console, Filesystem, ProviderScaffolder, StubStore},
    };
    pub use crate::domain::{
        DerivedNames, GenerationFlags, GenerationPlan, PlaceholderMap, ProjectLayout, StubId,
    };
    pub use crate::error::{SmithError, SmithResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
