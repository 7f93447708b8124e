//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a domain" or "patch the provider".

pub mod generation_service;
pub mod materializer;
pub mod provider_patcher;
pub mod report;
pub mod stub_renderer;

pub use generation_service::{
    DomainRequest, GenerationService, SubdomainRequest, ValueObjectRequest,
};
pub use materializer::FileMaterializer;
pub use provider_patcher::{BINDING_MARKER, PatchResult, ProviderPatcher, insert_binding};
pub use report::{
    ArtifactOutcome, ArtifactReport, BindingOutcome, BindingReport, DirectoryOutcome,
    DirectoryReport, GenerationReport, Summary,
};
pub use stub_renderer::StubRenderer;
