//! Infrastructure adapters for domainsmith.
//!
//! This crate implements the ports defined in `domainsmith-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_stubs;
pub mod clock;
pub mod filesystem;
pub mod provider;
pub mod stub_store;

// Re-export commonly used adapters
pub use builtin_stubs::{builtin_stub, resolve_stub_directory, stub_directory_candidates};
pub use clock::{FixedClock, SystemClock};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use provider::StubProviderScaffolder;
pub use stub_store::{DirectoryStubStore, InMemoryStubStore};
