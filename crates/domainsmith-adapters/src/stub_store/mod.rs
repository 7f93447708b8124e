//! Stub store adapters.

mod directory;
mod memory;

pub use directory::DirectoryStubStore;
pub use memory::InMemoryStubStore;
