//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `domainsmith-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `StubStore`: Stub retrieval
//!   - `Console`: Progress lines and overwrite confirmation
//!   - `ProviderScaffolder`: Creates a missing service provider
//!   - `Clock`: Migration timestamps
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Clock, Console, Filesystem, ProviderScaffolder, StubStore};

#[cfg(test)]
pub use output::{MockClock, MockConsole, MockFilesystem, MockProviderScaffolder, MockStubStore};
