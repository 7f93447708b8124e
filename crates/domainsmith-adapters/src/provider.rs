//! Creates a missing repository service provider from its stub.

use std::path::Path;

use domainsmith_core::{
    application::{
        ports::{Filesystem, ProviderScaffolder, StubStore},
        services::StubRenderer,
    },
    domain::{PlaceholderMap, StubId},
    error::SmithResult,
};
use tracing::{info, instrument};

/// `ProviderScaffolder` that renders the `RepositoryServiceProvider` stub.
#[derive(Debug, Clone)]
pub struct StubProviderScaffolder<F, S> {
    fs: F,
    stubs: S,
    namespace_root: String,
}

impl<F, S> StubProviderScaffolder<F, S>
where
    F: Filesystem,
    S: StubStore,
{
    pub fn new(fs: F, stubs: S, namespace_root: impl Into<String>) -> Self {
        Self {
            fs,
            stubs,
            namespace_root: namespace_root.into(),
        }
    }
}

impl<F, S> ProviderScaffolder for StubProviderScaffolder<F, S>
where
    F: Filesystem,
    S: StubStore,
{
    #[instrument(skip(self), fields(path = %path.display()))]
    fn make_provider(&self, path: &Path) -> SmithResult<()> {
        let map = PlaceholderMap::for_root(&self.namespace_root);
        let source =
            StubRenderer::new(&self.stubs).render_stub(StubId::RepositoryServiceProvider, &map)?;

        if let Some(parent) = path.parent()
            && !self.fs.is_dir(parent)
        {
            self.fs.create_dir_all(parent)?;
        }
        self.fs.write_file(path, &source)?;

        info!("Provider created");
        Ok(())
    }
}
