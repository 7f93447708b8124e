//! Stub rendering: load a stub by id, substitute placeholders.

use tracing::{debug, instrument, warn};

use crate::application::ports::StubStore;
use crate::domain::{PlaceholderMap, StubId};
use crate::error::SmithResult;

pub struct StubRenderer<'a> {
    store: &'a dyn StubStore,
}

impl<'a> StubRenderer<'a> {
    pub fn new(store: &'a dyn StubStore) -> Self {
        Self { store }
    }

    /// Pure substitution over already-loaded template text.
    pub fn render(template: &str, map: &PlaceholderMap) -> String {
        map.render(template)
    }

    /// Load `stub` from the store and render it.
    ///
    /// # Errors
    ///
    /// `ApplicationError::StubNotFound` when the store has no such stub.
    #[instrument(skip(self, map), fields(stub = %stub))]
    pub fn render_stub(&self, stub: StubId, map: &PlaceholderMap) -> SmithResult<String> {
        let template = self.store.load(stub)?;
        let rendered = Self::render(&template, map);

        let leftover = PlaceholderMap::unresolved_tokens(&rendered);
        if leftover.is_empty() {
            debug!(bytes = rendered.len(), "Stub rendered");
        } else {
            warn!(tokens = ?leftover, "Rendered stub still contains placeholders");
        }

        Ok(rendered)
    }
}
