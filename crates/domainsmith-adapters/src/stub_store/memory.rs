//! In-memory stub store, seeded from the built-in catalogue.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use domainsmith_core::{
    application::{ApplicationError, ports::StubStore},
    domain::StubId,
    error::SmithResult,
};

use crate::builtin_stubs;

/// Thread-safe in-memory stub store.
#[derive(Debug, Clone)]
pub struct InMemoryStubStore {
    inner: Arc<RwLock<HashMap<StubId, String>>>,
}

impl InMemoryStubStore {
    /// Create a new empty store.
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a store holding every built-in stub.
    pub fn with_builtin() -> Self {
        let stubs = StubId::ALL
            .into_iter()
            .map(|id| (id, builtin_stubs::builtin_stub(id).to_string()))
            .collect();
        Self {
            inner: Arc::new(RwLock::new(stubs)),
        }
    }

    /// Add or replace a stub.
    pub fn insert(&self, stub: StubId, text: impl Into<String>) -> SmithResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(stub, text.into());
        Ok(())
    }

    /// Drop a stub, so loading it reports `StubNotFound`.
    pub fn remove(&self, stub: StubId) -> SmithResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.remove(&stub);
        Ok(())
    }

    /// Get the number of stubs.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryStubStore {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl StubStore for InMemoryStubStore {
    fn load(&self, stub: StubId) -> SmithResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(&stub).cloned().ok_or_else(|| {
            ApplicationError::StubNotFound {
                stub,
                location: self.describe(),
            }
            .into()
        })
    }

    fn describe(&self) -> String {
        "built-in stubs".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domainsmith_core::error::SmithError;

    #[test]
    fn builtin_store_has_every_stub() {
        let store = InMemoryStubStore::with_builtin();
        assert_eq!(store.len(), StubId::ALL.len());
        assert!(store.load(StubId::Entity).unwrap().contains("{{ domain }}"));
    }

    #[test]
    fn removed_stub_is_not_found() {
        let store = InMemoryStubStore::with_builtin();
        store.remove(StubId::Policy).unwrap();

        let err = store.load(StubId::Policy).unwrap_err();
        assert!(matches!(
            err,
            SmithError::Application(ApplicationError::StubNotFound {
                stub: StubId::Policy,
                ..
            })
        ));
    }

    #[test]
    fn insert_overrides_builtin() {
        let store = InMemoryStubStore::with_builtin();
        store.insert(StubId::Entity, "custom").unwrap();
        assert_eq!(store.load(StubId::Entity).unwrap(), "custom");
    }

    #[test]
    fn empty_store_is_empty() {
        assert!(InMemoryStubStore::empty().is_empty());
    }
}
