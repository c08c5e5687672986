//! Persisted client stores.
//!
//! Each store is an explicit state container built once per application
//! instance around an injected [`KeyValueStorage`]. State is rehydrated at
//! construction and the full state tree is written back after every mutation
//! as `{"state": ..., "version": N}` under the store's fixed key.
//!
//! Persistence is best-effort: unreadable, corrupt or outdated snapshots fall
//! back to the initial state, and failed writes are logged and dropped.

pub mod auth;
pub mod cart;
pub mod onboarding;
pub mod template;

pub use auth::{AuthState, AuthStore};
pub use cart::{CartEntry, CartItem, CartState, CartStore};
pub use onboarding::{CustomLink, OnboardingStore, Platform, UserData};
pub use template::{TemplateState, TemplateStore};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::storage::KeyValueStorage;

/// A state tree that can be persisted by [`Persisted`].
pub trait PersistedState: Serialize + DeserializeOwned + Default {
    /// Storage key for this store's snapshot.
    const KEY: &'static str;
    /// Snapshot version; snapshots with another version are discarded.
    const VERSION: u32;

    /// Restores invariants on a freshly rehydrated state.
    fn sanitize(&mut self) {}
}

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot<T> {
    state: T,
    version: u32,
}

/// A state tree mirrored to a [`KeyValueStorage`].
#[derive(Debug)]
pub struct Persisted<T, S> {
    state: T,
    storage: S,
}

impl<T, S> Persisted<T, S>
where
    T: PersistedState,
    S: KeyValueStorage,
{
    /// Rehydrate from `storage`, falling back to `T::default()`.
    pub fn load(storage: S) -> Self {
        let mut state = rehydrate::<T>(&storage).unwrap_or_default();
        state.sanitize();
        Self { state, storage }
    }

    /// Current state.
    pub fn state(&self) -> &T {
        &self.state
    }

    /// Mutate the state, then persist the whole tree.
    pub fn update<R>(&mut self, mutate: impl FnOnce(&mut T) -> R) -> R {
        let result = mutate(&mut self.state);
        self.persist();
        result
    }

    /// Reset to `T::default()` and delete the snapshot, logging on failure.
    pub fn clear(&mut self) {
        self.state = T::default();
        if let Err(e) = self.storage.remove(T::KEY) {
            warn!(key = T::KEY, error = %e, "Failed to remove persisted state");
        }
    }

    /// Write the current state to storage, logging on failure.
    pub fn persist(&self) {
        let snapshot = Snapshot {
            state: &self.state,
            version: T::VERSION,
        };
        let written = serde_json::to_string(&snapshot)
            .map_err(crate::storage::StorageError::from)
            .and_then(|data| self.storage.save(T::KEY, &data));
        if let Err(e) = written {
            warn!(key = T::KEY, error = %e, "Failed to persist store");
        }
    }
}

fn rehydrate<T: PersistedState>(storage: &impl KeyValueStorage) -> Option<T> {
    let raw = match storage.load(T::KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key = T::KEY, "No persisted state");
            return None;
        }
        Err(e) => {
            warn!(key = T::KEY, error = %e, "Failed to read persisted state");
            return None;
        }
    };

    match serde_json::from_str::<Snapshot<T>>(&raw) {
        Ok(snapshot) if snapshot.version == T::VERSION => Some(snapshot.state),
        Ok(snapshot) => {
            warn!(
                key = T::KEY,
                found = snapshot.version,
                expected = T::VERSION,
                "Discarding persisted state with unexpected version"
            );
            None
        }
        Err(e) => {
            warn!(key = T::KEY, error = %e, "Discarding corrupt persisted state");
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Counter {
        value: i64,
    }

    impl PersistedState for Counter {
        const KEY: &'static str = "counter";
        const VERSION: u32 = 2;

        fn sanitize(&mut self) {
            self.value = self.value.max(0);
        }
    }

    #[test]
    fn test_persists_envelope() {
        let storage = MemoryStorage::new();
        let mut counter = Persisted::<Counter, _>::load(&storage);
        counter.update(|c| c.value = 7);
        assert_eq!(
            storage.load("counter").unwrap().as_deref(),
            Some(r#"{"state":{"value":7},"version":2}"#)
        );
    }

    #[test]
    fn test_rehydrates() {
        let storage = MemoryStorage::with_entries([("counter", r#"{"state":{"value":3},"version":2}"#)]);
        let counter = Persisted::<Counter, _>::load(&storage);
        assert_eq!(counter.state().value, 3);
    }

    #[test]
    fn test_corrupt_falls_back() {
        let storage = MemoryStorage::with_entries([("counter", "{not json")]);
        assert_eq!(Persisted::<Counter, _>::load(&storage).state(), &Counter::default());
    }

    #[test]
    fn test_version_mismatch_falls_back() {
        let storage = MemoryStorage::with_entries([("counter", r#"{"state":{"value":3},"version":1}"#)]);
        assert_eq!(Persisted::<Counter, _>::load(&storage).state(), &Counter::default());
    }

    #[test]
    fn test_sanitize_runs_on_load() {
        let storage = MemoryStorage::with_entries([("counter", r#"{"state":{"value":-4},"version":2}"#)]);
        assert_eq!(Persisted::<Counter, _>::load(&storage).state().value, 0);
    }

    #[test]
    fn test_clear_removes_snapshot() {
        let storage = MemoryStorage::new();
        let mut counter = Persisted::<Counter, _>::load(&storage);
        counter.update(|c| c.value = 7);
        counter.clear();
        assert_eq!(counter.state(), &Counter::default());
        assert!(storage.load("counter").unwrap().is_none());

        // Clearing with nothing stored is fine
        counter.clear();
        assert!(storage.load("counter").unwrap().is_none());
    }

    #[test]
    fn test_writes_are_idempotent() {
        let storage = MemoryStorage::new();
        let mut counter = Persisted::<Counter, _>::load(&storage);
        counter.update(|c| c.value = 5);
        let first = storage.load("counter").unwrap();
        counter.update(|c| c.value = 5);
        assert_eq!(storage.load("counter").unwrap(), first);
    }
}
