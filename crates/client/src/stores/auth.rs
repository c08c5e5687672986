//! Local mirror of the signed-in session.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Persisted, PersistedState};
use crate::models::UserRecord;
use crate::storage::KeyValueStorage;

/// Persisted session mirror.
///
/// The token is kept as a [`SecretString`] in memory and only exposed when
/// the snapshot is written.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AuthState {
    #[serde(with = "secret_token", default)]
    token: Option<SecretString>,
    #[serde(default)]
    user: Option<UserRecord>,
}

impl PersistedState for AuthState {
    const KEY: &'static str = "auth-storage";
    const VERSION: u32 = 0;

    fn sanitize(&mut self) {
        // A user without a token is not a session.
        if self.token.is_none() {
            self.user = None;
        }
    }
}

mod secret_token {
    use super::{Deserialize, Deserializer, ExposeSecret, SecretString, Serialize, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        token: &Option<SecretString>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        token
            .as_ref()
            .map(|t| t.expose_secret())
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<SecretString>, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?
            .filter(|token| !token.is_empty())
            .map(SecretString::from))
    }
}

/// Mirrors the backend session so the client stays signed in across restarts.
#[derive(Debug)]
pub struct AuthStore<S> {
    inner: Persisted<AuthState, S>,
}

impl<S: KeyValueStorage> AuthStore<S> {
    /// Rehydrate the session from `storage`.
    pub fn load(storage: S) -> Self {
        Self {
            inner: Persisted::load(storage),
        }
    }

    /// Record a successful sign-in.
    pub fn login(&mut self, token: SecretString, user: UserRecord) {
        tracing::info!(username = ?user.username, "Signed in");
        self.inner.update(|state| {
            state.token = Some(token);
            state.user = Some(user);
        });
    }

    /// Forget the session and delete its snapshot.
    pub fn logout(&mut self) {
        self.inner.clear();
        tracing::info!("Signed out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state().token.is_some()
    }

    /// The bearer token for API calls.
    pub fn token(&self) -> Option<&SecretString> {
        self.inner.state().token.as_ref()
    }

    pub fn user(&self) -> Option<&UserRecord> {
        self.inner.state().user.as_ref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn user() -> UserRecord {
        UserRecord {
            username: Some("jane".to_owned()),
            ..UserRecord::default()
        }
    }

    #[test]
    fn test_login_persists_and_rehydrates() {
        let storage = MemoryStorage::new();
        AuthStore::load(&storage).login(SecretString::from("tok-123".to_owned()), user());

        let store = AuthStore::load(&storage);
        assert!(store.is_authenticated());
        assert_eq!(store.token().map(|t| t.expose_secret()), Some("tok-123"));
        assert_eq!(store.user(), Some(&user()));
    }

    #[test]
    fn test_logout_clears() {
        let storage = MemoryStorage::new();
        let mut store = AuthStore::load(&storage);
        store.login(SecretString::from("tok-123".to_owned()), user());
        store.logout();
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
        assert!(!AuthStore::load(&storage).is_authenticated());
        assert!(storage.load("auth-storage").unwrap().is_none());
    }

    #[test]
    fn test_user_without_token_is_dropped() {
        let storage = MemoryStorage::with_entries([(
            "auth-storage",
            r#"{"state":{"token":"","user":{"username":"jane"}},"version":0}"#,
        )]);
        let store = AuthStore::load(&storage);
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
    }

    #[test]
    fn test_debug_redacts_token() {
        let mut store = AuthStore::load(MemoryStorage::new());
        store.login(SecretString::from("tok-123".to_owned()), user());
        assert!(!format!("{store:?}").contains("tok-123"));
    }
}
