//! Persisted session identity: the single local user account.

use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

/// Storage key for the account display name.
pub const USERNAME_KEY: &str = "glasstop.username.v1";
/// Storage key for the account password (plain text; this shell is a UI mock,
/// not a security boundary).
pub const PASSWORD_KEY: &str = "glasstop.password.v1";
/// Storage key for the first-run flag. Absence of this key is the sole signal
/// that setup has not completed.
pub const SETUP_COMPLETE_KEY: &str = "glasstop.setup_complete.v1";

/// Placeholder account name used until setup completes.
pub const DEFAULT_USERNAME: &str = "User";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// The persisted username/password/setup-complete triple.
pub struct SessionIdentity {
    /// Account display name.
    pub username: String,
    /// Account password, compared verbatim on login.
    pub password: String,
    /// Whether first-run setup has completed.
    pub setup_complete: bool,
}

impl Default for SessionIdentity {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            password: String::new(),
            setup_complete: false,
        }
    }
}

/// Reads the persisted identity. Missing keys fall back to first-run defaults.
pub fn load_identity<S: KeyValueStore + ?Sized>(store: &S) -> SessionIdentity {
    SessionIdentity {
        username: store
            .get(USERNAME_KEY)
            .unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
        password: store.get(PASSWORD_KEY).unwrap_or_default(),
        setup_complete: store.get(SETUP_COMPLETE_KEY).is_some(),
    }
}

/// Writes the identity triple. The setup-complete flag is only written when
/// set, so a saved-then-cleared identity round-trips to first-run.
pub fn save_identity<S: KeyValueStore + ?Sized>(store: &S, identity: &SessionIdentity) {
    store.set(USERNAME_KEY, &identity.username);
    store.set(PASSWORD_KEY, &identity.password);
    if identity.setup_complete {
        store.set(SETUP_COMPLETE_KEY, "true");
    } else {
        store.remove(SETUP_COMPLETE_KEY);
    }
}

/// Removes all identity keys, returning the store to its first-run state.
pub fn clear_identity<S: KeyValueStore + ?Sized>(store: &S) {
    store.remove(USERNAME_KEY);
    store.remove(PASSWORD_KEY);
    store.remove(SETUP_COMPLETE_KEY);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::storage::MemoryKeyValueStore;

    #[test]
    fn missing_keys_mean_first_run() {
        let store = MemoryKeyValueStore::default();
        let identity = load_identity(&store);

        assert_eq!(identity, SessionIdentity::default());
        assert!(!identity.setup_complete);
    }

    #[test]
    fn save_and_load_round_trip() {
        let store = MemoryKeyValueStore::default();
        let identity = SessionIdentity {
            username: "Alice".to_string(),
            password: "p1".to_string(),
            setup_complete: true,
        };

        save_identity(&store, &identity);
        assert_eq!(load_identity(&store), identity);
    }

    #[test]
    fn clear_returns_to_first_run() {
        let store = MemoryKeyValueStore::default();
        save_identity(
            &store,
            &SessionIdentity {
                username: "Alice".to_string(),
                password: "p1".to_string(),
                setup_complete: true,
            },
        );

        clear_identity(&store);
        assert_eq!(load_identity(&store), SessionIdentity::default());
    }
}
