//! Session Store
//!
//! Persisted-token service shared app-wide via Leptos context. The session
//! is a single opaque token under a fixed localStorage key; presence of the
//! token is the authenticated predicate the route guard reads.

use leptos::prelude::*;

#[cfg(test)]
use std::sync::{Arc, Mutex};

/// localStorage key the token lives under.
const TOKEN_KEY: &str = "auth_token";

/// Injectable session-state service with explicit get/set/clear operations.
/// All operations are synchronous and total; storage failures degrade to
/// an absent token.
#[derive(Clone)]
pub struct SessionStore {
    backend: Backend,
}

#[derive(Clone)]
enum Backend {
    /// Browser localStorage, survives reloads within the profile.
    Browser,
    /// In-memory stand-in so session semantics are testable on the host.
    #[cfg(test)]
    Memory(Arc<Mutex<Option<String>>>),
}

impl SessionStore {
    /// Store backed by browser localStorage.
    pub fn browser() -> Self {
        Self { backend: Backend::Browser }
    }

    #[cfg(test)]
    fn memory() -> Self {
        Self { backend: Backend::Memory(Arc::new(Mutex::new(None))) }
    }

    /// Persist the token; afterwards `is_authenticated()` is true.
    pub fn set_token(&self, token: &str) {
        match &self.backend {
            Backend::Browser => {
                if let Some(storage) = local_storage() {
                    let _ = storage.set_item(TOKEN_KEY, token);
                }
            }
            #[cfg(test)]
            Backend::Memory(slot) => *slot.lock().unwrap() = Some(token.to_string()),
        }
    }

    /// Currently stored token, if any.
    pub fn token(&self) -> Option<String> {
        match &self.backend {
            Backend::Browser => {
                local_storage().and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
            }
            #[cfg(test)]
            Backend::Memory(slot) => slot.lock().unwrap().clone(),
        }
    }

    /// True iff a token is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Remove the token; afterwards `is_authenticated()` is false.
    pub fn clear(&self) {
        match &self.backend {
            Backend::Browser => {
                if let Some(storage) = local_storage() {
                    let _ = storage.remove_item(TOKEN_KEY);
                }
            }
            #[cfg(test)]
            Backend::Memory(slot) => *slot.lock().unwrap() = None,
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Get the session store from context.
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_clear_round_trip() {
        let session = SessionStore::memory();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);

        session.set_token("abc");
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("abc".to_string()));

        session.clear();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn set_token_overwrites_previous() {
        let session = SessionStore::memory();
        session.set_token("first");
        session.set_token("second");
        assert_eq!(session.token(), Some("second".to_string()));
    }

    #[test]
    fn clear_is_idempotent() {
        let session = SessionStore::memory();
        session.clear();
        session.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn clones_share_the_same_session() {
        let session = SessionStore::memory();
        let other = session.clone();
        session.set_token("shared");
        assert_eq!(other.token(), Some("shared".to_string()));
    }
}
