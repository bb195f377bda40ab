//! Credential Providers
//!
//! The API client asks a provider for the bearer token on every request
//! instead of reading browser storage itself.

use std::sync::{Arc, Mutex};

use crate::config::{ACCESS_TOKEN_KEY, ROLE_KEY};
use crate::models::Role;

pub trait CredentialProvider {
    /// Current bearer token, `None` when logged out
    fn access_token(&self) -> Option<String>;

    /// Role flag stored at login
    fn role(&self) -> Option<Role>;

    /// Forget token and role (logout)
    fn clear(&self);

    /// Role of a logged-in caller; a role stored without a token counts as logged out
    fn session_role(&self) -> Option<Role> {
        self.access_token().and(self.role())
    }
}

/// Reads `access_token` / `role` from `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageCredentials;

impl LocalStorageCredentials {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn read(key: &str) -> Option<String> {
        Self::storage()?
            .get_item(key)
            .ok()?
            .filter(|value| !matches!(value.as_str(), "" | "null" | "undefined"))
    }
}

impl CredentialProvider for LocalStorageCredentials {
    fn access_token(&self) -> Option<String> {
        Self::read(ACCESS_TOKEN_KEY)
    }

    fn role(&self) -> Option<Role> {
        Self::read(ROLE_KEY).and_then(|value| Role::from_stored(&value))
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            for key in [ACCESS_TOKEN_KEY, ROLE_KEY] {
                if let Err(e) = storage.remove_item(key) {
                    log::warn!("[AUTH] failed to remove {}: {:?}", key, e);
                }
            }
        }
    }
}

#[derive(Debug, Default)]
struct Stored {
    token: Option<String>,
    role: Option<Role>,
}

/// In-memory credentials, shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentials {
    inner: Arc<Mutex<Stored>>,
}

impl MemoryCredentials {
    pub fn new(token: Option<&str>, role: Option<Role>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Stored {
                token: token.map(str::to_string),
                role,
            })),
        }
    }

    fn with<R>(&self, f: impl FnOnce(&mut Stored) -> R) -> R {
        match self.inner.lock() {
            Ok(mut stored) => f(&mut stored),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }
}

impl CredentialProvider for MemoryCredentials {
    fn access_token(&self) -> Option<String> {
        self.with(|stored| stored.token.clone())
    }

    fn role(&self) -> Option<Role> {
        self.with(|stored| stored.role)
    }

    fn clear(&self) {
        self.with(|stored| {
            stored.token = None;
            stored.role = None;
        })
    }
}
