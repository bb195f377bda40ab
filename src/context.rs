//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// API client; holds `Rc`s, so it lives in local storage
    api: StoredValue<ApiClient, LocalStorage>,
    /// Bumped on login/logout so role-dependent views re-check credentials - read
    pub session_version: ReadSignal<u32>,
    /// Bumped on login/logout - write
    set_session_version: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(api: ApiClient) -> Self {
        let (session_version, set_session_version) = signal(0u32);
        Self {
            api: StoredValue::new_local(api),
            session_version,
            set_session_version,
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    /// Signal that stored credentials changed
    pub fn session_changed(&self) {
        self.set_session_version.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
