//! Recipe UI App
//!
//! Root component: shared context plus route switch. Each route is wrapped
//! in the access gate for the role that may see it.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::ProtectedRoute;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::Role;
use crate::navigation::{Navigator, Route};
use crate::pages::{AdminPage, BookmarksPage, HomePage, NotFoundPage};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    log::info!("[APP] recipe API at {}", config.api_base);

    // Provide context to all children
    provide_context(AppContext::new(ApiClient::browser(config)));
    let nav = Navigator::install();
    provide_context(nav);

    view! {
        <div class="app-layout">
            {move || match nav.route.get() {
                Route::Home => view! { <HomePage /> }.into_any(),
                Route::Admin => view! {
                    <ProtectedRoute allowed_roles=vec![Role::Admin]>
                        <AdminPage />
                    </ProtectedRoute>
                }
                .into_any(),
                Route::Bookmarks => view! {
                    <ProtectedRoute allowed_roles=vec![Role::Member]>
                        <BookmarksPage />
                    </ProtectedRoute>
                }
                .into_any(),
                Route::NotFound => view! { <NotFoundPage /> }.into_any(),
            }}
        </div>
    }
}
