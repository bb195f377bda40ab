//! Navbar Component
//!
//! Page links and logout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::Role;
use crate::navigation::{use_navigator, Route};

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let nav = use_navigator();

    let role = move || {
        let _ = ctx.session_version.get();
        ctx.api().credentials().session_role()
    };

    let link_class = move |target: Route| {
        if nav.route.get() == target { "nav-link active" } else { "nav-link" }
    };

    let logout = move |_| {
        spawn_local(async move {
            let api = ctx.api();
            if let Err(e) = api.logout().await {
                log::warn!("[NAV] logout request failed: {}", e);
            }
            // The token is client-side state; drop it whatever the server said
            api.credentials().clear();
            ctx.session_changed();
            nav.push(Route::Home);
        });
    };

    view! {
        <nav class="navbar">
            <span class="navbar-brand">"Recipe Share"</span>
            <div class="navbar-links">
                <Show when=move || role() == Some(Role::Admin)>
                    <button class=move || link_class(Route::Admin) on:click=move |_| nav.push(Route::Admin)>
                        "Manage Recipes"
                    </button>
                </Show>
                <Show when=move || role() == Some(Role::Member)>
                    <button class=move || link_class(Route::Bookmarks) on:click=move |_| nav.push(Route::Bookmarks)>
                        "Bookmarks"
                    </button>
                </Show>
                <Show when=move || role().is_some()>
                    <button class="nav-link logout" on:click=logout>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
