//! Home and Fallback Pages

use leptos::prelude::*;

use crate::components::{Footer, Navbar, MSG_LOGIN_REQUIRED};
use crate::context::use_app_context;
use crate::models::Role;
use crate::navigation::{use_navigator, Route};
use crate::pages::{AdminPage, BookmarksPage};

/// `/`: the page matching the stored role
#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();

    let role = Memo::new(move |_| {
        let _ = ctx.session_version.get();
        ctx.api().credentials().session_role()
    });

    move || match role.get() {
        Some(Role::Admin) => view! { <AdminPage /> }.into_any(),
        Some(Role::Member) => view! { <BookmarksPage /> }.into_any(),
        None => view! {
            <div class="page">
                <Navbar />
                <main class="page-main">
                    <p class="access-message">{MSG_LOGIN_REQUIRED}</p>
                </main>
                <Footer />
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let nav = use_navigator();

    view! {
        <div class="page">
            <Navbar />
            <main class="page-main">
                <h1 class="page-title">"Page not found"</h1>
                <button class="nav-link" on:click=move |_| nav.push(Route::Home)>
                    "Back to start"
                </button>
            </main>
            <Footer />
        </div>
    }
}
