//! Admin Page
//!
//! Lists every recipe with edit and delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{DialogBox, Footer, Navbar, RecipeList};
use crate::context::use_app_context;
use crate::error::ApiError;
use crate::feedback::MSG_FETCH_FAILED;
use crate::navigation::use_navigator;
use crate::render::{edit_location, recipe_rows, recipes_notice};
use crate::scope::RequestScope;
use crate::store::{AdminState, AdminStateStoreFields, AdminStore};
use crate::sync::{apply_delete, apply_fetch, FetchFailurePolicy};

const FETCH_POLICY: FetchFailurePolicy = FetchFailurePolicy::Dialog(MSG_FETCH_FAILED);

#[component]
pub fn AdminPage() -> impl IntoView {
    let ctx = use_app_context();
    let nav = use_navigator();
    let state: AdminStore = Store::new(AdminState::default());
    let scope = RequestScope::new();

    on_cleanup({
        let scope = scope.clone();
        move || scope.cancel_all()
    });

    // Load recipes on mount
    let ticket = state.recipes().write().begin_fetch();
    spawn_local({
        let scope = scope.clone();
        async move {
            let result = scope.run(ctx.api().list_all()).await;
            if matches!(result, Err(ApiError::Cancelled)) {
                return;
            }
            let dialog = apply_fetch(&mut state.recipes().write(), ticket, result, FETCH_POLICY);
            if let Some(dialog) = dialog {
                state.dialog().set(dialog);
            }
        }
    });

    let on_edit = Callback::new(move |id: String| {
        nav.hand_off(&edit_location(&id));
    });

    let on_delete = Callback::new(move |id: String| {
        let scope = scope.clone();
        spawn_local(async move {
            log::info!("[ADMIN] deleting recipe {}", id);
            let result = scope.run(ctx.api().delete_by_id(&id)).await;
            if matches!(result, Err(ApiError::Cancelled)) {
                return;
            }
            let dialog = apply_delete(&mut state.recipes().write(), &id, result);
            if let Some(dialog) = dialog {
                state.dialog().set(dialog);
            }
        });
    });

    view! {
        <div class="page admin-page">
            <Navbar />
            <main class="page-main">
                <section class="panel">
                    <h1 class="panel-title">"Manage Existing Recipes"</h1>
                    <For
                        each=move || recipe_rows(state.recipes().read().records())
                        key=|row| row.key.clone()
                        children=move |row| {
                            view! {
                                <RecipeList row=row on_edit=on_edit on_delete=on_delete />
                            }
                        }
                    />
                    {move || {
                        recipes_notice(&state.recipes().read())
                            .map(|notice| view! { <p class="panel-note">{notice}</p> })
                    }}
                </section>
            </main>
            <Footer />
            <DialogBox
                dialog=Signal::derive(move || state.dialog().get())
                on_close=Callback::new(move |_| state.dialog().write().close())
            />
        </div>
    }
}
