//! Bookmarks Page
//!
//! Shows the caller's bookmarked posts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{DialogBox, Footer, LikeIntent, Navbar, PostCard};
use crate::context::use_app_context;
use crate::error::ApiError;
use crate::models::Post;
use crate::render::bookmarks_notice;
use crate::scope::RequestScope;
use crate::store::{BookmarksState, BookmarksStateStoreFields, BookmarksStore};
use crate::sync::{apply_fetch, apply_like, FetchFailurePolicy, LikeChange};

#[component]
pub fn BookmarksPage() -> impl IntoView {
    let ctx = use_app_context();
    let state: BookmarksStore = Store::new(BookmarksState::default());
    let scope = RequestScope::new();

    on_cleanup({
        let scope = scope.clone();
        move || scope.cancel_all()
    });

    // Load bookmarks on mount; failures are logged and the empty state stays
    let ticket = state.posts().write().begin_fetch();
    spawn_local({
        let scope = scope.clone();
        async move {
            let result = scope.run(ctx.api().list_bookmarked()).await;
            if matches!(result, Err(ApiError::Cancelled)) {
                return;
            }
            apply_fetch(&mut state.posts().write(), ticket, result, FetchFailurePolicy::LogOnly);
        }
    });

    let on_like = Callback::new(move |intent: LikeIntent| {
        let scope = scope.clone();
        spawn_local(async move {
            let api = ctx.api();
            let result = match intent.change {
                LikeChange::Like => scope.run(api.like_post(&intent.smid)).await,
                LikeChange::Unlike => scope.run(api.unlike_post(&intent.smid)).await,
            };
            if let Ok(ack) = &result {
                log::info!("[BOOKMARKS] {}", ack.message);
            }
            if matches!(result, Err(ApiError::Cancelled)) {
                return;
            }
            let dialog = apply_like(&mut state.posts().write(), &intent.recipe_id, intent.change, result);
            if let Some(dialog) = dialog {
                state.dialog().set(dialog);
            }
        });
    });

    let likes_of = move |recipe_id: String| {
        Signal::derive(move || {
            state
                .posts()
                .read()
                .records()
                .iter()
                .find(|post| post.recipe_id == recipe_id)
                .map(|post| post.likes)
                .unwrap_or_default()
        })
    };

    view! {
        <div class="page bookmarks-page">
            <Navbar />
            <main class="page-main">
                <h1 class="page-title">"Your Bookmarked Recipes"</h1>
                <div class="post-list">
                    <For
                        each=move || state.posts().read().records().to_vec()
                        key=|post: &Post| post.recipe_id.clone()
                        children=move |post: Post| {
                            let likes = likes_of(post.recipe_id.clone());
                            view! { <PostCard post=post likes=likes on_like=on_like /> }
                        }
                    />
                    {move || {
                        bookmarks_notice(&state.posts().read())
                            .map(|notice| view! { <p class="empty-state">{notice}</p> })
                    }}
                </div>
            </main>
            <Footer />
            <DialogBox
                dialog=Signal::derive(move || state.dialog().get())
                on_close=Callback::new(move |_| state.dialog().write().close())
            />
        </div>
    }
}
