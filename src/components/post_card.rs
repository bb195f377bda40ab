//! Post Card Component
//!
//! Bookmarked recipe card with like controls.

use leptos::prelude::*;

use crate::models::Post;
use crate::render::excerpt;
use crate::sync::LikeChange;

const EXCERPT_CHARS: usize = 240;

/// Like/unlike request raised by a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeIntent {
    pub recipe_id: String,
    pub smid: String,
    pub change: LikeChange,
}

#[component]
pub fn PostCard(
    post: Post,
    /// Live like count from page state
    #[prop(into)] likes: Signal<u32>,
    #[prop(into)] on_like: Callback<LikeIntent>,
) -> impl IntoView {
    let body = post
        .recipe_content
        .as_deref()
        .map(|content| excerpt(content, EXCERPT_CHARS))
        .unwrap_or_default();

    // Posts that were never shared have no SMID and cannot be liked
    let controls = post.smid.clone().map(|smid| {
        let recipe_id = post.recipe_id.clone();
        let intent = move |change: LikeChange| LikeIntent {
            recipe_id: recipe_id.clone(),
            smid: smid.clone(),
            change,
        };
        let like = intent.clone();
        view! {
            <div class="post-card-likes">
                <button class="like-btn" on:click=move |_| on_like.run(like(LikeChange::Like))>
                    "Like"
                </button>
                <span class="like-count">{move || likes.get()}</span>
                <button class="unlike-btn" on:click=move |_| on_like.run(intent(LikeChange::Unlike))>
                    "Unlike"
                </button>
            </div>
        }
    });

    view! {
        <article class="post-card" data-id=post.recipe_id.clone()>
            <h2 class="post-card-title">{post.recipe_name.clone()}</h2>
            <p class="post-card-body">{body}</p>
            {controls}
        </article>
    }
}
