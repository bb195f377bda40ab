//! Recipe List Row Component
//!
//! One admin row: recipe title with Edit and Delete actions bound to its id.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::render::RecipeRow;

#[component]
pub fn RecipeList(
    row: RecipeRow,
    /// Receives the recipe id
    #[prop(into)] on_edit: Callback<String>,
    /// Receives the recipe id
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let edit_id = row.key.clone();
    let delete_id = row.key.clone();

    view! {
        <div class="recipe-row" data-id=row.key.clone()>
            <span class="recipe-row-title">{row.title}</span>
            <div class="recipe-row-actions">
                <button
                    class="edit-btn"
                    on:click=move |_| on_edit.run(edit_id.clone())
                >
                    "Edit"
                </button>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    on_confirm=Callback::new(move |_| on_delete.run(delete_id.clone()))
                />
            </div>
        </div>
    }
}
