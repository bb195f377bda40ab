//! List Row Projection
//!
//! What each list row shows, independent of markup.

use crate::api::encode_component;
use crate::config::EDIT_RECIPE_PATH;
use crate::models::{Post, RecipeSummary};
use crate::store::RecordSet;

pub const EMPTY_BOOKMARKS: &str = "No bookmarked recipes found.";
pub const EMPTY_RECIPES: &str = "No recipes found.";
pub const LOADING_RECIPES: &str = "Loading recipes...";

/// One admin list row; `key` is the recipe id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRow {
    pub key: String,
    pub title: String,
}

pub fn recipe_rows(recipes: &[RecipeSummary]) -> Vec<RecipeRow> {
    recipes
        .iter()
        .map(|recipe| RecipeRow {
            key: recipe.id.clone(),
            title: recipe.name.clone(),
        })
        .collect()
}

/// Text shown in place of the admin list, `None` when there are rows.
/// A failed first fetch settles into the empty notice, not the loading one.
pub fn recipes_notice(recipes: &RecordSet<RecipeSummary>) -> Option<&'static str> {
    if !recipes.is_settled() {
        Some(LOADING_RECIPES)
    } else if recipes.is_empty() {
        Some(EMPTY_RECIPES)
    } else {
        None
    }
}

/// Text shown in place of the bookmark cards, `None` when there are posts
pub fn bookmarks_notice(posts: &RecordSet<Post>) -> Option<&'static str> {
    posts.is_empty().then_some(EMPTY_BOOKMARKS)
}

/// Editor location for a recipe, id carried as the `id` query parameter
pub fn edit_location(id: &str) -> String {
    format!("{}?id={}", EDIT_RECIPE_PATH, encode_component(id))
}

/// Short preview of a post body for cards
pub fn excerpt(content: &str, max_chars: usize) -> String {
    let trimmed = content.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_match_records() {
        let recipes = vec![
            RecipeSummary { id: "1".into(), name: "Soup".into() },
            RecipeSummary { id: "2".into(), name: "Salad".into() },
        ];
        let rows = recipe_rows(&recipes);

        assert_eq!(rows.len(), recipes.len());
        for (row, recipe) in rows.iter().zip(&recipes) {
            assert_eq!(row.title, recipe.name);
            assert_eq!(row.key, recipe.id);
        }
    }

    #[test]
    fn test_recipes_notice_states() {
        let mut recipes: RecordSet<RecipeSummary> = RecordSet::default();
        let ticket = recipes.begin_fetch();
        assert_eq!(recipes_notice(&recipes), Some("Loading recipes..."));

        recipes.mark_failed(ticket);
        assert_eq!(recipes_notice(&recipes), Some("No recipes found."));

        let ticket = recipes.begin_fetch();
        recipes.replace(ticket, vec![RecipeSummary { id: "1".into(), name: "Soup".into() }]);
        assert_eq!(recipes_notice(&recipes), None);
    }

    #[test]
    fn test_edit_location() {
        assert_eq!(edit_location("42"), "/edit-recipe-page/?id=42");
        assert_eq!(edit_location("a&b"), "/edit-recipe-page/?id=a%26b");
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("  short  ", 10), "short");
        assert_eq!(excerpt("abcdef ghij", 7), "abcdef…");
    }
}
