//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod dialog_box;
mod footer;
mod navbar;
mod post_card;
mod protected_route;
mod recipe_list;

pub use delete_confirm_button::DeleteConfirmButton;
pub use dialog_box::DialogBox;
pub use footer::Footer;
pub use navbar::Navbar;
pub use post_card::{LikeIntent, PostCard};
pub use protected_route::{check_access, Access, ProtectedRoute, MSG_FORBIDDEN, MSG_LOGIN_REQUIRED};
pub use recipe_list::RecipeList;
