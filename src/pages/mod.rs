//! Pages
//!
//! One component per route.

mod admin;
mod bookmarks;
mod home;

pub use admin::AdminPage;
pub use bookmarks::BookmarksPage;
pub use home::{HomePage, NotFoundPage};
