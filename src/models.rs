//! Frontend Models
//!
//! Wire types returned by the recipe API. Field names follow the backend's
//! PascalCase JSON keys; unknown fields are ignored, missing required ones
//! fail decoding.

use serde::{Deserialize, Serialize};

/// Records with a stable identity, used for list keys and removal
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Entry of `GET /recipesall`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    #[serde(rename = "RecipeID")]
    pub id: String,
    #[serde(rename = "RecipeName")]
    pub name: String,
}

impl Keyed for RecipeSummary {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Public recipe post as listed by `GET /posts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Social media entry id; absent when the recipe was never shared
    #[serde(rename = "SMID", default)]
    pub smid: Option<String>,
    #[serde(rename = "RecipeID")]
    pub recipe_id: String,
    #[serde(rename = "RecipeName")]
    pub recipe_name: String,
    #[serde(rename = "RecipeContent", default)]
    pub recipe_content: Option<String>,
    #[serde(rename = "UserID", default)]
    pub user_id: Option<String>,
    #[serde(rename = "Likes", default)]
    pub likes: u32,
}

impl Keyed for Post {
    fn key(&self) -> &str {
        &self.recipe_id
    }
}

/// Body of `GET /posts`
#[derive(Debug, Clone, Deserialize)]
pub struct PostsEnvelope {
    pub posts: Vec<Post>,
}

/// Acknowledgment body of like/unlike/logout
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Request body for like/unlike
#[derive(Debug, Serialize)]
pub struct SmidArgs<'a> {
    pub smid: &'a str,
}

/// Caller role.
///
/// The backend stores the role as a boolean: `true` for regular members
/// (the signup default) and `false` for administrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum Role {
    Admin,
    Member,
}

impl From<bool> for Role {
    fn from(flag: bool) -> Self {
        if flag {
            Role::Member
        } else {
            Role::Admin
        }
    }
}

impl From<Role> for bool {
    fn from(role: Role) -> Self {
        matches!(role, Role::Member)
    }
}

impl Role {
    /// Parse the flag as stored in localStorage (`"true"`/`"false"`)
    pub fn from_stored(value: &str) -> Option<Self> {
        match value.trim().trim_matches('"') {
            "true" => Some(Role::Member),
            "false" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_stored(&self) -> &'static str {
        match self {
            Role::Member => "true",
            Role::Admin => "false",
        }
    }
}
