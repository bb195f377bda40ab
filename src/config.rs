//! Frontend Configuration
//!
//! Compile-time settings for the recipe API and browser storage keys.

/// API origin used when `RECIPE_API_BASE` is not set at build time
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// localStorage key holding the bearer token
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// localStorage key holding the role flag returned by login
pub const ROLE_KEY: &str = "role";

/// Path of the recipe editor, served outside this app
pub const EDIT_RECIPE_PATH: &str = "/edit-recipe-page/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin of the recipe API, without trailing slash
    pub api_base: String,
}

impl AppConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Build-time configuration (`RECIPE_API_BASE=https://... trunk build`)
    pub fn from_build_env() -> Self {
        Self::new(option_env!("RECIPE_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    /// Absolute URL for an API path such as `/recipesall`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_single_slash() {
        let config = AppConfig::new("http://api.local/");
        assert_eq!(config.endpoint("/recipesall"), "http://api.local/recipesall");
        assert_eq!(config.endpoint("posts"), "http://api.local/posts");
    }

    #[test]
    fn test_default_base() {
        assert_eq!(AppConfig::default().endpoint("/posts"), "http://127.0.0.1:5000/posts");
    }
}
