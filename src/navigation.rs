//! Navigation
//!
//! Minimal client-side routing: in-app pages switch through the History API,
//! pages served elsewhere (the recipe editor) get a full location change.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Admin,
    Bookmarks,
    NotFound,
}

impl Route {
    /// Route for a location pathname; query and fragment are ignored
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "" => Route::Home,
            "/admin" => Route::Admin,
            "/bookmarks" => Route::Bookmarks,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Admin => "/admin",
            Route::Bookmarks => "/bookmarks",
            Route::NotFound => "/404",
        }
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Current route plus the means to change it. Provided via context.
#[derive(Clone, Copy)]
pub struct Navigator {
    pub route: ReadSignal<Route>,
    set_route: WriteSignal<Route>,
}

impl Navigator {
    /// Create the navigator from the browser location and follow back/forward
    pub fn install() -> Self {
        let (route, set_route) = signal(Route::parse(&current_path()));

        let _ = window_event_listener(leptos::ev::popstate, move |_| {
            set_route.set(Route::parse(&current_path()));
        });

        Self { route, set_route }
    }

    /// Push an in-app route onto the history stack
    pub fn push(&self, route: Route) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(route.path())) {
                log::warn!("[NAV] pushState failed: {:?}", e);
            }
        }
        self.set_route.set(route);
    }

    /// Leave the app for a page it does not render
    pub fn hand_off(&self, url: &str) {
        log::info!("[NAV] leaving for {}", url);
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().assign(url) {
                log::error!("[NAV] navigation to {} failed: {:?}", url, e);
            }
        }
    }
}

pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/admin"), Route::Admin);
        assert_eq!(Route::parse("/admin/"), Route::Admin);
        assert_eq!(Route::parse("/bookmarks?x=1"), Route::Bookmarks);
        assert_eq!(Route::parse("/edit-recipe-page/"), Route::NotFound);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [Route::Home, Route::Admin, Route::Bookmarks] {
            assert_eq!(Route::parse(route.path()), route);
        }
    }
}
