//! Protected Route Component
//!
//! Renders its children only for a logged-in caller whose stored role is
//! one of `allowed_roles`.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Role;

pub const MSG_LOGIN_REQUIRED: &str = "Please log in to continue.";
pub const MSG_FORBIDDEN: &str = "You do not have access to this page.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    LoginRequired,
    Forbidden,
}

pub fn check_access(has_token: bool, role: Option<Role>, allowed_roles: &[Role]) -> Access {
    if !has_token {
        return Access::LoginRequired;
    }
    match role {
        Some(role) if allowed_roles.contains(&role) => Access::Granted,
        _ => Access::Forbidden,
    }
}

#[component]
pub fn ProtectedRoute(
    #[prop(into)] allowed_roles: Vec<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let ctx = use_app_context();
    let roles_label = format!("{:?}", allowed_roles);

    let access = Memo::new(move |_| {
        let _ = ctx.session_version.get();
        let credentials = ctx.api().credentials();
        check_access(
            credentials.access_token().is_some(),
            credentials.role(),
            &allowed_roles,
        )
    });

    move || match access.get() {
        Access::Granted => children().into_any(),
        Access::LoginRequired => {
            log::info!("[GATE] no access token, showing login notice");
            view! { <p class="access-message">{MSG_LOGIN_REQUIRED}</p> }.into_any()
        }
        Access::Forbidden => {
            log::warn!("[GATE] stored role not in {}", roles_label);
            view! { <p class="access-message">{MSG_FORBIDDEN}</p> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_token_requires_login() {
        assert_eq!(check_access(false, Some(Role::Admin), &[Role::Admin]), Access::LoginRequired);
    }

    #[test]
    fn test_role_membership() {
        assert_eq!(check_access(true, Some(Role::Admin), &[Role::Admin]), Access::Granted);
        assert_eq!(check_access(true, Some(Role::Member), &[Role::Admin]), Access::Forbidden);
        assert_eq!(check_access(true, None, &[Role::Member]), Access::Forbidden);
        assert_eq!(
            check_access(true, Some(Role::Member), &[Role::Admin, Role::Member]),
            Access::Granted
        );
    }
}
