//! Path-to-screen mapping and session guards.
//!
//! # Design
//! - Guards only check token presence; a stale token still renders and the view's own fetch
//!   reports the failure.
//! - The root path and unknown paths always land on the client login.

use crate::core::session::SessionState;
use transdesk_api_models::Role;

/// Delay between a successful login and the redirect to the file view.
pub const LOGIN_REDIRECT_DELAY_MS: u32 = 500;

/// Screens reachable in the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    /// `/`
    Root,
    /// `/{role}/login`
    Login(Role),
    /// `/{role}/signup`
    Signup(Role),
    /// `/{role}/files`, gated on the role's token.
    Files(Role),
    /// Anything else.
    NotFound,
}

impl Screen {
    /// Role whose token gates this screen.
    #[must_use]
    pub const fn required_role(self) -> Option<Role> {
        match self {
            Self::Files(role) => Some(role),
            _ => None,
        }
    }
}

/// Outcome of evaluating a screen's guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the screen.
    Render(Screen),
    /// Navigate elsewhere instead.
    Redirect(Screen),
}

/// Evaluate the guard for `screen` against the current session.
#[must_use]
pub fn resolve(screen: Screen, session: &SessionState) -> RouteDecision {
    if matches!(screen, Screen::Root | Screen::NotFound) {
        return RouteDecision::Redirect(Screen::Login(Role::Client));
    }
    match screen.required_role() {
        Some(role) if !session.has_token(role) => RouteDecision::Redirect(Screen::Login(role)),
        _ => RouteDecision::Render(screen),
    }
}

/// Where a successful login lands.
#[must_use]
pub const fn after_login(role: Role) -> Screen {
    Screen::Files(role)
}

/// Where a successful signup lands.
#[must_use]
pub const fn after_signup(role: Role) -> Screen {
    Screen::Login(role)
}

/// Where logout lands.
#[must_use]
pub const fn after_logout(role: Role) -> Screen {
    Screen::Login(role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::MemoryStorage;

    fn session_with(role: Role, token: &str) -> SessionState {
        let mut session = SessionState::default();
        session.set_token(&MemoryStorage::default(), role, token.to_string());
        session
    }

    #[test]
    fn root_always_redirects_to_client_login() {
        let session = session_with(Role::Admin, "a");
        assert_eq!(
            resolve(Screen::Root, &session),
            RouteDecision::Redirect(Screen::Login(Role::Client))
        );
        assert_eq!(
            resolve(Screen::NotFound, &session),
            RouteDecision::Redirect(Screen::Login(Role::Client))
        );
    }

    #[test]
    fn gated_screens_need_their_own_role() {
        let client_only = session_with(Role::Client, "c");
        assert_eq!(
            resolve(Screen::Files(Role::Client), &client_only),
            RouteDecision::Render(Screen::Files(Role::Client))
        );
        assert_eq!(
            resolve(Screen::Files(Role::Admin), &client_only),
            RouteDecision::Redirect(Screen::Login(Role::Admin))
        );
    }

    #[test]
    fn any_non_empty_token_passes_the_guard() {
        let stale = session_with(Role::Admin, "expired-but-present");
        assert_eq!(
            resolve(Screen::Files(Role::Admin), &stale),
            RouteDecision::Render(Screen::Files(Role::Admin))
        );
        let empty = session_with(Role::Admin, "");
        assert_eq!(
            resolve(Screen::Files(Role::Admin), &empty),
            RouteDecision::Redirect(Screen::Login(Role::Admin))
        );
    }

    #[test]
    fn auth_screens_render_without_tokens() {
        let session = SessionState::default();
        for role in Role::all() {
            assert_eq!(
                resolve(Screen::Login(role), &session),
                RouteDecision::Render(Screen::Login(role))
            );
            assert_eq!(
                resolve(Screen::Signup(role), &session),
                RouteDecision::Render(Screen::Signup(role))
            );
        }
    }

    #[test]
    fn only_file_screens_are_gated() {
        for role in Role::all() {
            assert_eq!(Screen::Files(role).required_role(), Some(role));
            assert_eq!(Screen::Login(role).required_role(), None);
            assert_eq!(Screen::Signup(role).required_role(), None);
        }
        assert_eq!(Screen::Root.required_role(), None);
        assert_eq!(Screen::NotFound.required_role(), None);
    }

    #[test]
    fn transitions_stay_within_role() {
        assert_eq!(after_login(Role::Admin), Screen::Files(Role::Admin));
        assert_eq!(after_signup(Role::Client), Screen::Login(Role::Client));
        assert_eq!(after_logout(Role::Admin), Screen::Login(Role::Admin));
    }
}
