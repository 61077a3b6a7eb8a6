//! Route surface and the route guard.
//!
//! The guard is a pure predicate over current storage state: it re-reads
//! the buckets on every navigation, so a logout elsewhere is observed on
//! the next check rather than pushed.

use crate::session::SessionStore;

/// The storefront's route surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Public marketing landing page.
    Home,
    /// Public login page.
    Login,
    /// Public registration page.
    Register,
    /// The dashboard; gated by the route guard.
    Dashboard,
}

impl Route {
    /// URL path for this route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Whether this route requires an authenticated session.
    #[must_use]
    pub const fn requires_auth(self) -> bool {
        matches!(self, Self::Dashboard)
    }

    /// Parse a route from a URL path.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Home),
            "/login" => Some(Self::Login),
            "/register" => Some(Self::Register),
            "/dashboard" => Some(Self::Dashboard),
            _ => None,
        }
    }
}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Navigation proceeds to the requested route.
    Proceed(Route),
    /// Unauthenticated attempt at a gated route; go to the login page.
    RedirectToLogin,
}

/// Resolve a navigation attempt against the current session state.
#[must_use]
pub fn resolve(route: Route, sessions: &SessionStore) -> Navigation {
    if route.requires_auth() && !sessions.is_authenticated() {
        Navigation::RedirectToLogin
    } else {
        Navigation::Proceed(route)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use lilies_core::Email;

    use super::*;
    use crate::models::{Profile, Session};
    use crate::session::Persistence;
    use crate::storage::MemoryBucket;

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(MemoryBucket::new()), Arc::new(MemoryBucket::new()))
    }

    fn session() -> Session {
        Session {
            token: "token-1".to_owned(),
            profile: Profile {
                name: "Ada Obi".to_owned(),
                email: Email::parse("ada@example.com").unwrap(),
                phone: String::new(),
            },
        }
    }

    #[test]
    fn test_paths_roundtrip() {
        for route in [Route::Home, Route::Login, Route::Register, Route::Dashboard] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/nope"), None);
    }

    #[test]
    fn test_public_routes_never_redirect() {
        let sessions = store();
        for route in [Route::Home, Route::Login, Route::Register] {
            assert_eq!(resolve(route, &sessions), Navigation::Proceed(route));
        }
    }

    #[test]
    fn test_dashboard_redirects_without_session() {
        let sessions = store();
        assert_eq!(
            resolve(Route::Dashboard, &sessions),
            Navigation::RedirectToLogin
        );
    }

    #[test]
    fn test_dashboard_proceeds_with_session_in_either_bucket() {
        for persistence in [Persistence::Durable, Persistence::TabScoped] {
            let sessions = store();
            sessions.store(&session(), persistence).unwrap();
            assert_eq!(
                resolve(Route::Dashboard, &sessions),
                Navigation::Proceed(Route::Dashboard)
            );
        }
    }

    #[test]
    fn test_guard_reflects_logout_immediately() {
        let sessions = store();
        sessions.store(&session(), Persistence::Durable).unwrap();
        assert_eq!(
            resolve(Route::Dashboard, &sessions),
            Navigation::Proceed(Route::Dashboard)
        );

        sessions.clear().unwrap();
        assert_eq!(
            resolve(Route::Dashboard, &sessions),
            Navigation::RedirectToLogin
        );
    }
}
