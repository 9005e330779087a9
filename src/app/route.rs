// ABOUTME: Client-side routes and the guard that keeps signed-out users off protected screens

use tracing::{debug, info};

use super::auth::AuthState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Landing,
    SignIn,
    Dashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::SignIn => "/signin",
            Route::Dashboard => "/dashboard",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Route::Landing),
            "/signin" => Some(Route::SignIn),
            "/dashboard" => Some(Route::Dashboard),
            _ => None,
        }
    }

    pub fn requires_auth(self) -> bool {
        matches!(self, Route::Dashboard)
    }
}

#[derive(Debug, Default)]
pub struct Router {
    current: Route,
}

impl Router {
    pub fn new(initial: Route) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn navigate(&mut self, to: Route) {
        if self.current != to {
            debug!("Navigating {} -> {}", self.current.path(), to.path());
            self.current = to;
        }
    }
}

/// Redirect to sign-in when the current screen needs a session and there is none.
///
/// Returns whether the user is authenticated so callers can render conditionally.
pub fn guard(auth: &AuthState, router: &mut Router) -> bool {
    let authenticated = auth.is_authenticated();
    if !authenticated && router.current().requires_auth() {
        info!(
            "Not authenticated, redirecting from {} to sign-in",
            router.current().path()
        );
        router.navigate(Route::SignIn);
    }
    authenticated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::auth::AuthStatus;

    #[test]
    fn test_guard_redirects_unauthenticated_dashboard() {
        let auth = AuthState::with_status(AuthStatus::Unauthenticated);
        let mut router = Router::new(Route::Dashboard);

        assert!(!guard(&auth, &mut router));
        assert_eq!(router.current(), Route::SignIn);
    }

    #[test]
    fn test_guard_treats_unresolved_check_as_signed_out() {
        let auth = AuthState::new();
        let mut router = Router::new(Route::Dashboard);

        assert!(!guard(&auth, &mut router));
        assert_eq!(router.current(), Route::SignIn);
    }

    #[test]
    fn test_guard_leaves_public_routes_alone() {
        let auth = AuthState::with_status(AuthStatus::Unauthenticated);
        let mut router = Router::new(Route::Landing);

        assert!(!guard(&auth, &mut router));
        assert_eq!(router.current(), Route::Landing);
    }

    #[test]
    fn test_guard_allows_authenticated_dashboard() {
        let auth = AuthState::with_status(AuthStatus::Authenticated);
        let mut router = Router::new(Route::Dashboard);

        assert!(guard(&auth, &mut router));
        assert_eq!(router.current(), Route::Dashboard);
    }

    #[test]
    fn test_route_paths_round_trip() {
        for route in [Route::Landing, Route::SignIn, Route::Dashboard] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/lists"), None);
    }
}
