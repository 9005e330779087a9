// ABOUTME: Authentication state holder shared by every screen that needs access control
// Owns the single authenticated flag; only its methods mutate it

use tracing::{info, warn};

use super::route::{Route, Router};
use crate::api::{ApiError, TubeShareClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStatus {
    /// Startup check has not resolved yet.
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

#[derive(Debug, Default)]
pub struct AuthState {
    status: AuthStatus,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(status: AuthStatus) -> Self {
        Self { status }
    }

    pub fn status(&self) -> AuthStatus {
        self.status
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated
    }

    /// Ask the auth service whether the current credentials hold a session.
    pub async fn check(&mut self, client: &TubeShareClient) -> bool {
        let result = client.check_auth().await;
        self.apply_check_result(result)
    }

    /// Collapse a check outcome into a status: only an HTTP 200 authenticates.
    pub fn apply_check_result(&mut self, result: Result<bool, ApiError>) -> bool {
        self.status = match result {
            Ok(true) => AuthStatus::Authenticated,
            Ok(false) => AuthStatus::Unauthenticated,
            Err(e) => {
                warn!("Auth check failed: {}", e);
                AuthStatus::Unauthenticated
            }
        };
        self.is_authenticated()
    }

    /// Trust the caller: mark the session live and open the dashboard.
    pub fn login(&mut self, router: &mut Router) {
        info!("User logged in");
        self.status = AuthStatus::Authenticated;
        router.navigate(Route::Dashboard);
    }

    /// Best-effort server logout, then sign out locally whatever happened.
    pub async fn logout(&mut self, client: &TubeShareClient, router: &mut Router) {
        if let Err(e) = client.logout().await {
            warn!("Logout request failed: {}", e);
        }
        self.sign_out_locally(router);
    }

    pub fn sign_out_locally(&mut self, router: &mut Router) {
        info!("User logged out");
        self.status = AuthStatus::Unauthenticated;
        router.navigate(Route::Landing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_not_authenticated() {
        let auth = AuthState::new();
        assert_eq!(auth.status(), AuthStatus::Unknown);
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_check_results_collapse_to_status() {
        let mut auth = AuthState::new();
        assert!(auth.apply_check_result(Ok(true)));
        assert_eq!(auth.status(), AuthStatus::Authenticated);

        assert!(!auth.apply_check_result(Ok(false)));
        assert_eq!(auth.status(), AuthStatus::Unauthenticated);

        auth.apply_check_result(Ok(true));
        assert!(!auth.apply_check_result(Err(ApiError::Status { status: 502 })));
        assert_eq!(auth.status(), AuthStatus::Unauthenticated);
    }

    #[test]
    fn test_login_and_local_sign_out_navigate() {
        let mut auth = AuthState::new();
        let mut router = Router::new(Route::SignIn);

        auth.login(&mut router);
        assert!(auth.is_authenticated());
        assert_eq!(router.current(), Route::Dashboard);

        auth.sign_out_locally(&mut router);
        assert!(!auth.is_authenticated());
        assert_eq!(router.current(), Route::Landing);
    }
}
