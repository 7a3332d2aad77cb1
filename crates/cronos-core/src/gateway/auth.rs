use tracing::{info, warn};

use crate::api::Backend;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, UserProfile};
use crate::router::Route;
use crate::session::SessionStore;

use super::{AuthFailure, AuthOutcome, FailureKind};

/// Shown when a login fails without a server message
pub const LOGIN_FAILED_MESSAGE: &str = "Failed to login. Please check your credentials.";

/// Shown when a registration fails without a server message
pub const REGISTER_FAILED_MESSAGE: &str = "Failed to register. Please try again.";

const PROFILE_FAILED_MESSAGE: &str = "Failed to load your profile.";

/// Auth operations over a `Backend`.
///
/// The gateway itself is stateless: the session is passed in explicitly to
/// every call that reads or writes it.
#[derive(Debug, Clone)]
pub struct AuthGateway<B> {
    backend: B,
}

impl<B: Backend> AuthGateway<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Log in and store the issued token.
    ///
    /// The session is only touched on success; a failed login leaves any
    /// existing session exactly as it was.
    pub async fn login(
        &self,
        session: &mut SessionStore,
        email: &str,
        password: &str,
    ) -> AuthOutcome<AuthResponse> {
        let request = LoginRequest::new(email.trim(), password);
        let response = self.backend.login(&request).await.map_err(|e| {
            warn!(error = %e, "Login failed");
            AuthFailure::from_api(&e, LOGIN_FAILED_MESSAGE)
        })?;

        if response.token().is_none() {
            warn!("Login response carried no token");
            return Err(AuthFailure::new(FailureKind::InvalidResponse, LOGIN_FAILED_MESSAGE));
        }

        Self::store_session(session, &response)?;
        info!(has_tenant = response.tenant_id().is_some(), "Login successful");
        Ok(response)
    }

    /// Register a new account.
    ///
    /// Registration counts as a login whenever the server issues a token:
    /// the token is stored just like `login` would. A response without a
    /// token leaves the session untouched, and `AuthResponse::token()` tells
    /// the caller it still has to log in.
    pub async fn register(
        &self,
        session: &mut SessionStore,
        request: &RegisterRequest,
    ) -> AuthOutcome<AuthResponse> {
        let response = self.backend.register(request).await.map_err(|e| {
            warn!(error = %e, "Registration failed");
            AuthFailure::from_api(&e, REGISTER_FAILED_MESSAGE)
        })?;

        if response.token().is_some() {
            Self::store_session(session, &response)?;
            info!("Registration successful, signed in");
        } else {
            info!("Registration successful, no token issued");
        }
        Ok(response)
    }

    /// Clear the session and send the visitor to the login page.
    pub fn logout(&self, session: &mut SessionStore) -> Route {
        session.clear();
        info!("Logged out");
        Route::Login
    }

    /// The dashboard's "home" action: drop the session, then go to `/`.
    pub fn go_home(&self, session: &mut SessionStore) -> Route {
        session.clear();
        info!("Session dropped on the way home");
        Route::Home
    }

    /// Look up the signed-in user. An expired or invalid token is just a
    /// `Rejected` failure; nothing here forces a re-login.
    pub async fn current_user(&self, session: &SessionStore) -> AuthOutcome<UserProfile> {
        self.backend
            .current_user(session.token())
            .await
            .map_err(|e| {
                warn!(error = %e, "Profile lookup failed");
                AuthFailure::from_api(&e, PROFILE_FAILED_MESSAGE)
            })
    }

    fn store_session(session: &mut SessionStore, response: &AuthResponse) -> AuthOutcome<()> {
        let token = response.token().unwrap_or_default();
        session
            .set(token, response.tenant_id())
            .map_err(|e| AuthFailure::from_session(&e))
    }
}
