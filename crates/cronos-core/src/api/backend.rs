use crate::models::{AuthResponse, LoginRequest, PublicTenant, RegisterRequest, UserProfile};

use super::ApiError;

/// The remote operations the client depends on.
///
/// `ApiClient` implements this over HTTP; tests substitute an in-process stub.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// `POST /auth/login`
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;

    /// `POST /auth/register`
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;

    /// `GET /auth/me`, with the token attached when there is one
    async fn current_user(&self, token: Option<&str>) -> Result<UserProfile, ApiError>;

    /// `GET /public/tenants/{slug}`, unauthenticated
    async fn public_tenant(&self, slug: &str) -> Result<PublicTenant, ApiError>;
}
