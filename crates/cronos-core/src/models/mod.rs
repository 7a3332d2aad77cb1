//! Wire models for the Cronos REST API.
//!
//! Every endpoint gets an explicit request/response type so that payloads are
//! checked at the boundary instead of trusted:
//!
//! - `LoginRequest`, `RegisterRequest`, `AuthResponse`: `/auth/*`
//! - `UserProfile`: `/auth/me`
//! - `PublicTenant`: `/public/tenants/{slug}`

pub mod auth;
pub mod tenant;
pub mod user;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use tenant::PublicTenant;
pub use user::UserProfile;
