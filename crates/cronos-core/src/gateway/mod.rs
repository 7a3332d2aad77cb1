//! Authentication gateway.
//!
//! Login, registration, logout and profile lookups against the remote
//! service. Every operation returns an `AuthOutcome`, a closed set of
//! failures that views can branch on without digging through HTTP errors.
//!
//! Successful login and registration are the only places a session is
//! written; logout and the dashboard's go-home action are the only places it
//! is cleared.

pub mod auth;
pub mod form;
pub mod outcome;

pub use auth::{AuthGateway, LOGIN_FAILED_MESSAGE, REGISTER_FAILED_MESSAGE};
pub use form::RegistrationForm;
pub use outcome::{AuthFailure, AuthOutcome, FailureKind};
