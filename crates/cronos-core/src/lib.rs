//! Core library for the Cronos booking client.
//!
//! This crate holds everything the client needs to decide who may see what:
//!
//! - `session`: the persisted session token and tenant id
//! - `api`: the HTTP client for the remote Cronos service
//! - `gateway`: login, registration, logout and profile lookups
//! - `router`: route parsing, the route guard and the navigator
//! - `tenant`: public tenant lookup for booking pages
//!
//! Nothing in here keeps global state. The application builds one
//! `SessionStore` at start-up and hands it to every component that needs it.

pub mod api;
pub mod config;
pub mod gateway;
pub mod models;
pub mod password;
pub mod router;
pub mod session;
pub mod tenant;

pub use api::{ApiClient, ApiError, Backend};
pub use config::Config;
pub use gateway::{AuthFailure, AuthGateway, AuthOutcome, FailureKind, RegistrationForm};
pub use router::{AccessClass, GuardDecision, Navigator, Page, Route, RouteGuard, View};
pub use session::{AuthState, SessionData, SessionError, SessionStore};
pub use tenant::{BookingContext, TenantPage};

#[cfg(test)]
mod test_support;
