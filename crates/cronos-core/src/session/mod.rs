//! Session module for the persisted client session.
//!
//! This module provides:
//! - `SessionStore`: durable storage for the session token and tenant id
//! - `SessionData`: a validated session (non-empty token, optional tenant)
//! - `AuthState`: the two-state view of the store used by the route guard
//!
//! Sessions are persisted to disk and never expire on the client side.

pub mod store;

pub use store::{AuthState, SessionData, SessionError, SessionStore};
