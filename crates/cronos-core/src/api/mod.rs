//! REST API client module for the Cronos service.
//!
//! This module provides the `ApiClient` for communicating with the remote
//! authentication and tenant endpoints, and the `Backend` trait the rest of
//! the crate is written against.
//!
//! Authenticated requests carry the session token as a bearer credential.

pub mod backend;
pub mod client;
pub mod error;

pub use backend::Backend;
pub use client::ApiClient;
pub use error::ApiError;
