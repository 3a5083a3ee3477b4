//! # tollgate-common
//!
//! Shared types for the tollgate authentication layer.
//!
//! This crate holds the pieces that both the HTTP client and the token
//! lifecycle core need to agree on: the upstream API configuration and the
//! wire types exchanged with the login endpoint.

pub mod auth;
pub mod config;

pub use auth::{ErrorBody, LoginRequest, LoginResponse};
pub use config::ApiConfig;
