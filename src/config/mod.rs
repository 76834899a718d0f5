//! Application configuration, loaded from environment variables.
//!
//! - [`cors`]: allowed CORS origins
//! - [`database`]: PostgreSQL pool initialization
//! - [`jwt`]: token signing key and lifetime

pub mod cors;
pub mod database;
pub mod jwt;
