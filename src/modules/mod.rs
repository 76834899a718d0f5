pub mod auth;
pub mod classes;
