//! Request middleware and extractors.
//!
//! - [`auth`]: bearer-token authentication ([`auth::AuthUser`])
//! - [`role`]: role-set authorization (middleware and extractors)
//!
//! Flow: the client presents `Authorization: Bearer <token>`; `AuthUser`
//! verifies signature and expiry and exposes the claims; role checks
//! reject with 403 when the claim's role is not in the set an endpoint
//! accepts.

pub mod auth;
pub mod role;
