use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// The closed set of identity partitions. Each variant maps to its own
/// credential table with a disjoint CPF uniqueness scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Role {
    /// Parses a client-supplied role string. `None` for anything outside
    /// the closed set; callers map that to identity-not-found since no
    /// partition lookup can occur.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "admin" => Some(Role::Admin),
            "teacher" => Some(Role::Teacher),
            "student" => Some(Role::Student),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display payload embedded in the token so the frontend can render the
/// signed-in user without another round trip. Not secret-proof: anyone
/// holding the token can read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDisplay {
    pub name: String,
    pub phone: Option<String>,
    pub picture: Option<String>,
}

/// JWT claims. One struct for all three partitions, discriminated by
/// `role`; `sub` is the id within that partition.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub role: Role,
    pub user: UserDisplay,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "cpf is required"))]
    pub cpf: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    /// Accepted values: `admin`, `teacher`, `student`. Parsed leniently;
    /// an unrecognized role behaves like an unknown identity.
    #[validate(length(min = 1, message = "role is required"))]
    pub role: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub current_role: Role,
    pub message: String,
}
