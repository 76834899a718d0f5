use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::{burn_verification, verify_password};

use super::model::{LoginRequest, LoginResponse, Role, UserDisplay};

/// Credential record shape shared by all three partition tables.
#[derive(Debug, sqlx::FromRow)]
struct CredentialRow {
    id: i32,
    name: String,
    password: String,
    phone: Option<String>,
    picture: Option<String>,
}

pub struct AuthService;

impl AuthService {
    /// Resolves a CPF against the partition named by the request role,
    /// verifies the password, and mints a signed access token.
    ///
    /// Unknown role and unknown CPF both answer 404; a wrong password
    /// answers 401. Both miss paths burn a bcrypt verification first so
    /// response timing does not reveal whether the account exists.
    /// Without a configured signing key every call answers 500.
    #[instrument(skip(db, dto, jwt_config), fields(role = %dto.role))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        // A missing signing key fails the whole authentication path,
        // not just issuance: no lookup or verification runs without it.
        if jwt_config.secret.is_none() {
            return Err(AppError::config(anyhow!("Server configuration error")));
        }

        let Some(role) = Role::parse(&dto.role) else {
            burn_verification(&dto.password);
            return Err(AppError::not_found(anyhow!("Account not registered")));
        };

        let Some(credential) = Self::find_credential(db, role, &dto.cpf).await? else {
            burn_verification(&dto.password);
            return Err(AppError::not_found(not_registered(role)));
        };

        if !verify_password(&dto.password, &credential.password)? {
            return Err(AppError::unauthorized(anyhow!("Invalid CPF or password")));
        }

        let token = create_access_token(
            credential.id,
            role,
            UserDisplay {
                name: credential.name,
                phone: credential.phone,
                picture: credential.picture,
            },
            jwt_config,
        )?;

        Ok(LoginResponse {
            token,
            current_role: role,
            message: "Login successful".to_string(),
        })
    }

    /// Partition lookup. The match is exhaustive over the closed role
    /// set, so a new partition cannot be added without a query for it.
    async fn find_credential(
        db: &PgPool,
        role: Role,
        cpf: &str,
    ) -> Result<Option<CredentialRow>, AppError> {
        let sql = match role {
            Role::Admin => "SELECT id, name, password, phone, picture FROM admins WHERE cpf = $1",
            Role::Teacher => {
                "SELECT id, name, password, phone, picture FROM teachers WHERE cpf = $1"
            }
            Role::Student => {
                "SELECT id, name, password, phone, picture FROM students WHERE cpf = $1"
            }
        };

        sqlx::query_as::<_, CredentialRow>(sql)
            .bind(cpf)
            .fetch_optional(db)
            .await
            .map_err(|e| AppError::database(anyhow!("Failed to look up credential: {}", e)))
    }
}

fn not_registered(role: Role) -> anyhow::Error {
    match role {
        Role::Admin => anyhow!("Administrator not registered"),
        Role::Teacher => anyhow!("Teacher not registered"),
        Role::Student => anyhow!("Student not registered"),
    }
}
