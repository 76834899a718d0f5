#![allow(dead_code)]

use axum::Router;
use quadro::config::cors::CorsConfig;
use quadro::config::jwt::JwtConfig;
use quadro::modules::auth::model::{Role, UserDisplay};
use quadro::router::init_router;
use quadro::state::AppState;
use quadro::utils::jwt::create_access_token;
use quadro::utils::password::hash_password;
use sqlx::PgPool;

pub const TEST_JWT_SECRET: &str = "integration_test_secret_key";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: Some(TEST_JWT_SECRET.to_string()),
        token_expiry: 86400,
    }
}

/// Connects to the database named by `DATABASE_URL` and applies
/// migrations. Integration tests are `#[ignore]`d so they only run
/// against a provisioned Postgres.
pub async fn setup_pool() -> PgPool {
    dotenvy::dotenv().ok();
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

    let pool = PgPool::connect(&database_url).await.unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

pub fn setup_app(pool: PgPool) -> Router {
    let state = AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

/// 11-digit CPF-shaped identifier, unique per call.
pub fn unique_cpf() -> String {
    format!("{:011}", uuid::Uuid::new_v4().as_u128() % 100_000_000_000)
}

pub fn unique_code(prefix: &str) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, &suffix[..8])
}

/// Inserts a credential into the partition table for `role` and
/// returns the new id.
pub async fn seed_identity(pool: &PgPool, role: Role, cpf: &str, password: &str) -> i32 {
    let hashed = hash_password(password).unwrap();
    let sql = match role {
        Role::Admin => {
            "INSERT INTO admins (cpf, name, password, phone) VALUES ($1, $2, $3, $4) RETURNING id"
        }
        Role::Teacher => {
            "INSERT INTO teachers (cpf, name, password, phone) VALUES ($1, $2, $3, $4) RETURNING id"
        }
        Role::Student => {
            "INSERT INTO students (cpf, name, password, phone) VALUES ($1, $2, $3, $4) RETURNING id"
        }
    };

    sqlx::query_scalar::<_, i32>(sql)
        .bind(cpf)
        .bind("Test User")
        .bind(&hashed)
        .bind("+55 11 99999-0000")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn seed_course(pool: &PgPool) -> i32 {
    sqlx::query_scalar::<_, i32>("INSERT INTO courses (name) VALUES ($1) RETURNING id")
        .bind("Test Course")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Inserts a class with no assigned teacher and returns the new id.
pub async fn seed_class(pool: &PgPool, code: &str, course_id: i32) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO classes (code, name, shift, schedule, start_date, end_date, course_id)
         VALUES ($1, $2, 'morning', 'mon-wed 08:00', '2026-02-01', '2026-06-30', $3)
         RETURNING id",
    )
    .bind(code)
    .bind("Test Class")
    .bind(course_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn class_teacher_id(pool: &PgPool, class_id: i32) -> Option<i32> {
    sqlx::query_scalar::<_, Option<i32>>("SELECT teacher_id FROM classes WHERE id = $1")
        .bind(class_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Mints a bearer token with the test signing key.
pub fn bearer_for(subject_id: i32, role: Role) -> String {
    let token = create_access_token(
        subject_id,
        role,
        UserDisplay {
            name: "Test User".to_string(),
            phone: None,
            picture: None,
        },
        &test_jwt_config(),
    )
    .unwrap();
    format!("Bearer {}", token)
}
