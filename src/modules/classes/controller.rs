use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::{RequireAdmin, RequireTeacher};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{
    AssignTeacherDto, AssignTeacherResponse, Class, ClassWithNames, CreateClassDto, UpdateClassDto,
};
use super::service::ClassService;

/// Create a class; the code must be unique, case-insensitively
#[utoipa::path(
    post,
    path = "/class",
    request_body = CreateClassDto,
    responses(
        (status = 201, description = "Class created", body = Class),
        (status = 409, description = "Class code already registered"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Classes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_class(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ValidatedJson(dto): ValidatedJson<CreateClassDto>,
) -> Result<(StatusCode, Json<Class>), AppError> {
    let class = ClassService::create_class(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(class)))
}

/// List all classes with course and teacher names
#[utoipa::path(
    get,
    path = "/class",
    responses(
        (status = 200, description = "List of classes", body = Vec<ClassWithNames>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Classes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_classes(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<ClassWithNames>>, AppError> {
    let classes = ClassService::get_classes(&state.db).await?;
    Ok(Json(classes))
}

/// List the classes assigned to a teacher
#[utoipa::path(
    get,
    path = "/class/teacher/{teacher_id}",
    params(("teacher_id" = i32, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Classes assigned to the teacher", body = Vec<Class>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Classes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _staff))]
pub async fn get_classes_by_teacher(
    State(state): State<AppState>,
    _staff: RequireTeacher,
    Path(teacher_id): Path<i32>,
) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::get_classes_by_teacher(&state.db, teacher_id).await?;
    Ok(Json(classes))
}

/// Look up a class by its code (case-insensitive)
#[utoipa::path(
    get,
    path = "/class/code/{code}",
    params(("code" = String, Path, description = "Class code")),
    responses(
        (status = 200, description = "Class details", body = Class),
        (status = 404, description = "Class not found"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Classes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_class_by_code(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(code): Path<String>,
) -> Result<Json<Class>, AppError> {
    let class = ClassService::get_class_by_code(&state.db, &code).await?;
    Ok(Json(class))
}

/// Look up a class by id
#[utoipa::path(
    get,
    path = "/class/{id}",
    params(("id" = i32, Path, description = "Class ID")),
    responses(
        (status = 200, description = "Class details", body = Class),
        (status = 404, description = "Class not found"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Classes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_class_by_id(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<Class>, AppError> {
    let class = ClassService::get_class_by_id(&state.db, id).await?;
    Ok(Json(class))
}

/// Update a class
#[utoipa::path(
    put,
    path = "/class/{id}",
    params(("id" = i32, Path, description = "Class ID")),
    request_body = UpdateClassDto,
    responses(
        (status = 200, description = "Class updated", body = Class),
        (status = 404, description = "Class not found"),
        (status = 409, description = "Class code already registered"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Classes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_class(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateClassDto>,
) -> Result<Json<Class>, AppError> {
    let class = ClassService::update_class(&state.db, id, dto).await?;
    Ok(Json(class))
}

/// Assign a teacher to a set of classes in one atomic update
#[utoipa::path(
    put,
    path = "/class/assign-teacher",
    request_body = AssignTeacherDto,
    responses(
        (status = 200, description = "Teacher assigned", body = AssignTeacherResponse),
        (status = 409, description = "Teacher not registered"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Classes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn assign_teacher(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<AssignTeacherDto>,
) -> Result<Json<AssignTeacherResponse>, AppError> {
    let response =
        ClassService::assign_teacher(&state.db, dto.teacher_id, &dto.selected_classes).await?;
    Ok(Json(response))
}

/// Delete a class
#[utoipa::path(
    delete,
    path = "/class/{id}",
    params(("id" = i32, Path, description = "Class ID")),
    responses(
        (status = 204, description = "Class deleted"),
        (status = 404, description = "Class not found"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Classes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_class(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    ClassService::delete_class(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
