use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A class record. `code` is stored case-folded and globally unique;
/// `teacher_id` is null until a roster assignment binds a teacher.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub shift: Option<String>,
    pub schedule: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub course_id: i32,
    pub teacher_id: Option<i32>,
}

/// Listing row with the joined course and teacher names.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassWithNames {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub shift: Option<String>,
    pub schedule: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub course_id: i32,
    pub teacher_id: Option<i32>,
    pub course_name: Option<String>,
    pub teacher_name: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassDto {
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub shift: Option<String>,
    pub schedule: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub course_id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClassDto {
    #[validate(length(min = 1, message = "code must not be empty"))]
    pub code: Option<String>,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub shift: Option<String>,
    pub schedule: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub course_id: Option<i32>,
    pub teacher_id: Option<i32>,
}

/// Class reference as the frontend submits it: the selection carries
/// whole class objects, but only the id matters here.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SelectedClass {
    pub id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignTeacherDto {
    pub teacher_id: i32,
    #[validate(length(min = 1, message = "selectedClasses must not be empty"))]
    pub selected_classes: Vec<SelectedClass>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignTeacherResponse {
    pub message: String,
    /// Rows actually modified. Not necessarily `selectedClasses.len()`:
    /// ids that match no class are silent no-ops.
    pub updated_count: u64,
}
