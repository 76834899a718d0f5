use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;

use super::model::{
    AssignTeacherResponse, Class, ClassWithNames, CreateClassDto, SelectedClass, UpdateClassDto,
};

const CLASS_COLUMNS: &str =
    "id, code, name, shift, schedule, start_date, end_date, course_id, teacher_id";

/// Case-folds a class code so uniqueness checks and lookups are
/// case-insensitive. Codes are stored in this form.
fn normalize_code(code: &str) -> String {
    code.trim().to_lowercase()
}

/// Collapses the selected classes to a deduplicated id list.
fn class_id_set(selected: &[SelectedClass]) -> Vec<i32> {
    let mut ids: Vec<i32> = selected.iter().map(|c| c.id).collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

pub struct ClassService;

impl ClassService {
    #[instrument(skip(db, dto), fields(code = %dto.code))]
    pub async fn create_class(db: &PgPool, dto: CreateClassDto) -> Result<Class, AppError> {
        let code = normalize_code(&dto.code);

        let existing = sqlx::query_scalar::<_, i32>("SELECT id FROM classes WHERE code = $1")
            .bind(&code)
            .fetch_optional(db)
            .await
            .map_err(|e| AppError::database(anyhow!("Failed to check class code: {}", e)))?;

        if existing.is_some() {
            return Err(AppError::conflict(anyhow!(
                "Class code is already registered"
            )));
        }

        let class = sqlx::query_as::<_, Class>(
            "INSERT INTO classes (code, name, shift, schedule, start_date, end_date, course_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, code, name, shift, schedule, start_date, end_date, course_id, teacher_id",
        )
        .bind(&code)
        .bind(&dto.name)
        .bind(&dto.shift)
        .bind(&dto.schedule)
        .bind(dto.start_date)
        .bind(dto.end_date)
        .bind(dto.course_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                // The pre-insert check can race with a concurrent create.
                if db_err.is_unique_violation() {
                    return AppError::conflict(anyhow!("Class code is already registered"));
                }
                if db_err.is_foreign_key_violation() {
                    return AppError::bad_request(anyhow!("Referenced course does not exist"));
                }
            }
            AppError::database(anyhow!("Failed to create class: {}", e))
        })?;

        Ok(class)
    }

    #[instrument(skip(db))]
    pub async fn get_classes(db: &PgPool) -> Result<Vec<ClassWithNames>, AppError> {
        let classes = sqlx::query_as::<_, ClassWithNames>(
            "SELECT c.id, c.code, c.name, c.shift, c.schedule, c.start_date, c.end_date,
                    c.course_id, c.teacher_id,
                    co.name AS course_name, t.name AS teacher_name
             FROM classes c
             LEFT JOIN courses co ON co.id = c.course_id
             LEFT JOIN teachers t ON t.id = c.teacher_id
             ORDER BY c.code",
        )
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow!("Failed to fetch classes: {}", e)))?;

        Ok(classes)
    }

    #[instrument(skip(db))]
    pub async fn get_classes_by_teacher(
        db: &PgPool,
        teacher_id: i32,
    ) -> Result<Vec<Class>, AppError> {
        let classes = sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE teacher_id = $1 ORDER BY code"
        ))
        .bind(teacher_id)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow!("Failed to fetch classes by teacher: {}", e)))?;

        Ok(classes)
    }

    #[instrument(skip(db))]
    pub async fn get_class_by_code(db: &PgPool, code: &str) -> Result<Class, AppError> {
        let class = sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE code = $1"
        ))
        .bind(normalize_code(code))
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow!("Failed to fetch class by code: {}", e)))?
        .ok_or_else(|| AppError::not_found(anyhow!("Class not found")))?;

        Ok(class)
    }

    #[instrument(skip(db))]
    pub async fn get_class_by_id(db: &PgPool, id: i32) -> Result<Class, AppError> {
        let class = sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow!("Failed to fetch class by id: {}", e)))?
        .ok_or_else(|| AppError::not_found(anyhow!("Class not found")))?;

        Ok(class)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_class(
        db: &PgPool,
        id: i32,
        dto: UpdateClassDto,
    ) -> Result<Class, AppError> {
        let existing = Self::get_class_by_id(db, id).await?;

        let code = dto
            .code
            .as_deref()
            .map(normalize_code)
            .unwrap_or(existing.code);
        let name = dto.name.unwrap_or(existing.name);
        let shift = dto.shift.or(existing.shift);
        let schedule = dto.schedule.or(existing.schedule);
        let start_date = dto.start_date.unwrap_or(existing.start_date);
        let end_date = dto.end_date.unwrap_or(existing.end_date);
        let course_id = dto.course_id.unwrap_or(existing.course_id);
        let teacher_id = dto.teacher_id.or(existing.teacher_id);

        let updated = sqlx::query_as::<_, Class>(
            "UPDATE classes
             SET code = $1, name = $2, shift = $3, schedule = $4, start_date = $5,
                 end_date = $6, course_id = $7, teacher_id = $8
             WHERE id = $9
             RETURNING id, code, name, shift, schedule, start_date, end_date, course_id, teacher_id",
        )
        .bind(&code)
        .bind(&name)
        .bind(&shift)
        .bind(&schedule)
        .bind(start_date)
        .bind(end_date)
        .bind(course_id)
        .bind(teacher_id)
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::conflict(anyhow!("Class code is already registered"));
                }
                if db_err.is_foreign_key_violation() {
                    return AppError::bad_request(anyhow!("Referenced record does not exist"));
                }
            }
            AppError::database(anyhow!("Failed to update class: {}", e))
        })?;

        Ok(updated)
    }

    /// Binds one teacher to every class in the selection.
    ///
    /// The rewrite is a single set-based UPDATE, so concurrent
    /// assignments over overlapping selections serialize in the
    /// database; readers never observe a partial batch. Ids that match
    /// no class are no-ops, and a prior assignment is overwritten
    /// without trace: a class has at most one teacher.
    #[instrument(skip(db, selected_classes), fields(class_count = selected_classes.len()))]
    pub async fn assign_teacher(
        db: &PgPool,
        teacher_id: i32,
        selected_classes: &[SelectedClass],
    ) -> Result<AssignTeacherResponse, AppError> {
        let teacher = sqlx::query_scalar::<_, i32>("SELECT id FROM teachers WHERE id = $1")
            .bind(teacher_id)
            .fetch_optional(db)
            .await
            .map_err(|e| AppError::database(anyhow!("Failed to look up teacher: {}", e)))?;

        if teacher.is_none() {
            return Err(AppError::conflict(anyhow!("Teacher not registered")));
        }

        let class_ids = class_id_set(selected_classes);

        let result = sqlx::query("UPDATE classes SET teacher_id = $1 WHERE id = ANY($2)")
            .bind(teacher_id)
            .bind(&class_ids)
            .execute(db)
            .await
            .map_err(|e| AppError::database(anyhow!("Failed to assign teacher: {}", e)))?;

        Ok(AssignTeacherResponse {
            message: "Enrollment completed successfully".to_string(),
            updated_count: result.rows_affected(),
        })
    }

    #[instrument(skip(db))]
    pub async fn delete_class(db: &PgPool, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM classes WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::database(anyhow!("Failed to delete class: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Class not found")));
        }

        Ok(())
    }
}
