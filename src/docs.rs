use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse, Role, UserDisplay};
use crate::modules::classes::model::{
    AssignTeacherDto, AssignTeacherResponse, Class, ClassWithNames, CreateClassDto, SelectedClass,
    UpdateClassDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login,
        crate::modules::classes::controller::create_class,
        crate::modules::classes::controller::get_classes,
        crate::modules::classes::controller::get_classes_by_teacher,
        crate::modules::classes::controller::get_class_by_code,
        crate::modules::classes::controller::get_class_by_id,
        crate::modules::classes::controller::update_class,
        crate::modules::classes::controller::assign_teacher,
        crate::modules::classes::controller::delete_class,
    ),
    components(
        schemas(
            Role,
            UserDisplay,
            LoginRequest,
            LoginResponse,
            ErrorResponse,
            Class,
            ClassWithNames,
            CreateClassDto,
            UpdateClassDto,
            SelectedClass,
            AssignTeacherDto,
            AssignTeacherResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Role-scoped login"),
        (name = "Classes", description = "Class registry and roster assignment")
    ),
    info(
        title = "Quadro API",
        version = "0.1.0",
        description = "School administration REST API with role-scoped JWT authentication and class roster management.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
