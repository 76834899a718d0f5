use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::middleware::role::require_admin;
use crate::state::AppState;

use super::controller::{
    assign_teacher, create_class, delete_class, get_class_by_code, get_class_by_id, get_classes,
    get_classes_by_teacher, update_class,
};

pub fn init_classes_router(state: AppState) -> Router<AppState> {
    // Roster assignment is admin-only, enforced at the route layer; the
    // remaining admin-only handlers use the RequireAdmin extractor.
    let assign_router = Router::new()
        .route("/assign-teacher", put(assign_teacher))
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    Router::new()
        .route("/", post(create_class).get(get_classes))
        .route("/teacher/{teacher_id}", get(get_classes_by_teacher))
        .route("/code/{code}", get(get_class_by_code))
        .route(
            "/{id}",
            get(get_class_by_id)
                .put(update_class)
                .delete(delete_class),
        )
        .merge(assign_router)
}
