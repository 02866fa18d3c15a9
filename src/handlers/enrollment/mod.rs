mod create;
mod delete;
mod list;
mod mine;
mod update;

use crate::state::StateTrait;
use axum::{
    routing::{delete, get, patch, post},
    Router,
};

/// Routes for enrollments
///
/// Visibility is role-scoped: students see their own rows, faculty see rows
/// for courses they are assigned to, admins see everything. Writes are open
/// to any authenticated caller.
///
/// GET    /academics/enrollments
/// GET    /academics/enrollments/my_enrollments
/// GET    /academics/enrollments/:id
/// POST   /academics/enrollments
/// PATCH  /academics/enrollments/:id
/// DELETE /academics/enrollments/:id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list::list_enrollments::<S>))
        .route("/", post(create::create_enrollment::<S>))
        .route("/my_enrollments", get(mine::my_enrollments::<S>))
        .route("/:id", get(list::get_enrollment::<S>))
        .route("/:id", patch(update::update_enrollment::<S>))
        .route("/:id", delete(delete::delete_enrollment::<S>))
}
