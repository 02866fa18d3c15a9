mod create;
mod delete;
mod list;
mod mine;
mod update;

use crate::{middlewares::PermissionsLayer, state::StateTrait};
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use entity::users::UserRole;

/// Routes for attendance records
///
/// # Authenticated actions (role-scoped visibility)
/// GET    /academics/attendance
/// GET    /academics/attendance/my_attendance
/// GET    /academics/attendance/:id
///
/// # Admin actions
/// POST   /academics/attendance
/// PATCH  /academics/attendance/:id
/// DELETE /academics/attendance/:id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list::list_attendance::<S>))
        .route(
            "/",
            post(create::create_attendance::<S>).layer(PermissionsLayer::new(&[UserRole::Admin])),
        )
        .route("/my_attendance", get(mine::my_attendance::<S>))
        .route("/:id", get(list::get_attendance::<S>))
        .route(
            "/:id",
            patch(update::update_attendance::<S>).layer(PermissionsLayer::new(&[UserRole::Admin])),
        )
        .route(
            "/:id",
            delete(delete::delete_attendance::<S>).layer(PermissionsLayer::new(&[UserRole::Admin])),
        )
}
