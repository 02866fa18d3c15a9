mod create;
mod delete;
mod list;
mod profile;
mod update;

use crate::{middlewares::PermissionsLayer, state::StateTrait};
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use entity::users::UserRole;

/// Routes for student profiles
///
/// # Authenticated actions (role-scoped visibility)
/// GET    /accounts/students
/// GET    /accounts/students/my_profile
/// GET    /accounts/students/:id
/// PATCH  /accounts/students/:id   (admin or the owning student)
///
/// # Admin actions
/// POST   /accounts/students
/// DELETE /accounts/students/:id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list::list_students::<S>))
        .route(
            "/",
            post(create::create_student::<S>).layer(PermissionsLayer::new(&[UserRole::Admin])),
        )
        .route("/my_profile", get(profile::my_profile::<S>))
        .route("/:id", get(list::get_student::<S>))
        .route("/:id", patch(update::update_student::<S>))
        .route(
            "/:id",
            delete(delete::delete_student::<S>).layer(PermissionsLayer::new(&[UserRole::Admin])),
        )
}
