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

/// Routes for faculty profiles
///
/// # Authenticated actions (role-scoped visibility)
/// GET    /accounts/faculty
/// GET    /accounts/faculty/my_profile
/// GET    /accounts/faculty/:id
/// PATCH  /accounts/faculty/:id   (admin or the owning faculty member)
///
/// # Admin actions
/// POST   /accounts/faculty
/// DELETE /accounts/faculty/:id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list::list_faculty::<S>))
        .route(
            "/",
            post(create::create_faculty::<S>).layer(PermissionsLayer::new(&[UserRole::Admin])),
        )
        .route("/my_profile", get(profile::my_profile::<S>))
        .route("/:id", get(list::get_faculty::<S>))
        .route("/:id", patch(update::update_faculty::<S>))
        .route(
            "/:id",
            delete(delete::delete_faculty::<S>).layer(PermissionsLayer::new(&[UserRole::Admin])),
        )
}
