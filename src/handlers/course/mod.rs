mod create;
mod delete;
mod list;
mod update;

use crate::{middlewares::PermissionsLayer, state::StateTrait};
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use entity::users::UserRole;

/// Routes for courses
///
/// # Authenticated actions
/// GET    /academics/courses?department=<uuid>&semester=<n>
/// GET    /academics/courses/:id
///
/// # Admin actions
/// POST   /academics/courses
/// PATCH  /academics/courses/:id
/// DELETE /academics/courses/:id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list::list_courses::<S>))
        .route(
            "/",
            post(create::create_course::<S>).layer(PermissionsLayer::new(&[UserRole::Admin])),
        )
        .route("/:id", get(list::get_course::<S>))
        .route(
            "/:id",
            patch(update::update_course::<S>).layer(PermissionsLayer::new(&[UserRole::Admin])),
        )
        .route(
            "/:id",
            delete(delete::delete_course::<S>).layer(PermissionsLayer::new(&[UserRole::Admin])),
        )
}
