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

/// Routes for course assignments
///
/// # Authenticated actions (faculty see their own rows only)
/// GET    /academics/assignments
/// GET    /academics/assignments/:id
///
/// # Admin actions
/// POST   /academics/assignments
/// PATCH  /academics/assignments/:id
/// DELETE /academics/assignments/:id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list::list_assignments::<S>))
        .route(
            "/",
            post(create::create_assignment::<S>).layer(PermissionsLayer::new(&[UserRole::Admin])),
        )
        .route("/:id", get(list::get_assignment::<S>))
        .route(
            "/:id",
            patch(update::update_assignment::<S>).layer(PermissionsLayer::new(&[UserRole::Admin])),
        )
        .route(
            "/:id",
            delete(delete::delete_assignment::<S>)
                .layer(PermissionsLayer::new(&[UserRole::Admin])),
        )
}
