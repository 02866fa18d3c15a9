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

/// Routes for departments
///
/// # Authenticated actions
/// GET    /academics/departments
/// GET    /academics/departments/:id
///
/// # Admin actions
/// POST   /academics/departments
/// PATCH  /academics/departments/:id
/// DELETE /academics/departments/:id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list::list_departments::<S>))
        .route(
            "/",
            post(create::create_department::<S>).layer(PermissionsLayer::new(&[UserRole::Admin])),
        )
        .route("/:id", get(list::get_department::<S>))
        .route(
            "/:id",
            patch(update::update_department::<S>).layer(PermissionsLayer::new(&[UserRole::Admin])),
        )
        .route(
            "/:id",
            delete(delete::delete_department::<S>)
                .layer(PermissionsLayer::new(&[UserRole::Admin])),
        )
}
