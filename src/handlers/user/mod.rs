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

/// Routes for user accounts
///
/// # Authenticated actions
/// GET    /accounts/users
/// GET    /accounts/users/profile
/// GET    /accounts/users/:id
///
/// # Admin actions
/// POST   /accounts/users
/// PATCH  /accounts/users/:id
/// DELETE /accounts/users/:id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list::list_users::<S>))
        .route(
            "/",
            post(create::create_user::<S>).layer(PermissionsLayer::new(&[UserRole::Admin])),
        )
        .route("/profile", get(profile::profile::<S>))
        .route("/:id", get(list::get_user::<S>))
        .route(
            "/:id",
            patch(update::update_user::<S>).layer(PermissionsLayer::new(&[UserRole::Admin])),
        )
        .route(
            "/:id",
            delete(delete::delete_user::<S>).layer(PermissionsLayer::new(&[UserRole::Admin])),
        )
}
