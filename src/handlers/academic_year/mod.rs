mod create;
mod current;
mod delete;
mod list;
mod update;

use crate::{middlewares::PermissionsLayer, state::StateTrait};
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use entity::users::UserRole;

/// Routes for academic years
///
/// # Authenticated actions
/// GET    /academics/academic-years
/// GET    /academics/academic-years/current
/// GET    /academics/academic-years/:id
///
/// # Admin actions
/// POST   /academics/academic-years
/// PATCH  /academics/academic-years/:id
/// DELETE /academics/academic-years/:id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list::list_academic_years::<S>))
        .route(
            "/",
            post(create::create_academic_year::<S>)
                .layer(PermissionsLayer::new(&[UserRole::Admin])),
        )
        .route("/current", get(current::current_academic_year::<S>))
        .route("/:id", get(list::get_academic_year::<S>))
        .route(
            "/:id",
            patch(update::update_academic_year::<S>)
                .layer(PermissionsLayer::new(&[UserRole::Admin])),
        )
        .route(
            "/:id",
            delete(delete::delete_academic_year::<S>)
                .layer(PermissionsLayer::new(&[UserRole::Admin])),
        )
}
