use crate::{
    error::{self, Result},
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::courses;
use sea_orm::{DbErr, EntityTrait, Set};
use uuid::Uuid;

/// Soft delete so enrollments and attendance for the course keep resolving.
pub async fn delete_course<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::COURSE_NOT_FOUND);
    };

    let active_model = courses::ActiveModel {
        id: Set(id),
        is_active: Set(false),
        ..Default::default()
    };

    let res = courses::Entity::update(active_model).exec(state.db()).await;

    match res {
        Err(DbErr::RecordNotFound(_)) => return Err(error::COURSE_NOT_FOUND),
        r => {
            r?;
        }
    };

    Ok(StatusCode::NO_CONTENT)
}
