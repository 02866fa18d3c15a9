use crate::{
    error::{self, Result},
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::student_profiles;
use sea_orm::{DbErr, EntityTrait, Set};
use uuid::Uuid;

/// Profiles are soft-deleted so existing enrollments and attendance keep
/// their history.
pub async fn delete_student<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::STUDENT_PROFILE_NOT_FOUND);
    };

    let active_model = student_profiles::ActiveModel {
        id: Set(id),
        is_active: Set(false),
        ..Default::default()
    };

    let res = student_profiles::Entity::update(active_model)
        .exec(state.db())
        .await;

    match res {
        Err(DbErr::RecordNotFound(_)) => return Err(error::STUDENT_PROFILE_NOT_FOUND),
        r => {
            r?;
        }
    };

    Ok(StatusCode::NO_CONTENT)
}
