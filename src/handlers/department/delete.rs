use crate::{
    error::{self, Result},
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::departments;
use sea_orm::{DbErr, EntityTrait, Set};
use uuid::Uuid;

/// Soft delete so the department's courses stay resolvable.
pub async fn delete_department<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::DEPARTMENT_NOT_FOUND);
    };

    let active_model = departments::ActiveModel {
        id: Set(id),
        is_active: Set(false),
        ..Default::default()
    };

    let res = departments::Entity::update(active_model).exec(state.db()).await;

    match res {
        Err(DbErr::RecordNotFound(_)) => return Err(error::DEPARTMENT_NOT_FOUND),
        r => {
            r?;
        }
    };

    Ok(StatusCode::NO_CONTENT)
}
