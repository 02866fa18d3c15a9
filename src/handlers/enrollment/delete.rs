use super::list::scope_to_role;
use crate::{
    auth::Claims,
    error::{self, Result},
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::enrollments;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

/// Withdrawing from a course is a soft delete, the row keeps its grade
/// history.
pub async fn delete_enrollment<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::ENROLLMENT_NOT_FOUND);
    };

    let select = enrollments::Entity::find().filter(enrollments::Column::Id.eq(id));

    let Some(select) = scope_to_role(state.db(), &claims, select).await? else {
        return Err(error::ENROLLMENT_NOT_FOUND);
    };

    if select.one(state.db()).await?.is_none() {
        return Err(error::ENROLLMENT_NOT_FOUND);
    }

    let active_model = enrollments::ActiveModel {
        id: Set(id),
        is_active: Set(false),
        ..Default::default()
    };

    enrollments::Entity::update(active_model).exec(state.db()).await?;

    Ok(StatusCode::NO_CONTENT)
}
