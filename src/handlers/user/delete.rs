use crate::{
    error::{self, Result},
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::users;
use sea_orm::EntityTrait;
use uuid::Uuid;

pub async fn delete_user<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::USER_NOT_FOUND);
    };

    let res = users::Entity::delete_by_id(id).exec(state.db()).await?;

    if res.rows_affected == 0 {
        return Err(error::USER_NOT_FOUND);
    }

    Ok(StatusCode::NO_CONTENT)
}
