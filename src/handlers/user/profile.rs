use super::list::Response;
use crate::{
    auth::Claims,
    error::{self, Result},
    extractors::Json,
    StateTrait,
};
use axum::extract::State;
use entity::users;
use sea_orm::EntityTrait;

pub async fn profile<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
) -> Result<Json<Response>> {
    let res = users::Entity::find_by_id(claims.sub)
        .into_model::<Response>()
        .one(state.db())
        .await?;

    let Some(user) = res else {
        return Err(error::USER_NOT_FOUND);
    };

    Ok(Json(user))
}
