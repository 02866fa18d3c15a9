use crate::{
    auth::Claims,
    error::{self, Result},
    extractors::Json,
    StateTrait,
};
use axum::extract::{Path, State};
use chrono::{NaiveDate, NaiveDateTime};
use entity::users::{self, UserRole};
use sea_orm::{EntityTrait, FromQueryResult};
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize, FromQueryResult)]
pub struct Response {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    pub address: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

pub async fn list_users<S: StateTrait>(
    State(state): State<S>,
    _claims: Claims,
) -> Result<Json<Vec<Response>>> {
    let res = users::Entity::find()
        .into_model::<Response>()
        .all(state.db())
        .await?;

    Ok(Json(res))
}

pub async fn get_user<S: StateTrait>(
    State(state): State<S>,
    _claims: Claims,
    Path(id): Path<String>,
) -> Result<Json<Response>> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::USER_NOT_FOUND);
    };

    let res = users::Entity::find_by_id(id)
        .into_model::<Response>()
        .one(state.db())
        .await?;

    let Some(user) = res else {
        return Err(error::USER_NOT_FOUND);
    };

    Ok(Json(user))
}
