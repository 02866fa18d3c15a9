use crate::{
    auth::Claims,
    error::{self, Result},
    extractors::Json,
    StateTrait,
};
use axum::extract::{Path, State};
use chrono::NaiveDate;
use entity::academic_years;
use sea_orm::{EntityTrait, FromQueryResult};
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize, FromQueryResult)]
pub struct Response {
    pub id: Uuid,
    pub year: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_current: bool,
}

pub async fn list_academic_years<S: StateTrait>(
    State(state): State<S>,
    _claims: Claims,
) -> Result<Json<Vec<Response>>> {
    let res = academic_years::Entity::find()
        .into_model::<Response>()
        .all(state.db())
        .await?;

    Ok(Json(res))
}

pub async fn get_academic_year<S: StateTrait>(
    State(state): State<S>,
    _claims: Claims,
    Path(id): Path<String>,
) -> Result<Json<Response>> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::ACADEMIC_YEAR_NOT_FOUND);
    };

    let res = academic_years::Entity::find_by_id(id)
        .into_model::<Response>()
        .one(state.db())
        .await?;

    let Some(year) = res else {
        return Err(error::ACADEMIC_YEAR_NOT_FOUND);
    };

    Ok(Json(year))
}
