use super::list::Response;
use crate::{
    auth::Claims,
    error::{self, Result},
    extractors::Json,
    StateTrait,
};
use axum::extract::State;
use entity::academic_years;

pub async fn current_academic_year<S: StateTrait>(
    State(state): State<S>,
    _claims: Claims,
) -> Result<Json<Response>> {
    let res = academic_years::Entity::find_current()
        .into_model::<Response>()
        .one(state.db())
        .await?;

    let Some(year) = res else {
        return Err(error::NO_CURRENT_ACADEMIC_YEAR);
    };

    Ok(Json(year))
}
