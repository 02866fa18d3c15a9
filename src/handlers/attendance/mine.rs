use super::list::{to_response, Response};
use crate::{
    auth::Claims,
    error::{self, Result},
    extractors::Json,
    StateTrait,
};
use axum::extract::State;
use entity::{attendance, student_profiles, users::UserRole};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

pub async fn my_attendance<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
) -> Result<Json<Vec<Response>>> {
    if claims.role != UserRole::Student {
        return Err(error::STUDENTS_ONLY);
    }

    let Some(profile) = student_profiles::Entity::find_by_user(claims.sub)
        .one(state.db())
        .await?
    else {
        return Ok(Json(Vec::new()));
    };

    let rows = attendance::Entity::find()
        .filter(attendance::Column::StudentId.eq(profile.id))
        .order_by_desc(attendance::Column::Date)
        .all(state.db())
        .await?;

    let mut response = Vec::with_capacity(rows.len());

    for record in rows {
        response.push(to_response(state.db(), record).await?);
    }

    Ok(Json(response))
}
