use super::list::{to_response, Response};
use crate::{
    auth::Claims,
    error::{self, Result},
    extractors::Json,
    StateTrait,
};
use axum::extract::State;
use entity::{enrollments, student_profiles, users::UserRole};
use sea_orm::{ColumnTrait, QueryFilter};

pub async fn my_enrollments<S: StateTrait>(
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

    let rows = enrollments::Entity::find_active()
        .filter(enrollments::Column::StudentId.eq(profile.id))
        .all(state.db())
        .await?;

    let mut response = Vec::with_capacity(rows.len());

    for enrollment in rows {
        response.push(to_response(state.db(), enrollment).await?);
    }

    Ok(Json(response))
}
