use super::list::{to_response, Response};
use crate::{
    auth::Claims,
    error::{self, Result},
    extractors::Json,
    StateTrait,
};
use axum::extract::State;
use entity::{
    faculty_profiles,
    users::{self, UserRole},
};

pub async fn my_profile<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
) -> Result<Json<Response>> {
    if claims.role != UserRole::Faculty {
        return Err(error::FACULTY_ONLY);
    }

    let res = faculty_profiles::Entity::find_by_user(claims.sub)
        .find_also_related(users::Entity)
        .one(state.db())
        .await?;

    let Some((profile, Some(user))) = res else {
        return Err(error::FACULTY_PROFILE_NOT_FOUND);
    };

    Ok(Json(to_response(profile, user)))
}
