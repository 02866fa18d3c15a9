use crate::{
    auth::{self, JwtTrait},
    error::{self, Result},
    extractors::Json,
    StateTrait,
};
use axum::extract::State;
use entity::users;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct Request {
    username: String,
    password: String,
}

#[derive(Serialize)]
pub struct Response {
    token: String,
}

pub async fn issue_token<S: StateTrait>(
    State(state): State<S>,
    Json(request): Json<Request>,
) -> Result<Json<Response>> {
    let user = users::Entity::find_by_username(&request.username)
        .one(state.db())
        .await?
        .ok_or(error::WRONG_CREDENTIALS)?;

    // a disabled account must be indistinguishable from a wrong password
    if !user.is_active || !auth::verify_password(&request.password, &user.password_hash) {
        return Err(error::WRONG_CREDENTIALS);
    }

    let token = state.jwt().issue(&user)?;

    Ok(Json(Response { token }))
}
