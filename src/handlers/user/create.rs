use crate::{
    auth,
    error::{self, DatabaseError, Result},
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::{NaiveDate, Utc};
use entity::users::{self, constraints::*, UserRole};
use sea_orm::{EntityTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 150))]
    username: String,
    #[validate(length(min = 8))]
    password: String,
    #[validate(email)]
    email: String,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    role: UserRole,
    #[serde(default)]
    #[validate(length(max = 17))]
    phone: String,
    date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    address: String,
}

#[derive(Serialize)]
pub struct Response {
    id: Uuid,
}

pub async fn create_user<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let id = Uuid::new_v4();
    let now = Utc::now().naive_utc();

    let user = users::ActiveModel {
        id: Set(id),
        username: Set(request.username),
        password_hash: Set(auth::hash_password(&request.password)?),
        email: Set(request.email),
        first_name: Set(request.first_name),
        last_name: Set(request.last_name),
        role: Set(request.role),
        phone: Set(request.phone),
        date_of_birth: Set(request.date_of_birth),
        address: Set(request.address),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let result = users::Entity::insert(user)
        .exec_without_returning(state.db())
        .await;

    match result {
        Err(err) if err.unique_violation(UC_USERS_USERNAME) => {
            return Err(error::DUPLICATE_USERNAME)
        }
        r => {
            r?;
        }
    };

    Ok((StatusCode::CREATED, Json(Response { id })))
}
