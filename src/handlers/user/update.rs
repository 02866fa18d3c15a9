use crate::{
    auth,
    error::{self, DatabaseError, Result},
    extractors::ValidatedJson,
    utils::set_option,
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{NaiveDate, Utc};
use entity::users::{self, constraints::*, UserRole};
use sea_orm::{DbErr, EntityTrait, Set};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 150))]
    username: Option<String>,
    #[validate(length(min = 8))]
    password: Option<String>,
    #[validate(email)]
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    role: Option<UserRole>,
    #[validate(length(max = 17))]
    phone: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    date_of_birth: Option<Option<NaiveDate>>,
    address: Option<String>,
    is_active: Option<bool>,
}

pub async fn update_user<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<StatusCode> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::USER_NOT_FOUND);
    };

    // without this the ORM would generate an invalid sql statement
    if request.username.is_none()
        && request.password.is_none()
        && request.email.is_none()
        && request.first_name.is_none()
        && request.last_name.is_none()
        && request.role.is_none()
        && request.phone.is_none()
        && request.date_of_birth.is_none()
        && request.address.is_none()
        && request.is_active.is_none()
    {
        return Ok(StatusCode::NO_CONTENT);
    }

    let password_hash = match &request.password {
        Some(password) => Some(auth::hash_password(password)?),
        None => None,
    };

    let active_model = users::ActiveModel {
        id: Set(id),
        username: set_option(request.username),
        password_hash: set_option(password_hash),
        email: set_option(request.email),
        first_name: set_option(request.first_name),
        last_name: set_option(request.last_name),
        role: set_option(request.role),
        phone: set_option(request.phone),
        date_of_birth: set_option(request.date_of_birth),
        address: set_option(request.address),
        is_active: set_option(request.is_active),
        updated_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    let res = users::Entity::update(active_model).exec(state.db()).await;

    match res {
        Err(DbErr::RecordNotFound(_)) => return Err(error::USER_NOT_FOUND),
        Err(err) if err.unique_violation(UC_USERS_USERNAME) => {
            return Err(error::DUPLICATE_USERNAME)
        }
        r => {
            r?;
        }
    };

    Ok(StatusCode::NO_CONTENT)
}
