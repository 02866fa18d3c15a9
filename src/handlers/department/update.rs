use crate::{
    error::{self, DatabaseError, Result},
    extractors::ValidatedJson,
    utils::set_option,
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use entity::departments::{self, constraints::*};
use sea_orm::{DbErr, EntityTrait, Set};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 100))]
    name: Option<String>,
    #[validate(length(min = 1, max = 10))]
    code: Option<String>,
    description: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    head_of_department: Option<Option<Uuid>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    established_date: Option<Option<NaiveDate>>,
    is_active: Option<bool>,
}

pub async fn update_department<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<StatusCode> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::DEPARTMENT_NOT_FOUND);
    };

    if request.name.is_none()
        && request.code.is_none()
        && request.description.is_none()
        && request.head_of_department.is_none()
        && request.established_date.is_none()
        && request.is_active.is_none()
    {
        return Ok(StatusCode::NO_CONTENT);
    }

    let active_model = departments::ActiveModel {
        id: Set(id),
        name: set_option(request.name),
        code: set_option(request.code),
        description: set_option(request.description),
        head_of_department: set_option(request.head_of_department),
        established_date: set_option(request.established_date),
        is_active: set_option(request.is_active),
    };

    let res = departments::Entity::update(active_model).exec(state.db()).await;

    match res {
        Err(DbErr::RecordNotFound(_)) => return Err(error::DEPARTMENT_NOT_FOUND),
        Err(err) if err.unique_violation(UC_DEPARTMENTS_NAME) => {
            return Err(error::DUPLICATE_DEPARTMENT_NAME)
        }
        Err(err) if err.unique_violation(UC_DEPARTMENTS_CODE) => {
            return Err(error::DUPLICATE_DEPARTMENT_CODE)
        }
        Err(err) if err.foreign_key_violation(FK_DEPARTMENTS_HEAD) => {
            return Err(error::INVALID_REFERENCE)
        }
        r => {
            r?;
        }
    };

    Ok(StatusCode::NO_CONTENT)
}
