use crate::{
    error::{self, DatabaseError, Result},
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::NaiveDate;
use entity::departments::{self, constraints::*};
use sea_orm::{EntityTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 100))]
    name: String,
    #[validate(length(min = 1, max = 10))]
    code: String,
    #[serde(default)]
    description: String,
    head_of_department: Option<Uuid>,
    established_date: Option<NaiveDate>,
}

#[derive(Serialize)]
pub struct Response {
    id: Uuid,
}

pub async fn create_department<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let id = Uuid::new_v4();

    let department = departments::ActiveModel {
        id: Set(id),
        name: Set(request.name),
        code: Set(request.code),
        description: Set(request.description),
        head_of_department: Set(request.head_of_department),
        established_date: Set(request.established_date),
        is_active: Set(true),
    };

    let result = departments::Entity::insert(department)
        .exec_without_returning(state.db())
        .await;

    match result {
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

    Ok((StatusCode::CREATED, Json(Response { id })))
}
