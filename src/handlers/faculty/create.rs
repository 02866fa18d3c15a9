use crate::{
    error::{self, DatabaseError, Result},
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::NaiveDate;
use entity::{
    faculty_profiles::{self, constraints::*},
    users::{self, UserRole},
};
use sea_orm::{EntityTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    user: Uuid,
    #[validate(length(min = 1, max = 20))]
    employee_id: String,
    #[validate(length(min = 1, max = 100))]
    department: String,
    #[validate(length(min = 1, max = 100))]
    designation: String,
    joining_date: NaiveDate,
    #[serde(default)]
    #[validate(length(max = 200))]
    qualification: String,
    #[serde(default)]
    experience_years: i32,
}

#[derive(Serialize)]
pub struct Response {
    id: Uuid,
}

pub async fn create_faculty<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let user = users::Entity::find_by_id(request.user)
        .one(state.db())
        .await?
        .ok_or(error::INVALID_REFERENCE)?;

    if user.role != UserRole::Faculty {
        return Err(error::WRONG_USER_ROLE);
    }

    let id = Uuid::new_v4();

    let profile = faculty_profiles::ActiveModel {
        id: Set(id),
        user_id: Set(request.user),
        employee_id: Set(request.employee_id),
        department: Set(request.department),
        designation: Set(request.designation),
        joining_date: Set(request.joining_date),
        qualification: Set(request.qualification),
        experience_years: Set(request.experience_years),
        is_active: Set(true),
    };

    let result = faculty_profiles::Entity::insert(profile)
        .exec_without_returning(state.db())
        .await;

    match result {
        Err(err) if err.unique_violation(UC_FACULTY_PROFILES_USER) => {
            return Err(error::PROFILE_ALREADY_EXISTS)
        }
        Err(err) if err.unique_violation(UC_FACULTY_PROFILES_EMPLOYEE_ID) => {
            return Err(error::DUPLICATE_EMPLOYEE_ID)
        }
        r => {
            r?;
        }
    };

    Ok((StatusCode::CREATED, Json(Response { id })))
}
