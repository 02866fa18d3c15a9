use crate::{
    error::{self, DatabaseError, Result},
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::NaiveDate;
use entity::{
    student_profiles::{self, constraints::*},
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
    student_id: String,
    enrollment_date: NaiveDate,
    #[serde(default = "default_semester")]
    current_semester: i32,
    #[serde(default)]
    #[validate(length(max = 100))]
    program: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    emergency_contact_name: String,
    #[serde(default)]
    #[validate(length(max = 17))]
    emergency_contact_phone: String,
}

fn default_semester() -> i32 {
    1
}

#[derive(Serialize)]
pub struct Response {
    id: Uuid,
}

pub async fn create_student<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let user = users::Entity::find_by_id(request.user)
        .one(state.db())
        .await?
        .ok_or(error::INVALID_REFERENCE)?;

    if user.role != UserRole::Student {
        return Err(error::WRONG_USER_ROLE);
    }

    let id = Uuid::new_v4();

    let profile = student_profiles::ActiveModel {
        id: Set(id),
        user_id: Set(request.user),
        student_id: Set(request.student_id),
        enrollment_date: Set(request.enrollment_date),
        current_semester: Set(request.current_semester),
        program: Set(request.program),
        emergency_contact_name: Set(request.emergency_contact_name),
        emergency_contact_phone: Set(request.emergency_contact_phone),
        is_active: Set(true),
    };

    let result = student_profiles::Entity::insert(profile)
        .exec_without_returning(state.db())
        .await;

    match result {
        Err(err) if err.unique_violation(UC_STUDENT_PROFILES_USER) => {
            return Err(error::PROFILE_ALREADY_EXISTS)
        }
        Err(err) if err.unique_violation(UC_STUDENT_PROFILES_STUDENT_ID) => {
            return Err(error::DUPLICATE_STUDENT_ID)
        }
        r => {
            r?;
        }
    };

    Ok((StatusCode::CREATED, Json(Response { id })))
}
