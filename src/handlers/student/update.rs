use crate::{
    auth::Claims,
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
use entity::{
    student_profiles::{self, constraints::*},
    users::UserRole,
};
use sea_orm::{EntityTrait, Set};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 20))]
    student_id: Option<String>,
    enrollment_date: Option<NaiveDate>,
    current_semester: Option<i32>,
    #[validate(length(max = 100))]
    program: Option<String>,
    #[validate(length(max = 100))]
    emergency_contact_name: Option<String>,
    #[validate(length(max = 17))]
    emergency_contact_phone: Option<String>,
    is_active: Option<bool>,
}

pub async fn update_student<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<StatusCode> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::STUDENT_PROFILE_NOT_FOUND);
    };

    let profile = student_profiles::Entity::find_by_id(id)
        .one(state.db())
        .await?
        .ok_or(error::STUDENT_PROFILE_NOT_FOUND)?;

    // cross-role rows are read-only
    let allowed = match claims.role {
        UserRole::Admin => true,
        UserRole::Student => profile.user_id == claims.sub,
        UserRole::Faculty => false,
    };

    if !allowed {
        return Err(error::NOT_ENOUGH_PERMISSIONS);
    }

    if request.student_id.is_none()
        && request.enrollment_date.is_none()
        && request.current_semester.is_none()
        && request.program.is_none()
        && request.emergency_contact_name.is_none()
        && request.emergency_contact_phone.is_none()
        && request.is_active.is_none()
    {
        return Ok(StatusCode::NO_CONTENT);
    }

    let active_model = student_profiles::ActiveModel {
        id: Set(id),
        student_id: set_option(request.student_id),
        enrollment_date: set_option(request.enrollment_date),
        current_semester: set_option(request.current_semester),
        program: set_option(request.program),
        emergency_contact_name: set_option(request.emergency_contact_name),
        emergency_contact_phone: set_option(request.emergency_contact_phone),
        is_active: set_option(request.is_active),
        ..Default::default()
    };

    let res = student_profiles::Entity::update(active_model)
        .exec(state.db())
        .await;

    match res {
        Err(err) if err.unique_violation(UC_STUDENT_PROFILES_STUDENT_ID) => {
            return Err(error::DUPLICATE_STUDENT_ID)
        }
        r => {
            r?;
        }
    };

    Ok(StatusCode::NO_CONTENT)
}
