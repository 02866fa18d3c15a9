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
    faculty_profiles::{self, constraints::*},
    users::UserRole,
};
use sea_orm::{EntityTrait, Set};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 20))]
    employee_id: Option<String>,
    #[validate(length(min = 1, max = 100))]
    department: Option<String>,
    #[validate(length(min = 1, max = 100))]
    designation: Option<String>,
    joining_date: Option<NaiveDate>,
    #[validate(length(max = 200))]
    qualification: Option<String>,
    experience_years: Option<i32>,
    is_active: Option<bool>,
}

pub async fn update_faculty<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<StatusCode> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::FACULTY_PROFILE_NOT_FOUND);
    };

    let profile = faculty_profiles::Entity::find_by_id(id)
        .one(state.db())
        .await?
        .ok_or(error::FACULTY_PROFILE_NOT_FOUND)?;

    // cross-role rows are read-only
    let allowed = match claims.role {
        UserRole::Admin => true,
        UserRole::Faculty => profile.user_id == claims.sub,
        UserRole::Student => false,
    };

    if !allowed {
        return Err(error::NOT_ENOUGH_PERMISSIONS);
    }

    if request.employee_id.is_none()
        && request.department.is_none()
        && request.designation.is_none()
        && request.joining_date.is_none()
        && request.qualification.is_none()
        && request.experience_years.is_none()
        && request.is_active.is_none()
    {
        return Ok(StatusCode::NO_CONTENT);
    }

    let active_model = faculty_profiles::ActiveModel {
        id: Set(id),
        employee_id: set_option(request.employee_id),
        department: set_option(request.department),
        designation: set_option(request.designation),
        joining_date: set_option(request.joining_date),
        qualification: set_option(request.qualification),
        experience_years: set_option(request.experience_years),
        is_active: set_option(request.is_active),
        ..Default::default()
    };

    let res = faculty_profiles::Entity::update(active_model)
        .exec(state.db())
        .await;

    match res {
        Err(err) if err.unique_violation(UC_FACULTY_PROFILES_EMPLOYEE_ID) => {
            return Err(error::DUPLICATE_EMPLOYEE_ID)
        }
        r => {
            r?;
        }
    };

    Ok(StatusCode::NO_CONTENT)
}
