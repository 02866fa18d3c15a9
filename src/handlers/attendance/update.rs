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
use entity::attendance::{self, constraints::*};
use sea_orm::{DbErr, EntityTrait, Set};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    date: Option<NaiveDate>,
    is_present: Option<bool>,
    #[validate(length(max = 200))]
    remarks: Option<String>,
}

pub async fn update_attendance<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<StatusCode> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::ATTENDANCE_NOT_FOUND);
    };

    if request.date.is_none() && request.is_present.is_none() && request.remarks.is_none() {
        return Ok(StatusCode::NO_CONTENT);
    }

    let active_model = attendance::ActiveModel {
        id: Set(id),
        date: set_option(request.date),
        is_present: set_option(request.is_present),
        remarks: set_option(request.remarks),
        ..Default::default()
    };

    let res = attendance::Entity::update(active_model).exec(state.db()).await;

    match res {
        Err(DbErr::RecordNotFound(_)) => return Err(error::ATTENDANCE_NOT_FOUND),
        Err(err) if err.unique_violation(UC_ATTENDANCE_STUDENT_COURSE_DATE) => {
            return Err(error::DUPLICATE_ATTENDANCE)
        }
        r => {
            r?;
        }
    };

    Ok(StatusCode::NO_CONTENT)
}
