use crate::{
    auth::Claims,
    error::{self, DatabaseError, Result},
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::{NaiveDate, Utc};
use entity::{
    attendance::{self, constraints::*},
    faculty_profiles,
};
use sea_orm::{EntityTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    student_id: Uuid,
    course_id: Uuid,
    date: NaiveDate,
    #[serde(default)]
    is_present: bool,
    #[serde(default)]
    #[validate(length(max = 200))]
    remarks: String,
    marked_by_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct Response {
    id: Uuid,
}

pub async fn create_attendance<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    // the caller's own faculty profile wins over an explicit marker id
    let marked_by = match faculty_profiles::Entity::find_by_user(claims.sub)
        .one(state.db())
        .await?
    {
        Some(profile) => Some(profile.id),
        None => request.marked_by_id,
    };

    let id = Uuid::new_v4();

    let record = attendance::ActiveModel {
        id: Set(id),
        student_id: Set(request.student_id),
        course_id: Set(request.course_id),
        date: Set(request.date),
        is_present: Set(request.is_present),
        remarks: Set(request.remarks),
        marked_by: Set(marked_by),
        marked_at: Set(Utc::now().naive_utc()),
    };

    let result = attendance::Entity::insert(record)
        .exec_without_returning(state.db())
        .await;

    match result {
        Err(err) if err.unique_violation(UC_ATTENDANCE_STUDENT_COURSE_DATE) => {
            return Err(error::DUPLICATE_ATTENDANCE)
        }
        Err(err)
            if err.foreign_key_violation(FK_ATTENDANCE_STUDENT)
                || err.foreign_key_violation(FK_ATTENDANCE_COURSE)
                || err.foreign_key_violation(FK_ATTENDANCE_MARKED_BY) =>
        {
            return Err(error::INVALID_REFERENCE)
        }
        r => {
            r?;
        }
    };

    Ok((StatusCode::CREATED, Json(Response { id })))
}
