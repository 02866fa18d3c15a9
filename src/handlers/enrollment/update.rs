use super::list::scope_to_role;
use crate::{
    auth::Claims,
    error::{self, DatabaseError, Result},
    extractors::Json,
    utils::set_option,
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::enrollments::{self, constraints::*, Grade};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Request {
    student_id: Option<Uuid>,
    course_id: Option<Uuid>,
    academic_year_id: Option<Uuid>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    grade: Option<Option<Grade>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    grade_points: Option<Option<Decimal>>,
    is_active: Option<bool>,
}

pub async fn update_enrollment<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Path(id): Path<String>,
    Json(request): Json<Request>,
) -> Result<StatusCode> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::ENROLLMENT_NOT_FOUND);
    };

    // rows outside the caller's scope are invisible, not forbidden
    let select = enrollments::Entity::find().filter(enrollments::Column::Id.eq(id));

    let Some(select) = scope_to_role(state.db(), &claims, select).await? else {
        return Err(error::ENROLLMENT_NOT_FOUND);
    };

    if select.one(state.db()).await?.is_none() {
        return Err(error::ENROLLMENT_NOT_FOUND);
    }

    if request.student_id.is_none()
        && request.course_id.is_none()
        && request.academic_year_id.is_none()
        && request.grade.is_none()
        && request.grade_points.is_none()
        && request.is_active.is_none()
    {
        return Ok(StatusCode::NO_CONTENT);
    }

    let active_model = enrollments::ActiveModel {
        id: Set(id),
        student_id: set_option(request.student_id),
        course_id: set_option(request.course_id),
        academic_year_id: set_option(request.academic_year_id),
        grade: set_option(request.grade),
        grade_points: set_option(request.grade_points),
        is_active: set_option(request.is_active),
        ..Default::default()
    };

    let res = enrollments::Entity::update(active_model).exec(state.db()).await;

    match res {
        Err(err) if err.unique_violation(UC_ENROLLMENTS_STUDENT_COURSE_YEAR) => {
            return Err(error::DUPLICATE_ENROLLMENT)
        }
        Err(err)
            if err.foreign_key_violation(FK_ENROLLMENTS_STUDENT)
                || err.foreign_key_violation(FK_ENROLLMENTS_COURSE)
                || err.foreign_key_violation(FK_ENROLLMENTS_ACADEMIC_YEAR) =>
        {
            return Err(error::INVALID_REFERENCE)
        }
        r => {
            r?;
        }
    };

    Ok(StatusCode::NO_CONTENT)
}
