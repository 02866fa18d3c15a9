use crate::{
    error::{self, DatabaseError, Result},
    extractors::Json,
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use entity::enrollments::{self, constraints::*, Grade};
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Request {
    student_id: Uuid,
    course_id: Uuid,
    academic_year_id: Uuid,
    grade: Option<Grade>,
    grade_points: Option<Decimal>,
}

#[derive(Serialize)]
pub struct Response {
    id: Uuid,
}

pub async fn create_enrollment<S: StateTrait>(
    State(state): State<S>,
    Json(request): Json<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let id = Uuid::new_v4();

    let enrollment = enrollments::ActiveModel {
        id: Set(id),
        student_id: Set(request.student_id),
        course_id: Set(request.course_id),
        academic_year_id: Set(request.academic_year_id),
        enrolled_at: Set(Utc::now().naive_utc()),
        grade: Set(request.grade),
        grade_points: Set(request.grade_points),
        is_active: Set(true),
    };

    let result = enrollments::Entity::insert(enrollment)
        .exec_without_returning(state.db())
        .await;

    match result {
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

    Ok((StatusCode::CREATED, Json(Response { id })))
}
