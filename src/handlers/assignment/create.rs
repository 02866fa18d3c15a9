use crate::{
    error::{self, DatabaseError, Result},
    extractors::Json,
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use entity::course_assignments::{self, constraints::*};
use sea_orm::{EntityTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Request {
    faculty_id: Uuid,
    course_id: Uuid,
    academic_year_id: Uuid,
    #[serde(default)]
    is_course_coordinator: bool,
}

#[derive(Serialize)]
pub struct Response {
    id: Uuid,
}

pub async fn create_assignment<S: StateTrait>(
    State(state): State<S>,
    Json(request): Json<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let id = Uuid::new_v4();

    let assignment = course_assignments::ActiveModel {
        id: Set(id),
        faculty_id: Set(request.faculty_id),
        course_id: Set(request.course_id),
        academic_year_id: Set(request.academic_year_id),
        is_course_coordinator: Set(request.is_course_coordinator),
        assigned_at: Set(Utc::now().naive_utc()),
    };

    let result = course_assignments::Entity::insert(assignment)
        .exec_without_returning(state.db())
        .await;

    match result {
        Err(err) if err.unique_violation(UC_COURSE_ASSIGNMENTS_FACULTY_COURSE_YEAR) => {
            return Err(error::DUPLICATE_ASSIGNMENT)
        }
        Err(err)
            if err.foreign_key_violation(FK_COURSE_ASSIGNMENTS_FACULTY)
                || err.foreign_key_violation(FK_COURSE_ASSIGNMENTS_COURSE)
                || err.foreign_key_violation(FK_COURSE_ASSIGNMENTS_ACADEMIC_YEAR) =>
        {
            return Err(error::INVALID_REFERENCE)
        }
        r => {
            r?;
        }
    };

    Ok((StatusCode::CREATED, Json(Response { id })))
}
