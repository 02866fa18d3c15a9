use crate::{
    error::{self, DatabaseError, Result},
    extractors::Json,
    utils::set_option,
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::course_assignments::{self, constraints::*};
use sea_orm::{DbErr, EntityTrait, Set};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Request {
    faculty_id: Option<Uuid>,
    course_id: Option<Uuid>,
    academic_year_id: Option<Uuid>,
    is_course_coordinator: Option<bool>,
}

pub async fn update_assignment<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
    Json(request): Json<Request>,
) -> Result<StatusCode> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::ASSIGNMENT_NOT_FOUND);
    };

    if request.faculty_id.is_none()
        && request.course_id.is_none()
        && request.academic_year_id.is_none()
        && request.is_course_coordinator.is_none()
    {
        return Ok(StatusCode::NO_CONTENT);
    }

    let active_model = course_assignments::ActiveModel {
        id: Set(id),
        faculty_id: set_option(request.faculty_id),
        course_id: set_option(request.course_id),
        academic_year_id: set_option(request.academic_year_id),
        is_course_coordinator: set_option(request.is_course_coordinator),
        ..Default::default()
    };

    let res = course_assignments::Entity::update(active_model)
        .exec(state.db())
        .await;

    match res {
        Err(DbErr::RecordNotFound(_)) => return Err(error::ASSIGNMENT_NOT_FOUND),
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

    Ok(StatusCode::NO_CONTENT)
}
