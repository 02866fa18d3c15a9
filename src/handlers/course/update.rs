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
use entity::courses::{self, constraints::*, CourseType};
use sea_orm::{DbErr, EntityTrait, Set};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 200))]
    name: Option<String>,
    #[validate(length(min = 1, max = 20))]
    code: Option<String>,
    #[validate(range(min = 1))]
    credits: Option<i32>,
    department_id: Option<Uuid>,
    #[validate(range(min = 1))]
    semester: Option<i32>,
    course_type: Option<CourseType>,
    description: Option<String>,
    theory_hours: Option<i32>,
    practical_hours: Option<i32>,
    is_active: Option<bool>,
}

pub async fn update_course<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<StatusCode> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::COURSE_NOT_FOUND);
    };

    if request.name.is_none()
        && request.code.is_none()
        && request.credits.is_none()
        && request.department_id.is_none()
        && request.semester.is_none()
        && request.course_type.is_none()
        && request.description.is_none()
        && request.theory_hours.is_none()
        && request.practical_hours.is_none()
        && request.is_active.is_none()
    {
        return Ok(StatusCode::NO_CONTENT);
    }

    let active_model = courses::ActiveModel {
        id: Set(id),
        name: set_option(request.name),
        code: set_option(request.code),
        credits: set_option(request.credits),
        department_id: set_option(request.department_id),
        semester: set_option(request.semester),
        course_type: set_option(request.course_type),
        description: set_option(request.description),
        theory_hours: set_option(request.theory_hours),
        practical_hours: set_option(request.practical_hours),
        is_active: set_option(request.is_active),
    };

    let res = courses::Entity::update(active_model).exec(state.db()).await;

    match res {
        Err(DbErr::RecordNotFound(_)) => return Err(error::COURSE_NOT_FOUND),
        Err(err) if err.unique_violation(UC_COURSES_CODE) => {
            return Err(error::DUPLICATE_COURSE_CODE)
        }
        Err(err) if err.foreign_key_violation(FK_COURSES_DEPARTMENT) => {
            return Err(error::INVALID_REFERENCE)
        }
        r => {
            r?;
        }
    };

    Ok(StatusCode::NO_CONTENT)
}
