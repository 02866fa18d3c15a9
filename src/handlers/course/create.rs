use crate::{
    error::{self, DatabaseError, Result},
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::courses::{self, constraints::*, CourseType};
use sea_orm::{EntityTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 200))]
    name: String,
    #[validate(length(min = 1, max = 20))]
    code: String,
    #[validate(range(min = 1))]
    credits: i32,
    department_id: Uuid,
    #[validate(range(min = 1))]
    semester: i32,
    #[serde(default = "default_course_type")]
    course_type: CourseType,
    #[serde(default)]
    description: String,
    #[serde(default)]
    theory_hours: i32,
    #[serde(default)]
    practical_hours: i32,
}

fn default_course_type() -> CourseType {
    CourseType::Core
}

#[derive(Serialize)]
pub struct Response {
    id: Uuid,
}

pub async fn create_course<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let id = Uuid::new_v4();

    let course = courses::ActiveModel {
        id: Set(id),
        name: Set(request.name),
        code: Set(request.code),
        credits: Set(request.credits),
        department_id: Set(request.department_id),
        semester: Set(request.semester),
        course_type: Set(request.course_type),
        description: Set(request.description),
        theory_hours: Set(request.theory_hours),
        practical_hours: Set(request.practical_hours),
        is_active: Set(true),
    };

    let result = courses::Entity::insert(course)
        .exec_without_returning(state.db())
        .await;

    match result {
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

    Ok((StatusCode::CREATED, Json(Response { id })))
}
