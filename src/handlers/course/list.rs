use crate::{
    auth::Claims,
    error::{self, Result},
    extractors::Json,
    handlers::summaries::DepartmentBasic,
    StateTrait,
};
use axum::extract::{Path, Query, State};
use entity::{
    courses::{self, CourseType},
    departments, enrollments,
};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Params {
    department: Option<Uuid>,
    semester: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub credits: i32,
    pub department: DepartmentBasic,
    pub semester: i32,
    pub course_type: CourseType,
    pub description: String,
    pub theory_hours: i32,
    pub practical_hours: i32,
    pub is_active: bool,
    pub total_enrollments: u64,
}

async fn to_response<C: ConnectionTrait>(db: &C, course: courses::Model) -> Result<Response> {
    let Some(department) = departments::Entity::find_by_id(course.department_id)
        .one(db)
        .await?
    else {
        error!("course {} has no department row", course.id);
        return Err(error::INTERNAL);
    };

    let total_enrollments = enrollments::Entity::find()
        .filter(enrollments::Column::CourseId.eq(course.id))
        .filter(enrollments::Column::IsActive.eq(true))
        .count(db)
        .await?;

    Ok(Response {
        id: course.id,
        name: course.name,
        code: course.code,
        credits: course.credits,
        department: department.into(),
        semester: course.semester,
        course_type: course.course_type,
        description: course.description,
        theory_hours: course.theory_hours,
        practical_hours: course.practical_hours,
        is_active: course.is_active,
        total_enrollments,
    })
}

pub async fn list_courses<S: StateTrait>(
    State(state): State<S>,
    _claims: Claims,
    Query(params): Query<Params>,
) -> Result<Json<Vec<Response>>> {
    let mut select = courses::Entity::find_active();

    if let Some(department) = params.department {
        select = select.filter(courses::Column::DepartmentId.eq(department));
    }

    if let Some(semester) = params.semester {
        select = select.filter(courses::Column::Semester.eq(semester));
    }

    let rows = select.all(state.db()).await?;

    let mut response = Vec::with_capacity(rows.len());

    for course in rows {
        response.push(to_response(state.db(), course).await?);
    }

    Ok(Json(response))
}

pub async fn get_course<S: StateTrait>(
    State(state): State<S>,
    _claims: Claims,
    Path(id): Path<String>,
) -> Result<Json<Response>> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::COURSE_NOT_FOUND);
    };

    let res = courses::Entity::find_by_id(id).one(state.db()).await?;

    // soft-deleted courses are not exposed
    let Some(course) = res.filter(|course| course.is_active) else {
        return Err(error::COURSE_NOT_FOUND);
    };

    Ok(Json(to_response(state.db(), course).await?))
}
