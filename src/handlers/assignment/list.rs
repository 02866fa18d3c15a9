use crate::{
    auth::Claims,
    error::{self, Result},
    extractors::Json,
    handlers::summaries::{course_info, faculty_basic, CourseInfo, FacultyBasic, YearInfo},
    StateTrait,
};
use axum::extract::{Path, State};
use chrono::NaiveDateTime;
use entity::{
    academic_years, course_assignments, courses, faculty_profiles,
    users::UserRole,
};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct Response {
    pub id: Uuid,
    pub faculty: FacultyBasic,
    pub course: CourseInfo,
    pub academic_year: YearInfo,
    pub is_course_coordinator: bool,
    pub assigned_at: NaiveDateTime,
}

async fn to_response<C: ConnectionTrait>(
    db: &C,
    assignment: course_assignments::Model,
) -> Result<Response> {
    let Some(profile) = faculty_profiles::Entity::find_by_id(assignment.faculty_id)
        .one(db)
        .await?
    else {
        error!("course assignment {} has no faculty row", assignment.id);
        return Err(error::INTERNAL);
    };

    let Some(course) = courses::Entity::find_by_id(assignment.course_id).one(db).await? else {
        error!("course assignment {} has no course row", assignment.id);
        return Err(error::INTERNAL);
    };

    let Some(year) = academic_years::Entity::find_by_id(assignment.academic_year_id)
        .one(db)
        .await?
    else {
        error!("course assignment {} has no academic year row", assignment.id);
        return Err(error::INTERNAL);
    };

    Ok(Response {
        id: assignment.id,
        faculty: faculty_basic(db, profile).await?,
        course: course_info(db, course).await?,
        academic_year: year.into(),
        is_course_coordinator: assignment.is_course_coordinator,
        assigned_at: assignment.assigned_at,
    })
}

pub async fn list_assignments<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
) -> Result<Json<Vec<Response>>> {
    // faculty only see their own assignments, everyone else sees all of them
    let select = match claims.role {
        UserRole::Faculty => course_assignments::Entity::find_for_faculty_user(claims.sub),
        _ => course_assignments::Entity::find(),
    };

    let rows = select.all(state.db()).await?;

    let mut response = Vec::with_capacity(rows.len());

    for assignment in rows {
        response.push(to_response(state.db(), assignment).await?);
    }

    Ok(Json(response))
}

pub async fn get_assignment<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Path(id): Path<String>,
) -> Result<Json<Response>> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::ASSIGNMENT_NOT_FOUND);
    };

    let select = match claims.role {
        UserRole::Faculty => course_assignments::Entity::find_for_faculty_user(claims.sub),
        _ => course_assignments::Entity::find(),
    };

    let Some(assignment) = select
        .filter(course_assignments::Column::Id.eq(id))
        .one(state.db())
        .await?
    else {
        return Err(error::ASSIGNMENT_NOT_FOUND);
    };

    Ok(Json(to_response(state.db(), assignment).await?))
}
