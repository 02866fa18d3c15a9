use crate::{
    auth::Claims,
    error::{self, Result},
    extractors::Json,
    handlers::summaries::{faculty_basic, FacultyBasic},
    StateTrait,
};
use axum::extract::{Path, State};
use chrono::NaiveDate;
use entity::{courses, departments, faculty_profiles};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct Response {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_of_department: Option<FacultyBasic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub established_date: Option<NaiveDate>,
    pub is_active: bool,
    pub total_courses: u64,
}

async fn to_response<C: ConnectionTrait>(
    db: &C,
    department: departments::Model,
) -> Result<Response> {
    let head = match department.head_of_department {
        Some(id) => match faculty_profiles::Entity::find_by_id(id).one(db).await? {
            Some(profile) => Some(faculty_basic(db, profile).await?),
            None => None,
        },
        None => None,
    };

    let total_courses = courses::Entity::find()
        .filter(courses::Column::DepartmentId.eq(department.id))
        .filter(courses::Column::IsActive.eq(true))
        .count(db)
        .await?;

    Ok(Response {
        id: department.id,
        name: department.name,
        code: department.code,
        description: department.description,
        head_of_department: head,
        established_date: department.established_date,
        is_active: department.is_active,
        total_courses,
    })
}

pub async fn list_departments<S: StateTrait>(
    State(state): State<S>,
    _claims: Claims,
) -> Result<Json<Vec<Response>>> {
    let rows = departments::Entity::find().all(state.db()).await?;

    let mut response = Vec::with_capacity(rows.len());

    for department in rows {
        response.push(to_response(state.db(), department).await?);
    }

    Ok(Json(response))
}

pub async fn get_department<S: StateTrait>(
    State(state): State<S>,
    _claims: Claims,
    Path(id): Path<String>,
) -> Result<Json<Response>> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::DEPARTMENT_NOT_FOUND);
    };

    let Some(department) = departments::Entity::find_by_id(id).one(state.db()).await? else {
        return Err(error::DEPARTMENT_NOT_FOUND);
    };

    Ok(Json(to_response(state.db(), department).await?))
}
