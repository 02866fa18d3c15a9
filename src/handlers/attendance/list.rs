use crate::{
    auth::Claims,
    error::{self, Result},
    extractors::Json,
    handlers::summaries::{course_info, faculty_basic, student_basic, CourseInfo, FacultyBasic, StudentBasic},
    StateTrait,
};
use axum::extract::{Path, State};
use chrono::{NaiveDate, NaiveDateTime};
use entity::{
    attendance, course_assignments, courses, faculty_profiles, student_profiles,
    users::UserRole,
};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct Response {
    pub id: Uuid,
    pub student: StudentBasic,
    pub course: CourseInfo,
    pub date: NaiveDate,
    pub is_present: bool,
    pub remarks: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marked_by: Option<FacultyBasic>,
    pub marked_at: NaiveDateTime,
}

pub(super) async fn to_response<C: ConnectionTrait>(
    db: &C,
    record: attendance::Model,
) -> Result<Response> {
    let Some(profile) = student_profiles::Entity::find_by_id(record.student_id).one(db).await?
    else {
        error!("attendance record {} has no student row", record.id);
        return Err(error::INTERNAL);
    };

    let Some(course) = courses::Entity::find_by_id(record.course_id).one(db).await? else {
        error!("attendance record {} has no course row", record.id);
        return Err(error::INTERNAL);
    };

    let marked_by = match record.marked_by {
        Some(id) => match faculty_profiles::Entity::find_by_id(id).one(db).await? {
            Some(faculty) => Some(faculty_basic(db, faculty).await?),
            None => None,
        },
        None => None,
    };

    Ok(Response {
        id: record.id,
        student: student_basic(db, profile).await?,
        course: course_info(db, course).await?,
        date: record.date,
        is_present: record.is_present,
        remarks: record.remarks,
        marked_by,
        marked_at: record.marked_at,
    })
}

/// Narrows an attendance select to what the caller is allowed to see.
/// Returns `None` when the caller cannot see any row at all.
pub(super) async fn scope_to_role<C: ConnectionTrait>(
    db: &C,
    claims: &Claims,
    select: sea_orm::Select<attendance::Entity>,
) -> Result<Option<sea_orm::Select<attendance::Entity>>> {
    match claims.role {
        UserRole::Admin => Ok(Some(select)),
        UserRole::Student => {
            let Some(profile) = student_profiles::Entity::find_by_user(claims.sub).one(db).await?
            else {
                return Ok(None);
            };

            Ok(Some(
                select.filter(attendance::Column::StudentId.eq(profile.id)),
            ))
        }
        UserRole::Faculty => {
            let course_ids: Vec<Uuid> = course_assignments::Entity::select_course_ids_for_user(
                claims.sub,
            )
            .into_tuple()
            .all(db)
            .await?;

            Ok(Some(
                select.filter(attendance::Column::CourseId.is_in(course_ids)),
            ))
        }
    }
}

pub async fn list_attendance<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
) -> Result<Json<Vec<Response>>> {
    let select = attendance::Entity::find().order_by_desc(attendance::Column::Date);

    let Some(select) = scope_to_role(state.db(), &claims, select).await? else {
        return Ok(Json(Vec::new()));
    };

    let rows = select.all(state.db()).await?;

    let mut response = Vec::with_capacity(rows.len());

    for record in rows {
        response.push(to_response(state.db(), record).await?);
    }

    Ok(Json(response))
}

pub async fn get_attendance<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Path(id): Path<String>,
) -> Result<Json<Response>> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::ATTENDANCE_NOT_FOUND);
    };

    let select = attendance::Entity::find().filter(attendance::Column::Id.eq(id));

    let Some(select) = scope_to_role(state.db(), &claims, select).await? else {
        return Err(error::ATTENDANCE_NOT_FOUND);
    };

    let Some(record) = select.one(state.db()).await? else {
        return Err(error::ATTENDANCE_NOT_FOUND);
    };

    Ok(Json(to_response(state.db(), record).await?))
}
