use crate::{
    auth::Claims,
    error::{self, Result},
    extractors::Json,
    handlers::summaries::{course_info, student_basic, CourseInfo, StudentBasic, YearInfo},
    StateTrait,
};
use axum::extract::{Path, State};
use chrono::NaiveDateTime;
use entity::{
    academic_years, course_assignments, courses, enrollments,
    student_profiles,
    users::UserRole,
};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct Response {
    pub id: Uuid,
    pub student: StudentBasic,
    pub course: CourseInfo,
    pub academic_year: YearInfo,
    pub enrolled_at: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<enrollments::Grade>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_points: Option<Decimal>,
    pub is_active: bool,
}

pub(super) async fn to_response<C: ConnectionTrait>(
    db: &C,
    enrollment: enrollments::Model,
) -> Result<Response> {
    let Some(profile) = student_profiles::Entity::find_by_id(enrollment.student_id)
        .one(db)
        .await?
    else {
        error!("enrollment {} has no student row", enrollment.id);
        return Err(error::INTERNAL);
    };

    let Some(course) = courses::Entity::find_by_id(enrollment.course_id).one(db).await? else {
        error!("enrollment {} has no course row", enrollment.id);
        return Err(error::INTERNAL);
    };

    let Some(year) = academic_years::Entity::find_by_id(enrollment.academic_year_id)
        .one(db)
        .await?
    else {
        error!("enrollment {} has no academic year row", enrollment.id);
        return Err(error::INTERNAL);
    };

    Ok(Response {
        id: enrollment.id,
        student: student_basic(db, profile).await?,
        course: course_info(db, course).await?,
        academic_year: year.into(),
        enrolled_at: enrollment.enrolled_at,
        grade: enrollment.grade,
        grade_points: enrollment.grade_points,
        is_active: enrollment.is_active,
    })
}

/// Narrows an enrollment select to what the caller is allowed to see.
/// Returns `None` when the caller cannot see any row at all.
pub(super) async fn scope_to_role<C: ConnectionTrait>(
    db: &C,
    claims: &Claims,
    select: sea_orm::Select<enrollments::Entity>,
) -> Result<Option<sea_orm::Select<enrollments::Entity>>> {
    match claims.role {
        UserRole::Admin => Ok(Some(select)),
        UserRole::Student => {
            let Some(profile) = student_profiles::Entity::find_by_user(claims.sub).one(db).await?
            else {
                return Ok(None);
            };

            Ok(Some(
                select.filter(enrollments::Column::StudentId.eq(profile.id)),
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
                select.filter(enrollments::Column::CourseId.is_in(course_ids)),
            ))
        }
    }
}

pub async fn list_enrollments<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
) -> Result<Json<Vec<Response>>> {
    let select = enrollments::Entity::find_active();

    let Some(select) = scope_to_role(state.db(), &claims, select).await? else {
        return Ok(Json(Vec::new()));
    };

    let rows = select.all(state.db()).await?;

    let mut response = Vec::with_capacity(rows.len());

    for enrollment in rows {
        response.push(to_response(state.db(), enrollment).await?);
    }

    Ok(Json(response))
}

pub async fn get_enrollment<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Path(id): Path<String>,
) -> Result<Json<Response>> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::ENROLLMENT_NOT_FOUND);
    };

    let select = enrollments::Entity::find_active().filter(enrollments::Column::Id.eq(id));

    let Some(select) = scope_to_role(state.db(), &claims, select).await? else {
        return Err(error::ENROLLMENT_NOT_FOUND);
    };

    let Some(enrollment) = select.one(state.db()).await? else {
        return Err(error::ENROLLMENT_NOT_FOUND);
    };

    Ok(Json(to_response(state.db(), enrollment).await?))
}
