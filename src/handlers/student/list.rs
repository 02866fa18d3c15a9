use crate::{
    auth::Claims,
    error::{self, Result},
    extractors::Json,
    StateTrait,
};
use axum::extract::{Path, State};
use chrono::NaiveDate;
use entity::{
    student_profiles,
    users::{self, UserRole},
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct UserDetails {
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub id: Uuid,
    pub user: Uuid,
    pub user_details: UserDetails,
    pub student_id: String,
    pub enrollment_date: NaiveDate,
    pub current_semester: i32,
    pub program: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub is_active: bool,
}

pub(super) fn to_response(profile: student_profiles::Model, user: users::Model) -> Response {
    Response {
        id: profile.id,
        user: profile.user_id,
        user_details: UserDetails {
            full_name: user.full_name(),
            email: user.email,
            role: user.role,
        },
        student_id: profile.student_id,
        enrollment_date: profile.enrollment_date,
        current_semester: profile.current_semester,
        program: profile.program,
        emergency_contact_name: profile.emergency_contact_name,
        emergency_contact_phone: profile.emergency_contact_phone,
        is_active: profile.is_active,
    }
}

pub async fn list_students<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
) -> Result<Json<Vec<Response>>> {
    let mut select = student_profiles::Entity::find();

    // students see their own row, everyone else cross-role sees active rows only
    select = match claims.role {
        UserRole::Admin => select,
        UserRole::Student => select.filter(student_profiles::Column::UserId.eq(claims.sub)),
        UserRole::Faculty => select.filter(student_profiles::Column::IsActive.eq(true)),
    };

    let rows = select
        .find_also_related(users::Entity)
        .all(state.db())
        .await?;

    let mut response = Vec::with_capacity(rows.len());

    for (profile, user) in rows {
        let Some(user) = user else {
            error!("student profile {} has no user row", profile.id);
            return Err(error::INTERNAL);
        };

        response.push(to_response(profile, user));
    }

    Ok(Json(response))
}

pub async fn get_student<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Path(id): Path<String>,
) -> Result<Json<Response>> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::STUDENT_PROFILE_NOT_FOUND);
    };

    let res = student_profiles::Entity::find_by_id(id)
        .find_also_related(users::Entity)
        .one(state.db())
        .await?;

    let Some((profile, Some(user))) = res else {
        return Err(error::STUDENT_PROFILE_NOT_FOUND);
    };

    let visible = match claims.role {
        UserRole::Admin => true,
        UserRole::Student => profile.user_id == claims.sub,
        UserRole::Faculty => profile.is_active,
    };

    if !visible {
        return Err(error::STUDENT_PROFILE_NOT_FOUND);
    }

    Ok(Json(to_response(profile, user)))
}
