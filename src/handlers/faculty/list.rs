use crate::{
    auth::Claims,
    error::{self, Result},
    extractors::Json,
    StateTrait,
};
use axum::extract::{Path, State};
use chrono::NaiveDate;
use entity::{
    faculty_profiles,
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
    pub employee_id: String,
    pub department: String,
    pub designation: String,
    pub joining_date: NaiveDate,
    pub qualification: String,
    pub experience_years: i32,
    pub is_active: bool,
}

pub(super) fn to_response(profile: faculty_profiles::Model, user: users::Model) -> Response {
    Response {
        id: profile.id,
        user: profile.user_id,
        user_details: UserDetails {
            full_name: user.full_name(),
            email: user.email,
            role: user.role,
        },
        employee_id: profile.employee_id,
        department: profile.department,
        designation: profile.designation,
        joining_date: profile.joining_date,
        qualification: profile.qualification,
        experience_years: profile.experience_years,
        is_active: profile.is_active,
    }
}

pub async fn list_faculty<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
) -> Result<Json<Vec<Response>>> {
    let mut select = faculty_profiles::Entity::find();

    select = match claims.role {
        UserRole::Admin => select,
        UserRole::Faculty => select.filter(faculty_profiles::Column::UserId.eq(claims.sub)),
        UserRole::Student => select.filter(faculty_profiles::Column::IsActive.eq(true)),
    };

    let rows = select
        .find_also_related(users::Entity)
        .all(state.db())
        .await?;

    let mut response = Vec::with_capacity(rows.len());

    for (profile, user) in rows {
        let Some(user) = user else {
            error!("faculty profile {} has no user row", profile.id);
            return Err(error::INTERNAL);
        };

        response.push(to_response(profile, user));
    }

    Ok(Json(response))
}

pub async fn get_faculty<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Path(id): Path<String>,
) -> Result<Json<Response>> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::FACULTY_PROFILE_NOT_FOUND);
    };

    let res = faculty_profiles::Entity::find_by_id(id)
        .find_also_related(users::Entity)
        .one(state.db())
        .await?;

    let Some((profile, Some(user))) = res else {
        return Err(error::FACULTY_PROFILE_NOT_FOUND);
    };

    let visible = match claims.role {
        UserRole::Admin => true,
        UserRole::Faculty => profile.user_id == claims.sub,
        UserRole::Student => profile.is_active,
    };

    if !visible {
        return Err(error::FACULTY_PROFILE_NOT_FOUND);
    }

    Ok(Json(to_response(profile, user)))
}
