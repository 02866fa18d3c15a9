//! Nested response fragments shared by the relationship endpoints.
//!
//! The list endpoints embed short summaries of their foreign rows instead of
//! bare ids, matching the JSON the catalog endpoints produce themselves.

use crate::error::{self, Result};
use entity::{
    academic_years, courses, departments, faculty_profiles, student_profiles,
    users::{self, UserRole},
};
use sea_orm::{ConnectionTrait, EntityTrait};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct UserBasic {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub role: UserRole,
}

impl From<users::Model> for UserBasic {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name(),
            username: user.username,
            role: user.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StudentBasic {
    pub id: Uuid,
    pub student_id: String,
    pub user: UserBasic,
    pub current_semester: i32,
    pub program: String,
}

pub async fn student_basic<C: ConnectionTrait>(
    db: &C,
    profile: student_profiles::Model,
) -> Result<StudentBasic> {
    let Some(user) = users::Entity::find_by_id(profile.user_id).one(db).await? else {
        error!("student profile {} has no user row", profile.id);
        return Err(error::INTERNAL);
    };

    Ok(StudentBasic {
        id: profile.id,
        student_id: profile.student_id,
        user: user.into(),
        current_semester: profile.current_semester,
        program: profile.program,
    })
}

#[derive(Debug, Serialize)]
pub struct FacultyBasic {
    pub id: Uuid,
    pub employee_id: String,
    pub user: UserBasic,
    pub department: String,
    pub designation: String,
}

pub async fn faculty_basic<C: ConnectionTrait>(
    db: &C,
    profile: faculty_profiles::Model,
) -> Result<FacultyBasic> {
    let Some(user) = users::Entity::find_by_id(profile.user_id).one(db).await? else {
        error!("faculty profile {} has no user row", profile.id);
        return Err(error::INTERNAL);
    };

    Ok(FacultyBasic {
        id: profile.id,
        employee_id: profile.employee_id,
        user: user.into(),
        department: profile.department,
        designation: profile.designation,
    })
}

#[derive(Debug, Serialize)]
pub struct DepartmentBasic {
    pub id: Uuid,
    pub name: String,
    pub code: String,
}

impl From<departments::Model> for DepartmentBasic {
    fn from(department: departments::Model) -> Self {
        Self {
            id: department.id,
            name: department.name,
            code: department.code,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CourseInfo {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub credits: i32,
    pub semester: i32,
    pub course_type: courses::CourseType,
    pub department: DepartmentBasic,
}

pub async fn course_info<C: ConnectionTrait>(db: &C, course: courses::Model) -> Result<CourseInfo> {
    let Some(department) = departments::Entity::find_by_id(course.department_id)
        .one(db)
        .await?
    else {
        error!("course {} has no department row", course.id);
        return Err(error::INTERNAL);
    };

    Ok(CourseInfo {
        id: course.id,
        name: course.name,
        code: course.code,
        credits: course.credits,
        semester: course.semester,
        course_type: course.course_type,
        department: department.into(),
    })
}

#[derive(Debug, Serialize)]
pub struct YearInfo {
    pub id: Uuid,
    pub year: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub is_current: bool,
}

impl From<academic_years::Model> for YearInfo {
    fn from(year: academic_years::Model) -> Self {
        Self {
            id: year.id,
            year: year.year,
            start_date: year.start_date,
            end_date: year.end_date,
            is_current: year.is_current,
        }
    }
}
