use super::{academic_years, courses, student_profiles};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod constraints {
    pub const PK_ENROLLMENTS: &str = "PK_enrollments";
    pub const UC_ENROLLMENTS_STUDENT_COURSE_YEAR: &str = "UC_enrollments_student_course_year";
    pub const FK_ENROLLMENTS_STUDENT: &str = "FK_enrollments_student";
    pub const FK_ENROLLMENTS_COURSE: &str = "FK_enrollments_course";
    pub const FK_ENROLLMENTS_ACADEMIC_YEAR: &str = "FK_enrollments_academic_year";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub academic_year_id: Uuid,
    pub enrolled_at: DateTime,
    pub grade: Option<Grade>,
    #[sea_orm(column_type = "Decimal(Some((4, 2)))")]
    pub grade_points: Option<Decimal>,
    pub is_active: bool,
}

#[derive(
    EnumIter, DeriveActiveEnum, PartialEq, Eq, Copy, Clone, Debug, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(2))")]
pub enum Grade {
    #[sea_orm(string_value = "A+")]
    #[serde(rename = "A+")]
    APlus,
    #[sea_orm(string_value = "A")]
    A,
    #[sea_orm(string_value = "B+")]
    #[serde(rename = "B+")]
    BPlus,
    #[sea_orm(string_value = "B")]
    B,
    #[sea_orm(string_value = "C+")]
    #[serde(rename = "C+")]
    CPlus,
    #[sea_orm(string_value = "C")]
    C,
    #[sea_orm(string_value = "D")]
    D,
    #[sea_orm(string_value = "F")]
    F,
    #[sea_orm(string_value = "I")]
    #[serde(rename = "I")]
    Incomplete,
    #[sea_orm(string_value = "W")]
    #[serde(rename = "W")]
    Withdrawn,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Student,
    Course,
    AcademicYear,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Student => Entity::belongs_to(student_profiles::Entity)
                .from(Column::StudentId)
                .to(student_profiles::Column::Id)
                .into(),
            Self::Course => Entity::belongs_to(courses::Entity)
                .from(Column::CourseId)
                .to(courses::Column::Id)
                .into(),
            Self::AcademicYear => Entity::belongs_to(academic_years::Entity)
                .from(Column::AcademicYearId)
                .to(academic_years::Column::Id)
                .into(),
        }
    }
}

impl Related<student_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_active() -> Select<Entity> {
        Self::find().filter(Column::IsActive.eq(true))
    }
}
