use super::departments;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod constraints {
    pub const PK_COURSES: &str = "PK_courses";
    pub const UC_COURSES_CODE: &str = "UC_courses_code";
    pub const FK_COURSES_DEPARTMENT: &str = "FK_courses_department";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub code: String,
    pub credits: i32,
    pub department_id: Uuid,
    pub semester: i32,
    pub course_type: CourseType,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub theory_hours: i32,
    pub practical_hours: i32,
    pub is_active: bool,
}

#[derive(
    EnumIter, DeriveActiveEnum, PartialEq, Eq, Copy, Clone, Debug, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(10))")]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    #[sea_orm(string_value = "core")]
    Core,
    #[sea_orm(string_value = "elective")]
    Elective,
    #[sea_orm(string_value = "lab")]
    Lab,
    #[sea_orm(string_value = "project")]
    Project,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Department,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Department => Entity::belongs_to(departments::Entity)
                .from(Column::DepartmentId)
                .to(departments::Column::Id)
                .into(),
        }
    }
}

impl Related<departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_active() -> Select<Entity> {
        Self::find().filter(Column::IsActive.eq(true))
    }
}
