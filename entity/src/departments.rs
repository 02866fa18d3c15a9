use super::{courses, faculty_profiles};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

pub mod constraints {
    pub const PK_DEPARTMENTS: &str = "PK_departments";
    pub const UC_DEPARTMENTS_NAME: &str = "UC_departments_name";
    pub const UC_DEPARTMENTS_CODE: &str = "UC_departments_code";
    pub const FK_DEPARTMENTS_HEAD: &str = "FK_departments_head";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub code: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub head_of_department: Option<Uuid>,
    pub established_date: Option<Date>,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Head,
    Courses,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Head => Entity::belongs_to(faculty_profiles::Entity)
                .from(Column::HeadOfDepartment)
                .to(faculty_profiles::Column::Id)
                .into(),
            Self::Courses => Entity::has_many(courses::Entity).into(),
        }
    }
}

impl Related<courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_code(code: &str) -> Select<Entity> {
        Self::find().filter(Column::Code.eq(code))
    }
}
