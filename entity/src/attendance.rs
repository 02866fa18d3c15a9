use super::{courses, faculty_profiles, student_profiles};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

pub mod constraints {
    pub const PK_ATTENDANCE: &str = "PK_attendance";
    pub const UC_ATTENDANCE_STUDENT_COURSE_DATE: &str = "UC_attendance_student_course_date";
    pub const FK_ATTENDANCE_STUDENT: &str = "FK_attendance_student";
    pub const FK_ATTENDANCE_COURSE: &str = "FK_attendance_course";
    pub const FK_ATTENDANCE_MARKED_BY: &str = "FK_attendance_marked_by";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub date: Date,
    pub is_present: bool,
    pub remarks: String,
    pub marked_by: Option<Uuid>,
    pub marked_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Student,
    Course,
    MarkedBy,
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
            Self::MarkedBy => Entity::belongs_to(faculty_profiles::Entity)
                .from(Column::MarkedBy)
                .to(faculty_profiles::Column::Id)
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
