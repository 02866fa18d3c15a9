use super::{academic_years, courses, faculty_profiles};
use sea_orm::{entity::prelude::*, QuerySelect};
use uuid::Uuid;

pub mod constraints {
    pub const PK_COURSE_ASSIGNMENTS: &str = "PK_course_assignments";
    pub const UC_COURSE_ASSIGNMENTS_FACULTY_COURSE_YEAR: &str =
        "UC_course_assignments_faculty_course_year";
    pub const FK_COURSE_ASSIGNMENTS_FACULTY: &str = "FK_course_assignments_faculty";
    pub const FK_COURSE_ASSIGNMENTS_COURSE: &str = "FK_course_assignments_course";
    pub const FK_COURSE_ASSIGNMENTS_ACADEMIC_YEAR: &str = "FK_course_assignments_academic_year";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "course_assignments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub faculty_id: Uuid,
    pub course_id: Uuid,
    pub academic_year_id: Uuid,
    pub is_course_coordinator: bool,
    pub assigned_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Faculty,
    Course,
    AcademicYear,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Faculty => Entity::belongs_to(faculty_profiles::Entity)
                .from(Column::FacultyId)
                .to(faculty_profiles::Column::Id)
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

impl Related<faculty_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faculty.def()
    }
}

impl Related<courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// Assignments belonging to the faculty member behind the given user account.
    #[inline]
    pub fn find_for_faculty_user(user_id: Uuid) -> Select<Entity> {
        Self::find()
            .inner_join(faculty_profiles::Entity)
            .filter(faculty_profiles::Column::UserId.eq(user_id))
    }

    /// Course ids the given faculty user is assigned to, for role-scoped filters.
    #[inline]
    pub fn select_course_ids_for_user(user_id: Uuid) -> Select<Entity> {
        Self::find_for_faculty_user(user_id)
            .select_only()
            .column(Column::CourseId)
    }
}
