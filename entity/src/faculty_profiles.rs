use super::users;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

pub mod constraints {
    pub const PK_FACULTY_PROFILES: &str = "PK_faculty_profiles";
    pub const UC_FACULTY_PROFILES_USER: &str = "UC_faculty_profiles_user";
    pub const UC_FACULTY_PROFILES_EMPLOYEE_ID: &str = "UC_faculty_profiles_employee_id";
    pub const FK_FACULTY_PROFILES_USER: &str = "FK_faculty_profiles_user";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "faculty_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    #[sea_orm(unique)]
    pub employee_id: String,
    pub department: String,
    pub designation: String,
    pub joining_date: Date,
    pub qualification: String,
    pub experience_years: i32,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::User => Entity::belongs_to(users::Entity)
                .from(Column::UserId)
                .to(users::Column::Id)
                .into(),
        }
    }
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_user(user_id: Uuid) -> Select<Entity> {
        Self::find().filter(Column::UserId.eq(user_id))
    }
}
