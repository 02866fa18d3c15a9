use super::users;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

pub mod constraints {
    pub const PK_STUDENT_PROFILES: &str = "PK_student_profiles";
    pub const UC_STUDENT_PROFILES_USER: &str = "UC_student_profiles_user";
    pub const UC_STUDENT_PROFILES_STUDENT_ID: &str = "UC_student_profiles_student_id";
    pub const FK_STUDENT_PROFILES_USER: &str = "FK_student_profiles_user";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "student_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    #[sea_orm(unique)]
    pub student_id: String,
    pub enrollment_date: Date,
    pub current_semester: i32,
    pub program: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
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
