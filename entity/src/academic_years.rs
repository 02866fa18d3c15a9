use sea_orm::entity::prelude::*;
use uuid::Uuid;

pub mod constraints {
    pub const PK_ACADEMIC_YEARS: &str = "PK_academic_years";
    pub const UC_ACADEMIC_YEARS_YEAR: &str = "UC_academic_years_year";
    /// Partial unique index: at most one row may have `is_current = true`.
    pub const UC_ACADEMIC_YEARS_CURRENT: &str = "UC_academic_years_current";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "academic_years")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub year: String,
    pub start_date: Date,
    pub end_date: Date,
    pub is_current: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_current() -> Select<Entity> {
        Self::find().filter(Column::IsCurrent.eq(true))
    }
}
