use entity::{
    faculty_profiles::{self, constraints::*},
    users,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(faculty_profiles::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(faculty_profiles::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(faculty_profiles::Column::UserId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(faculty_profiles::Column::EmployeeId)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(faculty_profiles::Column::Department)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(faculty_profiles::Column::Designation)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(faculty_profiles::Column::JoiningDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(faculty_profiles::Column::Qualification)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(faculty_profiles::Column::ExperienceYears)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(faculty_profiles::Column::IsActive)
                            .boolean()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_FACULTY_PROFILES)
                            .col(faculty_profiles::Column::Id),
                    )
                    .index(
                        Index::create()
                            .name(UC_FACULTY_PROFILES_USER)
                            .col(faculty_profiles::Column::UserId)
                            .unique(),
                    )
                    .index(
                        Index::create()
                            .name(UC_FACULTY_PROFILES_EMPLOYEE_ID)
                            .col(faculty_profiles::Column::EmployeeId)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FACULTY_PROFILES_USER)
                            .from(faculty_profiles::Entity, faculty_profiles::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(faculty_profiles::Entity).to_owned())
            .await
    }
}
