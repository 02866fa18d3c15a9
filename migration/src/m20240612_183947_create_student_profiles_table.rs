use entity::{
    student_profiles::{self, constraints::*},
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
                    .table(student_profiles::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(student_profiles::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(student_profiles::Column::UserId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(student_profiles::Column::StudentId)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(student_profiles::Column::EnrollmentDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(student_profiles::Column::CurrentSemester)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(student_profiles::Column::Program)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(student_profiles::Column::EmergencyContactName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(student_profiles::Column::EmergencyContactPhone)
                            .string_len(17)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(student_profiles::Column::IsActive)
                            .boolean()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_STUDENT_PROFILES)
                            .col(student_profiles::Column::Id),
                    )
                    .index(
                        Index::create()
                            .name(UC_STUDENT_PROFILES_USER)
                            .col(student_profiles::Column::UserId)
                            .unique(),
                    )
                    .index(
                        Index::create()
                            .name(UC_STUDENT_PROFILES_STUDENT_ID)
                            .col(student_profiles::Column::StudentId)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_STUDENT_PROFILES_USER)
                            .from(student_profiles::Entity, student_profiles::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(student_profiles::Entity).to_owned())
            .await
    }
}
