use entity::{
    departments::{self, constraints::*},
    faculty_profiles,
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
                    .table(departments::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(departments::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(departments::Column::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(departments::Column::Code)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(departments::Column::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(departments::Column::HeadOfDepartment)
                            .uuid()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(departments::Column::EstablishedDate)
                            .date()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(departments::Column::IsActive)
                            .boolean()
                            .not_null(),
                    )
                    .primary_key(Index::create().name(PK_DEPARTMENTS).col(departments::Column::Id))
                    .index(
                        Index::create()
                            .name(UC_DEPARTMENTS_NAME)
                            .col(departments::Column::Name)
                            .unique(),
                    )
                    .index(
                        Index::create()
                            .name(UC_DEPARTMENTS_CODE)
                            .col(departments::Column::Code)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DEPARTMENTS_HEAD)
                            .from(departments::Entity, departments::Column::HeadOfDepartment)
                            .to(faculty_profiles::Entity, faculty_profiles::Column::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(departments::Entity).to_owned())
            .await
    }
}
