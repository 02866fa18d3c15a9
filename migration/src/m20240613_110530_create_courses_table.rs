use entity::{
    courses::{self, constraints::*},
    departments,
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
                    .table(courses::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(courses::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(courses::Column::Name)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(courses::Column::Code)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(courses::Column::Credits).integer().not_null())
                    .col(ColumnDef::new(courses::Column::DepartmentId).uuid().not_null())
                    .col(ColumnDef::new(courses::Column::Semester).integer().not_null())
                    .col(
                        ColumnDef::new(courses::Column::CourseType)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(ColumnDef::new(courses::Column::Description).text().not_null())
                    .col(
                        ColumnDef::new(courses::Column::TheoryHours)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(courses::Column::PracticalHours)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(courses::Column::IsActive).boolean().not_null())
                    .primary_key(Index::create().name(PK_COURSES).col(courses::Column::Id))
                    .index(
                        Index::create()
                            .name(UC_COURSES_CODE)
                            .col(courses::Column::Code)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COURSES_DEPARTMENT)
                            .from(courses::Entity, courses::Column::DepartmentId)
                            .to(departments::Entity, departments::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(courses::Entity).to_owned())
            .await
    }
}
