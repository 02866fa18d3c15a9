use entity::{
    attendance::{self, constraints::*},
    courses, faculty_profiles, student_profiles,
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
                    .table(attendance::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(attendance::Column::Id).uuid().not_null())
                    .col(ColumnDef::new(attendance::Column::StudentId).uuid().not_null())
                    .col(ColumnDef::new(attendance::Column::CourseId).uuid().not_null())
                    .col(ColumnDef::new(attendance::Column::Date).date().not_null())
                    .col(
                        ColumnDef::new(attendance::Column::IsPresent)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(attendance::Column::Remarks)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(attendance::Column::MarkedBy).uuid().null())
                    .col(
                        ColumnDef::new(attendance::Column::MarkedAt)
                            .date_time()
                            .not_null(),
                    )
                    .primary_key(Index::create().name(PK_ATTENDANCE).col(attendance::Column::Id))
                    .index(
                        Index::create()
                            .name(UC_ATTENDANCE_STUDENT_COURSE_DATE)
                            .col(attendance::Column::StudentId)
                            .col(attendance::Column::CourseId)
                            .col(attendance::Column::Date)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ATTENDANCE_STUDENT)
                            .from(attendance::Entity, attendance::Column::StudentId)
                            .to(student_profiles::Entity, student_profiles::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ATTENDANCE_COURSE)
                            .from(attendance::Entity, attendance::Column::CourseId)
                            .to(courses::Entity, courses::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ATTENDANCE_MARKED_BY)
                            .from(attendance::Entity, attendance::Column::MarkedBy)
                            .to(faculty_profiles::Entity, faculty_profiles::Column::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(attendance::Entity).to_owned())
            .await
    }
}
