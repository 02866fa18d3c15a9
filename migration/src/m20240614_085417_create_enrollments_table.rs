use entity::{
    academic_years, courses,
    enrollments::{self, constraints::*},
    student_profiles,
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
                    .table(enrollments::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(enrollments::Column::Id).uuid().not_null())
                    .col(ColumnDef::new(enrollments::Column::StudentId).uuid().not_null())
                    .col(ColumnDef::new(enrollments::Column::CourseId).uuid().not_null())
                    .col(
                        ColumnDef::new(enrollments::Column::AcademicYearId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(enrollments::Column::EnrolledAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(enrollments::Column::Grade).string_len(2).null())
                    .col(
                        ColumnDef::new(enrollments::Column::GradePoints)
                            .decimal_len(4, 2)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(enrollments::Column::IsActive)
                            .boolean()
                            .not_null(),
                    )
                    .primary_key(Index::create().name(PK_ENROLLMENTS).col(enrollments::Column::Id))
                    .index(
                        Index::create()
                            .name(UC_ENROLLMENTS_STUDENT_COURSE_YEAR)
                            .col(enrollments::Column::StudentId)
                            .col(enrollments::Column::CourseId)
                            .col(enrollments::Column::AcademicYearId)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ENROLLMENTS_STUDENT)
                            .from(enrollments::Entity, enrollments::Column::StudentId)
                            .to(student_profiles::Entity, student_profiles::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ENROLLMENTS_COURSE)
                            .from(enrollments::Entity, enrollments::Column::CourseId)
                            .to(courses::Entity, courses::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ENROLLMENTS_ACADEMIC_YEAR)
                            .from(enrollments::Entity, enrollments::Column::AcademicYearId)
                            .to(academic_years::Entity, academic_years::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(enrollments::Entity).to_owned())
            .await
    }
}
