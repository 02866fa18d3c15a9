use entity::{
    academic_years,
    course_assignments::{self, constraints::*},
    courses, faculty_profiles,
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
                    .table(course_assignments::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(course_assignments::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(course_assignments::Column::FacultyId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(course_assignments::Column::CourseId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(course_assignments::Column::AcademicYearId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(course_assignments::Column::IsCourseCoordinator)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(course_assignments::Column::AssignedAt)
                            .date_time()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_COURSE_ASSIGNMENTS)
                            .col(course_assignments::Column::Id),
                    )
                    .index(
                        Index::create()
                            .name(UC_COURSE_ASSIGNMENTS_FACULTY_COURSE_YEAR)
                            .col(course_assignments::Column::FacultyId)
                            .col(course_assignments::Column::CourseId)
                            .col(course_assignments::Column::AcademicYearId)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COURSE_ASSIGNMENTS_FACULTY)
                            .from(
                                course_assignments::Entity,
                                course_assignments::Column::FacultyId,
                            )
                            .to(faculty_profiles::Entity, faculty_profiles::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COURSE_ASSIGNMENTS_COURSE)
                            .from(
                                course_assignments::Entity,
                                course_assignments::Column::CourseId,
                            )
                            .to(courses::Entity, courses::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COURSE_ASSIGNMENTS_ACADEMIC_YEAR)
                            .from(
                                course_assignments::Entity,
                                course_assignments::Column::AcademicYearId,
                            )
                            .to(academic_years::Entity, academic_years::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(course_assignments::Entity).to_owned())
            .await
    }
}
