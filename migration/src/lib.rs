pub use sea_orm_migration::prelude::*;

mod m20240612_181403_create_users_table;
mod m20240612_183947_create_student_profiles_table;
mod m20240612_190122_create_faculty_profiles_table;
mod m20240613_092815_create_departments_table;
mod m20240613_101248_create_academic_years_table;
mod m20240613_110530_create_courses_table;
mod m20240614_085417_create_enrollments_table;
mod m20240614_091206_create_course_assignments_table;
mod m20240614_093841_create_attendance_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240612_181403_create_users_table::Migration),
            Box::new(m20240612_183947_create_student_profiles_table::Migration),
            Box::new(m20240612_190122_create_faculty_profiles_table::Migration),
            Box::new(m20240613_092815_create_departments_table::Migration),
            Box::new(m20240613_101248_create_academic_years_table::Migration),
            Box::new(m20240613_110530_create_courses_table::Migration),
            Box::new(m20240614_085417_create_enrollments_table::Migration),
            Box::new(m20240614_091206_create_course_assignments_table::Migration),
            Box::new(m20240614_093841_create_attendance_table::Migration),
        ]
    }
}
