//! Seeds a fresh database with a small, coherent data set for manual testing:
//! one current academic year, two departments, a professor, a student, three
//! courses, enrollments, a course assignment and a week of attendance.

use chrono::{NaiveDate, Utc};
use college_erp_backend::auth;
use dotenvy::dotenv;
use entity::{
    academic_years, attendance, course_assignments,
    courses::{self, CourseType},
    departments, enrollments, faculty_profiles, student_profiles,
    users::{self, UserRole},
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ColumnTrait, Database, DbConn, EntityTrait, QueryFilter, Set};
use std::env;
use uuid::Uuid;

const SAMPLE_PASSWORD: &str = "password123";

async fn get_or_create_user(db: &DbConn, username: &str, email: &str, first_name: &str, last_name: &str, role: UserRole) -> users::Model {
    if let Some(user) = users::Entity::find_by_username(username)
        .one(db)
        .await
        .expect("failed to query users")
    {
        return user;
    }

    let now = Utc::now().naive_utc();

    let user = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(username.to_owned()),
        password_hash: Set(auth::hash_password(SAMPLE_PASSWORD).expect("failed to hash password")),
        email: Set(email.to_owned()),
        first_name: Set(first_name.to_owned()),
        last_name: Set(last_name.to_owned()),
        role: Set(role),
        phone: Set(String::new()),
        date_of_birth: Set(None),
        address: Set(String::new()),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    };

    users::Entity::insert(user)
        .exec_with_returning(db)
        .await
        .expect("failed to create user")
}

async fn get_or_create_department(db: &DbConn, name: &str, code: &str, description: &str) -> departments::Model {
    if let Some(department) = departments::Entity::find_by_code(code)
        .one(db)
        .await
        .expect("failed to query departments")
    {
        return department;
    }

    let department = departments::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_owned()),
        code: Set(code.to_owned()),
        description: Set(description.to_owned()),
        head_of_department: Set(None),
        established_date: Set(None),
        is_active: Set(true),
    };

    departments::Entity::insert(department)
        .exec_with_returning(db)
        .await
        .expect("failed to create department")
}

async fn get_or_create_course(
    db: &DbConn,
    department: &departments::Model,
    name: &str,
    code: &str,
    credits: i32,
    semester: i32,
    course_type: CourseType,
) -> courses::Model {
    if let Some(course) = courses::Entity::find()
        .filter(courses::Column::Code.eq(code))
        .one(db)
        .await
        .expect("failed to query courses")
    {
        return course;
    }

    let course = courses::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_owned()),
        code: Set(code.to_owned()),
        credits: Set(credits),
        department_id: Set(department.id),
        semester: Set(semester),
        course_type: Set(course_type),
        description: Set(String::new()),
        theory_hours: Set(3),
        practical_hours: Set(if course_type == CourseType::Lab { 2 } else { 0 }),
        is_active: Set(true),
    };

    courses::Entity::insert(course)
        .exec_with_returning(db)
        .await
        .expect("failed to create course")
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();

    let url = env::var("DATABASE_URL").expect("DATABASE_URL is not set");
    let db = Database::connect(&url)
        .await
        .expect("failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("failed to apply migrations");

    println!("loading sample data...");

    let year = match academic_years::Entity::find()
        .filter(academic_years::Column::Year.eq("2024-2025"))
        .one(&db)
        .await
        .expect("failed to query academic years")
    {
        Some(year) => year,
        None => {
            let year = academic_years::ActiveModel {
                id: Set(Uuid::new_v4()),
                year: Set("2024-2025".to_owned()),
                start_date: Set(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()),
                end_date: Set(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()),
                is_current: Set(true),
            };

            academic_years::Entity::insert(year)
                .exec_with_returning(&db)
                .await
                .expect("failed to create academic year")
        }
    };

    let cs = get_or_create_department(
        &db,
        "Computer Science",
        "CS",
        "Department of Computer Science and Engineering",
    )
    .await;
    let math = get_or_create_department(&db, "Mathematics", "MATH", "Department of Mathematics").await;

    let professor = get_or_create_user(
        &db,
        "prof_smith",
        "smith@college.edu",
        "John",
        "Smith",
        UserRole::Faculty,
    )
    .await;

    let faculty = match faculty_profiles::Entity::find_by_user(professor.id)
        .one(&db)
        .await
        .expect("failed to query faculty profiles")
    {
        Some(profile) => profile,
        None => {
            let profile = faculty_profiles::ActiveModel {
                id: Set(Uuid::new_v4()),
                user_id: Set(professor.id),
                employee_id: Set("FAC001".to_owned()),
                department: Set(cs.name.clone()),
                designation: Set("Professor".to_owned()),
                joining_date: Set(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()),
                qualification: Set("PhD".to_owned()),
                experience_years: Set(10),
                is_active: Set(true),
            };

            faculty_profiles::Entity::insert(profile)
                .exec_with_returning(&db)
                .await
                .expect("failed to create faculty profile")
        }
    };

    let doe = get_or_create_user(
        &db,
        "student_doe",
        "doe@student.college.edu",
        "Jane",
        "Doe",
        UserRole::Student,
    )
    .await;

    let student = match student_profiles::Entity::find_by_user(doe.id)
        .one(&db)
        .await
        .expect("failed to query student profiles")
    {
        Some(profile) => profile,
        None => {
            let profile = student_profiles::ActiveModel {
                id: Set(Uuid::new_v4()),
                user_id: Set(doe.id),
                student_id: Set("STU001".to_owned()),
                enrollment_date: Set(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()),
                current_semester: Set(1),
                program: Set("BSc Computer Science".to_owned()),
                emergency_contact_name: Set(String::new()),
                emergency_contact_phone: Set(String::new()),
                is_active: Set(true),
            };

            student_profiles::Entity::insert(profile)
                .exec_with_returning(&db)
                .await
                .expect("failed to create student profile")
        }
    };

    let intro = get_or_create_course(
        &db,
        &cs,
        "Introduction to Programming",
        "CS101",
        4,
        1,
        CourseType::Core,
    )
    .await;
    let lab = get_or_create_course(&db, &cs, "Programming Lab", "CS102", 2, 1, CourseType::Lab).await;
    get_or_create_course(&db, &math, "Calculus I", "MATH101", 4, 1, CourseType::Core).await;

    for course in [&intro, &lab] {
        let exists = enrollments::Entity::find()
            .filter(enrollments::Column::StudentId.eq(student.id))
            .filter(enrollments::Column::CourseId.eq(course.id))
            .filter(enrollments::Column::AcademicYearId.eq(year.id))
            .one(&db)
            .await
            .expect("failed to query enrollments");

        if exists.is_none() {
            let enrollment = enrollments::ActiveModel {
                id: Set(Uuid::new_v4()),
                student_id: Set(student.id),
                course_id: Set(course.id),
                academic_year_id: Set(year.id),
                enrolled_at: Set(Utc::now().naive_utc()),
                grade: Set(None),
                grade_points: Set(None),
                is_active: Set(true),
            };

            enrollments::Entity::insert(enrollment)
                .exec_without_returning(&db)
                .await
                .expect("failed to create enrollment");
        }
    }

    let assigned = course_assignments::Entity::find()
        .filter(course_assignments::Column::FacultyId.eq(faculty.id))
        .filter(course_assignments::Column::CourseId.eq(intro.id))
        .filter(course_assignments::Column::AcademicYearId.eq(year.id))
        .one(&db)
        .await
        .expect("failed to query course assignments");

    if assigned.is_none() {
        let assignment = course_assignments::ActiveModel {
            id: Set(Uuid::new_v4()),
            faculty_id: Set(faculty.id),
            course_id: Set(intro.id),
            academic_year_id: Set(year.id),
            is_course_coordinator: Set(true),
            assigned_at: Set(Utc::now().naive_utc()),
        };

        course_assignments::Entity::insert(assignment)
            .exec_without_returning(&db)
            .await
            .expect("failed to create course assignment");
    }

    for day in 15..20 {
        let date = NaiveDate::from_ymd_opt(2024, 7, day).unwrap();

        let exists = attendance::Entity::find()
            .filter(attendance::Column::StudentId.eq(student.id))
            .filter(attendance::Column::CourseId.eq(intro.id))
            .filter(attendance::Column::Date.eq(date))
            .one(&db)
            .await
            .expect("failed to query attendance");

        if exists.is_none() {
            let record = attendance::ActiveModel {
                id: Set(Uuid::new_v4()),
                student_id: Set(student.id),
                course_id: Set(intro.id),
                date: Set(date),
                is_present: Set(day != 17),
                remarks: Set(String::new()),
                marked_by: Set(Some(faculty.id)),
                marked_at: Set(Utc::now().naive_utc()),
            };

            attendance::Entity::insert(record)
                .exec_without_returning(&db)
                .await
                .expect("failed to create attendance record");
        }
    }

    println!("done, sample users log in with password {SAMPLE_PASSWORD:?}");
}
