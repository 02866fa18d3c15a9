mod utils;

use utils::prelude::*;

mod create {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn duplicate_triple_is_rejected() {
        let app = App::new().await;
        let (_, student) = app.create_student().await;
        let department = app.create_department().await;
        let course = app.create_course(department, 1).await;
        let year = app.create_academic_year("2024-2025", true).await;

        app.enroll(student, course, year).await;

        let res = app
            .post("/academics/enrollments")
            .user(&app.admin)
            .json(&json!({
                "student_id": student,
                "course_id": course,
                "academic_year_id": year,
            }))
            .send()
            .await;

        assert_error!(res, error::DUPLICATE_ENROLLMENT);
    }

    #[tokio::test]
    #[serial]
    async fn unknown_student_is_rejected() {
        let app = App::new().await;
        let department = app.create_department().await;
        let course = app.create_course(department, 1).await;
        let year = app.create_academic_year("2024-2025", true).await;

        let res = app
            .post("/academics/enrollments")
            .user(&app.admin)
            .json(&json!({
                "student_id": "00000000-0000-0000-0000-000000000000",
                "course_id": course,
                "academic_year_id": year,
            }))
            .send()
            .await;

        assert_error!(res, error::INVALID_REFERENCE);
    }
}

mod list {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn student_sees_only_own_rows() {
        let app = App::new().await;
        let (first, first_profile) = app.create_student().await;
        let (_, second_profile) = app.create_student().await;
        let department = app.create_department().await;
        let course = app.create_course(department, 1).await;
        let year = app.create_academic_year("2024-2025", true).await;

        let own = app.enroll(first_profile, course, year).await;
        app.enroll(second_profile, course, year).await;

        let res = app.get("/academics/enrollments").user(&first).send().await;

        assert_eq!(res.status(), StatusCode::OK);

        let body = res.json::<Value>().await;
        let rows = body.as_array().unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], own.to_string());
        assert_eq!(rows[0]["student"]["id"], first_profile.to_string());
    }

    #[tokio::test]
    #[serial]
    async fn faculty_sees_assigned_courses_only() {
        let app = App::new().await;
        let (faculty, faculty_profile) = app.create_faculty().await;
        let (_, student) = app.create_student().await;
        let department = app.create_department().await;
        let assigned = app.create_course(department, 1).await;
        let unassigned = app.create_course(department, 1).await;
        let year = app.create_academic_year("2024-2025", true).await;

        app.assign(faculty_profile, assigned, year).await;

        let visible = app.enroll(student, assigned, year).await;
        app.enroll(student, unassigned, year).await;

        let res = app.get("/academics/enrollments").user(&faculty).send().await;

        assert_eq!(res.status(), StatusCode::OK);

        let body = res.json::<Value>().await;
        let rows = body.as_array().unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], visible.to_string());
        assert_eq!(rows[0]["course"]["id"], assigned.to_string());
    }

    #[tokio::test]
    #[serial]
    async fn admin_sees_everything() {
        let app = App::new().await;
        let (_, first) = app.create_student().await;
        let (_, second) = app.create_student().await;
        let department = app.create_department().await;
        let course = app.create_course(department, 1).await;
        let year = app.create_academic_year("2024-2025", true).await;

        app.enroll(first, course, year).await;
        app.enroll(second, course, year).await;

        let res = app
            .get("/academics/enrollments")
            .user(&app.admin)
            .send()
            .await;

        let body = res.json::<Value>().await;

        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    #[serial]
    async fn soft_deleted_enrollment_is_hidden() {
        let app = App::new().await;
        let (_, student) = app.create_student().await;
        let department = app.create_department().await;
        let course = app.create_course(department, 1).await;
        let year = app.create_academic_year("2024-2025", true).await;

        let enrollment = app.enroll(student, course, year).await;

        let res = app
            .delete(&format!("/academics/enrollments/{enrollment}"))
            .user(&app.admin)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let res = app
            .get("/academics/enrollments")
            .user(&app.admin)
            .send()
            .await;

        let body = res.json::<Value>().await;

        assert!(body.as_array().unwrap().is_empty());
    }
}

mod my_enrollments {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn wrong_role() {
        let app = App::new().await;
        let (faculty, _) = app.create_faculty().await;

        let res = app
            .get("/academics/enrollments/my_enrollments")
            .user(&faculty)
            .send()
            .await;

        assert_error!(res, error::STUDENTS_ONLY);
    }

    #[tokio::test]
    #[serial]
    async fn returns_own_rows() {
        let app = App::new().await;
        let (student, profile) = app.create_student().await;
        let department = app.create_department().await;
        let course = app.create_course(department, 1).await;
        let year = app.create_academic_year("2024-2025", true).await;

        let enrollment = app.enroll(profile, course, year).await;

        let res = app
            .get("/academics/enrollments/my_enrollments")
            .user(&student)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body = res.json::<Value>().await;
        let rows = body.as_array().unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], enrollment.to_string());
        assert_eq!(rows[0]["academic_year"]["year"], "2024-2025");
    }

    #[tokio::test]
    #[serial]
    async fn empty_without_profile() {
        let app = App::new().await;
        let user = app.create_user(UserRole::Student).await;

        let res = app
            .get("/academics/enrollments/my_enrollments")
            .user(&user)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body = res.json::<Value>().await;

        assert!(body.as_array().unwrap().is_empty());
    }
}

mod update {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn admin_sets_grade() {
        let app = App::new().await;
        let (student, profile) = app.create_student().await;
        let department = app.create_department().await;
        let course = app.create_course(department, 1).await;
        let year = app.create_academic_year("2024-2025", true).await;

        let enrollment = app.enroll(profile, course, year).await;

        let res = app
            .patch(&format!("/academics/enrollments/{enrollment}"))
            .user(&app.admin)
            .json(&json!({
                "grade": "A+",
                "grade_points": "9.50",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let res = app
            .get(&format!("/academics/enrollments/{enrollment}"))
            .user(&student)
            .send()
            .await;

        let body = res.json::<Value>().await;

        assert_eq!(body["grade"], "A+");
    }

    #[tokio::test]
    #[serial]
    async fn student_cannot_touch_foreign_rows() {
        let app = App::new().await;
        let (_, profile) = app.create_student().await;
        let (other, _) = app.create_student().await;
        let department = app.create_department().await;
        let course = app.create_course(department, 1).await;
        let year = app.create_academic_year("2024-2025", true).await;

        let enrollment = app.enroll(profile, course, year).await;

        let res = app
            .patch(&format!("/academics/enrollments/{enrollment}"))
            .user(&other)
            .json(&json!({
                "grade": "A+",
            }))
            .send()
            .await;

        assert_error!(res, error::ENROLLMENT_NOT_FOUND);
    }
}
