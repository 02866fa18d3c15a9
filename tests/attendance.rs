mod utils;

use utils::prelude::*;

mod create {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn forbidden_for_non_admin() {
        let app = App::new().await;
        let (faculty, _) = app.create_faculty().await;
        let (_, student) = app.create_student().await;
        let department = app.create_department().await;
        let course = app.create_course(department, 1).await;

        let res = app
            .post("/academics/attendance")
            .user(&faculty)
            .json(&json!({
                "student_id": student,
                "course_id": course,
                "date": "2024-07-15",
                "is_present": true,
            }))
            .send()
            .await;

        assert_error!(res, error::NOT_ENOUGH_PERMISSIONS);
    }

    #[tokio::test]
    #[serial]
    async fn duplicate_day_is_rejected() {
        let app = App::new().await;
        let (_, student) = app.create_student().await;
        let department = app.create_department().await;
        let course = app.create_course(department, 1).await;

        app.mark_attendance(student, course, "2024-07-15").await;

        let res = app
            .post("/academics/attendance")
            .user(&app.admin)
            .json(&json!({
                "student_id": student,
                "course_id": course,
                "date": "2024-07-15",
                "is_present": false,
            }))
            .send()
            .await;

        assert_error!(res, error::DUPLICATE_ATTENDANCE);
    }

    #[tokio::test]
    #[serial]
    async fn explicit_marker_is_recorded() {
        let app = App::new().await;
        let (_, faculty_profile) = app.create_faculty().await;
        let (_, student) = app.create_student().await;
        let department = app.create_department().await;
        let course = app.create_course(department, 1).await;

        let res = app
            .post("/academics/attendance")
            .user(&app.admin)
            .json(&json!({
                "student_id": student,
                "course_id": course,
                "date": "2024-07-15",
                "is_present": true,
                "marked_by_id": faculty_profile,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body = res.json::<Value>().await;
        let id = body["id"].as_str().unwrap().to_owned();

        let res = app
            .get(&format!("/academics/attendance/{id}"))
            .user(&app.admin)
            .send()
            .await;

        let body = res.json::<Value>().await;

        assert_eq!(body["marked_by"]["id"], faculty_profile.to_string());
    }
}

mod list {
    use super::*;

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

        let visible = app.mark_attendance(student, assigned, "2024-07-15").await;
        app.mark_attendance(student, unassigned, "2024-07-15").await;

        let res = app.get("/academics/attendance").user(&faculty).send().await;

        assert_eq!(res.status(), StatusCode::OK);

        let body = res.json::<Value>().await;
        let rows = body.as_array().unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], visible.to_string());
        assert_eq!(rows[0]["course"]["id"], assigned.to_string());
    }

    #[tokio::test]
    #[serial]
    async fn ordered_by_date_descending() {
        let app = App::new().await;
        let (_, student) = app.create_student().await;
        let department = app.create_department().await;
        let course = app.create_course(department, 1).await;

        app.mark_attendance(student, course, "2024-07-15").await;
        app.mark_attendance(student, course, "2024-07-17").await;
        app.mark_attendance(student, course, "2024-07-16").await;

        let res = app
            .get("/academics/attendance")
            .user(&app.admin)
            .send()
            .await;

        let body = res.json::<Value>().await;
        let dates: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["date"].as_str().unwrap())
            .collect();

        assert_eq!(dates, vec!["2024-07-17", "2024-07-16", "2024-07-15"]);
    }
}

mod my_attendance {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn wrong_role() {
        let app = App::new().await;
        let (faculty, _) = app.create_faculty().await;

        let res = app
            .get("/academics/attendance/my_attendance")
            .user(&faculty)
            .send()
            .await;

        assert_error!(res, error::STUDENTS_ONLY);
    }

    #[tokio::test]
    #[serial]
    async fn returns_own_rows() {
        let app = App::new().await;
        let (first, first_profile) = app.create_student().await;
        let (_, second_profile) = app.create_student().await;
        let department = app.create_department().await;
        let course = app.create_course(department, 1).await;

        let own = app.mark_attendance(first_profile, course, "2024-07-15").await;
        app.mark_attendance(second_profile, course, "2024-07-15").await;

        let res = app
            .get("/academics/attendance/my_attendance")
            .user(&first)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body = res.json::<Value>().await;
        let rows = body.as_array().unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], own.to_string());
        assert_eq!(rows[0]["student"]["id"], first_profile.to_string());
    }
}
