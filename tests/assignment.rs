mod utils;

use utils::prelude::*;

mod create {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn forbidden_for_faculty() {
        let app = App::new().await;
        let (faculty, faculty_profile) = app.create_faculty().await;
        let department = app.create_department().await;
        let course = app.create_course(department, 1).await;
        let year = app.create_academic_year("2024-2025", true).await;

        let res = app
            .post("/academics/assignments")
            .user(&faculty)
            .json(&json!({
                "faculty_id": faculty_profile,
                "course_id": course,
                "academic_year_id": year,
            }))
            .send()
            .await;

        assert_error!(res, error::NOT_ENOUGH_PERMISSIONS);
    }

    #[tokio::test]
    #[serial]
    async fn duplicate_triple_is_rejected() {
        let app = App::new().await;
        let (_, faculty_profile) = app.create_faculty().await;
        let department = app.create_department().await;
        let course = app.create_course(department, 1).await;
        let year = app.create_academic_year("2024-2025", true).await;

        app.assign(faculty_profile, course, year).await;

        let res = app
            .post("/academics/assignments")
            .user(&app.admin)
            .json(&json!({
                "faculty_id": faculty_profile,
                "course_id": course,
                "academic_year_id": year,
            }))
            .send()
            .await;

        assert_error!(res, error::DUPLICATE_ASSIGNMENT);
    }
}

mod list {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn faculty_sees_own_rows_only() {
        let app = App::new().await;
        let (first, first_profile) = app.create_faculty().await;
        let (_, second_profile) = app.create_faculty().await;
        let department = app.create_department().await;
        let course = app.create_course(department, 1).await;
        let other_course = app.create_course(department, 2).await;
        let year = app.create_academic_year("2024-2025", true).await;

        let own = app.assign(first_profile, course, year).await;
        app.assign(second_profile, other_course, year).await;

        let res = app.get("/academics/assignments").user(&first).send().await;

        assert_eq!(res.status(), StatusCode::OK);

        let body = res.json::<Value>().await;
        let rows = body.as_array().unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], own.to_string());
        assert_eq!(rows[0]["faculty"]["id"], first_profile.to_string());
    }

    #[tokio::test]
    #[serial]
    async fn admin_sees_everything() {
        let app = App::new().await;
        let (_, first_profile) = app.create_faculty().await;
        let (_, second_profile) = app.create_faculty().await;
        let department = app.create_department().await;
        let course = app.create_course(department, 1).await;
        let year = app.create_academic_year("2024-2025", true).await;

        app.assign(first_profile, course, year).await;
        app.assign(second_profile, course, year).await;

        let res = app
            .get("/academics/assignments")
            .user(&app.admin)
            .send()
            .await;

        let body = res.json::<Value>().await;

        assert_eq!(body.as_array().unwrap().len(), 2);
    }
}

mod delete {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn admin_removes_assignment() {
        let app = App::new().await;
        let (_, faculty_profile) = app.create_faculty().await;
        let department = app.create_department().await;
        let course = app.create_course(department, 1).await;
        let year = app.create_academic_year("2024-2025", true).await;

        let assignment = app.assign(faculty_profile, course, year).await;

        let res = app
            .delete(&format!("/academics/assignments/{assignment}"))
            .user(&app.admin)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let res = app
            .get(&format!("/academics/assignments/{assignment}"))
            .user(&app.admin)
            .send()
            .await;

        assert_error!(res, error::ASSIGNMENT_NOT_FOUND);
    }
}
