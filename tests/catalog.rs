mod utils;

use utils::prelude::*;

mod department {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn create_forbidden_for_student() {
        let app = App::new().await;
        let (student, _) = app.create_student().await;

        let res = app
            .post("/academics/departments")
            .user(&student)
            .json(&json!({
                "name": "Rogue Department",
                "code": "RD",
            }))
            .send()
            .await;

        assert_error!(res, error::NOT_ENOUGH_PERMISSIONS);
    }

    #[tokio::test]
    #[serial]
    async fn duplicate_code() {
        let app = App::new().await;

        let res = app
            .post("/academics/departments")
            .user(&app.admin)
            .json(&json!({
                "name": "Computer Science",
                "code": "CS",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let res = app
            .post("/academics/departments")
            .user(&app.admin)
            .json(&json!({
                "name": "Cognitive Science",
                "code": "CS",
            }))
            .send()
            .await;

        assert_error!(res, error::DUPLICATE_DEPARTMENT_CODE);
    }

    #[tokio::test]
    #[serial]
    async fn counts_active_courses() {
        let app = App::new().await;
        let department = app.create_department().await;
        let other = app.create_department().await;

        app.create_course(department, 1).await;
        let second = app.create_course(department, 2).await;
        app.create_course(other, 1).await;

        // soft-deleted courses drop out of the count
        let res = app
            .delete(&format!("/academics/courses/{second}"))
            .user(&app.admin)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let res = app
            .get(&format!("/academics/departments/{department}"))
            .user(&app.admin)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body = res.json::<Value>().await;

        assert_eq!(body["total_courses"], 1);
    }

    #[tokio::test]
    #[serial]
    async fn readable_by_any_authenticated_caller() {
        let app = App::new().await;
        let (student, _) = app.create_student().await;
        app.create_department().await;

        let res = app.get("/academics/departments").user(&student).send().await;

        assert_eq!(res.status(), StatusCode::OK);

        let body = res.json::<Value>().await;

        assert_eq!(body.as_array().unwrap().len(), 1);
    }
}

mod course {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn filter_by_department_and_semester() {
        let app = App::new().await;
        let department = app.create_department().await;
        let other = app.create_department().await;

        let wanted = app.create_course(department, 1).await;
        app.create_course(department, 2).await;
        app.create_course(other, 1).await;

        let res = app
            .get(&format!(
                "/academics/courses?department={department}&semester=1"
            ))
            .user(&app.admin)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body = res.json::<Value>().await;
        let rows = body.as_array().unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], wanted.to_string());
        assert_eq!(rows[0]["department"]["id"], department.to_string());
    }

    #[tokio::test]
    #[serial]
    async fn filter_by_department_only() {
        let app = App::new().await;
        let department = app.create_department().await;
        let other = app.create_department().await;

        app.create_course(department, 1).await;
        app.create_course(department, 2).await;
        app.create_course(other, 1).await;

        let res = app
            .get(&format!("/academics/courses?department={department}"))
            .user(&app.admin)
            .send()
            .await;

        let body = res.json::<Value>().await;

        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    #[serial]
    async fn soft_deleted_course_is_hidden() {
        let app = App::new().await;
        let department = app.create_department().await;
        let course = app.create_course(department, 1).await;

        let res = app
            .delete(&format!("/academics/courses/{course}"))
            .user(&app.admin)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let res = app.get("/academics/courses").user(&app.admin).send().await;
        let body = res.json::<Value>().await;

        assert!(body.as_array().unwrap().is_empty());

        let res = app
            .get(&format!("/academics/courses/{course}"))
            .user(&app.admin)
            .send()
            .await;

        assert_error!(res, error::COURSE_NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn duplicate_code() {
        let app = App::new().await;
        let department = app.create_department().await;

        let res = app
            .post("/academics/courses")
            .user(&app.admin)
            .json(&json!({
                "name": "Algorithms",
                "code": "CS301",
                "credits": 4,
                "department_id": department,
                "semester": 3,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let res = app
            .post("/academics/courses")
            .user(&app.admin)
            .json(&json!({
                "name": "Advanced Algorithms",
                "code": "CS301",
                "credits": 4,
                "department_id": department,
                "semester": 5,
            }))
            .send()
            .await;

        assert_error!(res, error::DUPLICATE_COURSE_CODE);
    }

    #[tokio::test]
    #[serial]
    async fn write_forbidden_for_faculty() {
        let app = App::new().await;
        let (faculty, _) = app.create_faculty().await;
        let department = app.create_department().await;

        let res = app
            .post("/academics/courses")
            .user(&faculty)
            .json(&json!({
                "name": "Unsanctioned Course",
                "code": "X999",
                "credits": 1,
                "department_id": department,
                "semester": 1,
            }))
            .send()
            .await;

        assert_error!(res, error::NOT_ENOUGH_PERMISSIONS);
    }

    #[tokio::test]
    #[serial]
    async fn unknown_department_is_rejected() {
        let app = App::new().await;

        let res = app
            .post("/academics/courses")
            .user(&app.admin)
            .json(&json!({
                "name": "Orphan Course",
                "code": "OR100",
                "credits": 2,
                "department_id": "00000000-0000-0000-0000-000000000000",
                "semester": 1,
            }))
            .send()
            .await;

        assert_error!(res, error::INVALID_REFERENCE);
    }
}
