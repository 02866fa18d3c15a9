mod utils;

use utils::prelude::*;

mod create_user {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn success() {
        let app = App::new().await;

        let res = app
            .post("/accounts/users")
            .user(&app.admin)
            .json(&json!({
                "username": "fresh_user",
                "password": "password123",
                "email": "fresh@college.edu",
                "role": "student",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body = res.json::<Value>().await;

        assert!(body.is_object());
        assert!(body["id"].is_string());
    }

    #[tokio::test]
    #[serial]
    async fn duplicate_username() {
        let app = App::new().await;
        let user = app.create_user(UserRole::Student).await;

        let res = app
            .post("/accounts/users")
            .user(&app.admin)
            .json(&json!({
                "username": user.username,
                "password": "password123",
                "email": "other@college.edu",
                "role": "student",
            }))
            .send()
            .await;

        assert_error!(res, error::DUPLICATE_USERNAME);
    }

    #[tokio::test]
    #[serial]
    async fn forbidden_for_non_admin() {
        let app = App::new().await;
        let user = app.create_user(UserRole::Student).await;

        let res = app
            .post("/accounts/users")
            .user(&user)
            .json(&json!({
                "username": "sneaky",
                "password": "password123",
                "email": "sneaky@college.edu",
                "role": "admin",
            }))
            .send()
            .await;

        assert_error!(res, error::NOT_ENOUGH_PERMISSIONS);
    }

    #[tokio::test]
    #[serial]
    async fn rejects_short_password() {
        let app = App::new().await;

        let res = app
            .post("/accounts/users")
            .user(&app.admin)
            .json(&json!({
                "username": "shorty",
                "password": "short",
                "email": "shorty@college.edu",
                "role": "student",
            }))
            .send()
            .await;

        assert_error!(res, error::JSON_VALIDATE_INVALID);
    }
}

mod student_profile {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn my_profile() {
        let app = App::new().await;
        let (student, profile) = app.create_student().await;

        let res = app
            .get("/accounts/students/my_profile")
            .user(&student)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body = res.json::<Value>().await;

        assert_eq!(body["id"], profile.to_string());
        assert_eq!(body["user"], student.id.to_string());
        assert_eq!(body["user_details"]["role"], "student");
    }

    #[tokio::test]
    #[serial]
    async fn my_profile_wrong_role() {
        let app = App::new().await;
        let (faculty, _) = app.create_faculty().await;

        let res = app
            .get("/accounts/students/my_profile")
            .user(&faculty)
            .send()
            .await;

        assert_error!(res, error::STUDENTS_ONLY);
    }

    #[tokio::test]
    #[serial]
    async fn my_profile_missing() {
        let app = App::new().await;
        let user = app.create_user(UserRole::Student).await;

        let res = app
            .get("/accounts/students/my_profile")
            .user(&user)
            .send()
            .await;

        assert_error!(res, error::STUDENT_PROFILE_NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn student_sees_only_own_row() {
        let app = App::new().await;
        let (first, first_profile) = app.create_student().await;
        let (_second, _) = app.create_student().await;

        let res = app.get("/accounts/students").user(&first).send().await;

        assert_eq!(res.status(), StatusCode::OK);

        let body = res.json::<Value>().await;
        let rows = body.as_array().unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], first_profile.to_string());
    }

    #[tokio::test]
    #[serial]
    async fn admin_sees_all_rows() {
        let app = App::new().await;
        app.create_student().await;
        app.create_student().await;

        let res = app.get("/accounts/students").user(&app.admin).send().await;

        assert_eq!(res.status(), StatusCode::OK);

        let body = res.json::<Value>().await;

        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    #[serial]
    async fn create_for_wrong_role() {
        let app = App::new().await;
        let faculty_user = app.create_user(UserRole::Faculty).await;

        let res = app
            .post("/accounts/students")
            .user(&app.admin)
            .json(&json!({
                "user": faculty_user.id,
                "student_id": "STU-X",
                "enrollment_date": "2024-07-15",
            }))
            .send()
            .await;

        assert_error!(res, error::WRONG_USER_ROLE);
    }

    #[tokio::test]
    #[serial]
    async fn duplicate_student_id() {
        let app = App::new().await;
        let first = app.create_user(UserRole::Student).await;
        let second = app.create_user(UserRole::Student).await;

        let res = app
            .post("/accounts/students")
            .user(&app.admin)
            .json(&json!({
                "user": first.id,
                "student_id": "STU-DUP",
                "enrollment_date": "2024-07-15",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let res = app
            .post("/accounts/students")
            .user(&app.admin)
            .json(&json!({
                "user": second.id,
                "student_id": "STU-DUP",
                "enrollment_date": "2024-07-15",
            }))
            .send()
            .await;

        assert_error!(res, error::DUPLICATE_STUDENT_ID);
    }

    #[tokio::test]
    #[serial]
    async fn student_updates_own_profile() {
        let app = App::new().await;
        let (student, profile) = app.create_student().await;

        let res = app
            .patch(&format!("/accounts/students/{profile}"))
            .user(&student)
            .json(&json!({
                "program": "MSc Computer Science",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let res = app
            .get("/accounts/students/my_profile")
            .user(&student)
            .send()
            .await;

        let body = res.json::<Value>().await;

        assert_eq!(body["program"], "MSc Computer Science");
    }

    #[tokio::test]
    #[serial]
    async fn faculty_cannot_update_student_profile() {
        let app = App::new().await;
        let (_, profile) = app.create_student().await;
        let (faculty, _) = app.create_faculty().await;

        let res = app
            .patch(&format!("/accounts/students/{profile}"))
            .user(&faculty)
            .json(&json!({
                "program": "Hijacked",
            }))
            .send()
            .await;

        assert_error!(res, error::NOT_ENOUGH_PERMISSIONS);
    }
}

mod faculty_profile {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn my_profile() {
        let app = App::new().await;
        let (faculty, profile) = app.create_faculty().await;

        let res = app
            .get("/accounts/faculty/my_profile")
            .user(&faculty)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body = res.json::<Value>().await;

        assert_eq!(body["id"], profile.to_string());
        assert_eq!(body["user_details"]["role"], "faculty");
    }

    #[tokio::test]
    #[serial]
    async fn my_profile_wrong_role() {
        let app = App::new().await;
        let (student, _) = app.create_student().await;

        let res = app
            .get("/accounts/faculty/my_profile")
            .user(&student)
            .send()
            .await;

        assert_error!(res, error::FACULTY_ONLY);
    }

    #[tokio::test]
    #[serial]
    async fn profile_already_exists() {
        let app = App::new().await;
        let (faculty, _) = app.create_faculty().await;

        let res = app
            .post("/accounts/faculty")
            .user(&app.admin)
            .json(&json!({
                "user": faculty.id,
                "employee_id": "FAC-NEW",
                "department": "Mathematics",
                "designation": "Professor",
                "joining_date": "2021-01-01",
            }))
            .send()
            .await;

        assert_error!(res, error::PROFILE_ALREADY_EXISTS);
    }
}
