mod utils;

use utils::prelude::*;

mod token {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn success() {
        let app = App::new().await;
        let user = app.create_user(UserRole::Student).await;

        assert!(!user.access_token.is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn wrong_password() {
        let app = App::new().await;
        let user = app.create_user(UserRole::Student).await;

        let res = app
            .post("/token")
            .json(&json!({
                "username": user.username,
                "password": "not-the-password",
            }))
            .send()
            .await;

        assert_error!(res, error::WRONG_CREDENTIALS);
    }

    #[tokio::test]
    #[serial]
    async fn unknown_user() {
        let app = App::new().await;

        let res = app
            .post("/token")
            .json(&json!({
                "username": "nobody",
                "password": "password123",
            }))
            .send()
            .await;

        assert_error!(res, error::WRONG_CREDENTIALS);
    }

    #[tokio::test]
    #[serial]
    async fn inactive_user() {
        let app = App::new().await;
        let user = app.create_user(UserRole::Student).await;

        let res = app
            .patch(&format!("/accounts/users/{}", user.id))
            .user(&app.admin)
            .json(&json!({
                "is_active": false,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let res = app
            .post("/token")
            .json(&json!({
                "username": user.username,
                "password": "password123",
            }))
            .send()
            .await;

        assert_error!(res, error::WRONG_CREDENTIALS);
    }
}

mod profile {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn own_user_record() {
        let app = App::new().await;
        let user = app.create_user(UserRole::Faculty).await;

        let res = app.get("/accounts/users/profile").user(&user).send().await;

        assert_eq!(res.status(), StatusCode::OK);

        let body = res.json::<Value>().await;

        assert_eq!(body["username"], user.username);
        assert_eq!(body["role"], "faculty");
        assert!(body.get("password_hash").is_none());
    }

    #[tokio::test]
    #[serial]
    async fn requires_token() {
        let app = App::new().await;

        let res = app.get("/accounts/users/profile").send().await;

        assert_error!(res, error::COULD_NOT_GET_CLAIMS);
    }

    #[tokio::test]
    #[serial]
    async fn rejects_garbage_token() {
        let app = App::new().await;

        let res = app
            .get("/accounts/users/profile")
            .header("Authorization", "Bearer not-a-jwt")
            .send()
            .await;

        assert_error!(res, error::COULD_NOT_GET_CLAIMS);
    }
}
