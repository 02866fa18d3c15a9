mod utils;

use utils::prelude::*;

mod current {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn not_set() {
        let app = App::new().await;

        let res = app
            .get("/academics/academic-years/current")
            .user(&app.admin)
            .send()
            .await;

        assert_error!(res, error::NO_CURRENT_ACADEMIC_YEAR);
    }

    #[tokio::test]
    #[serial]
    async fn returns_current() {
        let app = App::new().await;
        app.create_academic_year("2023-2024", false).await;
        let current = app.create_academic_year("2024-2025", true).await;

        let res = app
            .get("/academics/academic-years/current")
            .user(&app.admin)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body = res.json::<Value>().await;

        assert_eq!(body["id"], current.to_string());
        assert_eq!(body["year"], "2024-2025");
        assert_eq!(body["is_current"], true);
    }
}

mod single_current {
    use super::*;

    async fn current_years(app: &App) -> Vec<String> {
        let res = app
            .get("/academics/academic-years")
            .user(&app.admin)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body = res.json::<Value>().await;

        body.as_array()
            .unwrap()
            .iter()
            .filter(|year| year["is_current"] == true)
            .map(|year| year["id"].as_str().unwrap().to_owned())
            .collect()
    }

    #[tokio::test]
    #[serial]
    async fn create_demotes_previous_current() {
        let app = App::new().await;
        let first = app.create_academic_year("2023-2024", true).await;

        assert_eq!(current_years(&app).await, vec![first.to_string()]);

        let second = app.create_academic_year("2024-2025", true).await;

        assert_eq!(current_years(&app).await, vec![second.to_string()]);
    }

    #[tokio::test]
    #[serial]
    async fn update_demotes_previous_current() {
        let app = App::new().await;
        let first = app.create_academic_year("2023-2024", true).await;
        let second = app.create_academic_year("2024-2025", false).await;

        let res = app
            .patch(&format!("/academics/academic-years/{second}"))
            .user(&app.admin)
            .json(&json!({
                "is_current": true,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert_eq!(current_years(&app).await, vec![second.to_string()]);

        // and back again, still exactly one current year
        let res = app
            .patch(&format!("/academics/academic-years/{first}"))
            .user(&app.admin)
            .json(&json!({
                "is_current": true,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert_eq!(current_years(&app).await, vec![first.to_string()]);
    }
}

mod write {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn forbidden_for_non_admin() {
        let app = App::new().await;
        let (faculty, _) = app.create_faculty().await;

        let res = app
            .post("/academics/academic-years")
            .user(&faculty)
            .json(&json!({
                "year": "2024-2025",
                "start_date": "2024-07-01",
                "end_date": "2025-06-30",
            }))
            .send()
            .await;

        assert_error!(res, error::NOT_ENOUGH_PERMISSIONS);
    }

    #[tokio::test]
    #[serial]
    async fn duplicate_year() {
        let app = App::new().await;
        app.create_academic_year("2024-2025", false).await;

        let res = app
            .post("/academics/academic-years")
            .user(&app.admin)
            .json(&json!({
                "year": "2024-2025",
                "start_date": "2024-07-01",
                "end_date": "2025-06-30",
            }))
            .send()
            .await;

        assert_error!(res, error::DUPLICATE_ACADEMIC_YEAR);
    }

    #[tokio::test]
    #[serial]
    async fn delete() {
        let app = App::new().await;
        let year = app.create_academic_year("2024-2025", false).await;

        let res = app
            .delete(&format!("/academics/academic-years/{year}"))
            .user(&app.admin)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let res = app
            .get(&format!("/academics/academic-years/{year}"))
            .user(&app.admin)
            .send()
            .await;

        assert_error!(res, error::ACADEMIC_YEAR_NOT_FOUND);
    }
}
