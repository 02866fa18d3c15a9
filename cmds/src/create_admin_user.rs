use chrono::Utc;
use college_erp_backend::auth;
use dotenvy::dotenv;
use entity::users::{self, UserRole};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, EntityTrait, Set};
use std::env::{self, args};
use uuid::Uuid;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();

    let username = args().nth(1).expect("no username given");
    let password = args().nth(2).expect("no password given");

    let url = env::var("DATABASE_URL").expect("DATABASE_URL is not set");
    let db = Database::connect(&url)
        .await
        .expect("failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("failed to apply migrations");

    let existing = users::Entity::find_by_username(&username)
        .one(&db)
        .await
        .expect("failed to query users");

    if existing.is_some() {
        println!("user already exists, exiting");
        return;
    }

    let now = Utc::now().naive_utc();
    let id = Uuid::new_v4();

    let user = users::ActiveModel {
        id: Set(id),
        username: Set(username.clone()),
        password_hash: Set(auth::hash_password(&password).expect("failed to hash password")),
        email: Set(format!("{username}@admin.college.edu")),
        first_name: Set("Admin".to_owned()),
        last_name: Set("User".to_owned()),
        role: Set(UserRole::Admin),
        phone: Set(String::new()),
        date_of_birth: Set(None),
        address: Set(String::new()),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    };

    users::Entity::insert(user)
        .exec_without_returning(&db)
        .await
        .expect("failed to create admin user");

    println!("{id}");
}
