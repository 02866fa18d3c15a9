mod academic_year;
mod assignment;
mod attendance;
mod course;
mod department;
mod enrollment;
mod faculty;
mod student;
mod summaries;
mod token;
mod user;

use crate::state::StateTrait;
use axum::{
    routing::{get, post},
    Router,
};

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/token", post(token::issue_token::<S>))
        .nest("/accounts/users", user::routes::<S>())
        .nest("/accounts/students", student::routes::<S>())
        .nest("/accounts/faculty", faculty::routes::<S>())
        .nest("/academics/departments", department::routes::<S>())
        .nest("/academics/academic-years", academic_year::routes::<S>())
        .nest("/academics/courses", course::routes::<S>())
        .nest("/academics/enrollments", enrollment::routes::<S>())
        .nest("/academics/assignments", assignment::routes::<S>())
        .nest("/academics/attendance", attendance::routes::<S>())
        .route("/liveness", get(|| async {}))
        .route("/readiness", get(|| async {}))
}
