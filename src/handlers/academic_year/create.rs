use crate::{
    error::{self, DatabaseError, Result},
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::NaiveDate;
use entity::academic_years::{self, constraints::*};
use sea_orm::{
    sea_query::Expr, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 9))]
    year: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    #[serde(default)]
    is_current: bool,
}

#[derive(Serialize)]
pub struct Response {
    id: Uuid,
}

pub async fn create_academic_year<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let txn = state.db().begin().await?;

    // clearing the previous current year and inserting the new one must be
    // atomic, the partial unique index rejects whatever slips through
    if request.is_current {
        academic_years::Entity::update_many()
            .col_expr(academic_years::Column::IsCurrent, Expr::value(false))
            .filter(academic_years::Column::IsCurrent.eq(true))
            .exec(&txn)
            .await?;
    }

    let id = Uuid::new_v4();

    let year = academic_years::ActiveModel {
        id: Set(id),
        year: Set(request.year),
        start_date: Set(request.start_date),
        end_date: Set(request.end_date),
        is_current: Set(request.is_current),
    };

    let result = academic_years::Entity::insert(year)
        .exec_without_returning(&txn)
        .await;

    match result {
        Err(err) if err.unique_violation(UC_ACADEMIC_YEARS_YEAR) => {
            return Err(error::DUPLICATE_ACADEMIC_YEAR)
        }
        r => {
            r?;
        }
    };

    txn.commit().await?;

    Ok((StatusCode::CREATED, Json(Response { id })))
}
