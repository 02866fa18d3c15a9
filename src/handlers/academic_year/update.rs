use crate::{
    error::{self, DatabaseError, Result},
    extractors::ValidatedJson,
    utils::set_option,
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use entity::academic_years::{self, constraints::*};
use sea_orm::{
    sea_query::Expr, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set, TransactionTrait,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 9))]
    year: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    is_current: Option<bool>,
}

pub async fn update_academic_year<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<StatusCode> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::ACADEMIC_YEAR_NOT_FOUND);
    };

    if request.year.is_none()
        && request.start_date.is_none()
        && request.end_date.is_none()
        && request.is_current.is_none()
    {
        return Ok(StatusCode::NO_CONTENT);
    }

    let txn = state.db().begin().await?;

    // making this year current demotes every other year inside the same
    // transaction, so no sequence of updates can leave two current years
    if request.is_current == Some(true) {
        academic_years::Entity::update_many()
            .col_expr(academic_years::Column::IsCurrent, Expr::value(false))
            .filter(academic_years::Column::IsCurrent.eq(true))
            .filter(academic_years::Column::Id.ne(id))
            .exec(&txn)
            .await?;
    }

    let active_model = academic_years::ActiveModel {
        id: Set(id),
        year: set_option(request.year),
        start_date: set_option(request.start_date),
        end_date: set_option(request.end_date),
        is_current: set_option(request.is_current),
    };

    let res = academic_years::Entity::update(active_model).exec(&txn).await;

    match res {
        Err(DbErr::RecordNotFound(_)) => return Err(error::ACADEMIC_YEAR_NOT_FOUND),
        Err(err) if err.unique_violation(UC_ACADEMIC_YEARS_YEAR) => {
            return Err(error::DUPLICATE_ACADEMIC_YEAR)
        }
        r => {
            r?;
        }
    };

    txn.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}
