use sea_orm::{ActiveValue, Value};

/// `Some` becomes `Set`, `None` stays `NotSet`, so PATCH bodies only touch the
/// columns they mention.
pub fn set_option<T>(value: Option<T>) -> ActiveValue<T>
where
    T: Into<Value>,
{
    match value {
        Some(value) => ActiveValue::Set(value),
        None => ActiveValue::NotSet,
    }
}
