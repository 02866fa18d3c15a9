#![allow(unused_imports)]

pub(crate) use super::macros::*;
pub use super::{request::*, response::*, setup::App, user::User};
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use college_erp_backend::error;
pub use entity::users::UserRole;
pub use http::StatusCode;
pub use serde_json::{json, Value};
pub use serial_test::serial;
