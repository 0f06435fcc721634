use axum::extract::{FromRequest, FromRequestParts};

use crate::error::Error;

/// JSON body whose rejections answer as a 400 `{"message": ...}`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct JsonBody<T>(pub T);

/// Query string whose rejections answer as a 400 `{"message": ...}`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct QueryParams<T>(pub T);
