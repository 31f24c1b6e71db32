//! Request extractors whose rejections use the JSON error body.

use axum::extract::FromRequest;

use crate::error::AppError;

/// Drop-in for [`axum::Json`] that rejects malformed bodies with
/// `400 {"error", "code"}` instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
