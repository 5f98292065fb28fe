//! REST API module.
//!
//! Every read route answers with a bare JSON list on success and the
//! `{status, message}` envelope otherwise.

mod comments;
mod subjects;
mod topics;

pub use comments::*;
pub use subjects::*;
pub use topics::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;

/// Success response carrying a status code and a JSON body.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub status: StatusCode,
    pub data: T,
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.data)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Create a 200 response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse {
        status: StatusCode::OK,
        data,
    })
}

/// Create a 201 response.
pub fn created<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse {
        status: StatusCode::CREATED,
        data,
    })
}

/// Map a query result to 200 with the documents, or 404 when none matched.
pub fn documents<T: Serialize>(result: Result<Vec<T>, AppError>) -> ApiResult<Vec<T>> {
    match result {
        Ok(docs) if docs.is_empty() => Err(AppError::no_documents()),
        Ok(docs) => success(docs),
        Err(e) => Err(e),
    }
}

/// Coerce the `{id}` path segment to a number, the way the store would cast it.
///
/// `"42"`, `" 42 "`, `"42.0"` and `"4.2e1"` all become `Some(42)`. A number with
/// a fractional part, or one outside the `i64` range, cannot equal any stored
/// `topic_id` and yields `None`. A segment that is not a number is a cast
/// failure and maps to an internal error.
pub fn parse_topic_id(raw: &str) -> Result<Option<i64>, AppError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::Internal(format!("Cannot cast path id {:?} to a number", raw)))?;

    if value.fract() != 0.0 || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        tracing::debug!("Path id {:?} cannot match an integer topic_id", raw);
        return Ok(None);
    }
    Ok(Some(value as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_topic_id() {
        assert_eq!(parse_topic_id("42").unwrap(), Some(42));
        assert_eq!(parse_topic_id(" -3 ").unwrap(), Some(-3));
        assert_eq!(parse_topic_id("42.0").unwrap(), Some(42));
        assert_eq!(parse_topic_id("4.2e1").unwrap(), Some(42));
        assert_eq!(parse_topic_id("4.5").unwrap(), None);
        assert_eq!(parse_topic_id("1e300").unwrap(), None);
    }

    #[test]
    fn test_non_numeric_topic_id_is_internal_error() {
        for raw in ["forty-two", "abc", "NaN", "inf"] {
            let err = parse_topic_id(raw).unwrap_err();
            assert!(matches!(err, AppError::Internal(_)), "{raw}");
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_empty_documents_is_not_found() {
        let result = documents::<i32>(Ok(vec![]));
        assert!(matches!(result, Err(AppError::NotFound(_))));

        let result = documents(Ok(vec![1, 2])).unwrap();
        assert_eq!(result.status, StatusCode::OK);
        assert_eq!(result.data, vec![1, 2]);
    }
}
