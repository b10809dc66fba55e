use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::domain::faq::errors::FaqError;
use crate::domain::faq::models::Faq;

pub mod create_faq;
pub mod delete_faq;
pub mod get_faq;
pub mod list_faqs;
pub mod login;
pub mod update_faq;
pub mod welcome;

/// The one detail string every authentication failure surfaces. Which check
/// actually failed stays in the logs.
pub const INCORRECT_CREDENTIALS: &str = "Incorrect credentials";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    NotFound(String),
    Conflict(String),
    Unauthorized,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(msg) => {
                detail_response(StatusCode::INTERNAL_SERVER_ERROR, &msg)
            }
            ApiError::NotFound(msg) => detail_response(StatusCode::NOT_FOUND, &msg),
            ApiError::Conflict(msg) => detail_response(StatusCode::CONFLICT, &msg),
            ApiError::Unauthorized => unauthorized(),
        }
    }
}

impl From<FaqError> for ApiError {
    fn from(err: FaqError) -> Self {
        match err {
            FaqError::NotFound(_) => ApiError::NotFound(err.to_string()),
            FaqError::AlreadyExists(_) => ApiError::Conflict(err.to_string()),
            FaqError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

fn detail_response(status: StatusCode, detail: &str) -> Response {
    (status, Json(json!({ "detail": detail }))).into_response()
}

/// The single generic rejection used for every authentication failure,
/// whatever the internal kind. One status, one body, one challenge header;
/// the caller gets no decoding oracle.
pub fn unauthorized() -> Response {
    let mut response = detail_response(StatusCode::UNAUTHORIZED, INCORRECT_CREDENTIALS);
    response
        .headers_mut()
        .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));

    response
}

/// FAQ record as serialized in responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqData {
    pub id: i64,
    pub question: String,
    pub answer: String,
}

impl From<&Faq> for FaqData {
    fn from(faq: &Faq) -> Self {
        Self {
            id: faq.id.0,
            question: faq.question.clone(),
            answer: faq.answer.clone(),
        }
    }
}
