use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use veranda_quote::QuoteError;

#[derive(Debug)]
pub enum ApiError {
    /// A rejected input field; the message names the field so the quote
    /// form can point at it
    Validation(String),
    /// An option combination the pricing tables do not offer
    UnsupportedSelection(String),
    EmptyQuote(String),
    Internal(anyhow::Error),
}

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        match &err {
            QuoteError::InvalidDimension(_) => ApiError::Validation(err.to_string()),
            QuoteError::UnknownPricingKey(_) | QuoteError::UnsupportedFeature { .. } => {
                ApiError::UnsupportedSelection(err.to_string())
            }
            QuoteError::EmptyQuote => ApiError::EmptyQuote(err.to_string()),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::UnsupportedSelection(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::EmptyQuote(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
