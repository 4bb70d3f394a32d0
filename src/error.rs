use axum::{
    extract::rejection::{BytesRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::db::DaoError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Dao(#[from] DaoError),
    #[error(transparent)]
    Body(#[from] BytesRejection),
    #[error(transparent)]
    Path(#[from] PathRejection),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

// Request and decode failures are reported as 500 too; clients see one
// error shape.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::error!("{}", message);

        let body = Json(ErrorResponse { error: message });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn every_error_is_a_500_with_message() {
        let response = ApiError::from(DaoError::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"error": "not found"}));
    }

    #[test]
    fn decode_error_keeps_serde_message() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = err.to_string();
        assert_eq!(ApiError::from(err).to_string(), expected);
    }
}
