use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthenticated,
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Database error: {0}")]
    Database(#[from] database::DbError),
    #[error("Report error: {0}")]
    Report(#[from] reporting::ReportError),
    #[error("Render error: {0}")]
    Render(#[from] renderer::RenderError),
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Store and render failures are deliberately indistinguishable to the
/// caller: both become a generic 500 while the internal cause is logged.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "Authentication required".to_string(),
            ),
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Ledger store error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Report generation failed".to_string(),
                )
            }
            AppError::Report(report_err) => {
                tracing::error!(error = ?report_err, "Report engine error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Report generation failed".to_string(),
                )
            }
            AppError::Render(render_err) => {
                tracing::error!(error = ?render_err, "Document render error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Report generation failed".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_taxonomy_to_status_codes() {
        assert_eq!(
            AppError::Unauthenticated.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Validation("bad period".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Database(database::DbError::NotFound)
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_failures_are_not_leaked_to_the_caller() {
        let err = AppError::Database(database::DbError::ConnectionConfigError(
            "DATABASE_URL must be set.".to_string(),
        ));
        // The response body carries the generic message only; the detail
        // above goes to the log.
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
