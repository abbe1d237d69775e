use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::path::PathBuf;
use thiserror::Error;
use tracing::error;

/// Failures surfaced while resolving a request's locale, loading its
/// messages, or rendering a page.
#[derive(Debug, Error)]
pub enum AppError {
    /// Requested locale is not in the registry.
    #[error("Unknown locale: '{0}'")]
    LocaleNotFound(String),

    /// Message file for a registered locale could not be read.
    #[error("Message bundle for '{locale}' unavailable at {path:?}")]
    BundleUnavailable {
        locale: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Message file exists but is not a JSON object.
    #[error("Message bundle for '{locale}' is malformed: {reason}")]
    BundleMalformed { locale: &'static str, reason: String },

    /// No route matches the request path.
    #[error("No route for '{0}'")]
    RouteNotFound(String),

    /// Route parameters could not be resolved.
    ///
    /// The router hands pages already-resolved parameters, so this comes
    /// from callers that drive the page functions with their own futures.
    #[error("Route parameters unavailable: {0}")]
    Params(String),
}

impl AppError {
    /// HTTP status the error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::LocaleNotFound(_) | AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::LocaleNotFound(_) | AppError::RouteNotFound(_) => "NOT_FOUND",
            AppError::BundleUnavailable { .. } | AppError::BundleMalformed { .. } => {
                "MESSAGES_UNAVAILABLE"
            }
            AppError::Params(_) => "INTERNAL_ERROR",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::LocaleNotFound(_) | AppError::RouteNotFound(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Server-side details (paths, parse errors) stay in the logs
        let message = if status.is_server_error() {
            error!("Request failed: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        let body = serde_json::json!({
            "ok": false,
            "error": {
                "code": self.code(),
                "message": message,
            }
        });
        (status, axum::Json(body)).into_response()
    }
}
