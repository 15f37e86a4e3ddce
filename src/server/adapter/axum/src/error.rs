/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pagestat_server::PagestatError;

/// `PagestatError` rendered as the `{"ok": false, "error": ...}` envelope.
pub(crate) struct AxumError(pub PagestatError);

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let status = StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
      tracing::error!(code = self.0.code(), error = %self.0, "request failed");
    }
    let body = serde_json::json!({
      "ok": false,
      "error": {
        "code": self.0.code(),
        "message": self.0.to_string(),
        "transient": false,
      }
    });
    (status, axum::Json(body)).into_response()
  }
}
