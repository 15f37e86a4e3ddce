/* src/server/adapter/axum/src/handler/report.rs */

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::IntoResponse;
use pagestat_server::{ActivationReport, PagestatError};

use super::AppState;
use crate::error::AxumError;

fn report_body(report: &ActivationReport) -> axum::Json<serde_json::Value> {
  axum::Json(serde_json::json!({ "ok": true, "data": report }))
}

/// No suffix on the request (with or without a trailing slash): nothing to resolve.
pub(super) async fn handle_report_root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  report_body(&state.parts.report(None))
}

/// The wildcard carries the project path without its leading slash.
pub(super) async fn handle_report(
  State(state): State<Arc<AppState>>,
  Path(project): Path<String>,
) -> impl IntoResponse {
  let suffix = format!("/{project}");
  report_body(&state.parts.report(Some(&suffix)))
}

pub(super) async fn handle_health() -> impl IntoResponse {
  axum::Json(serde_json::json!({ "ok": true }))
}

pub(super) async fn handle_not_found(uri: Uri) -> AxumError {
  AxumError(PagestatError::RouteNotFound(uri.path().to_string()))
}
