/* src/server/adapter/axum/src/handler/mod.rs */

mod report;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use pagestat_server::ReportParts;

pub(crate) struct AppState {
  pub parts: ReportParts,
}

pub(crate) fn build_router(parts: ReportParts) -> Router {
  let state = Arc::new(AppState { parts });

  Router::new()
    .route("/_pagestat/health", get(report::handle_health))
    .route("/_pagestat/report", get(report::handle_report_root))
    .route("/_pagestat/report/", get(report::handle_report_root))
    .route("/_pagestat/report/{*project}", get(report::handle_report))
    .fallback(report::handle_not_found)
    .with_state(state)
}
