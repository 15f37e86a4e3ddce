/* src/server/engine/rust/src/statistics.rs */

use crate::path::content_path;
use crate::report::{ActivationReport, build_report};
use crate::resource::ResourceResolver;

/// Request-level entry point: map the request suffix (a project path) to a content
/// root and build its report. A missing suffix or an unresolvable root both yield
/// an empty report.
pub fn activation_statistics<T: ResourceResolver>(
  resolver: &T,
  suffix: Option<&str>,
  projects_segment: &str,
) -> ActivationReport {
  let Some(project_path) = suffix else {
    tracing::debug!("no project path in request, returning empty report");
    return ActivationReport::new();
  };

  let path = content_path(project_path, projects_segment);
  let root = resolver.resolve(&path);
  if root.is_none() {
    tracing::debug!(project_path, content_path = %path, "site root not found");
  }

  let report = build_report(root);
  tracing::info!(
    content_path = %path,
    markets = report.len(),
    unactivated = report.total(),
    "activation report built"
  );
  report
}
