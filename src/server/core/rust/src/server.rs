/* src/server/core/rust/src/server.rs */

use std::sync::Arc;

use pagestat_engine::{
  ActivationReport, ContentTree, DEFAULT_PROJECTS_SEGMENT, activation_statistics,
};

/// Framework-agnostic parts extracted from `ReportServer`.
/// Adapter crates consume this to build framework-specific routers.
#[derive(Clone)]
pub struct ReportParts {
  pub tree: Arc<ContentTree>,
  pub projects_segment: String,
}

impl ReportParts {
  /// Report for one request; `suffix` is the project path taken from the request.
  pub fn report(&self, suffix: Option<&str>) -> ActivationReport {
    activation_statistics(self.tree.as_ref(), suffix, &self.projects_segment)
  }
}

pub struct ReportServer {
  tree: Arc<ContentTree>,
  projects_segment: String,
}

impl ReportServer {
  pub fn new(tree: ContentTree) -> Self {
    Self { tree: Arc::new(tree), projects_segment: DEFAULT_PROJECTS_SEGMENT.to_string() }
  }

  pub fn projects_segment(mut self, segment: impl Into<String>) -> Self {
    self.projects_segment = segment.into();
    self
  }

  /// Consume the builder, returning framework-agnostic parts for an adapter.
  pub fn into_parts(self) -> ReportParts {
    ReportParts { tree: self.tree, projects_segment: self.projects_segment }
  }
}
