/* src/server/core/rust/src/errors.rs */

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failures of the host around the report: loading content and routing requests.
/// The report computation itself never fails.
#[derive(Debug)]
pub enum PagestatError {
  /// The content export could not be read from disk.
  ContentRead { path: PathBuf, source: io::Error },
  /// The content export is not a valid node tree.
  ContentParse(serde_json::Error),
  /// No route matches the request path.
  RouteNotFound(String),
}

impl PagestatError {
  pub fn code(&self) -> &'static str {
    match self {
      Self::ContentRead { .. } => "CONTENT_READ_ERROR",
      Self::ContentParse(_) => "CONTENT_PARSE_ERROR",
      Self::RouteNotFound(_) => "NOT_FOUND",
    }
  }

  pub fn status(&self) -> u16 {
    match self {
      Self::ContentRead { .. } => 500,
      Self::ContentParse(_) => 400,
      Self::RouteNotFound(_) => 404,
    }
  }
}

impl fmt::Display for PagestatError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::ContentRead { path, source } => write!(f, "read {}: {source}", path.display()),
      Self::ContentParse(e) => write!(f, "parse content: {e}"),
      Self::RouteNotFound(path) => write!(f, "no route for {path}"),
    }
  }
}

impl std::error::Error for PagestatError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::ContentRead { source, .. } => Some(source),
      Self::ContentParse(e) => Some(e),
      Self::RouteNotFound(_) => None,
    }
  }
}
