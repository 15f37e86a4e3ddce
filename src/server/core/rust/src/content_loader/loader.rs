/* src/server/core/rust/src/content_loader/loader.rs */

use std::path::Path;

use pagestat_engine::{ContentTree, Resource};

use crate::errors::PagestatError;

/// Parse a JSON content export.
///
/// Nesting is capped by serde_json's recursion limit (128 levels), which is
/// about 60 nested nodes since each node adds an object and a `children` array.
pub fn parse_content_tree(json: &str) -> Result<ContentTree, PagestatError> {
  ContentTree::from_json(json).map_err(PagestatError::ContentParse)
}

/// Read and parse the content export at `path`.
pub fn load_content_tree(path: impl AsRef<Path>) -> Result<ContentTree, PagestatError> {
  let path = path.as_ref();
  let content = std::fs::read_to_string(path)
    .map_err(|source| PagestatError::ContentRead { path: path.to_path_buf(), source })?;
  let tree = parse_content_tree(&content)?;
  tracing::debug!(
    path = %path.display(),
    top_level = tree.root().children().count(),
    "content tree loaded"
  );
  Ok(tree)
}
