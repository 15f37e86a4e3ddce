/* src/server/engine/rust/src/path.rs */

/// Segment that prefixes project paths and has to be dropped to reach content.
pub const DEFAULT_PROJECTS_SEGMENT: &str = "/projects";

/// Map a project path to its content path by removing the first occurrence of `segment`.
/// A path without the segment is returned unchanged.
pub fn content_path(project_path: &str, segment: &str) -> String {
  if segment.is_empty() {
    return project_path.to_string();
  }
  project_path.replacen(segment, "", 1)
}
