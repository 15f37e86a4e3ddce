/* src/server/engine/rust/src/lib.rs */

pub mod content;
pub mod path;
pub mod predicate;
pub mod report;
pub mod resource;
pub mod statistics;
pub mod walk;

// Public API re-exports
pub use content::{ContentNode, ContentTree};
pub use path::{DEFAULT_PROJECTS_SEGMENT, content_path};
pub use predicate::{is_market, is_not_activated, is_page};
pub use report::{ActivationReport, LocaleCounts, build_report};
pub use resource::{Resource, ResourceResolver};
pub use statistics::activation_statistics;
pub use walk::count_unactivated;
