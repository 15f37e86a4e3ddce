/* src/server/core/rust/src/lib.rs */

pub mod content_loader;
pub mod errors;
pub mod server;

// Re-exports for ergonomic use
pub use content_loader::{load_content_tree, parse_content_tree};
pub use errors::PagestatError;
pub use pagestat_engine as engine;
pub use pagestat_engine::{ActivationReport, ContentNode, ContentTree};
pub use server::{ReportParts, ReportServer};
