/* src/server/core/rust/src/content_loader/mod.rs */

// Load a content tree from a JSON export on disk.

mod loader;


pub use loader::{load_content_tree, parse_content_tree};
