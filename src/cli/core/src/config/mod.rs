/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{find_pagestat_config, load_pagestat_config};
pub use types::PagestatConfig;
