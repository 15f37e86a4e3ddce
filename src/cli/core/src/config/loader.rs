/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::PagestatConfig;

const CONFIG_FILE: &str = "pagestat.toml";

/// Nearest `pagestat.toml` in `start` or one of its ancestors.
pub fn find_pagestat_config(start: &Path) -> Result<PathBuf> {
  let start =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  start
    .ancestors()
    .map(|dir| dir.join(CONFIG_FILE))
    .find(|candidate| candidate.is_file())
    .with_context(|| format!("no {CONFIG_FILE} in {} or its parents", start.display()))
}

pub fn load_pagestat_config(path: &Path) -> Result<PagestatConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: PagestatConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.validate().with_context(|| format!("invalid {}", path.display()))?;
  Ok(config)
}
