/* src/cli/core/src/config/types.rs */

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use pagestat_server::engine::DEFAULT_PROJECTS_SEGMENT;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PagestatConfig {
  #[serde(default)]
  pub content: ContentSection,
  #[serde(default)]
  pub server: ServerSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentSection {
  /// JSON content export; relative paths are resolved against the config file's directory.
  pub file: Option<String>,
  #[serde(default = "default_projects_segment")]
  pub projects_segment: String,
}

impl Default for ContentSection {
  fn default() -> Self {
    Self { file: None, projects_segment: default_projects_segment() }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { host: default_host(), port: default_port() }
  }
}

fn default_projects_segment() -> String {
  DEFAULT_PROJECTS_SEGMENT.to_string()
}

fn default_host() -> String {
  "0.0.0.0".to_string()
}

fn default_port() -> u16 {
  3000
}

impl PagestatConfig {
  pub fn validate(&self) -> Result<()> {
    if self.content.file.as_deref().is_some_and(|f| f.trim().is_empty()) {
      bail!("content.file must not be empty");
    }
    if !self.content.projects_segment.starts_with('/') {
      bail!("content.projects_segment \"{}\" must start with '/'", self.content.projects_segment);
    }
    Ok(())
  }

  /// Content file path, with relative paths anchored at `base_dir`.
  pub fn content_file(&self, base_dir: &Path) -> Option<PathBuf> {
    self.content.file.as_ref().map(|f| base_dir.join(f))
  }

  pub fn server_addr(&self) -> String {
    format!("{}:{}", self.server.host, self.server.port)
  }
}
