/* src/cli/core/src/config/tests/parsing.rs */

use std::path::Path;

use super::*;

#[test]
fn parse_empty_config() {
  let config: PagestatConfig = toml::from_str("").unwrap();
  assert!(config.content.file.is_none());
  assert_eq!(config.content.projects_segment, "/projects");
  assert_eq!(config.server.host, "0.0.0.0");
  assert_eq!(config.server.port, 3000);
  assert!(config.validate().is_ok());
}

#[test]
fn parse_full_config() {
  let toml_str = r#"
[content]
file = "export/content.json"
projects_segment = "/workspaces"

[server]
host = "127.0.0.1"
port = 8080
"#;
  let config: PagestatConfig = toml::from_str(toml_str).unwrap();
  assert_eq!(config.content.file.as_deref(), Some("export/content.json"));
  assert_eq!(config.content.projects_segment, "/workspaces");
  assert_eq!(config.server_addr(), "127.0.0.1:8080");
  assert!(config.validate().is_ok());
}

#[test]
fn content_file_is_relative_to_base() {
  let config: PagestatConfig = toml::from_str("[content]\nfile = \"content.json\"").unwrap();
  assert_eq!(
    config.content_file(Path::new("/srv/site")).unwrap(),
    Path::new("/srv/site/content.json"),
  );
}

#[test]
fn absolute_content_file_is_kept() {
  let config: PagestatConfig = toml::from_str("[content]\nfile = \"/data/content.json\"").unwrap();
  assert_eq!(config.content_file(Path::new("/srv")).unwrap(), Path::new("/data/content.json"));
}

#[test]
fn reject_empty_content_file() {
  let config: PagestatConfig = toml::from_str("[content]\nfile = \"  \"").unwrap();
  let err = config.validate().unwrap_err();
  assert!(err.to_string().contains("content.file"));
}

#[test]
fn reject_relative_segment() {
  let config: PagestatConfig =
    toml::from_str("[content]\nprojects_segment = \"projects\"").unwrap();
  let err = config.validate().unwrap_err();
  assert!(err.to_string().contains("must start with '/'"));
}

#[test]
fn reject_bad_port() {
  assert!(toml::from_str::<PagestatConfig>("[server]\nport = 70000").is_err());
}
