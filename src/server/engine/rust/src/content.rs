/* src/server/engine/rust/src/content.rs */

//! In-memory content store, deserializable from a JSON export of the tree.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::predicate::{CONTENT_NODE, LAST_REPLICATION_ACTION, PAGE_TYPE, PRIMARY_TYPE};
use crate::resource::{Resource, ResourceResolver};

const PAGE_CONTENT_TYPE: &str = "cq:PageContent";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentNode {
  #[serde(default)]
  pub name: String,
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub properties: BTreeMap<String, serde_json::Value>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub children: Vec<ContentNode>,
}

impl ContentNode {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into(), properties: BTreeMap::new(), children: Vec::new() }
  }

  /// A node typed as a page, with no metadata child.
  pub fn page(name: impl Into<String>) -> Self {
    Self::new(name).with_property(PRIMARY_TYPE, PAGE_TYPE)
  }

  pub fn with_property(
    mut self,
    key: impl Into<String>,
    value: impl Into<serde_json::Value>,
  ) -> Self {
    self.properties.insert(key.into(), value.into());
    self
  }

  pub fn with_child(mut self, child: ContentNode) -> Self {
    self.children.push(child);
    self
  }

  pub fn with_children(mut self, children: impl IntoIterator<Item = ContentNode>) -> Self {
    self.children.extend(children);
    self
  }

  /// Record `action` as the last replication action in the metadata child,
  /// creating the child if needed.
  pub fn with_replication_action(mut self, action: &str) -> Self {
    let idx = match self.children.iter().position(|c| c.name == CONTENT_NODE) {
      Some(idx) => idx,
      None => {
        let meta = ContentNode::new(CONTENT_NODE).with_property(PRIMARY_TYPE, PAGE_CONTENT_TYPE);
        self.children.push(meta);
        self.children.len() - 1
      }
    };
    self.children[idx].properties.insert(LAST_REPLICATION_ACTION.to_string(), action.into());
    self
  }
}

impl Resource for ContentNode {
  fn name(&self) -> &str {
    &self.name
  }

  fn property(&self, key: &str) -> Option<&str> {
    self.properties.get(key).and_then(serde_json::Value::as_str)
  }

  fn children(&self) -> impl Iterator<Item = &Self> {
    self.children.iter()
  }
}

/// A whole content store rooted at "/".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentTree {
  root: ContentNode,
}

impl ContentTree {
  pub fn new(root: ContentNode) -> Self {
    Self { root }
  }

  pub fn root(&self) -> &ContentNode {
    &self.root
  }

  pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(json)
  }
}

impl ResourceResolver for ContentTree {
  type Node = ContentNode;

  /// Only absolute paths resolve. Empty segments ("//", trailing "/") are ignored.
  fn resolve(&self, path: &str) -> Option<&ContentNode> {
    if !path.starts_with('/') {
      return None;
    }
    path.split('/').filter(|seg| !seg.is_empty()).try_fold(&self.root, |node, seg| node.child(seg))
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn sample_tree() -> ContentTree {
    ContentTree::from_json(
      &json!({
        "name": "",
        "properties": {"jcr:primaryType": "rep:root"},
        "children": [{
          "name": "content",
          "children": [{
            "name": "site",
            "properties": {"jcr:primaryType": "cq:Page"},
            "children": [
              {"name": "jcr:content", "properties": {"cq:lastReplicationAction": "Activate"}},
              {"name": "us", "properties": {"jcr:primaryType": "cq:Page"}}
            ]
          }]
        }]
      })
      .to_string(),
    )
    .unwrap()
  }

  #[test]
  fn resolve_nested_path() {
    let tree = sample_tree();
    let site = tree.resolve("/content/site").unwrap();
    assert_eq!(site.name(), "site");
    assert_eq!(site.property("jcr:primaryType"), Some("cq:Page"));
    assert_eq!(tree.resolve("/content/site/us").unwrap().name(), "us");
  }

  #[test]
  fn resolve_root_and_trailing_slash() {
    let tree = sample_tree();
    assert_eq!(tree.resolve("/").unwrap().property("jcr:primaryType"), Some("rep:root"));
    assert_eq!(tree.resolve("/content/site/").unwrap().name(), "site");
  }

  #[test]
  fn resolve_missing_or_relative() {
    let tree = sample_tree();
    assert!(tree.resolve("/content/other").is_none());
    assert!(tree.resolve("content/site").is_none());
    assert!(tree.resolve("").is_none());
  }

  #[test]
  fn non_string_property_reads_as_none() {
    let node = ContentNode::new("n").with_property("count", 3).with_property("title", "Home");
    assert_eq!(node.property("count"), None);
    assert_eq!(node.property("title"), Some("Home"));
    assert_eq!(node.property("missing"), None);
  }

  #[test]
  fn child_lookup_by_name() {
    let tree = sample_tree();
    let site = tree.resolve("/content/site").unwrap();
    let meta = site.child("jcr:content").unwrap();
    assert_eq!(meta.property("cq:lastReplicationAction"), Some("Activate"));
    assert!(site.child("fr").is_none());
  }

  #[test]
  fn replication_action_reuses_metadata_child() {
    let node = ContentNode::page("p")
      .with_replication_action("Deactivate")
      .with_replication_action("Activate");
    assert_eq!(node.children.len(), 1);
    let meta = node.child("jcr:content").unwrap();
    assert_eq!(meta.property("cq:lastReplicationAction"), Some("Activate"));
    assert_eq!(meta.property("jcr:primaryType"), Some("cq:PageContent"));
  }

  #[test]
  fn missing_fields_default() {
    let tree = ContentTree::from_json(r#"{"name": "only"}"#).unwrap();
    assert!(tree.root().children.is_empty());
    assert!(tree.root().properties.is_empty());
  }

  #[test]
  fn serialize_skips_empty_collections() {
    let value = serde_json::to_value(ContentNode::new("leaf")).unwrap();
    assert_eq!(value, json!({"name": "leaf"}));
  }
}
