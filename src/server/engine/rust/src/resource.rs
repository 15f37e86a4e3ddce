/* src/server/engine/rust/src/resource.rs */

/// Read-only view of one node in a hierarchical content store.
/// The store owns the tree; everything in this crate only borrows it.
pub trait Resource {
  fn name(&self) -> &str;

  /// String value of a property. Missing keys and non-string values read as `None`.
  fn property(&self, key: &str) -> Option<&str>;

  /// Direct children in store order.
  fn children(&self) -> impl Iterator<Item = &Self>;

  fn child(&self, name: &str) -> Option<&Self> {
    self.children().find(|c| c.name() == name)
  }
}

/// Maps absolute content paths (e.g. "/content/site") to nodes.
pub trait ResourceResolver {
  type Node: Resource;

  fn resolve(&self, path: &str) -> Option<&Self::Node>;
}
