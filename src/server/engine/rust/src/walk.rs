/* src/server/engine/rust/src/walk.rs */

use crate::predicate::{is_not_activated, is_page};
use crate::resource::Resource;

/// Count pages in the subtree rooted at `page` (itself included) that were never activated.
///
/// Only page children are descended into; a non-page child hides its whole subtree.
/// The caller is expected to have checked `is_page(page)`.
/// Uses an explicit work-list, so tree depth is not limited by the call stack.
pub fn count_unactivated<R: Resource>(page: &R) -> usize {
  let mut pending = vec![page];
  let mut total = 0;

  while let Some(node) = pending.pop() {
    pending.extend(node.children().filter(|child| is_page(*child)));
    if is_not_activated(node) {
      total += 1;
    }
  }

  total
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::content::ContentNode;
  use crate::predicate::ACTIVATE;

  fn activated(name: &str) -> ContentNode {
    ContentNode::page(name).with_replication_action(ACTIVATE)
  }

  fn recursive_count(page: &ContentNode) -> usize {
    let children: usize =
      page.children.iter().filter(|c| is_page(*c)).map(recursive_count).sum();
    children + usize::from(is_not_activated(page))
  }

  #[test]
  fn leaf_page() {
    assert_eq!(count_unactivated(&ContentNode::page("leaf")), 1);
    assert_eq!(count_unactivated(&activated("leaf")), 0);
    let deactivated = ContentNode::page("leaf").with_replication_action("Deactivate");
    assert_eq!(count_unactivated(&deactivated), 1);
  }

  #[test]
  fn only_non_page_children_behaves_as_leaf() {
    let page = activated("p")
      .with_child(ContentNode::new("image"))
      .with_child(ContentNode::new("par").with_property("jcr:primaryType", "nt:unstructured"));
    assert_eq!(count_unactivated(&page), 0);
  }

  #[test]
  fn sums_nested_pages() {
    let page = ContentNode::page("en")
      .with_child(activated("about"))
      .with_child(ContentNode::page("news").with_children([
        ContentNode::page("2024"),
        activated("2025").with_child(ContentNode::page("draft")),
      ]));
    // en, news, 2024, draft
    assert_eq!(count_unactivated(&page), 4);
  }

  #[test]
  fn matches_recursive_definition() {
    let page = activated("root").with_children([
      ContentNode::page("a").with_children([activated("a1"), ContentNode::page("a2")]),
      activated("b").with_child(activated("b1").with_child(ContentNode::page("b11"))),
      ContentNode::new("assets").with_child(ContentNode::page("hidden")),
      ContentNode::page("c").with_replication_action("Deactivate"),
    ]);
    assert_eq!(count_unactivated(&page), recursive_count(&page));
    for child in page.children.iter().filter(|c| is_page(*c)) {
      assert_eq!(count_unactivated(child), recursive_count(child));
    }
  }

  #[test]
  fn non_page_subtree_is_never_visited() {
    let page = activated("en").with_child(
      ContentNode::new("jcr:content")
        .with_property("cq:lastReplicationAction", ACTIVATE)
        .with_child(ContentNode::page("nested").with_child(ContentNode::page("deeper"))),
    );
    assert_eq!(count_unactivated(&page), 0);
  }

  #[test]
  fn deep_chain() {
    let depth = 1_000;
    let mut node = ContentNode::page("leaf");
    for i in 0..depth {
      node = ContentNode::page(format!("p{i}")).with_child(node);
    }
    assert_eq!(count_unactivated(&node), depth + 1);
  }
}
