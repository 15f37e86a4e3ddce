/* src/server/engine/rust/src/predicate.rs */

use crate::resource::Resource;

pub const PRIMARY_TYPE: &str = "jcr:primaryType";
pub const PAGE_TYPE: &str = "cq:Page";
/// Name of the metadata child that carries replication state.
pub const CONTENT_NODE: &str = "jcr:content";
pub const LAST_REPLICATION_ACTION: &str = "cq:lastReplicationAction";
pub const ACTIVATE: &str = "Activate";

const MARKET_NAME_LEN: usize = 2;

pub fn is_page<R: Resource>(node: &R) -> bool {
  node.property(PRIMARY_TYPE) == Some(PAGE_TYPE)
}

/// Two-character node names are markets. No check against real region codes.
pub fn is_market<R: Resource>(node: &R) -> bool {
  node.name().chars().count() == MARKET_NAME_LEN
}

/// Missing metadata child or missing replication action both count as not activated.
pub fn is_not_activated<R: Resource>(node: &R) -> bool {
  node.child(CONTENT_NODE).and_then(|meta| meta.property(LAST_REPLICATION_ACTION)) != Some(ACTIVATE)
}
