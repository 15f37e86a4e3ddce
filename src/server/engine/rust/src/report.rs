/* src/server/engine/rust/src/report.rs */

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::predicate::{is_market, is_page};
use crate::resource::Resource;
use crate::walk::count_unactivated;

/// Locale name -> unactivated page count.
pub type LocaleCounts = BTreeMap<String, usize>;

/// Market name -> locale name -> unactivated page count, keys in lexicographic order.
/// Serializes as a plain nested JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivationReport {
  markets: BTreeMap<String, LocaleCounts>,
}

impl ActivationReport {
  pub fn new() -> Self {
    Self::default()
  }

  /// Insert or replace the counts of one market.
  pub fn insert_market(&mut self, market: impl Into<String>, locales: LocaleCounts) {
    self.markets.insert(market.into(), locales);
  }

  pub fn market(&self, market: &str) -> Option<&LocaleCounts> {
    self.markets.get(market)
  }

  pub fn get(&self, market: &str, locale: &str) -> Option<usize> {
    self.markets.get(market).and_then(|locales| locales.get(locale)).copied()
  }

  pub fn markets(&self) -> impl Iterator<Item = (&str, &LocaleCounts)> {
    self.markets.iter().map(|(name, locales)| (name.as_str(), locales))
  }

  pub fn len(&self) -> usize {
    self.markets.len()
  }

  pub fn is_empty(&self) -> bool {
    self.markets.is_empty()
  }

  pub fn market_total(&self, market: &str) -> usize {
    self.markets.get(market).map_or(0, |locales| locales.values().sum())
  }

  pub fn total(&self) -> usize {
    self.markets.values().flat_map(BTreeMap::values).sum()
  }
}

/// Walk market -> locale under `site_root` and count unactivated pages per locale.
///
/// Markets are direct children that are both two-character named and pages;
/// locales are the page children of a market. A missing root gives an empty report.
pub fn build_report<R: Resource>(site_root: Option<&R>) -> ActivationReport {
  let mut report = ActivationReport::new();
  let Some(root) = site_root else {
    return report;
  };

  for market in root.children().filter(|node| is_market(*node) && is_page(*node)) {
    let locales = market
      .children()
      .filter(|node| is_page(*node))
      .map(|locale| (locale.name().to_string(), count_unactivated(locale)))
      .collect();
    report.insert_market(market.name(), locales);
  }

  report
}
