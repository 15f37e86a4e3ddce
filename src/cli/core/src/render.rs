/* src/cli/core/src/render.rs */

use std::fmt::Write;

use pagestat_server::ActivationReport;

/// Plain-text table: one block per market with its total, locales indented below.
pub fn render_table(report: &ActivationReport) -> String {
  let width = report
    .markets()
    .flat_map(|(_, locales)| locales.keys().map(String::len))
    .max()
    .unwrap_or(0)
    .max("total".len());

  let mut out = String::new();
  for (market, locales) in report.markets() {
    let _ = writeln!(out, "  {market}  {:>width$}", report.market_total(market), width = width + 2);
    for (locale, count) in locales {
      let _ = writeln!(out, "    {locale:<width$}{count:>4}");
    }
  }
  out
}
