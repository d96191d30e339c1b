//! `pulse catalog` – list metric, race or geography codes.

use anyhow::Result;
use crate::cli::CatalogKind;
use pulse_core::catalog::{self, CatalogEntry};

pub(crate) fn entries(kind: CatalogKind) -> &'static [CatalogEntry] {
    match kind {
        CatalogKind::Metrics => catalog::METRICS,
        CatalogKind::Races => catalog::RACES,
        CatalogKind::Geographies => catalog::GEOGRAPHIES,
    }
}

pub fn run_catalog(kind: CatalogKind, json: bool) -> Result<()> {
    let entries = entries(kind);
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }
    let width = entries.iter().map(|e| e.code.len()).max().unwrap_or(4).max(4);
    println!("{:<width$}  {}", "CODE", "TITLE", width = width);
    for e in entries {
        println!("{:<width$}  {}", e.code, e.title, width = width);
    }
    if kind == CatalogKind::Metrics {
        println!();
        println!("weeks: {}-{}", catalog::WEEK_NUM_MIN, catalog::WEEK_NUM_MAX);
    }
    Ok(())
}
