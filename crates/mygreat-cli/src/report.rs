//! Rendering of analysed collections

use mygreat_core::{AnalysedCollection, AnalysisSummary, Migration};
use serde::Serialize;
use std::fmt::Write;

#[derive(Serialize)]
struct StatusReport<'a> {
    migrations: &'a AnalysedCollection,
    summary: AnalysisSummary,
}

/// JSON report: `{ "migrations": [...], "summary": {...} }`
///
/// # Errors
/// If serialization fails
pub fn render_json(collection: &AnalysedCollection) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&StatusReport {
        migrations: collection,
        summary: collection.summary(),
    })
}

/// Plain-text table followed by a summary line
#[must_use]
pub fn render_table(collection: &AnalysedCollection) -> String {
    let mut out = String::new();

    if collection.is_empty() {
        out.push_str("No migrations found.\n");
        return out;
    }

    let width = collection
        .iter()
        .map(|e| e.name().as_str().len())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let _ = writeln!(out, "{:<width$}  {:<13}  STATE", "NAME", "LOCATIONS");
    for entry in collection {
        let _ = writeln!(
            out,
            "{:<width$}  {:<13}  {}",
            entry.name().as_str(),
            entry.locations().to_string(),
            entry.state()
        );
    }

    let summary = collection.summary();
    let _ = writeln!(
        out,
        "\n{} migrations: {} applied, {} pending, {} orphaned",
        summary.total, summary.applied, summary.pending, summary.orphaned
    );
    out
}

/// Header block and body of one migration
#[must_use]
pub fn render_migration(migration: &Migration) -> String {
    format!(
        "name:     {}\npath:     {}\nchecksum: {}\n\n{}",
        migration.name,
        migration.path.display(),
        migration.content.checksum,
        migration.content.body
    )
}
