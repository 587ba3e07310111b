//! `routemap check` – report request forms answered by the wrong record.

use anyhow::Result;
use routemap_core::config::RoutemapConfig;
use routemap_core::content::Registry;
use std::io::{self, Write};
use std::path::Path;

use super::load_registry;

pub fn run_check(cfg: &RoutemapConfig, registry: Option<&Path>) -> Result<()> {
    let registry = load_registry(cfg, registry)?;
    write_report(&registry, &mut io::stdout().lock())
}

/// Write one line per shadowed request form, naming the record that answers it.
pub fn write_report(registry: &Registry, out: &mut impl Write) -> Result<()> {
    let ambiguities = registry.ambiguities();
    if ambiguities.is_empty() {
        writeln!(out, "{} records, no ambiguous paths.", registry.len())?;
        return Ok(());
    }
    writeln!(out, "{:<24} {:<24} {:<24} {}", "REQUEST", "EXPECTED", "RESOLVED", "MATCH")?;
    for a in &ambiguities {
        writeln!(
            out,
            "{:<24} {:<24} {:<24} {}",
            format!("{:?}", a.request),
            format!("{:?} ({})", a.record.path, a.record.kind),
            format!("{:?} ({})", a.winner.path, a.winner.kind),
            a.candidate
        )?;
    }
    tracing::warn!("{} shadowed request forms", ambiguities.len());
    Ok(())
}
