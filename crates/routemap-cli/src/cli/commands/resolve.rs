//! `routemap resolve <path>` – resolve a request path to a content record.

use anyhow::{Context, Result};
use routemap_core::config::RoutemapConfig;
use routemap_core::content::Registry;
use routemap_core::layout::{LayoutRef, RenderContext};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use super::load_registry;

/// Exit status when the path matches no record.
pub const NOT_FOUND_EXIT: u8 = 2;

pub fn run_resolve(
    cfg: &RoutemapConfig,
    path: &str,
    registry: Option<&Path>,
    json: bool,
) -> Result<ExitCode> {
    let registry = load_registry(cfg, registry)?;
    let status = write_resolution(
        cfg,
        &registry,
        path,
        json,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    Ok(ExitCode::from(status))
}

/// Resolve `path` and write the result. Returns the process exit status:
/// 0 when a record matched, [`NOT_FOUND_EXIT`] otherwise.
pub fn write_resolution(
    cfg: &RoutemapConfig,
    registry: &Registry,
    path: &str,
    json: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<u8> {
    let resolved = match registry.resolve(path) {
        Ok(m) => m,
        Err(not_found) => {
            tracing::info!("{}", not_found);
            writeln!(err, "not found: {}", not_found.path)?;
            return Ok(NOT_FOUND_EXIT);
        }
    };

    if json {
        let ctx = RenderContext::new(path, resolved, registry, cfg);
        let rendered = serde_json::to_string_pretty(&ctx).context("serialize render context")?;
        writeln!(out, "{rendered}")?;
    } else {
        writeln!(out, "{:<8} {}", "PATH", resolved.record.path)?;
        writeln!(out, "{:<8} {}", "TYPE", resolved.record.kind)?;
        writeln!(out, "{:<8} {}", "LAYOUT", LayoutRef::for_record(resolved.record))?;
        writeln!(out, "{:<8} {}", "MATCH", resolved.candidate)?;
    }
    Ok(0)
}
