//! CLI command handlers, one per file.

mod candidates;
pub(super) mod check;
mod completions;
pub(super) mod resolve;
mod url;

pub use candidates::run_candidates;
pub use check::run_check;
pub use completions::{run_completions, run_man};
pub use resolve::run_resolve;
pub use url::run_url;

use anyhow::Result;
use routemap_core::config::RoutemapConfig;
use routemap_core::content::Registry;
use std::path::Path;

/// Load the registry given on the command line, or the one named in config.
fn load_registry(cfg: &RoutemapConfig, arg: Option<&Path>) -> Result<Registry> {
    let path = match arg.or(cfg.registry.as_deref()) {
        Some(p) => p,
        None => anyhow::bail!(
            "no content registry given; pass --registry or set `registry` in config.toml"
        ),
    };
    Registry::load_from_path(path)
}
