//! `routemap url <candidate>` – sanitize arbitrary text into an absolute URL.

use anyhow::Result;
use routemap_core::config::RoutemapConfig;

pub fn run_url(cfg: &RoutemapConfig, candidate: &str) -> Result<()> {
    let sanitizer = cfg.sanitizer()?;
    println!("{}", sanitizer.sanitize(candidate));
    Ok(())
}
