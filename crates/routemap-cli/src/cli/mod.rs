//! CLI for routemap content resolution.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use routemap_core::config::{self, RoutemapConfig};
use std::path::PathBuf;
use std::process::ExitCode;

use commands::{run_candidates, run_check, run_completions, run_man, run_resolve, run_url};

/// Top-level CLI for routemap.
#[derive(Debug, Parser)]
#[command(name = "routemap")]
#[command(about = "Resolve request paths to content records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a request path against the content registry.
    Resolve {
        /// Request path, e.g. `/blog/post-1/` or `.` for the home page.
        path: String,
        /// Content registry JSON file (defaults to `registry` in config.toml).
        #[arg(long, value_name = "FILE")]
        registry: Option<PathBuf>,
        /// Print the full render context as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the lookup keys tried for a request path, in priority order.
    Candidates {
        /// Request path.
        path: String,
    },

    /// Parse a URL, substituting the configured fallback if it is invalid.
    Url {
        /// Arbitrary text to parse as an absolute URL.
        candidate: String,
    },

    /// Report records whose paths the resolver cannot tell apart.
    Check {
        /// Content registry JSON file (defaults to `registry` in config.toml).
        #[arg(long, value_name = "FILE")]
        registry: Option<PathBuf>,
    },

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<ExitCode> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Resolve {
                path,
                registry,
                json,
            } => return run_resolve(&load_config()?, &path, registry.as_deref(), json),
            CliCommand::Candidates { path } => run_candidates(&path),
            CliCommand::Url { candidate } => run_url(&load_config()?, &candidate)?,
            CliCommand::Check { registry } => run_check(&load_config()?, registry.as_deref())?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(ExitCode::SUCCESS)
    }
}

/// Only commands that read settings touch the config file.
fn load_config() -> Result<RoutemapConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
