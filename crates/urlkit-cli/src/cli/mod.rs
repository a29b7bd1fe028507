//! CLI for urlkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use urlkit_core::config;

use commands::{
    run_completions, run_compose, run_head, run_inspect, run_manpage, run_session, run_tour,
    SessionArgs,
};

/// Top-level CLI for urlkit.
#[derive(Debug, Parser)]
#[command(name = "urlkit")]
#[command(about = "urlkit: inspect URLs, compose queries, and try HTTP session settings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the components of a URL.
    Inspect {
        /// Absolute URL, or a relative reference when --base is given.
        url: String,
        /// Resolve URL against this base.
        #[arg(long)]
        base: Option<String>,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Append percent-encoded query items to a URL.
    Compose {
        /// Starting URL (may already contain a query).
        url: String,
        /// Query item as NAME=VALUE (or just NAME). Repeatable.
        #[arg(short = 'q', long = "query", value_name = "NAME=VALUE")]
        query: Vec<String>,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Show the effective session configuration.
    Session {
        #[command(flatten)]
        args: SessionArgs,
    },

    /// Send a HEAD request through a configured session.
    Head {
        /// HTTP/HTTPS URL.
        url: String,
        #[command(flatten)]
        args: SessionArgs,
    },

    /// Walk through the URL, query and session examples.
    Tour,

    /// Generate shell completions.
    Completions {
        shell: Shell,
    },

    /// Write the man page to a directory (stdout if omitted).
    Manpage {
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Inspect { url, base, json } => run_inspect(&url, base.as_deref(), json)?,
            CliCommand::Compose { url, query, json } => run_compose(&url, &query, json)?,
            CliCommand::Session { args } => run_session(&cfg, &args)?,
            CliCommand::Head { url, args } => run_head(&cfg, &url, &args).await?,
            CliCommand::Tour => run_tour()?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Manpage { out_dir } => run_manpage(out_dir.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
