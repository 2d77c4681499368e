//! CLI for rparams.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rparams_core::config;
use std::path::PathBuf;

use commands::{run_check_deps, run_config, run_log_record, run_merge, run_resolve, RequestArgs};

/// Top-level CLI for rparams.
#[derive(Debug, Parser)]
#[command(name = "rparams")]
#[command(about = "Carry request query parameters through redirects and redirect logs", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/rparams/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Merge SOURCE's query parameters into TARGET (TARGET's own keys win).
    Merge {
        /// Redirect target URL.
        target: String,
        /// URL donating extra query parameters.
        source: String,
    },

    /// Resolve a redirect target through the registered target hook.
    Resolve {
        /// Target URL produced by the redirect rule.
        target: String,
        /// Stored source pattern of the matched redirect rule.
        #[arg(long, default_value = "")]
        source_pattern: String,
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Run a JSON log record through the registered log hook.
    LogRecord {
        /// Log record as a JSON object, e.g. '{"sent_to":"https://example.com/a"}'.
        record: String,
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Report whether the missing-redirection-system notice would be shown.
    CheckDeps {
        /// Plugin reported active by the host (repeatable).
        #[arg(long = "active-plugin", value_name = "SLUG")]
        active_plugins: Vec<String>,
        /// Class reported loaded by the host (repeatable).
        #[arg(long = "class", value_name = "NAME")]
        classes: Vec<String>,
        /// Constant reported defined by the host (repeatable).
        #[arg(long = "constant", value_name = "NAME")]
        constants: Vec<String>,
        /// Evaluate as a front-end (non-admin) request.
        #[arg(long)]
        no_admin: bool,
        /// Evaluate as a user without the required capability.
        #[arg(long)]
        no_capability: bool,
    },

    /// Print the effective configuration as TOML.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        let output = match cli.command {
            CliCommand::Merge { target, source } => run_merge(&target, &source),
            CliCommand::Resolve {
                target,
                source_pattern,
                request,
            } => run_resolve(&cfg, &target, &source_pattern, request),
            CliCommand::LogRecord { record, request } => run_log_record(&cfg, &record, request)?,
            CliCommand::CheckDeps {
                active_plugins,
                classes,
                constants,
                no_admin,
                no_capability,
            } => run_check_deps(
                &cfg,
                active_plugins,
                classes,
                constants,
                !no_admin,
                !no_capability,
            ),
            CliCommand::Config => run_config(&cfg)?,
        };

        println!("{output}");
        Ok(())
    }
}

#[cfg(test)]
mod tests;
