//! CLI command definitions for the `hashgen` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod form;
pub mod generate;
pub mod input;
pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use hashgen_infra::client::HttpHashClient;
use hashgen_types::config::ClientConfig;
use hashgen_types::hash::HashScheme;

/// Generate short hashes for alphanumeric strings.
#[derive(Parser)]
#[command(name = "hashgen", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config.toml (default: ~/.hashgen/config.toml).
    #[arg(long, global = true, env = "HASHGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Also export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the hash service.
    Serve {
        /// Port to listen on.
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to.
        #[arg(long)]
        host: Option<String>,

        /// Hash algorithm (sha256-prefix or salted-base62).
        #[arg(long)]
        scheme: Option<HashScheme>,
    },

    /// Submit one value and print its hash.
    #[command(alias = "gen")]
    Generate {
        /// Alphanumeric value to hash.
        input: String,

        /// Base URL of the hash service.
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Interactive form: each line you enter is submitted.
    Form {
        /// Base URL of the hash service.
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Build the request client, letting `--endpoint` override the config file.
pub fn build_client(
    config: &ClientConfig,
    endpoint: Option<String>,
) -> anyhow::Result<HttpHashClient> {
    let mut config = config.clone();
    if let Some(endpoint) = endpoint {
        config.base_url = endpoint;
    }
    let client = HttpHashClient::new(&config)?;
    tracing::debug!(base_url = client.base_url(), "hash client ready");
    Ok(client)
}
