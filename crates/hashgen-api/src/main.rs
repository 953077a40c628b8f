//! Hashgen CLI and HTTP service entry point.
//!
//! Binary name: `hashgen`
//!
//! Parses CLI arguments, loads the config file, then either serves
//! `POST /api/hash` or drives the hash form against a running service.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use hashgen_infra::config::{default_config_path, load_config};
use hashgen_observe::tracing_setup::{init_tracing, shutdown_tracing, TracingOptions};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity; RUST_LOG wins when set.
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,hashgen=debug",
        _ => "trace",
    };
    let tracing_options = TracingOptions {
        json: cli.json,
        otel: cli.otel,
        ..TracingOptions::new(filter)
    };
    init_tracing(&tracing_options)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    // Shell completions don't need config
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "hashgen", &mut std::io::stdout());
        return Ok(());
    }

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = load_config(&config_path).await;

    let result = match cli.command {
        Commands::Serve { port, host, scheme } => {
            let mut server = config.server;
            if let Some(port) = port {
                server.port = port;
            }
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(scheme) = scheme {
                server.scheme = scheme;
            }
            serve(server, cli.quiet).await
        }

        Commands::Generate { input, endpoint } => {
            cli::generate::run(&config.client, endpoint, &input, cli.json, cli.quiet).await
        }

        Commands::Form { endpoint } => {
            cli::form::run(&config.client, endpoint, cli.json, cli.quiet).await
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    };

    shutdown_tracing();
    result
}

async fn serve(server: hashgen_types::config::ServerConfig, quiet: bool) -> anyhow::Result<()> {
    let addr = format!("{}:{}", server.host, server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, scheme = %server.scheme, "hash service listening");

    if !quiet {
        println!(
            "  {} Hash service listening on {} ({})",
            console::style("⚡").bold(),
            console::style(format!("http://{addr}")).cyan(),
            console::style(server.scheme).dim()
        );
        println!("  {}", console::style("Press Ctrl+C to stop").dim());
    }

    let router = http::router::build_router(AppState::new(server.scheme));

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if !quiet {
        println!("\n  Server stopped.");
    }
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
