//! Sunny Sips support chat binary.
//!
//! Entry point for the `sunny` CLI. Parses commands, initializes tracing and
//! application state, and dispatches to the handlers in `cli` or starts the
//! HTTP server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use sunny_observe::{LogFormat, TracingOptions};
use sunny_types::config::SunnyConfig;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up HOST/PORT/SUNNY_* from a local .env before clap reads env vars.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Shell completions don't need tracing or app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "sunny", &mut std::io::stdout());
        return Ok(());
    }

    let options = TracingOptions {
        default_filter: sunny_observe::filter_for_verbosity(cli.verbose, cli.quiet).to_string(),
        format: if cli.log_json {
            LogFormat::Json
        } else {
            LogFormat::Text
        },
        enable_otel: cli.otel,
    };
    sunny_observe::init_tracing(&options).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    let result = run(cli).await;
    sunny_observe::shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = sunny_infra::config::load_config(&cli.config).await;

    match cli.command {
        Commands::Serve {
            host,
            port,
            catalog,
            web_dir,
        } => {
            apply_serve_overrides(&mut config, host, port, catalog, web_dir);
            serve(config, cli.quiet).await?;
        }

        Commands::Ask { message } => {
            let state = AppState::init(config).await;
            cli::chat::ask(&state, &message, cli.json)?;
        }

        Commands::Products { search } => {
            let state = AppState::init(config).await;
            cli::catalog::list_products(&state, search.as_deref(), cli.json)?;
        }

        Commands::Product { id } => {
            let state = AppState::init(config).await;
            cli::catalog::show_product(&state, &id, cli.json)?;
        }

        Commands::Faqs => {
            let state = AppState::init(config).await;
            cli::catalog::list_faqs(&state, cli.json)?;
        }

        Commands::Completions { .. } => unreachable!("handled in main"),
    }

    Ok(())
}

/// Flags and env vars win over the config file.
fn apply_serve_overrides(
    config: &mut SunnyConfig,
    host: Option<String>,
    port: Option<u16>,
    catalog: Option<String>,
    web_dir: Option<String>,
) {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(catalog) = catalog {
        config.catalog.path = catalog;
    }
    if let Some(web_dir) = web_dir {
        config.web.dir = web_dir;
    }
}

async fn serve(config: SunnyConfig, quiet: bool) -> anyhow::Result<()> {
    let addr = config.server.bind_addr();
    let state = AppState::init(config).await;
    let router = http::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server listening");

    if !quiet {
        println!();
        println!(
            "  {} Sunny Sips support chat running on {}",
            console::style("🍋").bold(),
            console::style(format!("http://{addr}")).cyan()
        );
        println!("  Press Ctrl+C to stop.");
        println!();
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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
