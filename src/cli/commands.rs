//! CLI command implementations
//!
//! Each command loads settings, installs logging and then hands off to the
//! server, the store or the form client.

use std::path::Path;

use tokio::runtime::Runtime;
use tracing::{info, warn};

use crate::client::{FormApp, HttpMaterialsClient, TerminalConsole};
use crate::http_server::HttpServer;
use crate::observability;
use crate::settings::Settings;
use crate::store::{MaterialStore, MemoryMaterialStore, PgMaterialStore};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    dotenvy::dotenv().ok();

    match cmd {
        Command::InitDb { config } => init_db(config.as_deref()),
        Command::Serve {
            config,
            port,
            memory,
        } => serve(config.as_deref(), port, memory),
        Command::Client {
            config,
            api_url,
            offline_fallback,
        } => client(config.as_deref(), api_url, offline_fallback),
    }
}

fn load_settings(config_path: Option<&Path>) -> CliResult<Settings> {
    let settings = Settings::load(config_path)?;
    if let Err(e) = observability::init_logging(&settings.log) {
        eprintln!("{}", e);
    }
    Ok(settings)
}

fn runtime() -> CliResult<Runtime> {
    Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}

/// Create the materials table
pub fn init_db(config_path: Option<&Path>) -> CliResult<()> {
    let settings = load_settings(config_path)?;
    settings.validate_database()?;
    let store = PgMaterialStore::new(&settings.database);

    runtime()?.block_on(store.ensure_schema())?;
    info!(database = %settings.database.display_target(), "materials table ready");

    Ok(())
}

/// Run the HTTP API until the process is stopped
pub fn serve(config_path: Option<&Path>, port: Option<u16>, memory: bool) -> CliResult<()> {
    let mut settings = load_settings(config_path)?;
    if let Some(port) = port {
        settings.server.port = port;
    }
    settings.validate_server()?;
    if !memory {
        settings.validate_database()?;
    }

    let rt = runtime()?;
    let result = if memory {
        info!("using in-memory store");
        let server = HttpServer::with_store(settings.server, MemoryMaterialStore::new());
        rt.block_on(server.start())
    } else {
        let store = PgMaterialStore::new(&settings.database);
        rt.block_on(async {
            // The server still starts: every request opens its own connection.
            if let Err(e) = store.ensure_schema().await {
                warn!(error = %e, "could not ensure materials table at startup");
            }
            HttpServer::with_store(settings.server, store).start().await
        })
    };

    result.map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
}

/// Run the interactive form client on stdin/stdout
pub fn client(
    config_path: Option<&Path>,
    api_url: Option<String>,
    offline_fallback: bool,
) -> CliResult<()> {
    let mut settings = load_settings(config_path)?;
    if let Some(url) = api_url {
        settings.client.api_base_url = url;
    }
    if offline_fallback {
        settings.client.offline_fallback = true;
    }
    settings.validate_client()?;

    let api = HttpMaterialsClient::new(&settings.client)?;
    info!(api = api.base_url(), "starting form client");

    FormApp::new(api, TerminalConsole::stdio())
        .with_offline_fallback(settings.client.offline_fallback)
        .run()?;

    Ok(())
}
