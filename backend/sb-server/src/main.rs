use sb_config::Config;
use sb_core::ProjectCatalog;
use sb_mail::{DeliveryConfig, EmailJsClient, SubmissionDispatcher};
use sb_server::{AppState, build_router, logger};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is normal outside development
    let dotenv = dotenvy::dotenv();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.logging.file_path(&Config::config_dir()?)?;

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting sb-server v{}", env!("CARGO_PKG_VERSION"));
    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Ignoring unreadable .env file: {}", e),
    }
    config.log_summary();

    let catalog = match config.projects_path()? {
        Some(path) => {
            info!("Loading projects from {}", path.display());
            ProjectCatalog::load(&path)?
        }
        None => ProjectCatalog::embedded()?,
    };
    info!("Project catalog ready: {} projects", catalog.len());

    let sender = Arc::new(EmailJsClient::from_config(&config.email));
    let dispatcher = SubmissionDispatcher::new(sender, DeliveryConfig::from(&config.email));

    let state = AppState::new(
        catalog,
        dispatcher,
        config.content.success_display(),
        config.email.is_configured(),
    );

    let app = build_router(state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on http://{}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Without a signal handler, run until killed
            std::future::pending::<()>().await;
        }
    }
}
