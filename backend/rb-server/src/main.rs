use rb_server::{
    ActionSettings, AppState, BackgroundTasks, Metrics, ShutdownCoordinator, build_router, logger,
};

use rb_auth::JwtValidator;
use rb_config::Config;
use rb_monday::{MondayClient, TriggerClient};

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is normal in production
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_file_path = config.log_file_path()?;
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting rb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Platform clients
    let monday = Arc::new(MondayClient::new(&config.platform)?);
    let signing_secret = config.auth.signing_secret.as_deref().unwrap_or_default();
    let trigger = Arc::new(TriggerClient::new(
        signing_secret,
        config.callback.timeout(),
    )?);
    info!("Platform API client initialized: {}", monday.api_url);

    let jwt_validator = Arc::new(JwtValidator::with_hs256(
        config.auth.signing_secret_bytes(),
    ));
    info!("JWT: HS256 session validation enabled");

    let metrics = Metrics::new();
    let shutdown = ShutdownCoordinator::new();
    let tasks = BackgroundTasks::new(metrics.clone());

    let app_state = AppState {
        monday,
        trigger,
        jwt_validator,
        settings: ActionSettings::from_config(&config),
        tasks: tasks.clone(),
        shutdown: shutdown.clone(),
        metrics,
    };

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    info!("Server ready to accept webhooks");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.subscribe_guard().wait().await;
        })
        .await?;

    // Deferred trigger callbacks outlive their requests
    let pending = tasks.in_flight();
    if pending > 0 {
        let grace = Duration::from_secs(config.server.shutdown_grace_secs);
        info!(
            "Waiting up to {:?} for {} deferred callbacks",
            grace, pending
        );

        if !tasks.wait_idle(grace).await {
            let aborted = tasks.abort_all();
            warn!("Aborted {} deferred callbacks at shutdown", aborted);
        }
    }

    info!("Graceful shutdown complete");
    Ok(())
}
