//! Print Job - A single countdown job controlled over HTTP
//! 
//! This is the main entry point for the print-job application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use print_job::{
    config::{Config, TICK_INTERVAL},
    state::{AppState, Job, JobTimer},
    api::create_router,
    tasks::tick_driver_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("print_job={},tower_http=info", config.log_level()))
        .init();

    info!("Starting print-job server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, duration={}s",
          config.host, config.port, config.duration);

    let job: Arc<dyn Job> = Arc::new(JobTimer::new(config.job_duration()));

    // Start the tick driver background task
    let cancel = CancellationToken::new();
    let driver = tokio::spawn(tick_driver_task(Arc::clone(&job), TICK_INTERVAL, cancel.clone()));

    // Create HTTP router with all endpoints
    let state = Arc::new(AppState::new(job, config.port, config.host.clone()));
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /        - Control page");
    info!("  GET  /state   - Current job state and remaining seconds");
    info!("  POST /start   - Start the job");
    info!("  POST /pause   - Pause the job");
    info!("  POST /resume  - Resume the job");
    info!("  POST /stop    - Stop and reset the job");
    info!("  GET  /health  - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        result = shutdown_signal() => {
            match result {
                Ok(()) => info!("Shutdown signal received"),
                Err(e) => tracing::error!("Failed to listen for shutdown signals: {}", e),
            }
        }
    }

    cancel.cancel();
    driver.await?;

    info!("Server shutdown complete");
    Ok(())
}
