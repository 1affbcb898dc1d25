//! City Explorer HTTP server
//!
//! Main entry point for the page and the session API.

use std::{future::IntoFuture, sync::Arc, time::Duration};

use application::ExplorerService;
use infrastructure::{AppConfig, GeocodingAdapter, HolidayAdapter, PoiAdapter, init_tracing};
use presentation_http::{create_app, state::AppState};
use tokio::{net::TcpListener, signal, sync::Notify};
use tracing::{info, warn};

const DEFAULT_LOG_FILTER: &str = "presentation_http=info,infrastructure=info,application=info,\
integration_opencage=info,integration_overpass=info,integration_calendarific=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Tracing needs the configured format, so report load problems after init
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(config.server.log_format, DEFAULT_LOG_FILTER)?;

    info!("City Explorer v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {}", e);
    }

    config.validate()?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        poi_category = %config.explorer.poi_category,
        radius_m = config.overpass.radius_m,
        "Configuration loaded"
    );

    let geocoder = GeocodingAdapter::new(&config.opencage.to_client_config())
        .map_err(|e| anyhow::anyhow!("Failed to initialize geocoding: {e}"))?;
    let pois = PoiAdapter::new(&config.overpass.to_client_config())
        .map_err(|e| anyhow::anyhow!("Failed to initialize POI lookup: {e}"))?;
    let holidays = HolidayAdapter::new(&config.calendarific.to_client_config())
        .map_err(|e| anyhow::anyhow!("Failed to initialize holiday lookup: {e}"))?;

    let explorer = ExplorerService::new(
        Arc::new(geocoder),
        Arc::new(pois),
        Arc::new(holidays),
        config.explorer.to_explorer_config()?,
    );

    let addr = config.server.bind_address();
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    let state = AppState {
        explorer: Arc::new(explorer),
        config: Arc::new(config),
    };
    let app = create_app(state);

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    let shutdown = Arc::new(Notify::new());
    let serve = axum::serve(listener, app)
        .with_graceful_shutdown({
            let shutdown = Arc::clone(&shutdown);
            async move {
                shutdown_signal().await;
                shutdown.notify_one();
            }
        })
        .into_future();
    let drain_deadline = async {
        shutdown.notified().await;
        info!("Waiting up to {:?} for connections to close...", shutdown_timeout);
        tokio::time::sleep(shutdown_timeout).await;
    };

    tokio::select! {
        result = serve => result?,
        () = drain_deadline => {
            warn!("Connections still open after {:?}, exiting", shutdown_timeout);
        }
    }

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
