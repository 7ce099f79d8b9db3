use log::*;
use service::config::Config;
use service::logging::Logger;
use service::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use web::router::define_routes;

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config);

    info!("Starting logstream gateway...");

    let source_handle = match service::init_source_handle(&config) {
        Ok(handle) => Arc::new(handle),
        Err(err) => {
            error!("Failed to initialize the log source handle: {err}");
            std::process::exit(1);
        }
    };

    let app_state = AppState::new(config, source_handle);
    let shutdown = app_state.shutdown.clone();

    let listen_address = format!(
        "{}:{}",
        app_state.config.interface.as_deref().unwrap_or("127.0.0.1"),
        app_state.config.port
    );
    let listener = match TcpListener::bind(&listen_address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind {listen_address}: {err}");
            std::process::exit(1);
        }
    };

    info!("Server starting... listening for requests on {listen_address}");

    let router = define_routes(app_state);
    if let Err(err) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await
    {
        error!("Server error: {err}");
    }
}

/// Resolves on Ctrl-C and cancels every active log stream so in-flight
/// connections drain before the process exits.
async fn shutdown_signal(shutdown: CancellationToken) {
    if tokio::signal::ctrl_c().await.is_err() {
        warn!("Failed to listen for the shutdown signal");
    }
    info!("Shutdown signal received, closing active log streams");
    shutdown.cancel();
}
