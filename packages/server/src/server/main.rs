// Main entry point for the Eventbrite webhook receiver

use std::sync::Arc;

use anyhow::{Context, Result};
use eventbrite_client::EventbriteClient;
use eventbrite_trigger::{Activation, JsonFileStore, SubscriptionManager};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trigger_server::{
    server::{build_app, AppState},
    sink, Config,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,eventbrite_trigger=debug,trigger_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Eventbrite trigger");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        event_id = %config.event_id,
        actions = ?config.actions,
        resolve_data = config.resolve_data,
        "Configuration loaded"
    );

    let client = Arc::new(
        EventbriteClient::new(config.eventbrite_api_token.clone())
            .with_base_url(&config.eventbrite_api_url),
    );
    let store = Arc::new(JsonFileStore::new(&config.state_file));
    tracing::info!(state_file = %store.path().display(), "Using webhook state file");
    let manager = SubscriptionManager::new(client.clone(), store.clone(), config.trigger_config());

    // Register the webhook before accepting callbacks
    match manager
        .activate()
        .await
        .context("Failed to register Eventbrite webhook")?
    {
        Activation::Existing => tracing::info!("Existing Eventbrite webhook verified"),
        Activation::Created => tracing::info!("Eventbrite webhook registered"),
    }

    // Records go to stdout, logs to stderr
    let (records, receiver) = sink::channel();
    let writer = sink::spawn_writer(receiver, tokio::io::stdout());

    let app = build_app(AppState::new(
        client.clone(),
        store.clone(),
        config.resolve_data,
        records,
    ));

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Callback URL: {}", config.callback_url());
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // Unregister so Eventbrite stops delivering to a dead endpoint
    match manager.deactivate().await {
        Ok(true) => tracing::info!("Eventbrite webhook removed"),
        Ok(false) => tracing::warn!("Eventbrite webhook was not removed; stored id kept for a later retry"),
        Err(e) => tracing::error!(error = %e, "Failed to remove Eventbrite webhook"),
    }

    // The router (and with it every sender) is gone once serve returns
    if let Err(e) = writer.await {
        tracing::error!(error = %e, "Record writer task failed");
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
