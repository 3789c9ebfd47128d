use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod analysis;
mod commands;
mod config;
mod error;
mod marketplace;
mod middleware;
mod models;
mod reference;
mod routes;
mod services;
mod state;
mod views;

#[cfg(test)]
mod integration_tests;

use config::AppConfig;
use marketplace::SeedListings;
use services::HttpFarmServices;
use state::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting BhoomiMitra backend...");

    let config = AppConfig::from_env();
    tracing::info!(
        "Services at {}, default location {}",
        config.api_base_url,
        config.default_location
    );
    if config.geocoding_api_key.is_none() {
        tracing::warn!("OPENWEATHER_API_KEY not set, reverse geocoding is disabled");
    }

    let listings = match SeedListings::load() {
        Ok(listings) => listings,
        Err(e) => {
            tracing::error!("Failed to load marketplace listings: {}", e);
            return;
        }
    };

    let services = match HttpFarmServices::new(&config) {
        Ok(services) => services,
        Err(e) => {
            tracing::error!("Failed to build service client: {}", e);
            return;
        }
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app_state = AppState::new(config, Arc::new(listings), Arc::new(services));
    let app = routes::create_app(app_state);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            return;
        }
    };
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
    }
}
