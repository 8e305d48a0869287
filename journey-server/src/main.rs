use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use journey_server::config::ServerConfig;
use journey_server::estimator::JourneyEstimator;
use journey_server::geocode::{CachedGeocoder, NominatimClient};
use journey_server::routing::OsrmClient;
use journey_server::traffic::{CongestionCatalog, CongestionQuery, SystemClock};
use journey_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        routing = %config.routing.base_url,
        geocoding = %config.geocoding.base_url,
        "loaded configuration"
    );

    // Routing provider
    let routes = OsrmClient::new(config.routing.clone())?;

    // Location search with caching
    let geocoder = CachedGeocoder::new(
        NominatimClient::new(config.geocoding.clone())?,
        &config.search_cache,
    );

    let catalog = CongestionCatalog::great_britain()?;
    tracing::info!(hotspots = catalog.len(), "loaded congestion catalog");

    let estimator = JourneyEstimator::new(
        Arc::new(routes),
        CongestionQuery::new(Arc::new(catalog)),
        Arc::new(SystemClock),
        config.estimator.clone(),
    );

    let app = create_router(AppState::new(estimator, geocoder));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "journey estimator listening");
    axum::serve(listener, app).await?;

    Ok(())
}
