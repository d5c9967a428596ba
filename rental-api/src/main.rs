use std::sync::Arc;

use anyhow::Context;
use rental_api::{app, AppState};
use rental_catalog::seed;
use rental_core::{InquiryRepository, ListingRepository};
use rental_store::app_config::{Config, StoreBackend};
use rental_store::{DbClient, InMemoryStore, MongoInquiryRepository, MongoListingRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "rental_api=debug,rental_catalog=debug,rental_store=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Rental Marketplace API on port {}", config.server.port);

    let (listing_repo, inquiry_repo, db): (
        Arc<dyn ListingRepository>,
        Arc<dyn InquiryRepository>,
        Option<DbClient>,
    ) = match config.database.backend {
        StoreBackend::Mongo => {
            let db = DbClient::connect(&config.database)
                .await
                .context("Failed to connect to MongoDB")?;
            let listings: Arc<dyn ListingRepository> = Arc::new(MongoListingRepository::new(&db));
            let inquiries: Arc<dyn InquiryRepository> = Arc::new(MongoInquiryRepository::new(&db));
            (listings, inquiries, Some(db))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, data will not survive a restart");
            let store = InMemoryStore::new();
            let listings: Arc<dyn ListingRepository> = Arc::new(store.clone());
            let inquiries: Arc<dyn InquiryRepository> = Arc::new(store);
            (listings, inquiries, None)
        }
    };

    if config.database.seed_sample_data {
        seed::seed_sample_listings(listing_repo.as_ref())
            .await
            .context("Failed to seed sample listings")?;
    }

    let app = app(AppState::new(listing_repo, inquiry_repo));

    let listener = tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.server.host, config.server.port))?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    if let Some(db) = db {
        db.close().await;
    }
    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to listen for SIGTERM: {}", err);
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

    tracing::info!("Shutdown signal received");
}
