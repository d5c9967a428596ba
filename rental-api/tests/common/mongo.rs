//! Shared MongoDB container for tests that exercise the durable backend.
//!
//! The container is started once per test binary and reused; every test gets
//! its own database so runs do not see each other's documents. When Docker is
//! not available the container cannot start and `connect_fresh` returns
//! `None`, letting callers skip.

use rental_store::app_config::{DatabaseConfig, StoreBackend};
use rental_store::DbClient;
use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::mongo::Mongo;
use tokio::sync::OnceCell;

struct SharedMongo {
    url: String,
    // Keep the container alive for the whole test binary
    _container: ContainerAsync<Mongo>,
}

static SHARED_MONGO: OnceCell<Option<SharedMongo>> = OnceCell::const_new();

async fn start() -> Option<SharedMongo> {
    let container = match Mongo::default().start().await {
        Ok(container) => container,
        Err(err) => {
            eprintln!("Skipping MongoDB tests, container failed to start: {}", err);
            return None;
        }
    };

    let host = container.get_host().await.expect("mongo host");
    let port = container.get_host_port_ipv4(27017).await.expect("mongo port");
    Some(SharedMongo {
        url: format!("mongodb://{}:{}", host, port),
        _container: container,
    })
}

/// Connects to a brand-new database on the shared container.
pub async fn connect_fresh() -> Option<DbClient> {
    let shared = SHARED_MONGO.get_or_init(start).await.as_ref()?;

    let config = DatabaseConfig {
        backend: StoreBackend::Mongo,
        url: shared.url.clone(),
        name: format!("rental_test_{}", uuid::Uuid::new_v4().simple()),
        seed_sample_data: false,
    };
    Some(DbClient::connect(&config).await.expect("connect to mongo"))
}
