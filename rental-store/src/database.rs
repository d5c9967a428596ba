use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use tracing::info;

use crate::app_config::DatabaseConfig;

pub const LISTINGS_COLLECTION: &str = "listings";
pub const INQUIRIES_COLLECTION: &str = "inquiries";

/// Handle to the MongoDB deployment. Cheap to clone; all clones share the
/// driver's connection pool.
#[derive(Clone)]
pub struct DbClient {
    client: Client,
    database: Database,
}

impl DbClient {
    /// Connects and pings the server so a bad URL fails at startup rather
    /// than on the first request.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, mongodb::error::Error> {
        let mut options = ClientOptions::parse(&config.url).await?;
        options.app_name = Some("rental-api".to_string());

        let client = Client::with_options(options)?;
        let database = client.database(&config.name);
        database.run_command(doc! { "ping": 1 }).await?;

        info!("Connected to MongoDB database '{}'", config.name);
        Ok(Self { client, database })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    /// Waits for in-flight operations and closes the pool.
    pub async fn close(self) {
        info!("Closing MongoDB connection...");
        self.client.shutdown().await;
    }
}
