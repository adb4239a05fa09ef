use anyhow::{Context, Result};
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};
use tracing::info;

use crate::config::Config;
use crate::models::resume::Resume;

pub const RESUME_COLLECTION: &str = "resumes";

/// Opens the MongoDB client and verifies the store is reachable.
/// The driver connects lazily, so a `ping` forces the round trip here —
/// an unreachable store must abort startup, not the first request.
pub async fn connect(config: &Config) -> Result<Database> {
    info!("Connecting to MongoDB...");

    let client = Client::with_uri_str(&config.database_url)
        .await
        .context("Invalid MongoDB connection string")?;
    let db = client.database(&config.database_name);

    db.run_command(doc! { "ping": 1 }, None)
        .await
        .context("MongoDB is unreachable at startup")?;

    info!("MongoDB connection established");
    Ok(db)
}

/// Binds the resume document model to its collection and ensures the
/// owner-lookup index exists. Index creation is idempotent; re-running
/// against a populated store is a no-op.
pub async fn init_resume_collection(db: &Database) -> Result<Collection<Resume>> {
    let resumes = db.collection::<Resume>(RESUME_COLLECTION);

    let user_id_index = IndexModel::builder()
        .keys(doc! { "user_id": 1 })
        .options(IndexOptions::builder().name("user_id_idx".to_string()).build())
        .build();
    resumes
        .create_index(user_id_index, None)
        .await
        .context("Failed to create user_id index on resumes")?;

    info!("Resume collection initialized");
    Ok(resumes)
}
