use mongodb::{Collection, Database};

use crate::config::Config;
use crate::models::resume::Resume;

/// Shared application state injected into all route handlers via Axum
/// extractors. The MongoDB handles are cheap clones over a pooled client
/// and are safe for concurrent use.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub resumes: Collection<Resume>,
    pub config: Config,
}
