use std::sync::Arc;

use artdb_core::ArticleStorage;
use artdb_ingest::Ingestor;

pub struct AppState {
    pub ingestor: Arc<Ingestor>,
    pub storage: Arc<dyn ArticleStorage>,
}
