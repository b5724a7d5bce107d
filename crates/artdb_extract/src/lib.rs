pub mod embeddings;
pub mod models;

pub use embeddings::RemoteEncoder;
pub use models::{create_extractor, NoopExtractor, OpenAiExtractor};

/// Configuration for the extraction clients.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
}

pub mod prelude {
    pub use crate::models::create_extractor;
    pub use crate::Config;
    pub use artdb_core::{Article, Error, NerRecord, Result};
}
