use async_trait::async_trait;

use crate::types::{NerRecord, Vector};
use crate::Result;

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize the given text.
    async fn summarize(&self, text: &str) -> Result<String>;
}

#[async_trait]
pub trait NamedEntityRecognizer: Send + Sync {
    /// Extract named entities from the given text.
    async fn ner(&self, text: &str) -> Result<NerRecord>;
}

#[async_trait]
pub trait Encoder: Send + Sync {
    /// Returns one embedding per input text, in input order.
    /// An empty input slice yields an empty result without a remote call.
    async fn encode(&self, texts: &[String]) -> Result<Vec<Vector>>;
}
