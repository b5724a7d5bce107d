use async_trait::async_trait;

use artdb_core::{NamedEntityRecognizer, NerRecord, Result, Summarizer};

/// Extraction client that does nothing. Stands in wherever no live provider
/// is wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopExtractor;

#[async_trait]
impl Summarizer for NoopExtractor {
    async fn summarize(&self, _text: &str) -> Result<String> {
        Ok(String::new())
    }
}

#[async_trait]
impl NamedEntityRecognizer for NoopExtractor {
    async fn ner(&self, _text: &str) -> Result<NerRecord> {
        Ok(NerRecord::default())
    }
}
