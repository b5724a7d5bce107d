use std::sync::Arc;

use tracing::{debug, info};

use artdb_core::{
    ids, Article, ArticleStorage, Capability, Encoder, Error, NamedEntityRecognizer, Result,
    Summarizer,
};

/// Ingests an article by fanning out to the feature extraction capabilities
/// and committing the enriched result to storage. Providers are injected at
/// construction; the ingestor never names a concrete one.
pub struct Ingestor {
    summarizer: Arc<dyn Summarizer>,
    ner: Arc<dyn NamedEntityRecognizer>,
    encoder: Option<Arc<dyn Encoder>>,
    storage: Arc<dyn ArticleStorage>,
}

impl Ingestor {
    pub fn new(
        summarizer: Arc<dyn Summarizer>,
        ner: Arc<dyn NamedEntityRecognizer>,
        storage: Arc<dyn ArticleStorage>,
    ) -> Self {
        Self {
            summarizer,
            ner,
            encoder: None,
            storage,
        }
    }

    /// Attach an optional embedding capability as a third extraction branch.
    pub fn with_encoder(mut self, encoder: Arc<dyn Encoder>) -> Self {
        self.encoder = Some(encoder);
        self
    }

    /// Enrich the given article and store it, returning the assigned id.
    ///
    /// The store is only touched if every extraction branch succeeded;
    /// a branch failure leaves the store untouched. Deadlines are the
    /// caller's concern, e.g. by wrapping the returned future in
    /// `tokio::time::timeout`. No retries are performed.
    pub async fn add(&self, article: Article) -> Result<String> {
        info!(article_id = %article.id, "📰 add article");

        // A caller-supplied id must be well formed. Empty means not yet
        // committed and is fine; the store assigns the real id.
        if !article.id.is_empty() && !ids::valid_id(&article.id) {
            return Err(Error::InvalidId);
        }

        let article = self.enrich(article).await?;

        let id = self.storage.add(article).await?;
        info!(article_id = %id, "💾 article stored");

        Ok(id)
    }

    /// Run all enabled extraction branches concurrently over the article
    /// body and merge their results. The first branch error resolves the
    /// join and drops the sibling branches at their next suspension point.
    async fn enrich(&self, mut article: Article) -> Result<Article> {
        debug!("start feature extraction");
        let body = &article.body;

        let summary = async {
            self.summarizer
                .summarize(body)
                .await
                .map_err(|err| Error::upstream(Capability::Summarizer, err))
        };

        let entities = async {
            self.ner
                .ner(body)
                .await
                .map_err(|err| Error::upstream(Capability::Ner, err))
        };

        let vectors = async {
            match &self.encoder {
                Some(encoder) => encoder
                    .encode(std::slice::from_ref(body))
                    .await
                    .map(Some)
                    .map_err(|err| Error::upstream(Capability::Encoder, err)),
                None => Ok(None),
            }
        };

        let (summary, entities, vectors) = tokio::try_join!(summary, entities, vectors)?;
        debug!("feature extraction finished");

        // Embeddings are computed but not yet attached to the stored article.
        if let Some(vectors) = vectors {
            debug!(count = vectors.len(), "🔢 encoded article body");
        }

        article.summary = Some(summary);
        article.entities = entities;

        Ok(article)
    }
}
