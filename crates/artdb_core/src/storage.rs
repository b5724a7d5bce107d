use async_trait::async_trait;

use crate::types::Article;
use crate::Result;

#[async_trait]
pub trait ArticleStorage: Send + Sync {
    /// Store an article and return the id it was assigned. The id field of
    /// the given article is overwritten with a fresh value.
    async fn add(&self, article: Article) -> Result<String>;

    /// Return the article stored under the given id.
    async fn get(&self, id: &str) -> Result<Article>;
}
