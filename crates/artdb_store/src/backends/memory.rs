use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use artdb_core::{ids, Article, ArticleStorage, Error, Result};

/// Plain keyed collection of articles. All synchronization lives in
/// [`MemoryStorage`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, Article>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Insert the article under a fresh id, overwriting any id the caller
    /// set, and return the assigned id.
    pub fn add(&mut self, mut article: Article) -> String {
        let id = ids::unique_id();
        article.id = id.clone();
        self.items.insert(id.clone(), article);
        id
    }

    pub fn get(&self, id: &str) -> Option<Article> {
        self.items.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// In-memory implementation of [`ArticleStorage`]. Concurrent gets proceed
/// in parallel; an add holds the write lock only for the map mutation.
pub struct MemoryStorage {
    store: Arc<RwLock<MemoryStore>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(MemoryStore::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleStorage for MemoryStorage {
    async fn add(&self, article: Article) -> Result<String> {
        let mut store = self.store.write().await;
        Ok(store.add(article))
    }

    async fn get(&self, id: &str) -> Result<Article> {
        // Reject malformed ids before taking the lock.
        if !ids::valid_id(id) {
            return Err(Error::InvalidId);
        }

        let store = self.store.read().await;
        store.get(id).ok_or(Error::NotFound)
    }
}
