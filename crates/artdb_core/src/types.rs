use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news article. The fields title, url, author, published_at and body form
/// the original publication; the remaining fields are derived features and
/// book keeping. The id is empty until the article has been stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub url: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: DateTime<Utc>,
    pub body: String,
    pub summary: Option<String>,
    pub keywords: Vec<String>,
    pub entities: NerRecord,
}

/// Equality covers only the fields of the original publication. Derived
/// features and book keeping fields are ignored.
impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.url == other.url
            && self.author == other.author
            && self.published_at == other.published_at
            && self.body == other.body
    }
}

impl Eq for Article {}

/// Named entities found in an article, grouped by entity type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NerRecord {
    pub persons: Vec<String>,
    pub locations: Vec<String>,
    pub organisations: Vec<String>,
}

impl NerRecord {
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty() && self.locations.is_empty() && self.organisations.is_empty()
    }
}

/// A text embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub id: String,
    pub data: Vec<f32>,
}

impl Vector {
    pub fn dim(&self) -> usize {
        self.data.len()
    }
}
