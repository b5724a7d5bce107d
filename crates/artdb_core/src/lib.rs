pub mod error;
pub mod ids;
pub mod models;
pub mod storage;
pub mod types;

pub use error::{Capability, Error, Result};
pub use models::{Encoder, NamedEntityRecognizer, Summarizer};
pub use storage::ArticleStorage;
pub use types::{Article, NerRecord, Vector};

pub mod prelude {
    pub use crate::error::{Capability, Error, Result};
    pub use crate::models::{Encoder, NamedEntityRecognizer, Summarizer};
    pub use crate::storage::ArticleStorage;
    pub use crate::types::{Article, NerRecord, Vector};
}
