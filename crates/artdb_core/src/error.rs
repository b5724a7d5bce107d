use std::fmt;

use thiserror::Error;

/// The feature extraction capabilities an article is fanned out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Summarizer,
    Ner,
    Encoder,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Summarizer => write!(f, "summarizer"),
            Capability::Ner => write!(f, "ner"),
            Capability::Encoder => write!(f, "encoder"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid id")]
    InvalidId,

    #[error("article not found")]
    NotFound,

    /// A feature extraction branch failed. The underlying cause is kept
    /// for inspection via source().
    #[error("{capability} failed: {source}")]
    Upstream {
        capability: Capability,
        #[source]
        source: Box<Error>,
    },

    #[error("storage error: {0}")]
    Storage(String),

    #[error("inference error: {0}")]
    Inference(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("external error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// Wrap a branch failure with the capability it came from.
    pub fn upstream(capability: Capability, source: Error) -> Self {
        Error::Upstream {
            capability,
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
