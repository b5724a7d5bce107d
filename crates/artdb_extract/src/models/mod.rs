use std::sync::Arc;

use artdb_core::{Error, NamedEntityRecognizer, Result, Summarizer};

use crate::Config;

pub mod noop;
pub mod openai;

pub use noop::NoopExtractor;
pub use openai::OpenAiExtractor;

/// Build the summarizer and recognizer pair for the configured model name.
/// Both halves are served by one shared client instance.
pub fn create_extractor(
    config: Option<Config>,
) -> Result<(Arc<dyn Summarizer>, Arc<dyn NamedEntityRecognizer>)> {
    let config = config.unwrap_or_default();

    match config.model_name.as_deref() {
        None | Some("noop") => {
            let client = Arc::new(NoopExtractor);
            let summarizer: Arc<dyn Summarizer> = client.clone();
            let ner: Arc<dyn NamedEntityRecognizer> = client;
            Ok((summarizer, ner))
        }
        Some("openai") => {
            let client = Arc::new(OpenAiExtractor::new(config.api_key));
            let summarizer: Arc<dyn Summarizer> = client.clone();
            let ner: Arc<dyn NamedEntityRecognizer> = client;
            Ok((summarizer, ner))
        }
        Some(other) => Err(Error::Inference(format!("unknown model: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_extractor_default_is_noop() {
        assert!(create_extractor(None).is_ok());
    }

    #[test]
    fn test_create_extractor_openai() {
        let config = Config {
            api_key: Some("secret".to_string()),
            model_name: Some("openai".to_string()),
        };
        assert!(create_extractor(Some(config)).is_ok());
    }

    #[test]
    fn test_create_extractor_unknown_model() {
        let config = Config {
            api_key: None,
            model_name: Some("does-not-exist".to_string()),
        };
        assert!(create_extractor(Some(config)).is_err());
    }
}
