use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use artdb_core::{Error, NamedEntityRecognizer, NerRecord, Result, Summarizer};

const SUM_PROMPT: &str = "Tl;dr";
const NER_PROMPT: &str = "List the named entities of type person, location and organisation \
                          in the text. Return a json object with the keys persons, locations \
                          and organisations, each holding a list of strings";

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

/// Chat completion client serving both the summarizer and the named entity
/// recognizer capability.
pub struct OpenAiExtractor {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiExtractor {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Arc::new(Client::new()),
            api_key: api_key.unwrap_or_default(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn complete(&self, prompt: String) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            temperature: 1.0,
            max_tokens: 220,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::InvalidResponse(format!(
                "status {}",
                response.status()
            )));
        }

        let response = response.json::<ChatResponse>().await?;
        debug!(choices = response.choices.len(), "completion response");

        // In case of multiple choices, use the first.
        let choice = response
            .choices
            .first()
            .ok_or_else(|| Error::InvalidResponse("no choices".to_string()))?;

        if choice.message.content.is_empty() {
            return Err(Error::InvalidResponse("empty result".to_string()));
        }

        Ok(choice.message.content.clone())
    }
}

impl fmt::Debug for OpenAiExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiExtractor")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[async_trait]
impl Summarizer for OpenAiExtractor {
    async fn summarize(&self, text: &str) -> Result<String> {
        info!(len_text = text.len(), "summarize text with openAI");

        if text.is_empty() {
            return Err(Error::Inference(
                "could not summarize, text is empty".to_string(),
            ));
        }

        self.complete(format!("{text}\n\n{SUM_PROMPT}")).await
    }
}

#[async_trait]
impl NamedEntityRecognizer for OpenAiExtractor {
    async fn ner(&self, text: &str) -> Result<NerRecord> {
        info!(len_text = text.len(), "named entity recognition with openAI");

        if text.is_empty() {
            return Err(Error::Inference(
                "could not perform ner, text is empty".to_string(),
            ));
        }

        let result = self.complete(format!("{NER_PROMPT}:\n{text}")).await?;
        parse_ner(&result)
    }
}

/// Parse a completion result into a [`NerRecord`]. Models tend to wrap json
/// in a code fence, so fences are stripped first.
fn parse_ner(result: &str) -> Result<NerRecord> {
    let trimmed = result
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    serde_json::from_str(trimmed)
        .map_err(|err| Error::InvalidResponse(format!("ner result is not valid json, {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_summarize_empty_text() {
        let client = OpenAiExtractor::new(None);
        let err = client.summarize("").await.unwrap_err();
        assert!(matches!(err, Error::Inference(_)));
    }

    #[tokio::test]
    async fn test_ner_empty_text() {
        let client = OpenAiExtractor::new(None);
        let err = client.ner("").await.unwrap_err();
        assert!(matches!(err, Error::Inference(_)));
    }

    #[test]
    fn test_parse_ner() {
        let result = r#"{"persons": ["Ada Lovelace"], "locations": ["London"], "organisations": []}"#;
        let record = parse_ner(result).unwrap();
        assert_eq!(record.persons, vec!["Ada Lovelace".to_string()]);
        assert_eq!(record.locations, vec!["London".to_string()]);
        assert!(record.organisations.is_empty());
    }

    #[test]
    fn test_parse_ner_fenced() {
        let result = "```json\n{\"persons\": [], \"locations\": [], \"organisations\": [\"ACME\"]}\n```";
        let record = parse_ner(result).unwrap();
        assert_eq!(record.organisations, vec!["ACME".to_string()]);
    }

    #[test]
    fn test_parse_ner_invalid() {
        let err = parse_ner("not json at all").unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(_)));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = OpenAiExtractor::new(Some("secret".to_string()));
        let out = format!("{client:?}");
        assert!(!out.contains("secret"));
    }
}
