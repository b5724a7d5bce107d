use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use artdb_core::{ids, Encoder, Error, Result, Vector};

#[derive(Serialize)]
struct InputTensor {
    name: String,
    shape: Vec<usize>,
    datatype: String,
    data: Vec<String>,
}

#[derive(Serialize)]
struct EmbedRequest {
    inputs: Vec<InputTensor>,
}

#[derive(Deserialize)]
struct OutputTensor {
    #[serde(default)]
    data: Vec<f32>,
}

#[derive(Deserialize)]
struct EmbedResponse {
    #[serde(default)]
    model_name: String,
    #[serde(default)]
    outputs: Vec<OutputTensor>,
}

/// Client to a remote text embedding model served over the Predict
/// Protocol, version 2 (kserve).
#[derive(Debug)]
pub struct RemoteEncoder {
    client: Client,
    infer_url: Url,
    ready_url: Url,
}

impl RemoteEncoder {
    pub fn new(addr: &str, model_name: &str) -> Result<Self> {
        let base =
            Url::parse(addr).map_err(|err| Error::InvalidUrl(format!("{addr}, {err}")))?;

        let infer_url = base
            .join(&format!("v2/models/{model_name}/infer"))
            .map_err(|err| Error::InvalidUrl(format!("cannot join infer path, {err}")))?;

        let ready_url = base
            .join(&format!("v2/models/{model_name}/ready"))
            .map_err(|err| Error::InvalidUrl(format!("cannot join ready path, {err}")))?;

        Ok(Self {
            client: Client::new(),
            infer_url,
            ready_url,
        })
    }

    /// True if the remote model is ready for inference.
    pub async fn ready(&self) -> bool {
        match self.client.get(self.ready_url.clone()).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[async_trait]
impl Encoder for RemoteEncoder {
    async fn encode(&self, texts: &[String]) -> Result<Vec<Vector>> {
        info!(texts_len = texts.len(), "encode texts");

        // Nothing to encode, skip the remote call.
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let request = EmbedRequest {
            inputs: vec![InputTensor {
                name: "sentences".to_string(),
                shape: vec![texts.len()],
                datatype: "BYTES".to_string(),
                data: texts.to_vec(),
            }],
        };

        let response = self
            .client
            .post(self.infer_url.clone())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::InvalidResponse(format!(
                "status {}",
                response.status()
            )));
        }

        let response = response.json::<EmbedResponse>().await?;
        debug!(
            model_name = %response.model_name,
            outputs = response.outputs.len(),
            "embed response"
        );

        Ok(response
            .outputs
            .into_iter()
            .map(|output| Vector {
                id: ids::unique_id(),
                data: output.data,
            })
            .collect())
    }
}
