use super::poller::{self, PollTransport};
use super::types::{GenerationRequest, GenerationResult, SubmitOutcome};
use crate::{config::VeoConfig, extract::extract_video_url, Error, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

/// Seam between the request handler and the upstream service, so handler
/// tests can script outcomes without a network.
#[async_trait]
pub trait VideoGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult>;
}

#[derive(Debug)]
pub struct VeoClient {
    http: reqwest::Client,
    api_key: String,
    api_base: String,
    operations_base: String,
}

impl VeoClient {
    pub fn new(config: VeoConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .ok_or_else(|| Error::config("veo.api_key is not set"))?;

        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            api_base: config.api_base,
            operations_base: config.operations_base,
        })
    }

    /// Issues the creation request and decides which completion path the
    /// upstream chose.
    async fn submit(&self, request: &GenerationRequest) -> Result<SubmitOutcome> {
        let mut video_config = json!({
            "durationSeconds": request.duration_seconds,
            "frameRate": request.fps,
            "resolution": { "width": request.width, "height": request.height },
        });
        if let Some(seed) = request.seed {
            video_config["seed"] = json!(seed);
        }
        let body = json!({
            "prompt": request.composite_prompt(),
            "videoConfig": video_config,
        });

        let response = self
            .http
            .post(&self.api_base)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::UpstreamSubmit {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response.json().await?;

        if let Some(url) = extract_video_url(&body) {
            return Ok(SubmitOutcome::Immediate(url));
        }

        // The operation name has shown up under three different keys.
        let operation_name = ["name", "operation", "operationId"]
            .iter()
            .find_map(|key| body[key].as_str())
            .ok_or_else(|| Error::malformed("missing operation name and direct result"))?;

        Ok(SubmitOutcome::Deferred(operation_name.to_string()))
    }
}

#[async_trait]
impl PollTransport for VeoClient {
    async fn poll(&self, operation_name: &str) -> Result<Value> {
        let url = format!(
            "{}{}",
            self.operations_base,
            urlencoding::encode(operation_name)
        );

        let response = self
            .http
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::PollTransport {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl VideoGenerator for VeoClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        let request_id = Uuid::new_v4();
        info!(
            %request_id,
            duration_seconds = request.duration_seconds,
            fps = request.fps,
            width = request.width,
            height = request.height,
            "Submitting video generation request"
        );

        // The timeout ceiling counts from here, not from the first poll.
        let submitted_at = Instant::now();

        match self.submit(request).await? {
            SubmitOutcome::Immediate(video_url) => {
                debug!(%request_id, "Upstream answered with an immediate result");
                Ok(GenerationResult::immediate(video_url))
            }
            SubmitOutcome::Deferred(operation_name) => {
                debug!(
                    %request_id,
                    operation = %operation_name,
                    "Upstream returned a long-running operation"
                );
                let video_url =
                    poller::wait_for_completion(self, &operation_name, submitted_at).await?;
                info!(%request_id, operation = %operation_name, "Operation completed");
                Ok(GenerationResult::from_operation(video_url, operation_name))
            }
        }
    }
}
