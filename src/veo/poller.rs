use crate::{extract::extract_video_url, Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Wall-clock ceiling on one operation, measured from the submission
/// instant, not from the first poll.
pub const MAX_WAIT: Duration = Duration::from_secs(15 * 60);
pub const INITIAL_BACKOFF_MS: u64 = 1500;
pub const MAX_BACKOFF_MS: u64 = 8000;

/// Transport seam for a single poll call. The production implementation
/// lives on `VeoClient`; tests script responses directly.
#[async_trait]
pub trait PollTransport: Send + Sync {
    async fn poll(&self, operation_name: &str) -> Result<Value>;
}

/// What one poll response means for the operation.
enum PollStep {
    Done(String),
    Failed(String),
    NotDone,
}

fn classify(body: &Value) -> PollStep {
    if !body["done"].as_bool().unwrap_or(false) {
        return PollStep::NotDone;
    }
    // Done: the URL may sit on the body itself or under response/result.
    let video_url = extract_video_url(body)
        .or_else(|| extract_video_url(&body["response"]))
        .or_else(|| extract_video_url(&body["result"]));
    match video_url {
        Some(url) => PollStep::Done(url),
        None => {
            let message = body["error"]["message"]
                .as_str()
                .unwrap_or("Operation done but no video URL found")
                .to_string();
            PollStep::Failed(message)
        }
    }
}

fn next_backoff_ms(current: u64) -> u64 {
    MAX_BACKOFF_MS.min(current * 3 / 2)
}

/// Polls `operation_name` until it reports done, then returns the video
/// URL. The backoff delay is applied before the next poll; a transport
/// failure on any poll is immediately fatal.
pub async fn wait_for_completion(
    transport: &dyn PollTransport,
    operation_name: &str,
    submitted_at: Instant,
) -> Result<String> {
    let mut backoff_ms = INITIAL_BACKOFF_MS;

    loop {
        if submitted_at.elapsed() > MAX_WAIT {
            return Err(Error::OperationTimeout);
        }

        let body = transport.poll(operation_name).await?;

        match classify(&body) {
            PollStep::Done(url) => return Ok(url),
            PollStep::Failed(message) => return Err(Error::operation_failed(message)),
            PollStep::NotDone => {
                debug!(
                    operation = operation_name,
                    backoff_ms, "Operation not done yet"
                );
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                backoff_ms = next_backoff_ms(backoff_ms);
            }
        }
    }
}
