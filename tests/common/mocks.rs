use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use veogen::veo::{GenerationRequest, GenerationResult, VideoGenerator};
use veogen::{Error, Result};

/// Mock video generator for handler tests. Replays a scripted outcome and
/// records every request it receives.
pub struct MockVideoGenerator {
    pub outcome: Mutex<Option<Result<GenerationResult>>>,
    pub requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl MockVideoGenerator {
    pub fn with_result(result: GenerationResult) -> Self {
        Self {
            outcome: Mutex::new(Some(Ok(result))),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_error(error: Error) -> Self {
        Self {
            outcome: Mutex::new(Some(Err(error))),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl VideoGenerator for MockVideoGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcome
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(Error::validation("mock outcome already consumed")))
    }
}
