use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inbound generation request. Field names follow the JSON wire format.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub prompt: String,
    pub duration_seconds: i64,
    #[serde(default = "default_fps")]
    pub fps: i64,
    pub width: i64,
    pub height: i64,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub seed: Option<i64>,
}

fn default_fps() -> i64 {
    24
}

impl GenerationRequest {
    /// Checks every bound before any network call. All ranges are inclusive.
    pub fn validate(&self) -> Result<()> {
        if self.prompt.len() < 4 {
            return Err(Error::validation("prompt must be at least 4 characters"));
        }
        if !(2..=20).contains(&self.duration_seconds) {
            return Err(Error::validation(
                "durationSeconds must be between 2 and 20",
            ));
        }
        if !(12..=60).contains(&self.fps) {
            return Err(Error::validation("fps must be between 12 and 60"));
        }
        if !(512..=7680).contains(&self.width) {
            return Err(Error::validation("width must be between 512 and 7680"));
        }
        if !(512..=4320).contains(&self.height) {
            return Err(Error::validation("height must be between 512 and 4320"));
        }
        Ok(())
    }

    /// The prompt actually submitted upstream: the user prompt plus a style
    /// annotation line when a style was supplied.
    pub fn composite_prompt(&self) -> String {
        match &self.style {
            Some(style) => format!("{}\nStyle: {}", self.prompt, style),
            None => self.prompt.clone(),
        }
    }
}

/// Successful generation outcome returned to the HTTP caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub video_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<HashMap<String, String>>,
}

impl GenerationResult {
    pub fn immediate(video_url: String) -> Self {
        Self {
            video_url,
            operation_id: None,
            meta: Some(transport_meta("immediate")),
        }
    }

    pub fn from_operation(video_url: String, operation_id: String) -> Self {
        Self {
            video_url,
            operation_id: Some(operation_id),
            meta: Some(transport_meta("operation")),
        }
    }
}

fn transport_meta(transport: &str) -> HashMap<String, String> {
    let mut meta = HashMap::new();
    meta.insert("transport".to_string(), transport.to_string());
    meta
}

/// The two shapes a submission response can take: the upstream either
/// answers with the finished video or hands back a named long-running
/// operation to poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Immediate(String),
    Deferred(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request() -> GenerationRequest {
        GenerationRequest {
            prompt: "a city time lapse".to_string(),
            duration_seconds: 8,
            fps: 24,
            width: 1280,
            height: 720,
            style: None,
            seed: None,
        }
    }

    #[test]
    fn test_composite_prompt_without_style() {
        assert_eq!(request().composite_prompt(), "a city time lapse");
    }

    #[test]
    fn test_composite_prompt_appends_style_line() {
        let mut req = request();
        req.style = Some("anime".to_string());
        assert_eq!(req.composite_prompt(), "a city time lapse\nStyle: anime");
    }

    #[test]
    fn test_validate_accepts_in_range_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_short_prompt() {
        let mut req = request();
        req.prompt = "abc".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_fps_defaults_to_24() {
        let req: GenerationRequest = serde_json::from_value(serde_json::json!({
            "prompt": "a city time lapse",
            "durationSeconds": 8,
            "width": 1280,
            "height": 720
        }))
        .unwrap();
        assert_eq!(req.fps, 24);
    }

    #[test]
    fn test_result_serialization_skips_absent_fields() {
        let result = GenerationResult::immediate("https://example.com/v.mp4".to_string());
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["videoUrl"], "https://example.com/v.mp4");
        assert!(value.get("operationId").is_none());
        assert_eq!(value["meta"]["transport"], "immediate");
    }
}
