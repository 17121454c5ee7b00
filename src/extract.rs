use serde_json::Value;

/// Pulls a video URL out of an upstream response body, trying the known
/// shapes in a fixed order. Both the immediate submission path and the
/// operation-done path go through this same function.
///
/// Shapes, in order:
/// - top-level string `videoUrl`
/// - top-level string `uri` with an http(s) scheme
/// - `video.uri`
/// - `result.videoUrl`
/// - `result.video.uri`
/// - first `media` array entry with `type == "video"` (case-insensitive)
///   and a string `uri`
pub fn extract_video_url(value: &Value) -> Option<String> {
    if !value.is_object() {
        return None;
    }

    if let Some(url) = value["videoUrl"].as_str() {
        return Some(url.to_string());
    }
    if let Some(uri) = value["uri"].as_str() {
        if uri.starts_with("http") {
            return Some(uri.to_string());
        }
    }
    if let Some(uri) = value["video"]["uri"].as_str() {
        return Some(uri.to_string());
    }
    if let Some(url) = value["result"]["videoUrl"].as_str() {
        return Some(url.to_string());
    }
    if let Some(uri) = value["result"]["video"]["uri"].as_str() {
        return Some(uri.to_string());
    }
    if let Some(media) = value["media"].as_array() {
        let hit = media.iter().find(|entry| {
            entry["type"]
                .as_str()
                .is_some_and(|t| t.eq_ignore_ascii_case("video"))
                && entry["uri"].is_string()
        });
        if let Some(entry) = hit {
            return entry["uri"].as_str().map(|s| s.to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_top_level_video_url_wins_over_everything() {
        let value = json!({
            "videoUrl": "https://example.com/a.mp4",
            "uri": "https://example.com/b.mp4",
            "result": { "videoUrl": "https://example.com/c.mp4" },
            "unrelated": 42
        });
        assert_eq!(
            extract_video_url(&value),
            Some("https://example.com/a.mp4".to_string())
        );
    }

    #[test]
    fn test_top_level_uri_requires_http_scheme() {
        let value = json!({ "uri": "gs://bucket/video.mp4" });
        assert_eq!(extract_video_url(&value), None);

        let value = json!({ "uri": "https://example.com/v.mp4" });
        assert_eq!(
            extract_video_url(&value),
            Some("https://example.com/v.mp4".to_string())
        );
    }

    #[test]
    fn test_nested_video_uri() {
        let value = json!({ "video": { "uri": "https://example.com/v.mp4" } });
        assert_eq!(
            extract_video_url(&value),
            Some("https://example.com/v.mp4".to_string())
        );
    }

    #[test]
    fn test_result_shapes() {
        let value = json!({ "result": { "videoUrl": "https://example.com/r.mp4" } });
        assert_eq!(
            extract_video_url(&value),
            Some("https://example.com/r.mp4".to_string())
        );

        let value = json!({ "result": { "video": { "uri": "https://example.com/rv.mp4" } } });
        assert_eq!(
            extract_video_url(&value),
            Some("https://example.com/rv.mp4".to_string())
        );
    }

    #[test]
    fn test_media_array_first_video_entry_wins() {
        let value = json!({
            "media": [
                { "type": "image", "uri": "https://example.com/thumb.png" },
                { "type": "VIDEO", "uri": "https://example.com/one.mp4" },
                { "type": "video", "uri": "https://example.com/two.mp4" }
            ]
        });
        assert_eq!(
            extract_video_url(&value),
            Some("https://example.com/one.mp4".to_string())
        );
    }

    #[test]
    fn test_media_entry_without_string_uri_is_skipped() {
        let value = json!({
            "media": [
                { "type": "video", "uri": 17 },
                { "type": "video", "uri": "https://example.com/ok.mp4" }
            ]
        });
        assert_eq!(
            extract_video_url(&value),
            Some("https://example.com/ok.mp4".to_string())
        );
    }

    #[test]
    fn test_non_object_inputs() {
        assert_eq!(extract_video_url(&json!(null)), None);
        assert_eq!(extract_video_url(&json!("https://example.com/v.mp4")), None);
        assert_eq!(extract_video_url(&json!([1, 2, 3])), None);
    }

    #[test]
    fn test_no_matching_shape() {
        let value = json!({ "status": "done", "progress": 100 });
        assert_eq!(extract_video_url(&value), None);
    }
}
