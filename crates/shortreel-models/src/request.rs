//! The validated render request.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{BackgroundType, Caption};

/// Gradient applied when a request supplies no colors.
pub const DEFAULT_GRADIENT: [&str; 2] = ["#1a1a2e", "#16213e"];

/// Ordered pair of CSS color strings for the gradient background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GradientColors(pub [String; 2]);

impl Default for GradientColors {
    fn default() -> Self {
        Self([
            DEFAULT_GRADIENT[0].to_string(),
            DEFAULT_GRADIENT[1].to_string(),
        ])
    }
}

impl GradientColors {
    pub fn new(top: impl Into<String>, bottom: impl Into<String>) -> Self {
        Self([top.into(), bottom.into()])
    }
}

/// A single video render request.
///
/// This is the payload of both the direct render call and the HTTP body;
/// wire keys are camelCase. Optional fields take the documented defaults
/// when omitted. The request is validated before the renderer is invoked,
/// never mutated, and discarded once the render finishes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    /// Location of the narration/voice-over audio.
    #[validate(url(message = "audioUrl must be a valid URL"))]
    pub audio_url: String,

    /// Location of the background media asset. Empty when the background
    /// is a gradient.
    #[serde(default)]
    pub background_url: String,

    /// How the background is applied.
    pub background_type: BackgroundType,

    /// Word-level caption timing, in reading order.
    #[serde(default)]
    #[validate(custom(function = validate_caption_timing))]
    pub captions: Vec<Caption>,

    /// Total output length in seconds.
    #[validate(range(exclusive_min = 0.0, message = "durationInSeconds must be positive"))]
    pub duration_in_seconds: f64,

    /// Gradient colors; defaults to the standard dark gradient when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_colors: Option<GradientColors>,

    /// Opaque hook directive consumed by the rendering engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook: Option<String>,

    /// Opaque visual-variation directives consumed by the rendering engine.
    #[serde(default)]
    pub pattern_interrupts: Vec<serde_json::Value>,
}

fn validate_caption_timing(captions: &[Caption]) -> Result<(), ValidationError> {
    for caption in captions {
        if caption.start_time < 0.0 || caption.end_time < caption.start_time {
            return Err(ValidationError::new("caption_timing")
                .with_message("caption times must satisfy 0 <= startTime <= endTime".into()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_body() -> serde_json::Value {
        serde_json::json!({
            "audioUrl": "https://example.com/audio.mp3",
            "backgroundUrl": "",
            "backgroundType": "gradient",
            "durationInSeconds": 5.0
        })
    }

    #[test]
    fn test_optional_fields_default() {
        let request: RenderRequest = serde_json::from_value(minimal_body()).unwrap();

        assert!(request.captions.is_empty());
        assert!(request.gradient_colors.is_none());
        assert!(request.hook.is_none());
        assert!(request.pattern_interrupts.is_empty());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_background_url_defaults_to_empty() {
        let mut body = minimal_body();
        body.as_object_mut().unwrap().remove("backgroundUrl");

        let request: RenderRequest = serde_json::from_value(body).unwrap();
        assert!(request.background_url.is_empty());
    }

    #[test]
    fn test_missing_required_field_fails() {
        let mut body = minimal_body();
        body.as_object_mut().unwrap().remove("audioUrl");

        let result: Result<RenderRequest, _> = serde_json::from_value(body);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_duration_rejected() {
        let mut body = minimal_body();
        body["durationInSeconds"] = serde_json::json!(0.0);

        let request: RenderRequest = serde_json::from_value(body).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_invalid_audio_url_rejected() {
        let mut body = minimal_body();
        body["audioUrl"] = serde_json::json!("not a url");

        let request: RenderRequest = serde_json::from_value(body).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_caption_timing_validated() {
        let mut body = minimal_body();
        body["captions"] = serde_json::json!([
            {"word": "Hello", "startTime": 1.0, "endTime": 0.5}
        ]);

        let request: RenderRequest = serde_json::from_value(body).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_default_gradient_colors() {
        let colors = GradientColors::default();
        assert_eq!(colors.0[0], "#1a1a2e");
        assert_eq!(colors.0[1], "#16213e");
    }
}
