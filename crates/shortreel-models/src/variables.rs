//! Resolved variables handed to the render driver.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{BackgroundType, Caption, GradientColors, RenderRequest};

/// The variables object the driver forwards to the rendering engine.
///
/// This is the fully resolved form of [`RenderRequest`]: the two optional
/// fields with documented defaults (gradient colors, pattern interrupts)
/// are filled in here, exactly once. The generated driver passes the object
/// through to the engine verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RenderVariables {
    pub audio_url: String,
    pub background_url: String,
    pub background_type: BackgroundType,
    pub captions: Vec<Caption>,
    pub duration_in_seconds: f64,
    pub gradient_colors: GradientColors,
    /// Forwarded as `null` when absent; the engine treats both the same.
    pub hook: Option<String>,
    pub pattern_interrupts: Vec<serde_json::Value>,
}

impl From<RenderRequest> for RenderVariables {
    fn from(request: RenderRequest) -> Self {
        Self {
            audio_url: request.audio_url,
            background_url: request.background_url,
            background_type: request.background_type,
            captions: request.captions,
            duration_in_seconds: request.duration_in_seconds,
            gradient_colors: request.gradient_colors.unwrap_or_default(),
            hook: request.hook,
            pattern_interrupts: request.pattern_interrupts,
        }
    }
}
