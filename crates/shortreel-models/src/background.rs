//! Background selection for a render.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How the background layer of the output video is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundType {
    /// Two-color vertical gradient, no media asset required
    #[default]
    Gradient,
    /// Looping background video
    Video,
    /// Static background image
    Image,
}

impl BackgroundType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackgroundType::Gradient => "gradient",
            BackgroundType::Video => "video",
            BackgroundType::Image => "image",
        }
    }

    /// Whether this background type expects a media asset URL.
    pub fn requires_asset(&self) -> bool {
        matches!(self, BackgroundType::Video | BackgroundType::Image)
    }
}

impl fmt::Display for BackgroundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BackgroundType {
    type Err = BackgroundTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gradient" => Ok(BackgroundType::Gradient),
            "video" => Ok(BackgroundType::Video),
            "image" => Ok(BackgroundType::Image),
            _ => Err(BackgroundTypeParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown background type: {0}")]
pub struct BackgroundTypeParseError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_is_lowercase() {
        let json = serde_json::to_string(&BackgroundType::Gradient).unwrap();
        assert_eq!(json, "\"gradient\"");

        let parsed: BackgroundType = serde_json::from_str("\"video\"").unwrap();
        assert_eq!(parsed, BackgroundType::Video);
    }

    #[test]
    fn test_unknown_discriminator_rejected() {
        let result: Result<BackgroundType, _> = serde_json::from_str("\"solid\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_requires_asset() {
        assert!(!BackgroundType::Gradient.requires_asset());
        assert!(BackgroundType::Video.requires_asset());
        assert!(BackgroundType::Image.requires_asset());
    }
}
