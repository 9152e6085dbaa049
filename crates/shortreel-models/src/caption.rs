//! Word-level caption timing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One timed word of the on-screen caption track.
///
/// Times are offsets in seconds into the audio track. Caption sequences are
/// kept in insertion order, which is reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Caption {
    /// The displayed word
    pub word: String,

    /// When the word starts, seconds into the audio
    pub start_time: f64,

    /// When the word ends, seconds into the audio
    pub end_time: f64,
}

impl Caption {
    pub fn new(word: impl Into<String>, start_time: f64, end_time: f64) -> Self {
        Self {
            word: word.into(),
            start_time,
            end_time,
        }
    }

    /// How long the word stays on screen.
    pub fn duration(&self) -> f64 {
        (self.end_time - self.start_time).max(0.0)
    }
}
