//! Shared data models for the shortreel render service.
//!
//! This crate provides Serde-serializable types for:
//! - Word-level caption timing
//! - Background selection and gradient fallbacks
//! - The validated render request
//! - The resolved variables object handed to the render driver

pub mod background;
pub mod caption;
pub mod request;
pub mod variables;

// Re-export common types
pub use background::{BackgroundType, BackgroundTypeParseError};
pub use caption::Caption;
pub use request::{GradientColors, RenderRequest, DEFAULT_GRADIENT};
pub use variables::RenderVariables;
