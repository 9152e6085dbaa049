//! Application state.

use std::sync::Arc;

use shortreel_engine::{EngineConfig, Renderer, VideoRenderer};

use crate::config::ApiConfig;

/// Shared application state.
///
/// Immutable after startup; requests share nothing else, so no locking
/// discipline is needed.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub engine: EngineConfig,
    pub renderer: Arc<dyn VideoRenderer>,
}

impl AppState {
    /// Create state backed by the subprocess renderer.
    pub fn new(config: ApiConfig, engine: EngineConfig) -> Self {
        let renderer = Arc::new(Renderer::new(engine.clone()));
        Self {
            config,
            engine,
            renderer,
        }
    }

    /// Create state with a custom renderer (used by tests).
    pub fn with_renderer(
        config: ApiConfig,
        engine: EngineConfig,
        renderer: Arc<dyn VideoRenderer>,
    ) -> Self {
        Self {
            config,
            engine,
            renderer,
        }
    }
}
