//! Manual render entry point.
//!
//! Runs one render against the local engine installation, either from a
//! `RenderRequest` JSON file passed as the first argument or from a
//! built-in sample request, and reports the output size.

use anyhow::Context;
use tracing::info;

use shortreel_engine::{EngineConfig, Renderer, VideoRenderer};
use shortreel_models::{BackgroundType, Caption, RenderRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let request = match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading request file {path}"))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing request file {path}"))?
        }
        None => sample_request(),
    };

    let config = EngineConfig::from_env();
    info!(
        project_dir = %config.project_dir.display(),
        output = %config.output_path().display(),
        "Rendering"
    );

    let renderer = Renderer::new(config);
    let bytes = renderer.render(request).await?;
    info!("Rendered {} bytes", bytes.len());
    Ok(())
}

fn sample_request() -> RenderRequest {
    RenderRequest {
        audio_url: "https://assets.example.com/render-assets/sample/audio.mp3".to_string(),
        background_url: String::new(),
        background_type: BackgroundType::Gradient,
        captions: vec![
            Caption::new("Hello", 0.0, 0.5),
            Caption::new("world", 0.5, 1.0),
            Caption::new("this", 1.0, 1.3),
            Caption::new("is", 1.3, 1.5),
            Caption::new("a", 1.5, 1.6),
            Caption::new("test", 1.6, 2.0),
        ],
        duration_in_seconds: 5.0,
        gradient_colors: None,
        hook: None,
        pattern_interrupts: Vec::new(),
    }
}
