//! Invoker contract tests against fake runtime executables.
//!
//! A small shell script stands in for the JavaScript runtime so the
//! exit-code and output-file contract can be exercised without the real
//! rendering engine installed.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::time::Duration;

use tempfile::TempDir;

use shortreel_engine::{EngineConfig, EngineError, Renderer, VideoRenderer};
use shortreel_models::{BackgroundType, Caption, RenderRequest};

fn sample_request() -> RenderRequest {
    RenderRequest {
        audio_url: "https://example.com/audio.mp3".to_string(),
        background_url: String::new(),
        background_type: BackgroundType::Gradient,
        captions: vec![
            Caption::new("Hello", 0.0, 0.5),
            Caption::new("world", 0.5, 1.0),
        ],
        duration_in_seconds: 5.0,
        gradient_colors: None,
        hook: None,
        pattern_interrupts: Vec::new(),
    }
}

fn setup(timeout_secs: u64) -> (TempDir, EngineConfig) {
    let dir = TempDir::new().unwrap();
    let output_dir = dir.path().join("out");
    std::fs::create_dir_all(&output_dir).unwrap();

    let config = EngineConfig {
        project_dir: dir.path().to_path_buf(),
        project_file: dir.path().join("src/project.ts"),
        driver_path: dir.path().join("render.js"),
        output_dir,
        output_file: "output.mp4".to_string(),
        runtime: dir.path().join("fake-node").to_string_lossy().to_string(),
        timeout: Duration::from_secs(timeout_secs),
    };

    (dir, config)
}

fn install_runtime(config: &EngineConfig, body: String) {
    let path = std::path::Path::new(&config.runtime);
    std::fs::write(path, body).unwrap();
    let mut perms = std::fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).unwrap();
}

#[tokio::test]
async fn test_successful_render_returns_output_bytes() {
    let (_dir, config) = setup(30);
    let output_path = config.output_path();
    install_runtime(
        &config,
        format!(
            "#!/bin/sh\n\
             echo '[render] Starting render...'\n\
             echo '[render] Progress: 40%'\n\
             printf 'MP4DATA' > \"{}\"\n\
             echo '[render] RENDER_COMPLETE'\n\
             exit 0\n",
            output_path.display()
        ),
    );

    let renderer = Renderer::new(config.clone());
    let bytes = renderer.render(sample_request()).await.unwrap();

    assert_eq!(bytes, b"MP4DATA");
    // The returned bytes are exactly the file at the fixed output path.
    assert_eq!(std::fs::read(&output_path).unwrap(), bytes);
    // The driver script was (re)written before the run.
    assert!(config.driver_path.exists());
}

#[tokio::test]
async fn test_nonzero_exit_fails_before_reading_output() {
    let (_dir, config) = setup(30);
    let output_path = config.output_path();
    // The fake renderer produces a file but still exits non-zero; the
    // failure must win over the readable output.
    install_runtime(
        &config,
        format!(
            "#!/bin/sh\n\
             echo 'renderer blew up' >&2\n\
             printf 'MP4DATA' > \"{}\"\n\
             exit 3\n",
            output_path.display()
        ),
    );

    let renderer = Renderer::new(config);
    let err = renderer.render(sample_request()).await.unwrap_err();

    match err {
        EngineError::RenderFailed {
            exit_code, stderr, ..
        } => {
            assert_eq!(exit_code, Some(3));
            assert!(stderr.unwrap().contains("renderer blew up"));
        }
        other => panic!("expected RenderFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_clean_exit_without_output_is_an_error() {
    let (_dir, config) = setup(30);
    install_runtime(
        &config,
        "#!/bin/sh\n\
         echo '[render] RENDER_COMPLETE'\n\
         exit 0\n"
            .to_string(),
    );

    let renderer = Renderer::new(config.clone());
    let err = renderer.render(sample_request()).await.unwrap_err();

    match err {
        EngineError::OutputMissing(path) => assert_eq!(path, config.output_path()),
        other => panic!("expected OutputMissing, got {other:?}"),
    }
}

#[tokio::test]
async fn test_timeout_kills_the_render() {
    let (_dir, config) = setup(1);
    install_runtime(&config, "#!/bin/sh\nsleep 5\n".to_string());

    let renderer = Renderer::new(config);
    let err = renderer.render(sample_request()).await.unwrap_err();

    match err {
        EngineError::Timeout(secs) => assert_eq!(secs, 1),
        other => panic!("expected Timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_runtime_is_a_distinct_error() {
    let (_dir, mut config) = setup(30);
    config.runtime = "shortreel-no-such-runtime".to_string();

    let renderer = Renderer::new(config);
    let err = renderer.render(sample_request()).await.unwrap_err();

    match err {
        EngineError::RuntimeNotFound(name) => {
            assert_eq!(name, "shortreel-no-such-runtime");
        }
        other => panic!("expected RuntimeNotFound, got {other:?}"),
    }
}
