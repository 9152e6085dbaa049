//! Render invoker.

use std::collections::VecDeque;
use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, info, warn};

use shortreel_models::{RenderRequest, RenderVariables};

use crate::config::EngineConfig;
use crate::driver::DriverScript;
use crate::error::{EngineError, EngineResult};
use crate::progress::{parse_progress_line, ProgressTracker};

/// Trailing stderr lines kept for error reporting.
const STDERR_TAIL_LINES: usize = 40;

/// The render boundary: turn a request into the raw bytes of an MP4.
///
/// Object-safe so the HTTP adapter can be exercised without spawning a
/// real child process.
#[async_trait]
pub trait VideoRenderer: Send + Sync {
    async fn render(&self, request: RenderRequest) -> EngineResult<Vec<u8>>;
}

/// Renders by driving the external engine through a child process.
///
/// Each invocation is independent: the driver script is rewritten, the
/// child runs to completion (or the timeout kills it), and the output file
/// is read back whole. The file is not cleaned up afterwards; the execution
/// environment is assumed single-use.
pub struct Renderer {
    config: EngineConfig,
}

impl Renderer {
    /// Create a renderer over the given engine configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[async_trait]
impl VideoRenderer for Renderer {
    async fn render(&self, request: RenderRequest) -> EngineResult<Vec<u8>> {
        which::which(&self.config.runtime)
            .map_err(|_| EngineError::RuntimeNotFound(self.config.runtime.clone()))?;

        let script = DriverScript::generate(&self.config);
        script.write_to(&self.config.driver_path).await?;

        let variables = RenderVariables::from(request);
        info!(
            duration_s = variables.duration_in_seconds,
            captions = variables.captions.len(),
            pattern_interrupts = variables.pattern_interrupts.len(),
            "Starting video render"
        );
        let params = serde_json::to_string(&variables)?;

        let start = Instant::now();
        let mut child = Command::new(&self.config.runtime)
            .arg(&self.config.driver_path)
            .arg(params)
            .current_dir(&self.config.project_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let stdout = child.stdout.take().expect("stdout not captured");
        let stderr = child.stderr.take().expect("stderr not captured");

        // Relay stdout in real time, collapsing progress lines through the
        // monotonic tracker.
        let stdout_task = tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            let mut tracker = ProgressTracker::new();
            while let Ok(Some(line)) = lines.next_line().await {
                if let Some(event) = parse_progress_line(&line) {
                    if let Some(pct) = tracker.observe(event) {
                        info!(progress_pct = pct, "Render progress");
                    }
                    continue;
                }
                info!(target: "shortreel_engine::driver", "{line}");
            }
            tracker
        });

        // Relay stderr, keeping a bounded tail for error reporting.
        let stderr_task = tokio::spawn(async move {
            let mut lines = BufReader::new(stderr).lines();
            let mut tail: VecDeque<String> = VecDeque::with_capacity(STDERR_TAIL_LINES);
            while let Ok(Some(line)) = lines.next_line().await {
                warn!(target: "shortreel_engine::driver", "{line}");
                if tail.len() == STDERR_TAIL_LINES {
                    tail.pop_front();
                }
                tail.push_back(line);
            }
            tail
        });

        let timeout_secs = self.config.timeout.as_secs();
        let status = match tokio::time::timeout(self.config.timeout, child.wait()).await {
            Ok(result) => result?,
            Err(_) => {
                warn!("Render timed out after {timeout_secs} seconds, killing process");
                let _ = child.kill().await;
                return Err(EngineError::Timeout(timeout_secs));
            }
        };

        let tracker = stdout_task.await.unwrap_or_default();
        let stderr_tail = stderr_task.await.unwrap_or_default();

        if !status.success() {
            let message = match status.code() {
                Some(code) => format!("Render process exited with code {code}"),
                None => "Render process terminated by signal".to_string(),
            };
            let stderr = if stderr_tail.is_empty() {
                None
            } else {
                Some(stderr_tail.into_iter().collect::<Vec<_>>().join("\n"))
            };
            return Err(EngineError::render_failed(message, stderr, status.code()));
        }

        if !tracker.is_complete() {
            debug!("Driver exited 0 without printing its completion marker");
        }

        let output_path = self.config.output_path();
        if !tokio::fs::try_exists(&output_path).await.unwrap_or(false) {
            return Err(EngineError::OutputMissing(output_path));
        }

        let bytes = tokio::fs::read(&output_path).await?;
        info!(
            size_bytes = bytes.len(),
            elapsed_s = start.elapsed().as_secs(),
            "Render complete"
        );
        Ok(bytes)
    }
}
