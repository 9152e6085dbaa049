//! Engine configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the render engine boundary.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Working directory for the driver process. Module resolution finds
    /// the pre-installed renderer dependency here.
    pub project_dir: PathBuf,
    /// Rendering engine project file passed to the engine.
    pub project_file: PathBuf,
    /// Where the driver script is (re)written before each render.
    pub driver_path: PathBuf,
    /// Directory the encoded output is written to.
    pub output_dir: PathBuf,
    /// Output file name inside `output_dir`.
    pub output_file: String,
    /// JavaScript runtime binary.
    pub runtime: String,
    /// Wall-clock limit for one render.
    pub timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("/app/video"),
            project_file: PathBuf::from("/app/video/src/project.ts"),
            driver_path: PathBuf::from("/app/video/render.js"),
            output_dir: PathBuf::from("/tmp"),
            output_file: "output.mp4".to_string(),
            runtime: "node".to_string(),
            timeout: Duration::from_secs(900),
        }
    }
}

impl EngineConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            project_dir: env_path("RENDER_PROJECT_DIR", defaults.project_dir),
            project_file: env_path("RENDER_PROJECT_FILE", defaults.project_file),
            driver_path: env_path("RENDER_DRIVER_PATH", defaults.driver_path),
            output_dir: env_path("RENDER_OUTPUT_DIR", defaults.output_dir),
            output_file: std::env::var("RENDER_OUTPUT_FILE")
                .unwrap_or(defaults.output_file),
            runtime: std::env::var("RENDER_RUNTIME").unwrap_or(defaults.runtime),
            timeout: Duration::from_secs(
                std::env::var("RENDER_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(900),
            ),
        }
    }

    /// Full path of the encoded output.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }
}

fn env_path(key: &str, default: PathBuf) -> PathBuf {
    std::env::var(key).map(PathBuf::from).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = EngineConfig::default();

        assert_eq!(config.output_path(), PathBuf::from("/tmp/output.mp4"));
        assert_eq!(config.driver_path, PathBuf::from("/app/video/render.js"));
        assert_eq!(config.timeout, Duration::from_secs(900));
    }
}
