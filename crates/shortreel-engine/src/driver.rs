//! Generated driver script for the rendering engine.

use std::path::Path;

use tokio::fs;

use crate::config::EngineConfig;
use crate::error::EngineResult;

/// Marker the driver prints on a successful render.
pub const COMPLETION_MARKER: &str = "[render] RENDER_COMPLETE";

/// The generated program bridging a JSON parameter blob to the rendering
/// engine's native call.
///
/// The script expects one JSON-encoded argument object and forwards it to
/// the engine verbatim; optional-field defaults are applied on the Rust
/// side before serialization. The browser runs with sandboxing disabled,
/// required in the constrained container environment. Progress is logged
/// as the highest 10%-rounded percentage reached, never regressing.
#[derive(Debug, Clone)]
pub struct DriverScript {
    source: String,
}

impl DriverScript {
    /// Generate the driver for the given engine paths.
    pub fn generate(config: &EngineConfig) -> Self {
        let project_file = config.project_file.display();
        let out_dir = config.output_dir.display();
        let out_file = &config.output_file;

        let source = format!(
            r#"const {{ renderVideo }} = require('@revideo/renderer');

const params = JSON.parse(process.argv[2]);

let lastLoggedPct = -1;
async function main() {{
    console.log('[render] Starting render...');
    await renderVideo({{
        projectFile: '{project_file}',
        variables: params,
        settings: {{
            outDir: '{out_dir}',
            outFile: '{out_file}',
            logProgress: true,
            progressCallback: (workerId, progress) => {{
                const pct = Math.floor(progress * 10) * 10;
                if (pct > lastLoggedPct) {{
                    lastLoggedPct = pct;
                    console.log('[render] Progress: ' + pct + '%');
                }}
            }},
            puppeteer: {{
                args: [
                    '--no-sandbox',
                    '--disable-setuid-sandbox',
                    '--disable-dev-shm-usage',
                ],
            }},
        }},
    }});
    console.log('{COMPLETION_MARKER}');
}}

main().catch(err => {{
    console.error('[render] ERROR:', err);
    process.exit(1);
}});
"#
        );

        Self { source }
    }

    /// The script text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Write the script to disk, replacing any previous version.
    pub async fn write_to(&self, path: &Path) -> EngineResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }
        fs::write(path, &self.source).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_references_configured_paths() {
        let config = EngineConfig::default();
        let script = DriverScript::generate(&config);

        assert!(script.source().contains("projectFile: '/app/video/src/project.ts'"));
        assert!(script.source().contains("outDir: '/tmp'"));
        assert!(script.source().contains("outFile: 'output.mp4'"));
    }

    #[test]
    fn test_script_parses_single_json_argument() {
        let script = DriverScript::generate(&EngineConfig::default());
        assert!(script.source().contains("JSON.parse(process.argv[2])"));
    }

    #[test]
    fn test_script_disables_browser_sandbox() {
        let script = DriverScript::generate(&EngineConfig::default());

        assert!(script.source().contains("--no-sandbox"));
        assert!(script.source().contains("--disable-setuid-sandbox"));
        assert!(script.source().contains("--disable-dev-shm-usage"));
    }

    #[test]
    fn test_script_emits_completion_marker() {
        let script = DriverScript::generate(&EngineConfig::default());
        assert!(script.source().contains(COMPLETION_MARKER));
    }

    #[test]
    fn test_script_passes_variables_verbatim() {
        // Defaults are applied before serialization; the driver must not
        // re-default fields.
        let script = DriverScript::generate(&EngineConfig::default());

        assert!(script.source().contains("variables: params"));
        assert!(!script.source().contains("params.gradientColors ||"));
    }

    #[tokio::test]
    async fn test_write_is_idempotent_overwrite() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("render.js");

        tokio::fs::write(&path, "stale").await.unwrap();

        let script = DriverScript::generate(&EngineConfig::default());
        script.write_to(&path).await.unwrap();

        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(written, script.source());
    }
}
