//! Declarative container image definition.

/// Path of the pre-installed browser binary inside the image.
pub const CHROMIUM_EXECUTABLE: &str = "/usr/bin/chromium";

/// Where the external video project lives inside the image.
pub const RENDER_PROJECT_DIR: &str = "/app/video";

/// OS packages the rendering engine needs: transcoder, browser, fonts, and
/// the chromium shared-library set.
const RENDERER_APT_PACKAGES: &[&str] = &[
    "curl",
    "unzip",
    "ffmpeg",
    "chromium",
    "fonts-liberation",
    "libnss3",
    "libatk1.0-0",
    "libatk-bridge2.0-0",
    "libcups2",
    "libdrm2",
    "libxkbcommon0",
    "libxcomposite1",
    "libxdamage1",
    "libxrandr2",
    "libgbm1",
    "libasound2",
];

/// Builder for a container image definition.
///
/// Sections render in a fixed order (base, packages, provisioning commands,
/// environment, project copy, post-copy commands) so the output is
/// deterministic and diffs cleanly across versions.
#[derive(Debug, Clone)]
pub struct ImageSpec {
    base: String,
    apt_packages: Vec<String>,
    run_commands: Vec<String>,
    env: Vec<(String, String)>,
    copies: Vec<(String, String)>,
    post_copy_commands: Vec<String>,
}

impl ImageSpec {
    /// Start a spec from a base image.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            apt_packages: Vec::new(),
            run_commands: Vec::new(),
            env: Vec::new(),
            copies: Vec::new(),
            post_copy_commands: Vec::new(),
        }
    }

    /// Add OS packages installed in a single apt layer.
    pub fn apt_install<I, S>(mut self, packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.apt_packages.extend(packages.into_iter().map(Into::into));
        self
    }

    /// Add a shell provisioning command.
    pub fn run(mut self, command: impl Into<String>) -> Self {
        self.run_commands.push(command.into());
        self
    }

    /// Pin an environment variable.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Copy a directory from the build context into the image.
    pub fn copy_dir(mut self, src: impl Into<String>, dest: impl Into<String>) -> Self {
        self.copies.push((src.into(), dest.into()));
        self
    }

    /// Add a command that runs after the project copy (dependency install).
    pub fn run_after_copy(mut self, command: impl Into<String>) -> Self {
        self.post_copy_commands.push(command.into());
        self
    }

    /// The canonical image for the rendering engine.
    ///
    /// Browser download is disabled via the two PUPPETEER variables; the
    /// automation layer must use the distribution chromium instead. The
    /// video project's dependencies are installed at build time so renders
    /// start without a network round trip.
    pub fn renderer() -> Self {
        Self::new("debian:bookworm-slim")
            .apt_install(RENDERER_APT_PACKAGES.iter().copied())
            .run("curl -fsSL https://deb.nodesource.com/setup_20.x | bash -")
            .run("apt-get install -y nodejs")
            .run("curl -fsSL https://bun.sh/install | bash")
            .run("ln -s /root/.bun/bin/bun /usr/local/bin/bun")
            .env("PUPPETEER_SKIP_CHROMIUM_DOWNLOAD", "true")
            .env("PUPPETEER_EXECUTABLE_PATH", CHROMIUM_EXECUTABLE)
            .copy_dir("video", RENDER_PROJECT_DIR)
            .run_after_copy(format!("cd {RENDER_PROJECT_DIR} && bun install"))
    }

    /// Build-context ignore rules for the project copy.
    pub fn dockerignore() -> &'static str {
        "node_modules\n.git\n"
    }

    /// Render the Dockerfile text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("FROM {}\n", self.base));

        if !self.apt_packages.is_empty() {
            out.push_str("\nRUN apt-get update && apt-get install -y --no-install-recommends \\\n");
            for package in &self.apt_packages {
                out.push_str(&format!("    {package} \\\n"));
            }
            out.push_str("    && rm -rf /var/lib/apt/lists/*\n");
        }

        for command in &self.run_commands {
            out.push_str(&format!("\nRUN {command}\n"));
        }

        if !self.env.is_empty() {
            out.push('\n');
            for (key, value) in &self.env {
                out.push_str(&format!("ENV {key}={value}\n"));
            }
        }

        for (src, dest) in &self.copies {
            out.push_str(&format!("\nCOPY {src} {dest}\n"));
        }

        for command in &self.post_copy_commands {
            out.push_str(&format!("\nRUN {command}\n"));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_image_contents() {
        let dockerfile = ImageSpec::renderer().render();

        assert!(dockerfile.starts_with("FROM debian:bookworm-slim\n"));
        assert!(dockerfile.contains("ffmpeg"));
        assert!(dockerfile.contains("chromium"));
        assert!(dockerfile.contains("fonts-liberation"));
        assert!(dockerfile.contains("deb.nodesource.com/setup_20.x"));
        assert!(dockerfile.contains("bun.sh/install"));
        assert!(dockerfile.contains("ENV PUPPETEER_SKIP_CHROMIUM_DOWNLOAD=true"));
        assert!(dockerfile.contains("ENV PUPPETEER_EXECUTABLE_PATH=/usr/bin/chromium"));
        assert!(dockerfile.contains("COPY video /app/video"));
        assert!(dockerfile.contains("RUN cd /app/video && bun install"));
    }

    #[test]
    fn test_env_renders_after_provisioning_commands() {
        let dockerfile = ImageSpec::renderer().render();

        let env_pos = dockerfile.find("ENV PUPPETEER_SKIP").unwrap();
        let node_pos = dockerfile.find("setup_20.x").unwrap();
        let copy_pos = dockerfile.find("COPY video").unwrap();

        assert!(node_pos < env_pos);
        assert!(env_pos < copy_pos);
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(ImageSpec::renderer().render(), ImageSpec::renderer().render());
    }

    #[test]
    fn test_dockerignore_excludes_dependencies() {
        let rules = ImageSpec::dockerignore();
        assert!(rules.contains("node_modules"));
        assert!(rules.contains(".git"));
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let dockerfile = ImageSpec::new("alpine:3.20").render();
        assert_eq!(dockerfile, "FROM alpine:3.20\n");
    }
}
