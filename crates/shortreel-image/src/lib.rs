//! Container image provisioning for the render environment.
//!
//! The rendering engine runs inside a container carrying a browser binary,
//! an audio/video transcoder, fonts, a JavaScript runtime, and the external
//! video project with its dependencies pre-installed. [`ImageSpec`] declares
//! that image and renders it to a Dockerfile, so the execution environment
//! is a versioned build artifact rather than ambient state. A failed image
//! build blocks every render until redeployed; nothing here runs at request
//! time.

mod spec;

pub use spec::{ImageSpec, CHROMIUM_EXECUTABLE, RENDER_PROJECT_DIR};
