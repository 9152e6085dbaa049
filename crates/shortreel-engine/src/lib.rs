//! Render driver generation and subprocess supervision.
//!
//! The actual frame composition, text animation, and MP4 encoding happens in
//! an external browser-based rendering engine. This crate owns the boundary
//! to it: generating the driver script that bridges a JSON parameter blob to
//! the engine's native call, launching that driver as a child process,
//! relaying its output to the host log, and enforcing the exit-code and
//! output-file contract.

pub mod config;
pub mod driver;
pub mod error;
pub mod progress;
pub mod renderer;

pub use config::EngineConfig;
pub use driver::{DriverScript, COMPLETION_MARKER};
pub use error::{EngineError, EngineResult};
pub use progress::{parse_progress_line, ProgressTracker, RenderProgress};
pub use renderer::{Renderer, VideoRenderer};
