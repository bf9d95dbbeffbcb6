//! Configuration module for Transcript Polish.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for the LLM call
//! and terminal output, `AppPaths` for cross-platform config directories,
//! and TOML persistence via `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, LlmConfig, LlmProvider, OutputConfig};
