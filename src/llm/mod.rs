//! LLM correction client — the external collaborator of the diff core.
//!
//! This module provides:
//! * [`GrammarCorrector`] — async trait implemented by corrector backends.
//! * [`ApiCorrector`] — OpenAI-compatible REST API corrector.
//! * [`PromptBuilder`] — builds the grammar-only correction prompts.
//! * [`LlmError`] — error variants for correction calls.
//!
//! A correction failure is terminal for its request: the caller reports it
//! and skips classification entirely (no partial output).
//!
//! # Quick start
//!
//! ```rust,no_run
//! use transcript_polish::config::AppConfig;
//! use transcript_polish::llm::{ApiCorrector, GrammarCorrector};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let corrector = ApiCorrector::from_config(&config.llm);
//!
//!     match corrector.correct("um I is going home").await {
//!         Ok(corrected) => println!("{corrected}"),
//!         Err(e) => eprintln!("no correction available: {e}"),
//!     }
//! }
//! ```

pub mod corrector;
pub mod prompt;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use corrector::{ApiCorrector, GrammarCorrector, LlmError, API_KEY_ENV};
pub use prompt::PromptBuilder;
