//! Transcript Polish — LLM grammar correction with an explainable diff.
//!
//! The crate sends a raw transcript to an OpenAI-compatible LLM endpoint for
//! grammar correction, then explains what changed:
//!
//! * [`diff`] — word-level alignment and edit classification
//!   (Replaced / Removed / Added, with original-sequence positions).
//! * [`pos`] — part-of-speech lookup for changed words.
//! * [`score`] — composite 0–100 quality score derived from edit counts.
//! * [`report`] — change report lines and a highlighted sentence.
//! * [`llm`] — the correction client (external collaborator).
//! * [`pipeline`] — glues the stages together, one request at a time.
//!
//! The diff / classification / scoring core is pure and total: it never
//! fails for any pair of token sequences, including empty ones.
//!
//! # Quick start
//!
//! ```rust
//! use transcript_polish::diff::analyze;
//! use transcript_polish::pos::LexiconTagger;
//! use transcript_polish::report::Presenter;
//! use transcript_polish::score::score;
//!
//! let tagger = LexiconTagger::new();
//! let (edits, tally) = analyze("I is going to market", "I am going to the market", &tagger);
//!
//! let breakdown = score(&tally);
//! assert_eq!(breakdown.total, 87);
//!
//! let presenter = Presenter::new(false);
//! for line in presenter.edit_lines(&edits) {
//!     println!("{line}");
//! }
//! println!("{}", presenter.highlight(&edits));
//! ```

pub mod config;
pub mod diff;
pub mod llm;
pub mod pipeline;
pub mod pos;
pub mod report;
pub mod score;
