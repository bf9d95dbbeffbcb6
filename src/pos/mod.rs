//! Part-of-speech lookup for changed words.
//!
//! The classifier only needs a tag string per word, so the lookup is a
//! trait seam: production code uses the offline [`LexiconTagger`], tests
//! substitute fixed-answer doubles. A lookup must never fail — words that
//! cannot be analysed come back as `"UNKNOWN"`.

pub mod lexicon;

pub use lexicon::LexiconTagger;

/// Word-level part-of-speech lookup.
///
/// Implementors must be `Send + Sync` so a tagger can be shared behind
/// `Arc<dyn PosTagger>`.
pub trait PosTagger: Send + Sync {
    /// Return a tag for `word`, or `"UNKNOWN"` when it cannot be analysed
    /// (empty string, unrecognised token). Never fails.
    fn tag(&self, word: &str) -> String;
}
