//! Word-level diff core: tokenizer, sequence aligner and edit classifier.
//!
//! Data flow: raw text → [`tokenize`] → [`align`] → [`classify`] →
//! classified edit list + tally. [`analyze`] wires the three stages
//! together for callers that start from plain strings.
//!
//! Everything here is total: no input pair of texts can make it fail.

pub mod align;
pub mod classify;
pub mod tokenize;

pub use align::{align, OpTag, Opcode};
pub use classify::{classify, ClassifiedEdit, EditKind, EditTally};
pub use tokenize::{is_punctuation_only, strip_punctuation, token_count, tokenize};

use crate::pos::PosTagger;

/// Tokenize, align and classify in one step.
///
/// The tally denominator is counted from `original` directly, independent
/// of the alignment.
pub fn analyze(
    original: &str,
    corrected: &str,
    tagger: &dyn PosTagger,
) -> (Vec<ClassifiedEdit>, EditTally) {
    let old = tokenize(original);
    let new = tokenize(corrected);
    let script = align(&old, &new);
    classify(&old, &new, &script, tagger, token_count(original))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
