//! Edit classification — turns the alignment script into a positioned,
//! typed list of changes plus an aggregate tally.
//!
//! The walk mirrors the way a token-level diff stream reads left to right:
//! a deleted token immediately followed by inserted tokens is a
//! replacement; a deleted token on its own is a removal; an inserted token
//! on its own is an addition anchored at the current original-sequence
//! position. Position bookkeeping is the delicate part:
//!
//! * `position` starts at 0 and advances by 1 for every token consumed
//!   from the original sequence (Unchanged, Replaced, Removed).
//! * Additions never advance `position`; consecutive additions share the
//!   same anchor.
//!
//! Punctuation-only changes are cosmetic: they stay in the edit list so the
//! corrected sentence can be reconstructed, but they are excluded from the
//! tally and from the printed report.

use crate::diff::align::{OpTag, Opcode};
use crate::diff::tokenize::{is_punctuation_only, strip_punctuation};
use crate::pos::PosTagger;

// ---------------------------------------------------------------------------
// EditKind / ClassifiedEdit / EditTally
// ---------------------------------------------------------------------------

/// The kind of one classified change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Token identical on both sides (kept for reconstruction).
    Unchanged,
    /// One original token replaced by one-or-more corrected tokens.
    Replaced,
    /// Original token absent from the corrected text.
    Removed,
    /// Corrected token absent from the original text.
    Added,
}

/// One classified change between the original and corrected token sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedEdit {
    pub kind: EditKind,
    /// Index into the original token sequence. For `Added` edits this is
    /// the anchor: the original position the token was inserted before.
    pub position: usize,
    /// Original-side text (`Unchanged`, `Replaced`, `Removed`).
    pub old_text: Option<String>,
    /// Corrected-side text (`Unchanged`, `Replaced`, `Added`).
    pub new_text: Option<String>,
    /// Part-of-speech tag, looked up from the first word of the new text
    /// when present, else from the old text. `None` for unchanged and
    /// cosmetic edits — no lookup is spent on them.
    pub pos_tag: Option<String>,
    /// Punctuation-only change: kept in the list for reconstruction but
    /// excluded from the tally and the printed report.
    pub cosmetic: bool,
}

/// Aggregate edit counts, the scoring input.
///
/// `total_original_tokens` is supplied by the caller from the raw original
/// text, not recounted from the aligned sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditTally {
    pub replaced: usize,
    pub removed: usize,
    pub added: usize,
    pub total_original_tokens: usize,
}

// ---------------------------------------------------------------------------
// Flattened change stream
// ---------------------------------------------------------------------------

/// Per-token view of the opcode script, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change<'a> {
    Equal(&'a str),
    Delete(&'a str),
    Insert(&'a str),
}

fn flatten<'a>(old: &[&'a str], new: &[&'a str], script: &[Opcode]) -> Vec<Change<'a>> {
    let mut flat = Vec::new();
    for op in script {
        match op.tag {
            OpTag::Equal => flat.extend(old[op.old.clone()].iter().copied().map(Change::Equal)),
            OpTag::Delete => flat.extend(old[op.old.clone()].iter().copied().map(Change::Delete)),
            OpTag::Insert => flat.extend(new[op.new.clone()].iter().copied().map(Change::Insert)),
        }
    }
    flat
}

// ---------------------------------------------------------------------------
// classify
// ---------------------------------------------------------------------------

/// Walk the edit script and produce the classified edit list plus tally.
///
/// Pure apart from the part-of-speech lookups (one per reported edit);
/// never fails, whatever the input sequences.
///
/// Only a *single*-token deletion merges with the insertions that follow
/// it. In a multi-token delete run followed by insertions, every deleted
/// token except the last is reported as `Removed` and the last one merges
/// with the insertions — the lookahead is one token, by design of the
/// original tool, and is preserved here.
pub fn classify(
    old: &[&str],
    new: &[&str],
    script: &[Opcode],
    tagger: &dyn PosTagger,
    total_original_tokens: usize,
) -> (Vec<ClassifiedEdit>, EditTally) {
    let flat = flatten(old, new, script);

    let mut edits = Vec::new();
    let mut tally = EditTally {
        total_original_tokens,
        ..EditTally::default()
    };

    let mut position = 0usize;
    let mut i = 0usize;

    while i < flat.len() {
        match flat[i] {
            Change::Equal(tok) => {
                edits.push(ClassifiedEdit {
                    kind: EditKind::Unchanged,
                    position,
                    old_text: Some(tok.to_string()),
                    new_text: Some(tok.to_string()),
                    pos_tag: None,
                    cosmetic: false,
                });
                position += 1;
                i += 1;
            }

            Change::Delete(old_tok) => {
                // Replacement: this deleted token directly precedes inserts.
                if matches!(flat.get(i + 1), Some(Change::Insert(_))) {
                    let mut new_words = Vec::new();
                    let mut j = i + 1;
                    while let Some(Change::Insert(w)) = flat.get(j) {
                        new_words.push(*w);
                        j += 1;
                    }
                    let new_text = new_words.join(" ");

                    if strip_punctuation(old_tok) == strip_punctuation(&new_text) {
                        // Cosmetic: same words, only punctuation moved.
                        edits.push(ClassifiedEdit {
                            kind: EditKind::Unchanged,
                            position,
                            old_text: Some(old_tok.to_string()),
                            new_text: Some(new_text),
                            pos_tag: None,
                            cosmetic: true,
                        });
                    } else {
                        let tag = tagger.tag(new_words[0]);
                        tally.replaced += 1;
                        edits.push(ClassifiedEdit {
                            kind: EditKind::Replaced,
                            position,
                            old_text: Some(old_tok.to_string()),
                            new_text: Some(new_text),
                            pos_tag: Some(tag),
                            cosmetic: false,
                        });
                    }
                    position += 1;
                    i = j;
                } else {
                    // Standalone removal.
                    let cosmetic = is_punctuation_only(old_tok);
                    let pos_tag = if cosmetic {
                        None
                    } else {
                        tally.removed += 1;
                        Some(tagger.tag(old_tok))
                    };
                    edits.push(ClassifiedEdit {
                        kind: EditKind::Removed,
                        position,
                        old_text: Some(old_tok.to_string()),
                        new_text: None,
                        pos_tag,
                        cosmetic,
                    });
                    position += 1;
                    i += 1;
                }
            }

            Change::Insert(new_tok) => {
                // Addition anchored before the current original position.
                let cosmetic = is_punctuation_only(new_tok);
                let pos_tag = if cosmetic {
                    None
                } else {
                    tally.added += 1;
                    Some(tagger.tag(new_tok))
                };
                edits.push(ClassifiedEdit {
                    kind: EditKind::Added,
                    position,
                    old_text: None,
                    new_text: Some(new_tok.to_string()),
                    pos_tag,
                    cosmetic,
                });
                i += 1;
            }
        }
    }

    (edits, tally)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::align::align;
    use crate::diff::tokenize::{token_count, tokenize};

    // -----------------------------------------------------------------------
    // Test doubles / helpers
    // -----------------------------------------------------------------------

    /// Tagger that returns a fixed tag for every word.
    struct FixedTagger;

    impl PosTagger for FixedTagger {
        fn tag(&self, _word: &str) -> String {
            "X".to_string()
        }
    }

    fn run(original: &str, corrected: &str) -> (Vec<ClassifiedEdit>, EditTally) {
        let old = tokenize(original);
        let new = tokenize(corrected);
        let script = align(&old, &new);
        classify(&old, &new, &script, &FixedTagger, token_count(original))
    }

    /// Re-apply the edit list to reconstruct the corrected token sequence.
    fn reconstruct(edits: &[ClassifiedEdit]) -> String {
        let mut out: Vec<&str> = Vec::new();
        for edit in edits {
            match edit.kind {
                EditKind::Unchanged | EditKind::Replaced | EditKind::Added => {
                    if let Some(text) = edit.new_text.as_deref() {
                        out.push(text);
                    }
                }
                EditKind::Removed => {}
            }
        }
        out.join(" ")
    }

    fn reported(edits: &[ClassifiedEdit]) -> Vec<&ClassifiedEdit> {
        edits
            .iter()
            .filter(|e| e.kind != EditKind::Unchanged && !e.cosmetic)
            .collect()
    }

    // -----------------------------------------------------------------------
    // End-to-end scenarios
    // -----------------------------------------------------------------------

    #[test]
    fn replacement_and_addition_scenario() {
        let (edits, tally) = run("I is going to market", "I am going to the market");

        let changed = reported(&edits);
        assert_eq!(changed.len(), 2);

        assert_eq!(changed[0].kind, EditKind::Replaced);
        assert_eq!(changed[0].position, 1);
        assert_eq!(changed[0].old_text.as_deref(), Some("is"));
        assert_eq!(changed[0].new_text.as_deref(), Some("am"));

        assert_eq!(changed[1].kind, EditKind::Added);
        assert_eq!(changed[1].position, 4);
        assert_eq!(changed[1].new_text.as_deref(), Some("the"));

        assert_eq!(
            tally,
            EditTally {
                replaced: 1,
                removed: 0,
                added: 1,
                total_original_tokens: 5,
            }
        );
    }

    #[test]
    fn pure_deletion_scenario() {
        let (edits, tally) = run("please just go", "go");

        let changed = reported(&edits);
        assert_eq!(changed.len(), 2);
        assert_eq!(changed[0].kind, EditKind::Removed);
        assert_eq!(changed[0].position, 0);
        assert_eq!(changed[0].old_text.as_deref(), Some("please"));
        assert_eq!(changed[1].kind, EditKind::Removed);
        assert_eq!(changed[1].position, 1);
        assert_eq!(changed[1].old_text.as_deref(), Some("just"));

        assert_eq!(tally.removed, 2);
        assert_eq!(tally.total_original_tokens, 3);
    }

    #[test]
    fn punctuation_only_change_is_cosmetic() {
        let (edits, tally) = run("Hello,", "Hello");

        assert_eq!(tally.replaced + tally.removed + tally.added, 0);
        assert!(reported(&edits).is_empty());

        // Still consumes one original-sequence slot.
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].kind, EditKind::Unchanged);
        assert!(edits[0].cosmetic);
        assert_eq!(edits[0].new_text.as_deref(), Some("Hello"));
    }

    #[test]
    fn identical_inputs_yield_no_changes() {
        let (edits, tally) = run("all good here", "all good here");
        assert!(reported(&edits).is_empty());
        assert_eq!(tally.replaced + tally.removed + tally.added, 0);
        assert!(edits.iter().all(|e| e.kind == EditKind::Unchanged));
    }

    #[test]
    fn both_empty_yields_empty_list() {
        let (edits, tally) = run("", "");
        assert!(edits.is_empty());
        assert_eq!(tally, EditTally::default());
    }

    #[test]
    fn empty_original_is_fully_added() {
        let (edits, tally) = run("", "hello there");
        assert_eq!(edits.len(), 2);
        assert!(edits.iter().all(|e| e.kind == EditKind::Added));
        // All additions share anchor 0.
        assert!(edits.iter().all(|e| e.position == 0));
        assert_eq!(tally.added, 2);
        assert_eq!(tally.total_original_tokens, 0);
    }

    #[test]
    fn empty_corrected_is_fully_removed() {
        let (edits, tally) = run("hello there", "");
        assert_eq!(edits.len(), 2);
        assert!(edits.iter().all(|e| e.kind == EditKind::Removed));
        assert_eq!(edits[0].position, 0);
        assert_eq!(edits[1].position, 1);
        assert_eq!(tally.removed, 2);
    }

    // -----------------------------------------------------------------------
    // Merge behaviour
    // -----------------------------------------------------------------------

    #[test]
    fn consecutive_insertions_merge_into_one_replacement() {
        let (edits, tally) = run("a gonna c", "a going to c");

        let changed = reported(&edits);
        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].kind, EditKind::Replaced);
        assert_eq!(changed[0].old_text.as_deref(), Some("gonna"));
        assert_eq!(changed[0].new_text.as_deref(), Some("going to"));
        assert_eq!(changed[0].position, 1);
        assert_eq!(tally.replaced, 1);
        assert_eq!(tally.added, 0);
    }

    #[test]
    fn only_the_last_deleted_token_merges_with_insertions() {
        // Two deletions then insertions: the first deletion stands alone as
        // Removed, the second merges into a Replaced.
        let (edits, _) = run("x a b y", "x c d y");

        let changed = reported(&edits);
        assert_eq!(changed.len(), 2);
        assert_eq!(changed[0].kind, EditKind::Removed);
        assert_eq!(changed[0].old_text.as_deref(), Some("a"));
        assert_eq!(changed[0].position, 1);
        assert_eq!(changed[1].kind, EditKind::Replaced);
        assert_eq!(changed[1].old_text.as_deref(), Some("b"));
        assert_eq!(changed[1].new_text.as_deref(), Some("c d"));
        assert_eq!(changed[1].position, 2);
    }

    // -----------------------------------------------------------------------
    // Punctuation suppression
    // -----------------------------------------------------------------------

    #[test]
    fn punctuation_only_removal_is_suppressed_but_advances_position() {
        let (edits, tally) = run("wait , stop here", "wait stop there");

        // "," is cosmetic, "here"→"there" is a real replacement at index 3.
        assert_eq!(tally.removed, 0);
        assert_eq!(tally.replaced, 1);

        let changed = reported(&edits);
        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].kind, EditKind::Replaced);
        assert_eq!(changed[0].position, 3);
    }

    #[test]
    fn punctuation_only_insertion_is_suppressed() {
        let (edits, tally) = run("stop here now", "stop here - now");
        assert_eq!(tally.added, 0);
        assert!(reported(&edits).is_empty());

        // The cosmetic addition is still in the list for reconstruction.
        let cosmetic: Vec<_> = edits.iter().filter(|e| e.cosmetic).collect();
        assert_eq!(cosmetic.len(), 1);
        assert_eq!(cosmetic[0].kind, EditKind::Added);
        assert_eq!(cosmetic[0].new_text.as_deref(), Some("-"));
    }

    // -----------------------------------------------------------------------
    // Invariants
    // -----------------------------------------------------------------------

    #[test]
    fn reconstruction_matches_corrected_text() {
        let cases = [
            ("I is going to market", "I am going to the market"),
            ("please just go", "go"),
            ("Hello,", "Hello"),
            ("", "brand new text"),
            ("all gone", ""),
            ("a , b", "a b ."),
            ("x a b y", "x c d y"),
            ("same same", "same same"),
        ];
        for (original, corrected) in cases {
            let (edits, _) = run(original, corrected);
            assert_eq!(
                reconstruct(&edits),
                tokenize(corrected).join(" "),
                "reconstruction failed for {original:?} -> {corrected:?}"
            );
        }
    }

    #[test]
    fn position_is_monotonic_and_advances_per_kind() {
        let (edits, _) = run("a b c d e", "a x c the e extra");
        let mut expected = 0usize;
        for edit in &edits {
            assert_eq!(edit.position, expected, "edit {edit:?}");
            match edit.kind {
                EditKind::Unchanged | EditKind::Replaced | EditKind::Removed => expected += 1,
                EditKind::Added => {}
            }
        }
    }

    #[test]
    fn tally_matches_reported_edit_count() {
        let cases = [
            ("I is going to market", "I am going to the market"),
            ("please just go", "go"),
            ("a , b c", "a b . d"),
            ("", ""),
        ];
        for (original, corrected) in cases {
            let (edits, tally) = run(original, corrected);
            assert_eq!(
                tally.replaced + tally.removed + tally.added,
                reported(&edits).len(),
                "tally mismatch for {original:?} -> {corrected:?}"
            );
        }
    }

    #[test]
    fn cosmetic_and_unchanged_edits_carry_no_pos_tag() {
        let (edits, _) = run("Hello, world", "Hello world");
        assert!(edits.iter().all(|e| e.pos_tag.is_none() || !e.cosmetic));
        assert!(edits
            .iter()
            .filter(|e| e.kind == EditKind::Unchanged)
            .all(|e| e.pos_tag.is_none()));
    }
}
