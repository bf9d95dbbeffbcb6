//! Token-sequence alignment.
//!
//! [`align`] computes a minimal edit script between two token sequences
//! using the `similar` crate (Myers diff). The script surfaces exactly
//! three opcode kinds — equal, delete, insert — with `similar`'s combined
//! `Replace` ops split into a delete-run followed by an insert-run, so the
//! classifier sees deletions before the insertions that displace them.

use std::ops::Range;

use similar::{capture_diff_slices, Algorithm, DiffOp};

// ---------------------------------------------------------------------------
// Opcode
// ---------------------------------------------------------------------------

/// The kind of one alignment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpTag {
    /// Tokens identical on both sides.
    Equal,
    /// Tokens present only in the original sequence.
    Delete,
    /// Tokens present only in the corrected sequence.
    Insert,
}

/// One run of the edit script.
///
/// `old` indexes the original token sequence, `new` the corrected one.
/// For `Equal` both ranges have the same length; for `Delete` the `new`
/// range is empty; for `Insert` the `old` range is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opcode {
    pub tag: OpTag,
    pub old: Range<usize>,
    pub new: Range<usize>,
}

// ---------------------------------------------------------------------------
// align
// ---------------------------------------------------------------------------

/// Compute the edit script transforming `old` into `new`.
///
/// Accepts any two token sequences, including empty ones, and never fails.
/// The alignment is deterministic: Myers diff with deletions emitted before
/// insertions at each divergence point.
pub fn align(old: &[&str], new: &[&str]) -> Vec<Opcode> {
    let mut script = Vec::new();

    for op in capture_diff_slices(Algorithm::Myers, old, new) {
        match op {
            DiffOp::Equal {
                old_index,
                new_index,
                len,
            } => script.push(Opcode {
                tag: OpTag::Equal,
                old: old_index..old_index + len,
                new: new_index..new_index + len,
            }),
            DiffOp::Delete {
                old_index,
                old_len,
                new_index,
            } => script.push(Opcode {
                tag: OpTag::Delete,
                old: old_index..old_index + old_len,
                new: new_index..new_index,
            }),
            DiffOp::Insert {
                old_index,
                new_index,
                new_len,
            } => script.push(Opcode {
                tag: OpTag::Insert,
                old: old_index..old_index,
                new: new_index..new_index + new_len,
            }),
            // A replace is a deletion and an insertion at the same point.
            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => {
                script.push(Opcode {
                    tag: OpTag::Delete,
                    old: old_index..old_index + old_len,
                    new: new_index..new_index,
                });
                script.push(Opcode {
                    tag: OpTag::Insert,
                    old: old_index + old_len..old_index + old_len,
                    new: new_index..new_index + new_len,
                });
            }
        }
    }

    script
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(script: &[Opcode]) -> Vec<OpTag> {
        script.iter().map(|op| op.tag).collect()
    }

    #[test]
    fn identical_sequences_yield_single_equal_run() {
        let toks = ["a", "b", "c"];
        let script = align(&toks, &toks);
        assert_eq!(tags(&script), vec![OpTag::Equal]);
        assert_eq!(script[0].old, 0..3);
        assert_eq!(script[0].new, 0..3);
    }

    #[test]
    fn both_empty_yields_empty_script() {
        assert!(align(&[], &[]).is_empty());
    }

    #[test]
    fn empty_original_is_pure_insertion() {
        let script = align(&[], &["x", "y"]);
        assert_eq!(tags(&script), vec![OpTag::Insert]);
        assert_eq!(script[0].new, 0..2);
    }

    #[test]
    fn empty_corrected_is_pure_deletion() {
        let script = align(&["x", "y"], &[]);
        assert_eq!(tags(&script), vec![OpTag::Delete]);
        assert_eq!(script[0].old, 0..2);
    }

    #[test]
    fn substitution_splits_into_delete_then_insert() {
        let script = align(&["a", "b", "c"], &["a", "x", "c"]);
        assert_eq!(
            tags(&script),
            vec![OpTag::Equal, OpTag::Delete, OpTag::Insert, OpTag::Equal]
        );
        assert_eq!(script[1].old, 1..2);
        assert_eq!(script[2].new, 1..2);
    }

    #[test]
    fn no_common_tokens() {
        let script = align(&["a", "b"], &["x", "y"]);
        // One delete run then one insert run covering everything.
        assert_eq!(tags(&script), vec![OpTag::Delete, OpTag::Insert]);
        assert_eq!(script[0].old, 0..2);
        assert_eq!(script[1].new, 0..2);
    }

    #[test]
    fn alignment_is_deterministic() {
        let old = ["I", "is", "going", "to", "market"];
        let new = ["I", "am", "going", "to", "the", "market"];
        let a = align(&old, &new);
        let b = align(&old, &new);
        assert_eq!(a, b);
    }
}
