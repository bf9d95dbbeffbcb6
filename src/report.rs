//! Rendering of classified edits and scores for the terminal.
//!
//! [`Presenter`] produces three things from one correction outcome:
//!
//! * a line-oriented change report (one line per reported edit),
//! * a single highlighted sentence reconstructing the corrected text with
//!   the changes marked inline,
//! * a score summary.
//!
//! Styling goes through the `colored` crate when enabled; with colour off
//! the same information is carried by plain ASCII markers, which keeps the
//! output deterministic for tests and for piping into files.

use colored::Colorize;

use crate::diff::{ClassifiedEdit, EditKind};
use crate::score::ScoreBreakdown;

// ---------------------------------------------------------------------------
// Presenter
// ---------------------------------------------------------------------------

/// Renders edits and scores as text.
///
/// # Example
/// ```rust
/// use transcript_polish::diff::analyze;
/// use transcript_polish::pos::LexiconTagger;
/// use transcript_polish::report::Presenter;
///
/// let (edits, _) = analyze("I is here", "I am here", &LexiconTagger::new());
/// let presenter = Presenter::new(false);
/// assert_eq!(presenter.highlight(&edits), "I [is -> am] here");
/// ```
pub struct Presenter {
    use_color: bool,
}

impl Presenter {
    /// Create a presenter. With `use_color` off, changes are marked with
    /// plain ASCII brackets instead of ANSI styling.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    // -----------------------------------------------------------------------
    // Change report
    // -----------------------------------------------------------------------

    /// One line per reported (non-unchanged, non-cosmetic) edit: kind,
    /// original-sequence index, POS tag and the change itself.
    ///
    /// An all-unchanged edit list yields an empty report.
    pub fn edit_lines(&self, edits: &[ClassifiedEdit]) -> Vec<String> {
        edits
            .iter()
            .filter(|e| e.kind != EditKind::Unchanged && !e.cosmetic)
            .map(|e| self.edit_line(e))
            .collect()
    }

    fn edit_line(&self, edit: &ClassifiedEdit) -> String {
        let pos_tag = edit.pos_tag.as_deref().unwrap_or("UNKNOWN");
        let old = edit.old_text.as_deref().unwrap_or_default();
        let new = edit.new_text.as_deref().unwrap_or_default();

        match edit.kind {
            EditKind::Replaced => format!(
                "{} | index {} | POS: {} | '{}' -> '{}'",
                self.label("Replaced"),
                edit.position,
                pos_tag,
                self.old_fragment(old),
                self.new_fragment(new),
            ),
            EditKind::Removed => format!(
                "{}  | index {} | POS: {} | '{}'",
                self.label("Removed"),
                edit.position,
                pos_tag,
                self.old_fragment(old),
            ),
            EditKind::Added => format!(
                "{}    | index {} | POS: {} | '{}'",
                self.label("Added"),
                edit.position,
                pos_tag,
                self.new_fragment(new),
            ),
            // Filtered out above.
            EditKind::Unchanged => String::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Highlighted sentence
    // -----------------------------------------------------------------------

    /// Reconstruct the corrected sentence with changes marked inline.
    ///
    /// Unchanged tokens print verbatim; replacements and additions are
    /// styled (or bracketed); removed words are shown struck out at the
    /// point they disappeared from. Cosmetic additions print unmarked and
    /// cosmetic removals are omitted, so an input with only punctuation
    /// shuffling renders without any markers.
    pub fn highlight(&self, edits: &[ClassifiedEdit]) -> String {
        let mut parts: Vec<String> = Vec::new();

        for edit in edits {
            let old = edit.old_text.as_deref().unwrap_or_default();
            let new = edit.new_text.as_deref().unwrap_or_default();

            match edit.kind {
                EditKind::Unchanged => parts.push(new.to_string()),
                EditKind::Replaced => parts.push(if self.use_color {
                    format!("{} {}", old.red().strikethrough(), new.green().bold())
                } else {
                    format!("[{old} -> {new}]")
                }),
                EditKind::Removed => {
                    if edit.cosmetic {
                        continue;
                    }
                    parts.push(if self.use_color {
                        old.red().strikethrough().to_string()
                    } else {
                        format!("[-{old}]")
                    });
                }
                EditKind::Added => {
                    if edit.cosmetic {
                        parts.push(new.to_string());
                    } else {
                        parts.push(if self.use_color {
                            new.green().bold().to_string()
                        } else {
                            format!("[+{new}]")
                        });
                    }
                }
            }
        }

        parts.join(" ")
    }

    // -----------------------------------------------------------------------
    // Score summary
    // -----------------------------------------------------------------------

    /// Breakdown lines followed by the composite total.
    pub fn score_lines(&self, breakdown: &ScoreBreakdown) -> Vec<String> {
        vec![
            format!("Clarity:  {:>6.2} / 25", breakdown.clarity),
            format!("Fluency:  {:>6.2} / 25", breakdown.fluency),
            format!("Brevity:  {:>6.2} / 25", breakdown.brevity),
            format!("Accuracy: {:>6.2} / 25", breakdown.accuracy),
            format!("Total:    {:>4} / 100", breakdown.total),
        ]
    }

    // -----------------------------------------------------------------------
    // Styling helpers
    // -----------------------------------------------------------------------

    fn label(&self, text: &str) -> String {
        if self.use_color {
            match text {
                "Replaced" => text.yellow().bold().to_string(),
                "Removed" => text.red().bold().to_string(),
                "Added" => text.green().bold().to_string(),
                _ => text.to_string(),
            }
        } else {
            text.to_string()
        }
    }

    fn old_fragment(&self, text: &str) -> String {
        if self.use_color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    fn new_fragment(&self, text: &str) -> String {
        if self.use_color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
