//! Correction quality scoring.
//!
//! Four sub-scores, each bounded to `[0, 25]`, derive from the edit tally:
//!
//! * **Clarity** — penalised 1.5 points per replacement.
//! * **Fluency** — penalised 1.0 point per addition.
//! * **Brevity** — penalised 1.2 points per removal.
//! * **Accuracy** — scaled down by the overall edit ratio.
//!
//! The total is the floor of the exact (unrounded) sum of the four
//! sub-scores; it lands in `[0, 100]` by construction and is never clamped
//! separately. Sub-scores are rounded to two decimals for display.

use crate::diff::EditTally;

// ---------------------------------------------------------------------------
// ScoreBreakdown
// ---------------------------------------------------------------------------

/// Per-dimension quality scores plus the composite total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// `[0, 25]`, rounded to 2 decimals.
    pub clarity: f64,
    /// `[0, 25]`, rounded to 2 decimals.
    pub fluency: f64,
    /// `[0, 25]`, rounded to 2 decimals.
    pub brevity: f64,
    /// `[0, 25]`, rounded to 2 decimals.
    pub accuracy: f64,
    /// `[0, 100]`, floor of the exact sum of the four sub-scores.
    pub total: u32,
}

// ---------------------------------------------------------------------------
// score
// ---------------------------------------------------------------------------

/// Derive the score breakdown from an edit tally. Total function — an
/// empty original (zero tokens) scores a perfect 100.
pub fn score(tally: &EditTally) -> ScoreBreakdown {
    if tally.total_original_tokens == 0 {
        return ScoreBreakdown {
            clarity: 25.0,
            fluency: 25.0,
            brevity: 25.0,
            accuracy: 25.0,
            total: 100,
        };
    }

    let clarity_deduction = (tally.replaced as f64 * 1.5).min(25.0);
    let fluency_deduction = (tally.added as f64 * 1.0).min(25.0);
    let brevity_deduction = (tally.removed as f64 * 1.2).min(25.0);

    let edit_count = (tally.replaced + tally.removed + tally.added) as f64;
    let edit_ratio = edit_count / tally.total_original_tokens as f64;

    let clarity = (25.0 - clarity_deduction).max(0.0);
    let fluency = (25.0 - fluency_deduction).max(0.0);
    let brevity = (25.0 - brevity_deduction).max(0.0);
    let accuracy = (25.0 - edit_ratio * 25.0).max(0.0);

    let total = (clarity + fluency + brevity + accuracy).floor() as u32;

    ScoreBreakdown {
        clarity: round2(clarity),
        fluency: round2(fluency),
        brevity: round2(brevity),
        accuracy: round2(accuracy),
        total,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
