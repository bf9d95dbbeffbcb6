//! Correction pipeline — drives one transcript through correct → explain.
//!
//! [`CorrectionPipeline`] owns the two external collaborators (the
//! [`GrammarCorrector`] and the [`PosTagger`]) as injected dependencies, so
//! the whole flow is testable with fakes. Each request gets fresh,
//! request-scoped data structures; nothing is shared between invocations.
//!
//! # Pipeline flow
//!
//! ```text
//! run(original)
//!   └─▶ corrector.correct(original)       (blocking external call)
//!         ├─ Err → terminal for this request: no classification,
//!         │        no partial output
//!         └─ Ok(corrected) → explain(original, corrected)
//!               └─▶ tokenize → align → classify → score
//! ```
//!
//! `explain` is the pure core: it is total and can be called directly when
//! the corrected text already exists (e.g. in tests or offline replays).

use std::sync::Arc;

use crate::diff::{analyze, ClassifiedEdit, EditTally};
use crate::llm::{GrammarCorrector, LlmError};
use crate::pos::PosTagger;
use crate::score::{score, ScoreBreakdown};

// ---------------------------------------------------------------------------
// CorrectionOutcome
// ---------------------------------------------------------------------------

/// Everything produced for one correction request.
///
/// Created fresh per request and discarded after rendering; nothing is
/// persisted between runs.
#[derive(Debug, Clone)]
pub struct CorrectionOutcome {
    pub original: String,
    pub corrected: String,
    pub edits: Vec<ClassifiedEdit>,
    pub tally: EditTally,
    pub score: ScoreBreakdown,
}

// ---------------------------------------------------------------------------
// CorrectionPipeline
// ---------------------------------------------------------------------------

/// Runs corrections one at a time: LLM call, then diff classification and
/// scoring over the result.
pub struct CorrectionPipeline {
    corrector: Arc<dyn GrammarCorrector>,
    tagger: Arc<dyn PosTagger>,
}

impl CorrectionPipeline {
    /// Create a pipeline from its two collaborators.
    ///
    /// # Arguments
    ///
    /// * `corrector` — LLM client (e.g. `ApiCorrector`).
    /// * `tagger`    — part-of-speech lookup (e.g. `LexiconTagger`).
    pub fn new(corrector: Arc<dyn GrammarCorrector>, tagger: Arc<dyn PosTagger>) -> Self {
        Self { corrector, tagger }
    }

    /// Correct `original` and explain the changes.
    ///
    /// A failed correction call is terminal for this request — the error
    /// propagates and classification never runs.
    pub async fn run(&self, original: &str) -> Result<CorrectionOutcome, LlmError> {
        let corrected = self.corrector.correct(original).await?;
        log::debug!("corrected transcript: {corrected:?}");
        Ok(self.explain(original, &corrected))
    }

    /// The pure core: classify and score an already-corrected transcript.
    ///
    /// Total — never fails, whatever the input pair.
    pub fn explain(&self, original: &str, corrected: &str) -> CorrectionOutcome {
        let (edits, tally) = analyze(original, corrected, self.tagger.as_ref());
        let score = score(&tally);

        CorrectionOutcome {
            original: original.to_string(),
            corrected: corrected.to_string(),
            edits,
            tally,
            score,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::EditKind;
    use async_trait::async_trait;

    // -----------------------------------------------------------------------
    // Test doubles
    // -----------------------------------------------------------------------

    /// Always succeeds with a fixed corrected string.
    struct AlwaysOk(String);

    #[async_trait]
    impl GrammarCorrector for AlwaysOk {
        async fn correct(&self, _text: &str) -> Result<String, LlmError> {
            Ok(self.0.clone())
        }
    }

    /// Always returns the given error.
    struct AlwaysFails;

    #[async_trait]
    impl GrammarCorrector for AlwaysFails {
        async fn correct(&self, _text: &str) -> Result<String, LlmError> {
            Err(LlmError::Timeout)
        }
    }

    /// Fixed-answer tagger.
    struct FixedTagger;

    impl crate::pos::PosTagger for FixedTagger {
        fn tag(&self, _word: &str) -> String {
            "X".to_string()
        }
    }

    fn pipeline(corrector: Arc<dyn GrammarCorrector>) -> CorrectionPipeline {
        CorrectionPipeline::new(corrector, Arc::new(FixedTagger))
    }

    // -----------------------------------------------------------------------
    // Tests
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn run_classifies_and_scores_the_correction() {
        let p = pipeline(Arc::new(AlwaysOk("I am going to the market".into())));
        let outcome = p.run("I is going to market").await.unwrap();

        assert_eq!(outcome.corrected, "I am going to the market");
        assert_eq!(outcome.tally.replaced, 1);
        assert_eq!(outcome.tally.added, 1);
        assert_eq!(outcome.score.total, 87);
    }

    #[tokio::test]
    async fn correction_failure_is_terminal_for_the_request() {
        let p = pipeline(Arc::new(AlwaysFails));
        let result = p.run("anything").await;
        assert!(matches!(result, Err(LlmError::Timeout)));
    }

    #[tokio::test]
    async fn identical_correction_is_a_perfect_score() {
        let p = pipeline(Arc::new(AlwaysOk("nothing wrong here".into())));
        let outcome = p.run("nothing wrong here").await.unwrap();

        assert!(outcome
            .edits
            .iter()
            .all(|e| e.kind == EditKind::Unchanged));
        assert_eq!(outcome.score.total, 100);
    }

    #[test]
    fn explain_is_usable_without_the_llm() {
        let p = pipeline(Arc::new(AlwaysFails));
        let outcome = p.explain("please just go", "go");
        assert_eq!(outcome.tally.removed, 2);
        assert_eq!(outcome.score.total, 80);
    }

    #[test]
    fn explain_handles_empty_inputs() {
        let p = pipeline(Arc::new(AlwaysFails));
        let outcome = p.explain("", "");
        assert!(outcome.edits.is_empty());
        assert_eq!(outcome.score.total, 100);
    }
}
