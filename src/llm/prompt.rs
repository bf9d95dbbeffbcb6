//! Prompt builder for grammar correction.
//!
//! [`PromptBuilder`] constructs two kinds of prompts:
//! * **Flat** (`build`) — single string, for Ollama native `/api/generate`.
//! * **Chat** (`build_chat`) — `(system_msg, user_msg)` tuple for any
//!   OpenAI-compatible `/v1/chat/completions` endpoint.
//!
//! The instruction is deliberately narrow: fix grammar, sentence structure
//! and punctuation only, drop filler words, never rephrase or add content,
//! and return the corrected text exactly once with no surrounding prose —
//! the diff downstream depends on the reply being nothing but the sentence.

// ---------------------------------------------------------------------------
// System instruction
// ---------------------------------------------------------------------------

const SYSTEM_INSTRUCTION: &str = "\
You are a grammar correction tool for speech transcripts.
Task: fix ONLY grammar, sentence structure, or punctuation.

Rules:
1. Do NOT change the meaning, rephrase sentences, or add new content.
2. Remove filler words (um, uh, like, you know, etc.).
3. Keep the structure, tone, and context exactly the same.
4. Return the corrected text exactly once — never repeat the output.
5. Reply with ONLY the corrected text. No explanation, no text before or
   after, no 'Corrected:' label.
6. If the text is already correct, return it unchanged.";

// ---------------------------------------------------------------------------
// Few-shot examples
// ---------------------------------------------------------------------------

const FEW_SHOT_EXAMPLES: &str = "
Examples:
Input: \"um I is going to the market tomorrow\"
Output: \"I am going to the market tomorrow.\"

Input: \"she don't like the new schedule you know\"
Output: \"She doesn't like the new schedule.\"

Input: \"the report is ready\"
Output: \"The report is ready.\"
";

// ---------------------------------------------------------------------------
// PromptBuilder
// ---------------------------------------------------------------------------

/// Builds grammar-correction prompts in either flat or chat-message format.
///
/// # Example
/// ```rust
/// use transcript_polish::llm::PromptBuilder;
///
/// let builder = PromptBuilder::new();
/// let (system, user) = builder.build_chat("i is going home");
/// assert!(system.contains("grammar"));
/// assert!(user.contains("i is going home"));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build a **flat** prompt string (suitable for Ollama `/api/generate`).
    ///
    /// Structure (in order):
    /// 1. System instruction
    /// 2. Few-shot examples
    /// 3. Raw transcript + "Corrected:" cue
    pub fn build(&self, raw: &str) -> String {
        let mut prompt = String::with_capacity(1024);
        prompt.push_str(SYSTEM_INSTRUCTION);
        prompt.push_str(FEW_SHOT_EXAMPLES);
        prompt.push_str(&format!("\nCorrect this transcript:\n{}\n\nCorrected:\n", raw));
        prompt
    }

    /// Build a **(system_msg, user_msg)** pair (for OpenAI-compatible APIs).
    pub fn build_chat(&self, raw: &str) -> (String, String) {
        let system_msg = SYSTEM_INSTRUCTION.to_string();

        let mut user_msg = String::with_capacity(512);
        user_msg.push_str(FEW_SHOT_EXAMPLES);
        user_msg.push_str(&format!("\nCorrect this transcript:\n{}\n\nCorrected:\n", raw));

        (system_msg, user_msg)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_instruction_constrains_the_model() {
        let builder = PromptBuilder::new();
        let (system, _) = builder.build_chat("test input");

        assert!(system.contains("grammar"), "must mention grammar");
        assert!(
            system.contains("filler words"),
            "must mention filler word removal"
        );
        assert!(
            system.contains("never repeat"),
            "must forbid repeating the output"
        );
        assert!(
            system.contains("ONLY the corrected text"),
            "must forbid surrounding prose"
        );
    }

    #[test]
    fn user_msg_contains_few_shot_examples_and_raw_text() {
        let builder = PromptBuilder::new();
        let raw = "um I is going home";
        let (_, user) = builder.build_chat(raw);

        assert!(user.contains("Examples:"));
        assert!(user.contains("I am going to the market tomorrow."));
        assert!(user.contains(raw), "user msg must contain the raw transcript");
        assert!(user.contains("Corrected:"), "user msg must end with the cue");
    }

    #[test]
    fn flat_prompt_contains_all_sections() {
        let builder = PromptBuilder::new();
        let prompt = builder.build("she don't like it");

        assert!(prompt.contains("grammar correction tool"));
        assert!(prompt.contains("Examples:"));
        assert!(prompt.contains("she don't like it"));
        assert!(prompt.contains("Corrected:"));
    }
}
