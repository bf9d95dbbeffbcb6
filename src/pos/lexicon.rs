//! Offline lexicon-and-suffix part-of-speech tagger.
//!
//! [`LexiconTagger`] covers the closed word classes with static lists and
//! falls back to suffix heuristics for open classes. Tags follow the
//! Universal POS inventory (DET, PRON, AUX, VERB, NOUN, …) so output lines
//! read like those of the usual NLP toolkits.

use crate::pos::PosTagger;

// ---------------------------------------------------------------------------
// Internal types
// ---------------------------------------------------------------------------

struct TagLexicon {
    tag: &'static str,
    words: &'static [&'static str],
}

// ---------------------------------------------------------------------------
// Static word-class definitions
// ---------------------------------------------------------------------------

static LEXICONS: &[TagLexicon] = &[
    TagLexicon {
        tag: "DET",
        words: &[
            "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any",
            "no", "another",
        ],
    },
    TagLexicon {
        tag: "PRON",
        words: &[
            "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my",
            "your", "his", "its", "our", "their", "mine", "yours", "who", "whom", "what", "which",
            "myself", "yourself", "himself", "herself", "itself", "ourselves", "themselves",
        ],
    },
    TagLexicon {
        tag: "AUX",
        words: &[
            "am", "is", "are", "was", "were", "be", "been", "being", "do", "does", "did", "have",
            "has", "had", "will", "would", "shall", "should", "can", "could", "may", "might",
            "must",
        ],
    },
    TagLexicon {
        tag: "ADP",
        words: &[
            "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
            "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
            "of", "off", "over", "under",
        ],
    },
    TagLexicon {
        tag: "CCONJ",
        words: &["and", "but", "or", "nor", "so", "yet"],
    },
    TagLexicon {
        tag: "SCONJ",
        words: &[
            "because", "although", "though", "while", "whereas", "if", "unless", "until", "since",
            "when", "whenever", "where", "wherever", "that", "whether",
        ],
    },
    TagLexicon {
        tag: "PART",
        words: &["not", "n't", "to"],
    },
    TagLexicon {
        tag: "INTJ",
        words: &["um", "uh", "er", "ah", "oh", "hmm", "well", "like", "okay", "yeah", "hey"],
    },
    TagLexicon {
        tag: "ADV",
        words: &[
            "very", "quite", "too", "also", "just", "now", "then", "here", "there", "always",
            "never", "often", "soon", "still", "already", "again", "almost", "really",
        ],
    },
];

// Order matters: the first list containing the word wins, so ambiguous
// words like "to" tag as ADP rather than PART.

// ---------------------------------------------------------------------------
// LexiconTagger
// ---------------------------------------------------------------------------

/// Lexicon-backed tagger with suffix heuristics for open classes.
///
/// Lookup order: punctuation → numeral → closed-class lexicons → suffix
/// heuristics → NOUN for any remaining alphabetic word → `"UNKNOWN"`.
///
/// # Example
/// ```rust
/// use transcript_polish::pos::{LexiconTagger, PosTagger};
///
/// let tagger = LexiconTagger::new();
/// assert_eq!(tagger.tag("the"), "DET");
/// assert_eq!(tagger.tag("quickly"), "ADV");
/// assert_eq!(tagger.tag(""), "UNKNOWN");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconTagger;

impl LexiconTagger {
    pub fn new() -> Self {
        Self
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, word: &str) -> String {
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return "UNKNOWN".to_string();
        }

        if trimmed.chars().all(|c| c.is_ascii_punctuation()) {
            return "PUNCT".to_string();
        }

        // Numerals, including decimals and readings like "140/90".
        if trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '/' | ':' | '%' | '-'))
        {
            return "NUM".to_string();
        }

        let normalized: String = trimmed
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect::<String>()
            .to_lowercase();
        if normalized.is_empty() {
            return "UNKNOWN".to_string();
        }

        for lexicon in LEXICONS {
            if lexicon.words.contains(&normalized.as_str()) {
                return lexicon.tag.to_string();
            }
        }

        // Suffix heuristics for the open classes.
        if normalized.len() > 3 {
            if normalized.ends_with("ly") {
                return "ADV".to_string();
            }
            if normalized.ends_with("ing") || normalized.ends_with("ed") {
                return "VERB".to_string();
            }
            if ["tion", "ment", "ness", "ity", "ship"]
                .iter()
                .any(|s| normalized.ends_with(s))
            {
                return "NOUN".to_string();
            }
            if ["ous", "ful", "able", "ible", "ive", "al", "ic"]
                .iter()
                .any(|s| normalized.ends_with(s))
            {
                return "ADJ".to_string();
            }
        }

        if normalized.chars().all(|c| c.is_alphabetic()) {
            return "NOUN".to_string();
        }

        "UNKNOWN".to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
