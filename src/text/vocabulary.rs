use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::text::align::align_lines;

// Word runs are letter-only, covering accented characters for any
// configured source language
static WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{L}+").unwrap());

/// Maximum number of distinct entries in the deduplicated glossary.
pub const GLOSSARY_CAP: usize = 30;

/// Source words must be longer than this many characters to enter the glossary.
pub const MIN_SOURCE_WORD_CHARS: usize = 2;

/// One deduplicated glossary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// Source-language word, lowercase
    pub source_word: String,

    /// Positionally paired target-language word
    pub target_word: String,
}

/// One per-occurrence word pairing, tagged with its source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTranslation {
    /// Source-language word, lowercase
    pub word: String,

    /// Positionally paired target-language word
    pub translation: String,

    /// Zero-based index of the source line among non-empty lines
    pub line_index: usize,
}

/// Which word-level extraction variant the pipeline emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VocabularyMode {
    /// Deduplicated source-to-target glossary, capped at 30 entries
    #[default]
    Glossary,

    /// Every word pairing, tagged with its source line index, uncapped
    PerOccurrence,
}

/// Lowercased letter-run tokens of a line, in order.
fn words_of(line: &str) -> Vec<String> {
    WORD_REGEX
        .find_iter(&line.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Derive a deduplicated word glossary from two aligned texts.
///
/// Each aligned line is tokenized into letter runs on both sides and the
/// i-th source word is paired with the i-th target word, up to the shorter
/// word count. Source words of 2 characters or fewer are skipped. The first
/// occurrence of a source word wins; the result is capped at the first 30
/// distinct entries in insertion order.
///
/// Pairing is positional, so word-order divergence between the languages
/// (adjective/noun reordering and the like) produces semantically wrong
/// pairs. That is the documented trade-off of this heuristic, not a bug.
pub fn extract_glossary(original_text: &str, translated_text: &str) -> Vec<VocabularyEntry> {
    let mut entries: Vec<VocabularyEntry> = Vec::new();

    'lines: for pair in align_lines(original_text, translated_text) {
        let source_words = words_of(&pair.original);
        let target_words = words_of(&pair.translated);

        for (i, source_word) in source_words.iter().enumerate() {
            if source_word.chars().count() <= MIN_SOURCE_WORD_CHARS {
                continue;
            }
            if entries.iter().any(|e| &e.source_word == source_word) {
                continue;
            }
            if let Some(target_word) = target_words.get(i) {
                entries.push(VocabularyEntry {
                    source_word: source_word.clone(),
                    target_word: target_word.clone(),
                });
                if entries.len() == GLOSSARY_CAP {
                    break 'lines;
                }
            }
        }
    }

    entries
}

/// Emit every positional word pairing from two aligned texts.
///
/// Same per-line positional pairing as [`extract_glossary`], but nothing is
/// deduplicated or capped and there is no word-length filter; each pairing
/// carries the zero-based index of its source line among non-empty lines.
pub fn word_translations(original_text: &str, translated_text: &str) -> Vec<WordTranslation> {
    let mut result = Vec::new();

    for (line_index, pair) in align_lines(original_text, translated_text).iter().enumerate() {
        let source_words = words_of(&pair.original);
        let target_words = words_of(&pair.translated);

        for i in 0..source_words.len().min(target_words.len()) {
            result.push(WordTranslation {
                word: source_words[i].clone(),
                translation: target_words[i].clone(),
                line_index,
            });
        }
    }

    result
}
