/*!
 * Lyrics translation pipeline.
 *
 * Composes the core text components into a single pure transform: given an
 * original-language text and its translation, produce the bilingual
 * [`TranslationReport`] the enclosing request handler serializes to JSON.
 * The pipeline holds no state across calls and never fails; empty or
 * signal-free input degrades to empty collections and the default language
 * code.
 */

use serde::{Deserialize, Serialize};

use crate::text::align::{align_lines, LinePair};
use crate::text::detect::LanguageDetector;
use crate::text::vocabulary::{
    extract_glossary, word_translations, VocabularyEntry, VocabularyMode, WordTranslation,
};

/// Bilingual alignment report for one song text.
///
/// This is the output contract consumed by request handlers: its JSON
/// serialization is returned to clients verbatim. Exactly one of
/// `vocabulary` and `word_translations` is present, selected by the
/// pipeline's [`VocabularyMode`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationReport {
    /// Original-language text, as processed
    pub original_lyrics: String,

    /// Translated text
    pub translated_lyrics: String,

    /// Detected language code of the original text
    pub detected_language: String,

    /// Line-level bilingual alignment, in input order
    pub line_pairs: Vec<LinePair>,

    /// Deduplicated word glossary (glossary mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<Vec<VocabularyEntry>>,

    /// Per-occurrence word pairings (per-occurrence mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_translations: Option<Vec<WordTranslation>>,

    /// Normalized artist name, when the caller supplied one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    /// Normalized song title, when the caller supplied one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Preview audio URL passed through from an upstream provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

/// Pure per-request pipeline: detection, alignment and vocabulary
/// extraction over one pair of texts.
#[derive(Debug, Clone)]
pub struct LyricsPipeline {
    detector: LanguageDetector,
    vocabulary_mode: VocabularyMode,
}

impl LyricsPipeline {
    /// Create a pipeline from a detector and a vocabulary variant.
    pub fn new(detector: LanguageDetector, vocabulary_mode: VocabularyMode) -> Self {
        Self {
            detector,
            vocabulary_mode,
        }
    }

    /// Pipeline over the default Spanish/English detector and the glossary
    /// vocabulary variant.
    pub fn with_defaults() -> Self {
        Self::new(LanguageDetector::with_defaults(), VocabularyMode::default())
    }

    /// Classify a text block with this pipeline's detector.
    pub fn detect(&self, text: &str) -> &str {
        self.detector.detect(text)
    }

    /// The configured vocabulary variant.
    pub fn vocabulary_mode(&self) -> VocabularyMode {
        self.vocabulary_mode
    }

    /// Run detection, alignment and vocabulary extraction over one pair of
    /// texts and assemble the report.
    ///
    /// Infallible: malformed input produces valid (possibly empty) output.
    pub fn process(&self, original_text: &str, translated_text: &str) -> TranslationReport {
        let detected_language = self.detector.detect(original_text).to_string();
        let line_pairs = align_lines(original_text, translated_text);

        let (vocabulary, words) = match self.vocabulary_mode {
            VocabularyMode::Glossary => {
                (Some(extract_glossary(original_text, translated_text)), None)
            }
            VocabularyMode::PerOccurrence => {
                (None, Some(word_translations(original_text, translated_text)))
            }
        };

        TranslationReport {
            original_lyrics: original_text.to_string(),
            translated_lyrics: translated_text.to_string(),
            detected_language,
            line_pairs,
            vocabulary,
            word_translations: words,
            artist: None,
            title: None,
            audio_url: None,
        }
    }
}

impl Default for LyricsPipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}
