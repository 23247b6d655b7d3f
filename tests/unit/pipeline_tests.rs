/*!
 * Tests for the lyrics pipeline and report serialization
 */

use lyriclens::pipeline::LyricsPipeline;
use lyriclens::text::detect::{LanguageDetector, LanguageProfile};
use lyriclens::text::vocabulary::VocabularyMode;

use crate::common::{ENGLISH_LYRICS, SPANISH_LYRICS};

/// Test the end-to-end fixture scenario through the pure pipeline
#[test]
fn test_pipeline_process_withFixtureLyrics_shouldAssembleReport() {
    let pipeline = LyricsPipeline::with_defaults();
    let report = pipeline.process(SPANISH_LYRICS, ENGLISH_LYRICS);

    assert_eq!(report.detected_language, "es");
    assert_eq!(report.line_pairs.len(), 2);
    assert_eq!(report.line_pairs[0].original, "Hola mundo");
    assert_eq!(report.line_pairs[0].translated, "Hello world");
    assert_eq!(report.line_pairs[1].original, "Estoy feliz");
    assert_eq!(report.line_pairs[1].translated, "I am happy");

    let vocabulary = report.vocabulary.as_ref().expect("glossary mode is the default");
    let lookup = |word: &str| {
        vocabulary
            .iter()
            .find(|e| e.source_word == word)
            .map(|e| e.target_word.as_str())
    };
    assert_eq!(lookup("hola"), Some("hello"));
    assert_eq!(lookup("mundo"), Some("world"));

    assert!(report.word_translations.is_none());
    assert!(report.audio_url.is_none());
}

/// Test the per-occurrence vocabulary mode
#[test]
fn test_pipeline_process_withPerOccurrenceMode_shouldSwapVocabularyField() {
    let pipeline = LyricsPipeline::new(
        LanguageDetector::with_defaults(),
        VocabularyMode::PerOccurrence,
    );
    let report = pipeline.process(SPANISH_LYRICS, ENGLISH_LYRICS);

    assert!(report.vocabulary.is_none());
    let words = report.word_translations.as_ref().unwrap();
    assert!(!words.is_empty());
    assert_eq!(words[0].word, "hola");
    assert_eq!(words[0].line_index, 0);
}

/// Test that empty input degrades to an empty report
#[test]
fn test_pipeline_process_withEmptyInput_shouldReturnEmptyCollections() {
    let pipeline = LyricsPipeline::with_defaults();
    let report = pipeline.process("", "");

    assert_eq!(report.detected_language, "es");
    assert!(report.line_pairs.is_empty());
    assert_eq!(report.vocabulary.as_ref().map(|v| v.len()), Some(0));
}

/// Test the JSON field names of the serialized report
#[test]
fn test_translationReport_serialization_shouldUseContractFieldNames() {
    let pipeline = LyricsPipeline::with_defaults();
    let report = pipeline.process(SPANISH_LYRICS, ENGLISH_LYRICS);

    let value = serde_json::to_value(&report).unwrap();

    assert!(value.get("original_lyrics").is_some());
    assert!(value.get("translated_lyrics").is_some());
    assert_eq!(value["detected_language"], "es");
    assert_eq!(value["line_pairs"][0]["original"], "Hola mundo");
    assert_eq!(value["line_pairs"][0]["translated"], "Hello world");
    assert_eq!(value["vocabulary"][0]["source_word"], "hola");
    assert_eq!(value["vocabulary"][0]["target_word"], "hello");

    // Unselected variant and absent metadata are omitted entirely
    assert!(value.get("word_translations").is_none());
    assert!(value.get("audio_url").is_none());
    assert!(value.get("artist").is_none());
}

/// Test per-occurrence JSON field names
#[test]
fn test_translationReport_serialization_withPerOccurrenceMode_shouldEmitWordTranslations() {
    let pipeline = LyricsPipeline::new(
        LanguageDetector::new(
            vec![LanguageProfile::spanish(), LanguageProfile::english()],
            "es",
        ),
        VocabularyMode::PerOccurrence,
    );
    let report = pipeline.process("Hola", "Hello");
    let value = serde_json::to_value(&report).unwrap();

    assert!(value.get("vocabulary").is_none());
    assert_eq!(value["word_translations"][0]["word"], "hola");
    assert_eq!(value["word_translations"][0]["translation"], "hello");
    assert_eq!(value["word_translations"][0]["line_index"], 0);
}
