/*!
 * # lyriclens
 *
 * A Rust library for bilingual song-lyrics alignment and vocabulary study.
 *
 * ## Features
 *
 * - Pair original and translated lyrics line by line
 * - Detect the source language with a stopword heuristic
 * - Derive a source-to-target word glossary from aligned lines
 * - Clean song titles and scraped lyric text before lookups
 * - Obtain translations through pluggable provider clients
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `text`: Pure text core:
 *   - `text::align`: Positional line alignment
 *   - `text::detect`: Stopword-based language detection
 *   - `text::vocabulary`: Word glossary extraction
 *   - `text::normalize`: Title/artist and lyric cleanup
 * - `pipeline`: Per-request composition of the text core
 * - `translation_service`: Provider selection and translation calls
 * - `providers`: Client implementations for translation services:
 *   - `providers::gtranslate`: Free Google web endpoint client
 *   - `providers::mock`: In-memory mock for tests
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod pipeline;
pub mod providers;
pub mod text;
pub mod translation_service;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, ProviderError, TranslationError};
pub use language_utils::{get_language_name, language_codes_match, normalize_to_part1};
pub use pipeline::{LyricsPipeline, TranslationReport};
pub use text::{
    align_lines, clean_lyrics_metadata, extract_glossary, strip_diacritics,
    strip_feature_annotations, word_translations, LanguageDetector, LanguageProfile, LinePair,
    SongQuery, VocabularyEntry, VocabularyMode, WordTranslation,
};
pub use translation_service::TranslationService;
