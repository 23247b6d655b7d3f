/*!
 * Text processing core: alignment, language detection, vocabulary and
 * normalization.
 *
 * Everything in this module tree is a pure, synchronous transform over
 * in-memory strings. No I/O, no shared state, no failure modes beyond
 * returning empty output for empty input:
 *
 * - `align`: positional line pairing between an original text and its
 *   translation
 * - `detect`: stopword-based language detection
 * - `vocabulary`: word-level glossary extraction from aligned lines
 * - `normalize`: title/artist cleanup and lyric metadata stripping
 */

pub mod align;
pub mod detect;
pub mod normalize;
pub mod vocabulary;

// Re-export main types
pub use align::{align_lines, LinePair};
pub use detect::{LanguageDetector, LanguageProfile};
pub use normalize::{clean_lyrics_metadata, strip_diacritics, strip_feature_annotations, SongQuery};
pub use vocabulary::{extract_glossary, word_translations, VocabularyEntry, VocabularyMode, WordTranslation};
