/*!
 * Tests for language utility functions
 */

use lyriclens::language_utils::{get_language_name, language_codes_match, normalize_to_part1};

/// Test normalization of language codes to ISO 639-1 format
#[test]
fn test_normalize_to_part1_withValidCodes_shouldNormalizeCorrectly() {
    assert_eq!(normalize_to_part1("es").unwrap(), "es");
    assert_eq!(normalize_to_part1("spa").unwrap(), "es");
    assert_eq!(normalize_to_part1("eng").unwrap(), "en");

    // Case insensitivity
    assert_eq!(normalize_to_part1("ES").unwrap(), "es");
    assert_eq!(normalize_to_part1("ENG").unwrap(), "en");

    // Region subtags
    assert_eq!(normalize_to_part1("en-US").unwrap(), "en");
    assert_eq!(normalize_to_part1("pt_BR").unwrap(), "pt");

    // Whitespace
    assert_eq!(normalize_to_part1(" es ").unwrap(), "es");
}

/// Test rejection of invalid codes
#[test]
fn test_normalize_to_part1_withInvalidCodes_shouldError() {
    assert!(normalize_to_part1("xy").is_err());
    assert!(normalize_to_part1("123").is_err());
    assert!(normalize_to_part1("e").is_err());
    assert!(normalize_to_part1("").is_err());
}

/// Test matching of different language code formats
#[test]
fn test_language_codes_match_withMatchingCodes_shouldReturnTrue() {
    assert!(language_codes_match("es", "spa"));
    assert!(language_codes_match("spa", "es"));
    assert!(language_codes_match("en", "eng"));
    assert!(language_codes_match("EN", "en-US"));

    // Non-matches
    assert!(!language_codes_match("es", "en"));
    assert!(!language_codes_match("es", "invalid"));
}

/// Test retrieval of language names from codes
#[test]
fn test_get_language_name_withValidCodes_shouldReturnCorrectName() {
    assert_eq!(get_language_name("es").unwrap(), "Spanish");
    assert_eq!(get_language_name("spa").unwrap(), "Spanish");
    assert_eq!(get_language_name("en").unwrap(), "English");
    assert_eq!(get_language_name("fr").unwrap(), "French");

    // Invalid codes
    assert!(get_language_name("xyz").is_err());
}
