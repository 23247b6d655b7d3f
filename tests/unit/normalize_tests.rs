/*!
 * Tests for title, artist and lyric text normalization
 */

use lyriclens::text::normalize::{
    clean_lyrics_metadata, strip_diacritics, strip_feature_annotations, SongQuery,
};

/// Test removal of a parenthesized feature annotation
#[test]
fn test_stripFeatureAnnotations_withFeatNote_shouldRemoveIt() {
    assert_eq!(
        strip_feature_annotations("Título (feat. Otro Artista)"),
        "Título"
    );
    assert_eq!(strip_feature_annotations("Song (with Someone)"), "Song");
    assert_eq!(strip_feature_annotations("Canción (con Alguien)"), "Canción");
}

/// Test bracketed annotations and marker variants
#[test]
fn test_stripFeatureAnnotations_withBracketsAndVariants_shouldRemoveThem() {
    assert_eq!(strip_feature_annotations("Track [Remix]"), "Track");
    assert_eq!(strip_feature_annotations("Track (Version acústica)"), "Track");
    assert_eq!(strip_feature_annotations("Track (vers. 2)"), "Track");
    assert_eq!(strip_feature_annotations("Track (ft. Someone)"), "Track");
}

/// Test case-insensitivity of the marker list
#[test]
fn test_stripFeatureAnnotations_withUppercaseMarker_shouldStillMatch() {
    assert_eq!(strip_feature_annotations("Track (FEAT. Someone)"), "Track");
    assert_eq!(strip_feature_annotations("Track (Remix)"), "Track");
}

/// Test that only the first annotation is removed
#[test]
fn test_stripFeatureAnnotations_withTwoAnnotations_shouldRemoveFirstOnly() {
    assert_eq!(
        strip_feature_annotations("Song (with Me) (feat. X)"),
        "Song (feat. X)"
    );
}

/// Test that unmatched input is returned unchanged
#[test]
fn test_stripFeatureAnnotations_withoutAnnotation_shouldReturnUnchanged() {
    assert_eq!(strip_feature_annotations("Título"), "Título");
    assert_eq!(
        strip_feature_annotations("Canción (en vivo)"),
        "Canción (en vivo)"
    );
    // "con" must be a marker word, not a prefix of the content
    assert_eq!(strip_feature_annotations("Canta (Contigo)"), "Canta (Contigo)");
    assert_eq!(strip_feature_annotations(""), "");
}

/// Test diacritic stripping
#[test]
fn test_stripDiacritics_withAccentedText_shouldKeepBaseLetters() {
    assert_eq!(strip_diacritics("México"), "Mexico");
    assert_eq!(strip_diacritics("canción"), "cancion");
    assert_eq!(strip_diacritics("déjà vu"), "deja vu");
    assert_eq!(strip_diacritics("plain ascii"), "plain ascii");
}

/// Test scraper metadata line removal
#[test]
fn test_cleanLyricsMetadata_withScrapedHeader_shouldDropIt() {
    let raw = "22 ContributorsLa Vuelta Lyrics\nHola mundo\nEstoy feliz";
    assert_eq!(clean_lyrics_metadata(raw), "Hola mundo\nEstoy feliz");

    let raw = "3 Letra de La Vuelta\nHola mundo";
    assert_eq!(clean_lyrics_metadata(raw), "Hola mundo");
}

/// Test that ordinary digit-leading lyric lines survive
#[test]
fn test_cleanLyricsMetadata_withNumericLyricLine_shouldKeepIt() {
    let raw = "100 gramos de amor\nHola mundo";
    assert_eq!(clean_lyrics_metadata(raw), raw);
}

/// Test that clean lyrics pass through unchanged
#[test]
fn test_cleanLyricsMetadata_withCleanInput_shouldReturnUnchanged() {
    assert_eq!(clean_lyrics_metadata("Hola mundo"), "Hola mundo");
    assert_eq!(clean_lyrics_metadata(""), "");
}

/// Test song query normalization for lookups
#[test]
fn test_songQuery_normalized_shouldStripFeaturesAndDiacritics() {
    let query = SongQuery::new("  Café Tacvba ", "Eres (feat. Alguien)");
    let normalized = query.normalized();

    assert_eq!(normalized.artist, "Cafe Tacvba");
    assert_eq!(normalized.title, "Eres");
    assert_eq!(query.display_title(), "Eres");
}
