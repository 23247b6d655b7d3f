use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

// First parenthesized or bracketed annotation whose content starts with a
// known feature marker. The marker must be followed by a non-letter (or the
// closing bracket) so "(Contigo)" is not mistaken for a "con" annotation.
static FEATURE_ANNOTATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s*[(\[]\s*(?:feat\.?|ft\.?|version|vers\.?|remix|with|con)(?:[^\p{L})\]][^)\]]*)?[)\]]")
        .unwrap()
});

/// Remove the first feature annotation from a song title or artist string.
///
/// Matches a parenthetical or bracketed note starting with one of the
/// case-insensitive markers feat./ft./with/con/remix/version/vers. and
/// removes it together with its brackets, then trims surrounding
/// whitespace. Input without such an annotation is returned unchanged.
pub fn strip_feature_annotations(title: &str) -> String {
    FEATURE_ANNOTATION_REGEX.replace(title, "").trim().to_string()
}

/// Remove diacritics, leaving base letters.
///
/// Decomposes to canonical form (NFD) and drops combining marks, so
/// "México" becomes "Mexico". Pure transform with no failure mode.
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Strip scraper metadata lines from a lyrics block.
///
/// Lyrics pasted or scraped from lyric sites often start with header lines
/// like "22 ContributorsLa Vuelta Lyrics". A line is dropped when it begins
/// with a digit and mentions "Contributors", "Lyrics" or "Letra de";
/// ordinary lyric lines that merely start with a number are kept.
pub fn clean_lyrics_metadata(lyrics: &str) -> String {
    let kept: Vec<&str> = lyrics
        .lines()
        .filter(|line| !is_metadata_line(line))
        .collect();

    kept.join("\n").trim().to_string()
}

fn is_metadata_line(line: &str) -> bool {
    let starts_with_digit = line.chars().next().is_some_and(|c| c.is_ascii_digit());
    starts_with_digit
        && (line.contains("Contributors") || line.contains("Lyrics") || line.contains("Letra de"))
}

/// Artist and title of a song as supplied by the caller, used to label the
/// report and to form upstream lookup strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongQuery {
    /// Performing artist
    pub artist: String,

    /// Song title
    pub title: String,
}

impl SongQuery {
    /// Create a query with both fields trimmed.
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into().trim().to_string(),
            title: title.into().trim().to_string(),
        }
    }

    /// Normalized copy for external lookups: feature annotations stripped
    /// from both fields, diacritics removed.
    pub fn normalized(&self) -> Self {
        Self {
            artist: strip_diacritics(&strip_feature_annotations(&self.artist)),
            title: strip_diacritics(&strip_feature_annotations(&self.title)),
        }
    }

    /// Display title with feature annotations removed but accents kept.
    pub fn display_title(&self) -> String {
        strip_feature_annotations(&self.title)
    }
}
