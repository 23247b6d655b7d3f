use serde::{Deserialize, Serialize};

/// A pair of corresponding lines from the original text and its translation.
///
/// Both sides are trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinePair {
    /// Line from the original-language text
    pub original: String,

    /// Corresponding line from the translated text
    pub translated: String,
}

/// Pair the non-empty lines of two texts by positional index.
///
/// Each input is split on line breaks and trimmed; empty lines are discarded
/// from each side independently before pairing, so a blank line in one text
/// does not reserve a slot. Lines are then paired index-by-index up to the
/// shorter side; surplus lines on the longer side are silently dropped.
///
/// This assumes the translator preserved line breaks 1:1 with the source.
/// When that assumption breaks (merged or split lines), alignment degrades
/// silently from that point on instead of failing.
pub fn align_lines(original_text: &str, translated_text: &str) -> Vec<LinePair> {
    let original_lines: Vec<&str> = original_text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let translated_lines: Vec<&str> = translated_text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let paired = original_lines.len().min(translated_lines.len());
    let mut pairs = Vec::with_capacity(paired);

    for i in 0..paired {
        // Re-check both sides; authoritative even though pre-filtering
        // already guarantees it
        if !original_lines[i].is_empty() && !translated_lines[i].is_empty() {
            pairs.push(LinePair {
                original: original_lines[i].to_string(),
                translated: translated_lines[i].to_string(),
            });
        }
    }

    pairs
}
