use anyhow::{anyhow, Result};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// The service standardizes on lowercase ISO 639-1 (2-letter) codes, the
/// format detection profiles and translation endpoints use. These helpers
/// accept 2-letter codes, 3-letter ISO 639-3 codes, and region-tagged forms
/// like "en-US", and normalize them all onto the 2-letter form.
/// Normalize a language code to lowercase ISO 639-1 (2-letter) format
pub fn normalize_to_part1(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    // Drop a region subtag ("en-US" -> "en")
    let base = normalized_code
        .split(['-', '_'])
        .next()
        .unwrap_or(&normalized_code);

    // Already a 2-letter code
    if base.len() == 2 {
        if Language::from_639_1(base).is_some() {
            return Ok(base.to_string());
        }
    }
    // 3-letter code: convert if a 2-letter form exists
    else if base.len() == 3 {
        if let Some(lang) = Language::from_639_3(base) {
            if let Some(code_639_1) = lang.to_639_1() {
                return Ok(code_639_1.to_string());
            }
            return Err(anyhow!("No two-letter form for language code: {}", code));
        }
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Check if two language codes match (represent the same language)
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    let normalized1 = match normalize_to_part1(code1) {
        Ok(n) => n,
        Err(_) => return false,
    };

    let normalized2 = match normalize_to_part1(code2) {
        Ok(n) => n,
        Err(_) => return false,
    };

    normalized1 == normalized2
}

/// Get the language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = normalize_to_part1(code)?;
    let lang = Language::from_639_1(&normalized)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", normalized))?;

    Ok(lang.to_name().to_string())
}
