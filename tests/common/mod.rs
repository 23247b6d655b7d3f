/*!
 * Common test utilities for the lyriclens test suite
 */

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use lyriclens::providers::mock::MockProvider;
use lyriclens::providers::TranslationRequest;

/// Spanish lyric fixture used across the suite
pub const SPANISH_LYRICS: &str = "Hola mundo\nEstoy feliz";

/// Line-for-line translation of [`SPANISH_LYRICS`]
pub const ENGLISH_LYRICS: &str = "Hello world\nI am happy";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample lyric text file for testing
pub fn create_test_lyrics(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SPANISH_LYRICS)
}

/// Fixture translation generator: maps the Spanish fixture to its English
/// counterpart and echoes anything else
fn fixture_response(request: &TranslationRequest) -> String {
    if request.text.trim() == SPANISH_LYRICS {
        ENGLISH_LYRICS.to_string()
    } else {
        request.text.clone()
    }
}

/// Mock provider that translates the fixture lyrics like a real translator
pub fn fixture_provider() -> MockProvider {
    MockProvider::working().with_custom_response(fixture_response)
}
