//! Custom-word share codes
//!
//! A custom answer travels as URL-safe base64 in the query string of a link,
//! so the word is not readable at a glance.

use crate::core::{Word, WordError};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use thiserror::Error;

/// Default site that share links point at
pub const DEFAULT_BASE_URL: &str = "https://wordle.example.com/";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("Custom word must be exactly 5 letters (a-z): {0}")]
    InvalidWord(#[from] WordError),
    #[error("Share code is not valid base64")]
    Undecodable,
    #[error("Share code does not hold text")]
    NotText,
}

/// Encode a custom word as a share code
///
/// # Errors
/// Returns `ShareError::InvalidWord` unless `word` is exactly 5 ASCII letters.
///
/// # Examples
/// ```
/// use wordle_tui::share::{decode, encode};
///
/// let code = encode("Plumb").unwrap();
/// assert_eq!(decode(&code).unwrap().to_string(), "plumb");
/// assert!(encode("toolong").is_err());
/// ```
pub fn encode(word: &str) -> Result<String, ShareError> {
    let word = Word::new(word.trim())?;
    Ok(URL_SAFE_NO_PAD.encode(word.to_string()))
}

/// Decode a share code back into a word
///
/// Accepts a bare code or a full link (everything after the last `?`).
///
/// # Errors
/// Returns an error if the code is not base64, not UTF-8, or not a 5-letter
/// word.
pub fn decode(code: &str) -> Result<Word, ShareError> {
    let code = code.trim();
    let code = code.rsplit_once('?').map_or(code, |(_, query)| query);
    let bytes = URL_SAFE_NO_PAD
        .decode(code.trim_end_matches('='))
        .map_err(|_| ShareError::Undecodable)?;
    let text = String::from_utf8(bytes).map_err(|_| ShareError::NotText)?;
    Ok(Word::new(&text)?)
}

/// Shareable link for a custom word
///
/// # Errors
/// Returns `ShareError::InvalidWord` unless `word` is exactly 5 ASCII letters.
pub fn link(base_url: &str, word: &str) -> Result<String, ShareError> {
    Ok(format!("{base_url}?{}", encode(word)?))
}
