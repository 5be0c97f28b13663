//! Pre-match alphabet check.
//!
//! A word can only ever match if every one of its symbols occurs as a
//! literal somewhere in the pattern, so mismatched inputs are rejected
//! before the engine runs.

use crate::error::MatchError;

/// Reject `word` if it uses any symbol that never appears as a literal in
/// `pattern`.
///
/// The pattern's literal set is every ASCII-alphanumeric character in it;
/// brackets, operators and the anchor are grammar, not alphabet.
pub fn validate(word: &[char], pattern: &str) -> Result<(), MatchError> {
    for &symbol in word {
        let known = pattern
            .chars()
            .any(|c| c.is_ascii_alphanumeric() && c == symbol);
        if !known {
            return Err(MatchError::InvalidAlphabet { symbol });
        }
    }
    Ok(())
}
