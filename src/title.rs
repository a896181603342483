//! Title validation, normalization, and display casing.
//!
//! Queries are matched against the catalog by a case-folded lookup key;
//! display titles are re-derived from the stored lowercase form. The
//! character filter that the original front end applied before lookup is
//! enforced here at the query boundary instead.

use crate::error::ValidationError;

/// Validates a raw query title.
///
/// Only ASCII letters, digits, and spaces are accepted. The empty string
/// passes (it simply misses the catalog). Reports the first offending
/// character and its byte position.
pub fn validate_title(raw: &str) -> Result<(), ValidationError> {
    for (position, character) in raw.char_indices() {
        if !character.is_ascii_alphanumeric() && character != ' ' {
            return Err(ValidationError::disallowed_character(character, position));
        }
    }
    Ok(())
}

/// Produces the normalized lookup key for a title.
///
/// Case-folds to lowercase. No trimming, no punctuation stripping.
pub fn normalize_title(raw: &str) -> String {
    raw.to_lowercase()
}

/// Produces the display form of a stored title.
///
/// Uppercases every alphabetic character that follows a non-alphabetic
/// one and lowercases the rest, so `"the dark knight"` becomes
/// `"The Dark Knight"` and `"wall-e"` becomes `"Wall-E"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
