use std::fmt;

use thiserror::Error;

/// Number of offending characters shown in an error message
pub const MAX_REPORTED_INVALID: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Expected {expected} {location} but observed: {observed}")]
pub struct ParseError {
    expected: &'static str,
    observed: String,
    location: Location,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Location {
    Unknown,
    Item { type_: &'static str, index: usize },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Unknown => write!(f, "at unknown location"),
            Location::Item { type_, index } => {
                write!(f, "for item of type {} at index {}", type_, index)
            }
        }
    }
}

impl ParseError {
    pub fn somewhere(expected: &'static str, observed: String) -> Self {
        Self {
            expected,
            observed,
            location: Location::Unknown,
        }
    }

    pub fn item(
        type_: &'static str,
        index: usize,
        expected: &'static str,
        observed: String,
    ) -> Self {
        let location = Location::Item { type_, index };
        Self {
            observed,
            expected,
            location,
        }
    }
}

/// Reasons why a sequence cannot be translated
///
/// Both are user-correctable. A trailing partial codon is not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslationError {
    #[error("Please enter a DNA sequence first.")]
    EmptyInput,
    /// Distinct offending characters in order of first appearance
    #[error("Invalid characters found: \"{}\"", abbreviate(.0))]
    InvalidCharacters(String),
}

fn abbreviate(chars: &str) -> String {
    let mut shown: String = chars.chars().take(MAX_REPORTED_INVALID).collect();
    if chars.chars().count() > MAX_REPORTED_INVALID {
        shown.push_str("...");
    }
    shown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_error_messages() {
        assert_eq!(
            TranslationError::EmptyInput.to_string(),
            "Please enter a DNA sequence first."
        );
        assert_eq!(
            TranslationError::InvalidCharacters("X".to_string()).to_string(),
            "Invalid characters found: \"X\""
        );
        assert_eq!(
            TranslationError::InvalidCharacters("XYZUN-1".to_string()).to_string(),
            "Invalid characters found: \"XYZUN...\""
        );
    }

    #[test]
    fn test_parse_error_message() {
        let err = ParseError::somewhere("codon of length 3", "AC".to_string());
        assert_eq!(
            err.to_string(),
            "Expected codon of length 3 at unknown location but observed: AC"
        );
    }
}
