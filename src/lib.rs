mod amino_acid;
pub mod error;
mod nucleotide;
mod reading_frame;

use std::convert::TryFrom;
use std::fmt;

use serde::Serialize;

pub use crate::amino_acid::{lookup, translate_codon, AminoAcid, STOP_SYMBOL};
pub use crate::error::{ParseError, TranslationError};
pub use crate::nucleotide::{Codon, Nucleotide};
pub use crate::reading_frame::ReadingFrame;

/// Byte order mark, also known as zero width no-break space
const BYTE_ORDER_MARK: char = '\u{FEFF}';

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == BYTE_ORDER_MARK
}

/// Strip all whitespace (and byte order marks) and uppercase everything else
///
/// Never fails. Applying it twice gives the same result as applying it once.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !is_separator(*c))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Classify a (raw or normalized) sequence for status display
pub fn classify(sequence: &str) -> ValidationResult {
    let sequence = normalize(sequence);
    if sequence.is_empty() {
        return ValidationResult::Empty;
    }
    match parse_nucleotides(&sequence) {
        Err(offenders) => ValidationResult::InvalidCharacters(offenders),
        Ok(nucleotides) if nucleotides.len() % 3 != 0 => ValidationResult::PartialCodon,
        Ok(_) => ValidationResult::Valid,
    }
}

/// Translate a (raw or normalized) DNA sequence into a protein sequence
///
/// The sequence is read in the first reading frame. Every complete codon
/// yields exactly one symbol, stop codons included (as `*`), so translation
/// continues past a stop codon. One or two trailing bases are dropped.
pub fn translate(sequence: &str) -> Result<String, TranslationError> {
    let sequence = normalize(sequence);
    if sequence.is_empty() {
        return Err(TranslationError::EmptyInput);
    }
    let nucleotides =
        parse_nucleotides(&sequence).map_err(TranslationError::InvalidCharacters)?;
    Ok(ReadingFrame::new(&nucleotides)
        .into_iter()
        .map(|codon| lookup(codon).symbol())
        .collect())
}

/// Everything a live status display needs to know about the current input
pub fn summarize(raw: &str) -> InputSummary {
    let status = classify(raw);
    InputSummary {
        nucleotides: normalize(raw).chars().count(),
        message: status.message(),
        status,
    }
}

/// Parse the whole sequence, or collect the distinct characters that are not
/// nucleotides in order of first appearance
fn parse_nucleotides(sequence: &str) -> Result<Vec<Nucleotide>, String> {
    let mut result = Vec::with_capacity(sequence.len());
    let mut offenders = String::new();
    for c in sequence.chars() {
        match Nucleotide::try_from(c) {
            Ok(nuc) => result.push(nuc),
            Err(_) => {
                if !offenders.contains(c) {
                    offenders.push(c)
                }
            }
        }
    }
    if offenders.is_empty() {
        Ok(result)
    } else {
        Err(offenders)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "chars", rename_all = "snake_case")]
pub enum ValidationResult {
    Empty,
    /// Distinct offending characters in order of first appearance
    InvalidCharacters(String),
    /// Valid nucleotides, but the length is not a multiple of 3
    PartialCodon,
    Valid,
}

impl ValidationResult {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Empty => "Ready",
            Self::InvalidCharacters(_) => "Invalid DNA Characters",
            Self::PartialCodon => "Partial Codon (Not multiple of 3)",
            Self::Valid => "Valid Sequence",
        }
    }

    /// `false` for states that should be highlighted to the user
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Empty | Self::Valid)
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputSummary {
    pub nucleotides: usize,
    pub message: &'static str,
    pub status: ValidationResult,
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dna_with_whitespace() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![
                Just('A'),
                Just('C'),
                Just('G'),
                Just('T'),
                Just('a'),
                Just('c'),
                Just('g'),
                Just('t'),
                Just(' '),
                Just('\n'),
                Just('\t'),
            ],
            0..200,
        )
        .prop_map(|v| v.into_iter().collect())
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in any::<String>()) {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn valid_iff_complete_codons(s in dna_with_whitespace()) {
            let len = normalize(&s).len();
            let is_valid = classify(&s) == ValidationResult::Valid;
            prop_assert_eq!(is_valid, len > 0 && len % 3 == 0);
        }

        #[test]
        fn one_symbol_per_codon(s in dna_with_whitespace()) {
            let len = normalize(&s).len();
            match translate(&s) {
                Ok(protein) => prop_assert_eq!(protein.chars().count(), len / 3),
                Err(e) => {
                    prop_assert_eq!(len, 0);
                    prop_assert_eq!(e, TranslationError::EmptyInput);
                }
            }
        }
    }
}
