use std::convert::TryFrom;
use std::fmt;

use crate::error::ParseError;

const NUCLEOTIDES_STR: &str = "one of A, C, G or T";

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

impl Nucleotide {
    pub fn name(&self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }

    /// The base-4 digit of this nucleotide within a codon index
    fn digit(&self) -> usize {
        match self {
            Nucleotide::A => 0,
            Nucleotide::C => 1,
            Nucleotide::G => 2,
            Nucleotide::T => 3,
        }
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = ParseError;
    fn try_from(c: char) -> Result<Self, ParseError> {
        match c {
            'A' | 'a' => Ok(Self::A),
            'C' | 'c' => Ok(Self::C),
            'G' | 'g' => Ok(Self::G),
            'T' | 't' => Ok(Self::T),
            _ => Err(ParseError::somewhere(NUCLEOTIDES_STR, c.to_string())),
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Three consecutive nucleotides within a reading frame
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Codon(pub [Nucleotide; 3]);

impl Codon {
    pub fn new(first: Nucleotide, second: Nucleotide, third: Nucleotide) -> Self {
        Self([first, second, third])
    }

    pub fn parse(codon: &str) -> Result<Self, ParseError> {
        let mut bases = [Nucleotide::A; 3];
        let mut count = 0;
        for (i, c) in codon.chars().enumerate() {
            if i >= 3 {
                return Err(ParseError::somewhere("codon of length 3", codon.to_string()));
            }
            bases[i] = Nucleotide::try_from(c)
                .map_err(|_| ParseError::item("codon", i, NUCLEOTIDES_STR, c.to_string()))?;
            count += 1;
        }
        if count != 3 {
            return Err(ParseError::somewhere("codon of length 3", codon.to_string()));
        }
        Ok(Self(bases))
    }

    /// Position of this codon in the genetic code table (`0..64`)
    pub fn index(&self) -> usize {
        let mut index = 0;
        for nuc in &self.0 {
            index <<= 2; // times 4
            index += nuc.digit();
        }
        index
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for nuc in &self.0 {
            write!(f, "{}", nuc)?;
        }
        Ok(())
    }
}
