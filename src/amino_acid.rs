use std::fmt;

use crate::nucleotide::Codon;

/// Symbol used for a stop codon in a translated protein
pub const STOP_SYMBOL: char = '*';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    Alanine,
    Arginine,
    Asparagine,
    AsparticAcid,
    Cysteine,
    GlutamicAcid,
    Glutamine,
    Glycine,
    Histidine,
    Isoleucine,
    Leucine,
    Lysine,
    Methionine,
    Phenylalanine,
    Proline,
    Serine,
    Threonine,
    Tryptophan,
    Tyrosine,
    Valine,
    Stop,
}

impl AminoAcid {
    /// One-letter IUPAC code. `Stop` is rendered as [`STOP_SYMBOL`].
    pub fn symbol(&self) -> char {
        match self {
            Self::Alanine => 'A',
            Self::Arginine => 'R',
            Self::Asparagine => 'N',
            Self::AsparticAcid => 'D',
            Self::Cysteine => 'C',
            Self::GlutamicAcid => 'E',
            Self::Glutamine => 'Q',
            Self::Glycine => 'G',
            Self::Histidine => 'H',
            Self::Isoleucine => 'I',
            Self::Leucine => 'L',
            Self::Lysine => 'K',
            Self::Methionine => 'M',
            Self::Phenylalanine => 'F',
            Self::Proline => 'P',
            Self::Serine => 'S',
            Self::Threonine => 'T',
            Self::Tryptophan => 'W',
            Self::Tyrosine => 'Y',
            Self::Valine => 'V',
            Self::Stop => STOP_SYMBOL,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Alanine => "Alanine",
            Self::Arginine => "Arginine",
            Self::Asparagine => "Asparagine",
            Self::AsparticAcid => "Aspartic acid",
            Self::Cysteine => "Cysteine",
            Self::GlutamicAcid => "Glutamic acid",
            Self::Glutamine => "Glutamine",
            Self::Glycine => "Glycine",
            Self::Histidine => "Histidine",
            Self::Isoleucine => "Isoleucine",
            Self::Leucine => "Leucine",
            Self::Lysine => "Lysine",
            Self::Methionine => "Methionine",
            Self::Phenylalanine => "Phenylalanine",
            Self::Proline => "Proline",
            Self::Serine => "Serine",
            Self::Threonine => "Threonine",
            Self::Tryptophan => "Tryptophan",
            Self::Tyrosine => "Tyrosine",
            Self::Valine => "Valine",
            Self::Stop => "Stop",
        }
    }

    pub fn is_stop(&self) -> bool {
        *self == Self::Stop
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// indexed by `Codon::index`, i.e. the codon read as a base-4 number with A=0, C=1, G=2, T=3
const GENETIC_CODE: [AminoAcid; 64] = [
    AminoAcid::Lysine,        //AAA
    AminoAcid::Asparagine,    //AAC
    AminoAcid::Lysine,        //AAG
    AminoAcid::Asparagine,    //AAT
    AminoAcid::Threonine,     //ACA
    AminoAcid::Threonine,     //ACC
    AminoAcid::Threonine,     //ACG
    AminoAcid::Threonine,     //ACT
    AminoAcid::Arginine,      //AGA
    AminoAcid::Serine,        //AGC
    AminoAcid::Arginine,      //AGG
    AminoAcid::Serine,        //AGT
    AminoAcid::Isoleucine,    //ATA
    AminoAcid::Isoleucine,    //ATC
    AminoAcid::Methionine,    //ATG
    AminoAcid::Isoleucine,    //ATT
    AminoAcid::Glutamine,     //CAA
    AminoAcid::Histidine,     //CAC
    AminoAcid::Glutamine,     //CAG
    AminoAcid::Histidine,     //CAT
    AminoAcid::Proline,       //CCA
    AminoAcid::Proline,       //CCC
    AminoAcid::Proline,       //CCG
    AminoAcid::Proline,       //CCT
    AminoAcid::Arginine,      //CGA
    AminoAcid::Arginine,      //CGC
    AminoAcid::Arginine,      //CGG
    AminoAcid::Arginine,      //CGT
    AminoAcid::Leucine,       //CTA
    AminoAcid::Leucine,       //CTC
    AminoAcid::Leucine,       //CTG
    AminoAcid::Leucine,       //CTT
    AminoAcid::GlutamicAcid,  //GAA
    AminoAcid::AsparticAcid,  //GAC
    AminoAcid::GlutamicAcid,  //GAG
    AminoAcid::AsparticAcid,  //GAT
    AminoAcid::Alanine,       //GCA
    AminoAcid::Alanine,       //GCC
    AminoAcid::Alanine,       //GCG
    AminoAcid::Alanine,       //GCT
    AminoAcid::Glycine,       //GGA
    AminoAcid::Glycine,       //GGC
    AminoAcid::Glycine,       //GGG
    AminoAcid::Glycine,       //GGT
    AminoAcid::Valine,        //GTA
    AminoAcid::Valine,        //GTC
    AminoAcid::Valine,        //GTG
    AminoAcid::Valine,        //GTT
    AminoAcid::Stop,          //TAA
    AminoAcid::Tyrosine,      //TAC
    AminoAcid::Stop,          //TAG
    AminoAcid::Tyrosine,      //TAT
    AminoAcid::Serine,        //TCA
    AminoAcid::Serine,        //TCC
    AminoAcid::Serine,        //TCG
    AminoAcid::Serine,        //TCT
    AminoAcid::Stop,          //TGA
    AminoAcid::Cysteine,      //TGC
    AminoAcid::Tryptophan,    //TGG
    AminoAcid::Cysteine,      //TGT
    AminoAcid::Leucine,       //TTA
    AminoAcid::Phenylalanine, //TTC
    AminoAcid::Leucine,       //TTG
    AminoAcid::Phenylalanine, //TTT
];

/// Look up a codon in the standard genetic code. Total over all 64 codons.
pub fn lookup(codon: Codon) -> AminoAcid {
    GENETIC_CODE[codon.index()]
}

/// Translate a single three-letter DNA codon (case-insensitive)
///
/// Returns `None` if `codon` is not exactly three of A, C, G and T.
pub fn translate_codon(codon: &str) -> Option<AminoAcid> {
    Codon::parse(codon).ok().map(lookup)
}
