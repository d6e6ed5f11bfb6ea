use std::iter::{IntoIterator, Iterator};

use crate::nucleotide::{Codon, Nucleotide};

/// The first reading frame of a sequence: consecutive, non-overlapping
/// codons starting at offset 0
pub struct ReadingFrame<'a> {
    seq: &'a [Nucleotide],
    offset: usize,
}

impl<'a> ReadingFrame<'a> {
    pub fn new(seq: &'a [Nucleotide]) -> Self {
        Self { seq, offset: 0 }
    }

    /// Number of complete codons in the frame
    pub fn codon_count(&self) -> usize {
        self.seq.len() / 3
    }

    /// Trailing nucleotides that do not form a complete codon (0, 1 or 2)
    pub fn leftover(&self) -> usize {
        self.seq.len() % 3
    }
}

pub struct ReadingFrameIterator<'a> {
    frame: ReadingFrame<'a>,
}

impl<'a> IntoIterator for ReadingFrame<'a> {
    type Item = Codon;
    type IntoIter = ReadingFrameIterator<'a>;
    fn into_iter(self) -> Self::IntoIter {
        ReadingFrameIterator { frame: self }
    }
}

impl<'a> Iterator for ReadingFrameIterator<'a> {
    type Item = Codon;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = &mut self.frame;
        if frame.offset + 3 > frame.seq.len() {
            None // iterator exhausted, a partial codon is never returned
        } else {
            let s = &frame.seq[frame.offset..frame.offset + 3];
            frame.offset += 3;
            Some(Codon::new(s[0], s[1], s[2]))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.frame.seq.len() - self.frame.offset) / 3;
        (remaining, Some(remaining))
    }
}
