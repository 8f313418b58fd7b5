//! Genetic reference data.
//!
//! This module provides:
//! - DNA and RNA base alphabets
//! - The transcription pairing rule (DNA template -> mRNA)
//! - The standard codon table (64 entries) and amino acid descriptors
//! - The deduplicated amino acid palette used for answer buttons

use std::fmt;

use thiserror::Error;

/// A base of the DNA alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DnaBase {
    A,
    T,
    G,
    C,
}

/// A base of the RNA alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RnaBase {
    A,
    U,
    G,
    C,
}

/// Error for characters outside the expected alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseBaseError {
    #[error("not a DNA base: {0:?}")]
    Dna(char),
    #[error("not an RNA base: {0:?}")]
    Rna(char),
}

impl DnaBase {
    /// All four DNA bases, in alphabet order.
    pub const ALL: [DnaBase; 4] = [DnaBase::A, DnaBase::T, DnaBase::G, DnaBase::C];

    /// The mRNA base that pairs with this template base during transcription.
    ///
    /// The rule is total: A->U, T->A, G->C, C->G.
    pub fn transcribes_to(self) -> RnaBase {
        match self {
            DnaBase::A => RnaBase::U,
            DnaBase::T => RnaBase::A,
            DnaBase::G => RnaBase::C,
            DnaBase::C => RnaBase::G,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            DnaBase::A => 'A',
            DnaBase::T => 'T',
            DnaBase::G => 'G',
            DnaBase::C => 'C',
        }
    }
}

impl RnaBase {
    /// All four RNA bases, in alphabet order.
    pub const ALL: [RnaBase; 4] = [RnaBase::A, RnaBase::U, RnaBase::G, RnaBase::C];

    pub fn as_char(self) -> char {
        match self {
            RnaBase::A => 'A',
            RnaBase::U => 'U',
            RnaBase::G => 'G',
            RnaBase::C => 'C',
        }
    }

    /// Base-4 digit used to index the codon table (A=0, C=1, G=2, U=3).
    fn index(self) -> usize {
        match self {
            RnaBase::A => 0,
            RnaBase::C => 1,
            RnaBase::G => 2,
            RnaBase::U => 3,
        }
    }
}

impl TryFrom<char> for DnaBase {
    type Error = ParseBaseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(DnaBase::A),
            'T' => Ok(DnaBase::T),
            'G' => Ok(DnaBase::G),
            'C' => Ok(DnaBase::C),
            other => Err(ParseBaseError::Dna(other)),
        }
    }
}

impl TryFrom<char> for RnaBase {
    type Error = ParseBaseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(RnaBase::A),
            'U' => Ok(RnaBase::U),
            'G' => Ok(RnaBase::G),
            'C' => Ok(RnaBase::C),
            other => Err(ParseBaseError::Rna(other)),
        }
    }
}

impl fmt::Display for DnaBase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl fmt::Display for RnaBase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Fixed 5' flank of every generated template. Transcribes to the AUG start codon.
pub const START_TEMPLATE: [DnaBase; 3] = [DnaBase::T, DnaBase::A, DnaBase::C];

/// Fixed 3' flank of every generated template. Transcribes to the UGA stop codon.
pub const STOP_TEMPLATE: [DnaBase; 3] = [DnaBase::A, DnaBase::C, DnaBase::T];

/// Display grouping for amino acids, used to color the answer palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResidueClass {
    Hydrophobic,
    Polar,
    Basic,
    Acidic,
    Stop,
}

/// An amino acid (or stop signal) as presented to the learner.
#[derive(Debug, PartialEq, Eq)]
pub struct AminoAcid {
    /// Three-letter code shown on palette buttons ("STOP" for stop signals).
    pub code: &'static str,
    /// Full name shown in the protein chain.
    pub name: &'static str,
    /// Display grouping.
    pub class: ResidueClass,
}

impl AminoAcid {
    /// True for the three stop signals (UAA, UAG, UGA).
    pub fn is_stop(&self) -> bool {
        self.code == "STOP"
    }

    /// True for the start-marked methionine entry (AUG).
    pub fn is_start(&self) -> bool {
        self.code == "Met"
    }
}

static ALA: AminoAcid = AminoAcid { code: "Ala", name: "Alanine", class: ResidueClass::Hydrophobic };
static ARG: AminoAcid = AminoAcid { code: "Arg", name: "Arginine", class: ResidueClass::Basic };
static ASN: AminoAcid = AminoAcid { code: "Asn", name: "Asparagine", class: ResidueClass::Polar };
static ASP: AminoAcid = AminoAcid { code: "Asp", name: "Aspartic acid", class: ResidueClass::Acidic };
static CYS: AminoAcid = AminoAcid { code: "Cys", name: "Cysteine", class: ResidueClass::Polar };
static GLN: AminoAcid = AminoAcid { code: "Gln", name: "Glutamine", class: ResidueClass::Polar };
static GLU: AminoAcid = AminoAcid { code: "Glu", name: "Glutamic acid", class: ResidueClass::Acidic };
static GLY: AminoAcid = AminoAcid { code: "Gly", name: "Glycine", class: ResidueClass::Polar };
static HIS: AminoAcid = AminoAcid { code: "His", name: "Histidine", class: ResidueClass::Basic };
static ILE: AminoAcid = AminoAcid { code: "Ile", name: "Isoleucine", class: ResidueClass::Hydrophobic };
static LEU: AminoAcid = AminoAcid { code: "Leu", name: "Leucine", class: ResidueClass::Hydrophobic };
static LYS: AminoAcid = AminoAcid { code: "Lys", name: "Lysine", class: ResidueClass::Basic };
static MET: AminoAcid = AminoAcid { code: "Met", name: "Methionine (start)", class: ResidueClass::Hydrophobic };
static PHE: AminoAcid = AminoAcid { code: "Phe", name: "Phenylalanine", class: ResidueClass::Hydrophobic };
static PRO: AminoAcid = AminoAcid { code: "Pro", name: "Proline", class: ResidueClass::Hydrophobic };
static SER: AminoAcid = AminoAcid { code: "Ser", name: "Serine", class: ResidueClass::Polar };
static THR: AminoAcid = AminoAcid { code: "Thr", name: "Threonine", class: ResidueClass::Polar };
static TRP: AminoAcid = AminoAcid { code: "Trp", name: "Tryptophan", class: ResidueClass::Hydrophobic };
static TYR: AminoAcid = AminoAcid { code: "Tyr", name: "Tyrosine", class: ResidueClass::Polar };
static VAL: AminoAcid = AminoAcid { code: "Val", name: "Valine", class: ResidueClass::Hydrophobic };
static STOP: AminoAcid = AminoAcid { code: "STOP", name: "Stop codon", class: ResidueClass::Stop };

/// The standard genetic code, indexed base-4 by (first, second, third) base
/// with A=0, C=1, G=2, U=3.
static CODON_TABLE: [&AminoAcid; 64] = [
    &LYS,  // AAA
    &ASN,  // AAC
    &LYS,  // AAG
    &ASN,  // AAU
    &THR,  // ACA
    &THR,  // ACC
    &THR,  // ACG
    &THR,  // ACU
    &ARG,  // AGA
    &SER,  // AGC
    &ARG,  // AGG
    &SER,  // AGU
    &ILE,  // AUA
    &ILE,  // AUC
    &MET,  // AUG
    &ILE,  // AUU
    &GLN,  // CAA
    &HIS,  // CAC
    &GLN,  // CAG
    &HIS,  // CAU
    &PRO,  // CCA
    &PRO,  // CCC
    &PRO,  // CCG
    &PRO,  // CCU
    &ARG,  // CGA
    &ARG,  // CGC
    &ARG,  // CGG
    &ARG,  // CGU
    &LEU,  // CUA
    &LEU,  // CUC
    &LEU,  // CUG
    &LEU,  // CUU
    &GLU,  // GAA
    &ASP,  // GAC
    &GLU,  // GAG
    &ASP,  // GAU
    &ALA,  // GCA
    &ALA,  // GCC
    &ALA,  // GCG
    &ALA,  // GCU
    &GLY,  // GGA
    &GLY,  // GGC
    &GLY,  // GGG
    &GLY,  // GGU
    &VAL,  // GUA
    &VAL,  // GUC
    &VAL,  // GUG
    &VAL,  // GUU
    &STOP, // UAA
    &TYR,  // UAC
    &STOP, // UAG
    &TYR,  // UAU
    &SER,  // UCA
    &SER,  // UCC
    &SER,  // UCG
    &SER,  // UCU
    &STOP, // UGA
    &CYS,  // UGC
    &TRP,  // UGG
    &CYS,  // UGU
    &LEU,  // UUA
    &PHE,  // UUC
    &LEU,  // UUG
    &PHE,  // UUU
];

/// An ordered triple of RNA bases.
///
/// Every value maps to exactly one codon table entry, so the lookup is
/// infallible by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codon(pub [RnaBase; 3]);

impl Codon {
    pub fn new(first: RnaBase, second: RnaBase, third: RnaBase) -> Self {
        Codon([first, second, third])
    }

    /// Looks up the amino acid (or stop marker) this codon codes for.
    pub fn amino_acid(self) -> &'static AminoAcid {
        let [b1, b2, b3] = self.0;
        CODON_TABLE[b1.index() * 16 + b2.index() * 4 + b3.index()]
    }

    pub fn bases(self) -> [RnaBase; 3] {
        self.0
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [b1, b2, b3] = self.0;
        write!(f, "{}{}{}", b1, b2, b3)
    }
}

/// Iterates all 64 codons in table order.
pub fn all_codons() -> impl Iterator<Item = Codon> {
    RnaBase::ALL.into_iter().flat_map(|b1| {
        RnaBase::ALL
            .into_iter()
            .flat_map(move |b2| RnaBase::ALL.into_iter().map(move |b3| Codon::new(b1, b2, b3)))
    })
}

/// Distinct amino acid entries across the codon table, sorted by code.
///
/// Synonymous codons collapse to one entry; the result populates the fixed
/// answer palette shown during translation (21 entries).
pub fn amino_palette() -> Vec<&'static AminoAcid> {
    let mut palette: Vec<&'static AminoAcid> = Vec::new();
    for entry in CODON_TABLE {
        if !palette.iter().any(|a| a.code == entry.code) {
            palette.push(entry);
        }
    }
    palette.sort_by(|a, b| a.code.cmp(b.code));
    palette
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairing_rule() {
        assert_eq!(DnaBase::A.transcribes_to(), RnaBase::U);
        assert_eq!(DnaBase::T.transcribes_to(), RnaBase::A);
        assert_eq!(DnaBase::G.transcribes_to(), RnaBase::C);
        assert_eq!(DnaBase::C.transcribes_to(), RnaBase::G);
    }

    #[test]
    fn test_base_parsing() {
        assert_eq!(DnaBase::try_from('t'), Ok(DnaBase::T));
        assert_eq!(RnaBase::try_from('u'), Ok(RnaBase::U));
        assert_eq!(DnaBase::try_from('U'), Err(ParseBaseError::Dna('U')));
        assert_eq!(RnaBase::try_from('T'), Err(ParseBaseError::Rna('T')));
        assert_eq!(RnaBase::try_from('x'), Err(ParseBaseError::Rna('X')));
    }

    #[test]
    fn test_start_and_stop_codons() {
        let aug = Codon::new(RnaBase::A, RnaBase::U, RnaBase::G).amino_acid();
        assert_eq!(aug.code, "Met");
        assert!(aug.is_start());

        for codon in ["UAA", "UAG", "UGA"] {
            let mut chars = codon.chars().map(|c| RnaBase::try_from(c).unwrap());
            let codon = Codon::new(
                chars.next().unwrap(),
                chars.next().unwrap(),
                chars.next().unwrap(),
            );
            assert!(codon.amino_acid().is_stop(), "{} should be a stop", codon);
        }
    }

    #[test]
    fn test_common_codons() {
        assert_eq!(Codon::new(RnaBase::U, RnaBase::U, RnaBase::U).amino_acid().code, "Phe");
        assert_eq!(Codon::new(RnaBase::G, RnaBase::G, RnaBase::G).amino_acid().code, "Gly");
        assert_eq!(Codon::new(RnaBase::C, RnaBase::C, RnaBase::U).amino_acid().code, "Pro");
        assert_eq!(Codon::new(RnaBase::U, RnaBase::G, RnaBase::G).amino_acid().code, "Trp");
    }

    #[test]
    fn test_table_is_total_with_three_stops() {
        let mut count = 0;
        let mut stops = 0;
        for codon in all_codons() {
            count += 1;
            if codon.amino_acid().is_stop() {
                stops += 1;
            }
        }
        assert_eq!(count, 64);
        assert_eq!(stops, 3);
    }

    #[test]
    fn test_palette_is_sorted_and_unique() {
        let palette = amino_palette();
        assert_eq!(palette.len(), 21); // 20 amino acids + STOP

        for pair in palette.windows(2) {
            assert!(pair[0].code < pair[1].code);
        }
        assert!(palette.iter().any(|a| a.code == "STOP"));
        assert!(palette.iter().any(|a| a.is_start()));
    }

    #[test]
    fn test_template_flanks() {
        let start: Vec<RnaBase> = START_TEMPLATE.iter().map(|b| b.transcribes_to()).collect();
        assert_eq!(start, [RnaBase::A, RnaBase::U, RnaBase::G]);

        let stop: Vec<RnaBase> = STOP_TEMPLATE.iter().map(|b| b.transcribes_to()).collect();
        assert_eq!(stop, [RnaBase::U, RnaBase::G, RnaBase::A]);
    }

    #[test]
    fn test_codon_display() {
        let codon = Codon::new(RnaBase::A, RnaBase::U, RnaBase::G);
        assert_eq!(codon.to_string(), "AUG");
    }
}
