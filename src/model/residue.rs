use serde::{Deserialize, Serialize};

pub const AA_COUNT: usize = 20;

pub const AA_ORDER: [char; AA_COUNT] = [
    'A', 'R', 'N', 'D', 'C', 'Q', 'E', 'G', 'H', 'I', 'L', 'K', 'M', 'F', 'P', 'S', 'T', 'W', 'Y',
    'V',
];

pub const UNKNOWN_RESIDUE: char = 'X';

pub fn aa_index(code: char) -> Option<usize> {
    AA_ORDER.iter().position(|&aa| aa == code)
}

pub fn is_standard(code: char) -> bool {
    aa_index(code).is_some()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conformation {
    Helix,
    Strand,
}

impl Conformation {
    pub fn name(self) -> &'static str {
        match self {
            Conformation::Helix => "helix",
            Conformation::Strand => "strand",
        }
    }

    pub fn competitor(self) -> Conformation {
        match self {
            Conformation::Helix => Conformation::Strand,
            Conformation::Strand => Conformation::Helix,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryClass {
    Helix,
    Strand,
    Coil,
}

impl SecondaryClass {
    // Evaluation order; earlier classes win exact ties.
    pub const ALL: [SecondaryClass; 3] = [
        SecondaryClass::Helix,
        SecondaryClass::Strand,
        SecondaryClass::Coil,
    ];

    pub fn code(self) -> char {
        match self {
            SecondaryClass::Helix => 'H',
            SecondaryClass::Strand => 'E',
            SecondaryClass::Coil => 'C',
        }
    }

    pub fn reduce_dssp(code: char) -> Self {
        match code {
            'H' | 'G' | 'I' => SecondaryClass::Helix,
            'E' | 'B' => SecondaryClass::Strand,
            _ => SecondaryClass::Coil,
        }
    }
}

pub fn labels_to_string(labels: &[SecondaryClass]) -> String {
    labels.iter().map(|c| c.code()).collect()
}
