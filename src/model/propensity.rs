use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::residue::Conformation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Helix,
    Strand,
    Hydrophobicity,
}

impl From<Conformation> for Scale {
    fn from(value: Conformation) -> Self {
        match value {
            Conformation::Helix => Scale::Helix,
            Conformation::Strand => Scale::Strand,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropensityTable {
    pub values: BTreeMap<char, f64>,
    pub default: f64,
}

impl PropensityTable {
    pub fn from_pairs(pairs: &[(char, f64)], default: f64) -> Self {
        Self {
            values: pairs.iter().copied().collect(),
            default,
        }
    }

    #[inline]
    pub fn get(&self, residue: char) -> f64 {
        self.values.get(&residue).copied().unwrap_or(self.default)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropensityTables {
    pub name: String,
    pub helix: PropensityTable,
    pub strand: PropensityTable,
    pub hydrophobicity: PropensityTable,
}

pub const NEUTRAL_PROPENSITY: f64 = 1.0;
pub const HYDROPHOBICITY_DEFAULT: f64 = 0.0;

const HYDROPHOBICITY: &[(char, f64)] = &[
    ('G', 0.00),
    ('Q', 0.00),
    ('S', 0.07),
    ('T', 0.07),
    ('N', 0.09),
    ('D', 0.66),
    ('E', 0.67),
    ('R', 0.85),
    ('A', 0.87),
    ('H', 0.87),
    ('C', 1.52),
    ('K', 1.64),
    ('M', 1.67),
    ('V', 1.87),
    ('L', 2.17),
    ('Y', 2.76),
    ('P', 2.77),
    ('F', 2.87),
    ('I', 3.15),
    ('W', 3.77),
];

impl PropensityTables {
    pub fn chou_fasman_v1() -> Self {
        let helix = [
            ('A', 1.42),
            ('R', 0.98),
            ('N', 0.67),
            ('D', 1.01),
            ('C', 0.70),
            ('Q', 1.11),
            ('E', 1.51),
            ('G', 0.57),
            ('H', 1.00),
            ('I', 1.08),
            ('L', 1.21),
            ('K', 1.16),
            ('M', 1.45),
            ('F', 1.13),
            ('P', 0.57),
            ('S', 0.77),
            ('T', 0.83),
            ('W', 1.08),
            ('Y', 0.69),
            ('V', 1.06),
            ('X', 1.00),
        ];
        let strand = [
            ('A', 0.83),
            ('R', 0.93),
            ('N', 0.89),
            ('D', 0.54),
            ('C', 1.19),
            ('Q', 1.10),
            ('E', 0.37),
            ('G', 0.75),
            ('H', 0.87),
            ('I', 1.60),
            ('L', 1.30),
            ('K', 0.74),
            ('M', 1.05),
            ('F', 1.38),
            ('P', 0.55),
            ('S', 0.75),
            ('T', 1.19),
            ('W', 1.37),
            ('Y', 1.47),
            ('V', 1.70),
            ('X', 1.00),
        ];
        Self {
            name: "chou_fasman_v1".to_string(),
            helix: PropensityTable::from_pairs(&helix, NEUTRAL_PROPENSITY),
            strand: PropensityTable::from_pairs(&strand, NEUTRAL_PROPENSITY),
            hydrophobicity: PropensityTable::from_pairs(HYDROPHOBICITY, HYDROPHOBICITY_DEFAULT),
        }
    }

    pub fn jiang_alpha_beta_v1() -> Self {
        // (residue, helix, strand)
        let pairs = [
            ('A', 1.02, 0.83),
            ('R', 0.98, 0.93),
            ('N', 0.67, 0.89),
            ('D', 1.01, 0.54),
            ('C', 0.70, 1.19),
            ('E', 1.51, 0.37),
            ('Q', 1.11, 1.10),
            ('G', 0.57, 0.75),
            ('H', 1.00, 0.87),
            ('I', 1.08, 1.60),
            ('L', 1.21, 1.30),
            ('K', 1.16, 0.74),
            ('M', 1.45, 1.05),
            ('F', 1.13, 1.38),
            ('P', 0.57, 0.55),
            ('S', 0.77, 0.75),
            ('T', 0.83, 1.19),
            ('W', 1.08, 1.37),
            ('Y', 0.69, 1.47),
            ('V', 1.06, 1.70),
        ];
        let helix: Vec<(char, f64)> = pairs.iter().map(|&(r, h, _)| (r, h)).collect();
        let strand: Vec<(char, f64)> = pairs.iter().map(|&(r, _, e)| (r, e)).collect();
        Self {
            name: "jiang_alpha_beta_v1".to_string(),
            helix: PropensityTable::from_pairs(&helix, NEUTRAL_PROPENSITY),
            strand: PropensityTable::from_pairs(&strand, NEUTRAL_PROPENSITY),
            hydrophobicity: PropensityTable::from_pairs(HYDROPHOBICITY, HYDROPHOBICITY_DEFAULT),
        }
    }

    pub fn table(&self, scale: Scale) -> &PropensityTable {
        match scale {
            Scale::Helix => &self.helix,
            Scale::Strand => &self.strand,
            Scale::Hydrophobicity => &self.hydrophobicity,
        }
    }

    pub fn score(&self, residue: char, scale: Scale) -> f64 {
        self.table(scale).get(residue)
    }
}
