use crate::input::Sequence;
use crate::model::propensity::{PropensityTables, Scale};
use crate::model::region::Region;

#[derive(Debug, Clone, Copy)]
pub struct ResidueScorer<'a> {
    residues: &'a [u8],
    tables: &'a PropensityTables,
}

impl<'a> ResidueScorer<'a> {
    pub fn new(sequence: &'a Sequence, tables: &'a PropensityTables) -> Self {
        Self {
            residues: sequence.residues(),
            tables,
        }
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    #[inline]
    pub fn score_at(&self, pos: usize, scale: impl Into<Scale>) -> f64 {
        self.tables.score(self.residues[pos] as char, scale.into())
    }

    pub fn average_propensity(&self, region: Region, scale: impl Into<Scale>) -> f64 {
        if !region.is_valid_for(self.residues.len()) {
            return 0.0;
        }
        let scale = scale.into();
        let total: f64 = self.residues[region.start..region.end]
            .iter()
            .map(|&b| self.tables.score(b as char, scale))
            .sum();
        total / region.len() as f64
    }

    pub fn signal(&self, scale: Scale) -> Vec<f64> {
        self.residues
            .iter()
            .map(|&b| self.tables.score(b as char, scale))
            .collect()
    }
}
