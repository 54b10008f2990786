use crate::input::InputError;
use crate::input::Sequence;
use crate::model::residue::AA_COUNT;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Profile {
    rows: Vec<[f64; AA_COUNT]>,
}

impl Profile {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, InputError> {
        let mut fixed = Vec::with_capacity(rows.len());
        for (i, row) in rows.into_iter().enumerate() {
            let width = row.len();
            let arr: [f64; AA_COUNT] = row.try_into().map_err(|_| {
                InputError::InvalidInput(format!(
                    "profile row {i} has {width} columns, expected {AA_COUNT}"
                ))
            })?;
            fixed.push(arr);
        }
        Ok(Self { rows: fixed })
    }

    pub fn one_hot(sequence: &Sequence, aa_list: &[char]) -> Self {
        let rows = sequence
            .residues()
            .iter()
            .map(|&b| {
                let mut row = [0.0f64; AA_COUNT];
                if let Some(k) = aa_list.iter().position(|&aa| aa == b as char) {
                    if k < AA_COUNT {
                        row[k] = 1.0;
                    }
                }
                row
            })
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[[f64; AA_COUNT]] {
        &self.rows
    }

    pub fn total_mass(&self) -> f64 {
        self.rows.iter().flat_map(|row| row.iter()).sum()
    }

    pub fn reorder(&self, from: &[char], to: &[char]) -> Self {
        let mapping: Vec<Option<usize>> = to
            .iter()
            .map(|aa| from.iter().position(|f| f == aa).filter(|&k| k < AA_COUNT))
            .collect();
        let rows = self
            .rows
            .iter()
            .map(|src| {
                let mut row = [0.0f64; AA_COUNT];
                for (dst, m) in mapping.iter().enumerate().take(AA_COUNT) {
                    if let Some(k) = m {
                        row[dst] = src[*k];
                    }
                }
                row
            })
            .collect();
        Self { rows }
    }
}
