use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::gor::GorError;
use crate::input::reader::open_maybe_gz;
use crate::model::residue::{AA_COUNT, AA_ORDER, SecondaryClass, is_standard};
use crate::model::thresholds::GOR_MAX_WINDOW;

pub type Matrix = Vec<[f64; AA_COUNT]>;

/// Trained model: one `window_size x 20` matrix per class, row `r` holding
/// the amino-acid distribution at offset `r - (window_size - 1) / 2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GorModel {
    pub window_size: usize,
    pub aa_list: Vec<char>,
    #[serde(rename = "H")]
    pub helix: Matrix,
    #[serde(rename = "E")]
    pub strand: Matrix,
    #[serde(rename = "C")]
    pub coil: Matrix,
}

impl GorModel {
    /// All-zero model with canonical column order.
    pub fn empty(window_size: usize) -> Result<Self, GorError> {
        validate_window(window_size)?;
        Ok(Self {
            window_size,
            aa_list: AA_ORDER.to_vec(),
            helix: vec![[0.0; AA_COUNT]; window_size],
            strand: vec![[0.0; AA_COUNT]; window_size],
            coil: vec![[0.0; AA_COUNT]; window_size],
        })
    }

    pub fn half_window(&self) -> usize {
        (self.window_size - 1) / 2
    }

    pub fn matrix(&self, class: SecondaryClass) -> &Matrix {
        match class {
            SecondaryClass::Helix => &self.helix,
            SecondaryClass::Strand => &self.strand,
            SecondaryClass::Coil => &self.coil,
        }
    }

    pub fn matrix_mut(&mut self, class: SecondaryClass) -> &mut Matrix {
        match class {
            SecondaryClass::Helix => &mut self.helix,
            SecondaryClass::Strand => &mut self.strand,
            SecondaryClass::Coil => &mut self.coil,
        }
    }

    /// Divides every row by its sum. Rows with no weight stay all-zero.
    pub fn normalize_rows(&mut self) {
        for class in SecondaryClass::ALL {
            for row in self.matrix_mut(class).iter_mut() {
                let sum: f64 = row.iter().sum();
                if sum > 0.0 {
                    row.iter_mut().for_each(|v| *v /= sum);
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), GorError> {
        validate_window(self.window_size)
            .map_err(|_| GorError::InvalidModel(format!("window_size {}", self.window_size)))?;
        if self.aa_list.len() != AA_COUNT {
            return Err(GorError::InvalidModel(format!(
                "aa_list has {} codes, expected {}",
                self.aa_list.len(),
                AA_COUNT
            )));
        }
        for (i, &aa) in self.aa_list.iter().enumerate() {
            if !is_standard(aa) || self.aa_list[..i].contains(&aa) {
                return Err(GorError::InvalidModel(format!(
                    "aa_list entry {aa:?} is not a distinct standard residue"
                )));
            }
        }
        for class in SecondaryClass::ALL {
            let rows = self.matrix(class).len();
            if rows != self.window_size {
                return Err(GorError::InvalidModel(format!(
                    "{} matrix has {} rows, expected {}",
                    class.code(),
                    rows,
                    self.window_size
                )));
            }
        }
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<(), GorError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        let mut w = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut w, self)?;
        w.write_all(b"\n")?;
        w.flush()?;
        tracing::info!("GOR model saved to {}", path.display());
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, GorError> {
        let reader = open_maybe_gz(path)?;
        let model: GorModel = serde_json::from_reader(reader)?;
        model.validate()?;
        tracing::info!(
            "GOR model loaded from {} (window {})",
            path.display(),
            model.window_size
        );
        Ok(model)
    }
}

pub fn validate_window(window_size: usize) -> Result<(), GorError> {
    if window_size == 0 || window_size % 2 == 0 || window_size > GOR_MAX_WINDOW {
        return Err(GorError::InvalidWindow(window_size));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/gor/model.rs"]
mod tests;
