use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod dssp;
pub mod fasta;
pub mod ids;
pub mod pssm;
pub mod reader;
pub mod sequence;

pub use sequence::{Sequence, normalize_sequence};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

pub fn require_dir(path: &Path) -> Result<(), InputError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(InputError::MissingInput(format!(
            "{} does not exist or is not a directory",
            path.display()
        )))
    }
}

/// Loads a JSON configuration object (propensity tables, threshold overrides).
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let reader = reader::open_maybe_gz(path)?;
    serde_json::from_reader(reader)
        .map_err(|e| InputError::Parse(format!("{}: {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
