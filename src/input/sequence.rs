use crate::input::InputError;
use crate::model::residue::{UNKNOWN_RESIDUE, is_standard};

/// Normalized protein sequence: uppercase ASCII, no whitespace, every code
/// either one of the 20 standard residues or `X`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    residues: Vec<u8>,
}

impl Sequence {
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn residues(&self) -> &[u8] {
        &self.residues
    }

    pub fn residue(&self, i: usize) -> char {
        self.residues[i] as char
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII bytes are ever stored.
        std::str::from_utf8(&self.residues).unwrap_or_default()
    }
}

pub fn normalize_sequence(raw: &str) -> Result<Sequence, InputError> {
    let mut residues = Vec::with_capacity(raw.len());
    let mut substituted = 0usize;
    for (idx, ch) in raw.chars().enumerate() {
        if ch.is_whitespace() {
            continue;
        }
        if !ch.is_ascii_alphabetic() {
            return Err(InputError::InvalidInput(format!(
                "unexpected character {ch:?} at offset {idx} in sequence"
            )));
        }
        let upper = ch.to_ascii_uppercase();
        if is_standard(upper) {
            residues.push(upper as u8);
        } else {
            substituted += 1;
            residues.push(UNKNOWN_RESIDUE as u8);
        }
    }
    if substituted > 0 {
        tracing::warn!(
            "{} non-standard residue code(s) replaced with {}",
            substituted,
            UNKNOWN_RESIDUE
        );
    }
    Ok(Sequence { residues })
}
