use std::path::Path;

use crate::input::InputError;
use crate::input::reader::read_lines;
use crate::model::residue::SecondaryClass;

const TABLE_HEADER: &str = "  #  RESIDUE AA STRUCTURE";
const STRUCTURE_COLUMN: usize = 16;

/// Reads per-residue labels reduced to H/E/C. Accepts either a classic DSSP
/// file (structure column of the residue table) or a two-line label record
/// whose second line is the structure string.
pub fn parse_labels(path: &Path) -> Result<Vec<SecondaryClass>, InputError> {
    let lines = read_lines(path)?;
    if lines.iter().any(|l| l.starts_with(TABLE_HEADER)) {
        return Ok(labels_from_table(&lines));
    }

    if lines.is_empty() {
        return Err(InputError::Parse(format!(
            "label file {} is empty",
            path.display()
        )));
    }
    let second = lines.get(1).map(|l| l.trim()).unwrap_or_default();
    Ok(second.chars().map(SecondaryClass::reduce_dssp).collect())
}

pub fn labels_from_table(lines: &[String]) -> Vec<SecondaryClass> {
    let mut out = Vec::new();
    let mut in_table = false;
    for line in lines {
        if !in_table {
            in_table = line.starts_with(TABLE_HEADER);
            continue;
        }
        let bytes = line.as_bytes();
        if bytes.len() <= STRUCTURE_COLUMN {
            continue;
        }
        out.push(SecondaryClass::reduce_dssp(bytes[STRUCTURE_COLUMN] as char));
    }
    out
}
