use std::path::Path;

use crate::input::reader::read_lines;
use crate::input::{InputError, Sequence, normalize_sequence};

/// Reads the first record of a FASTA file, or a bare sequence file when no
/// header is present. Sequence lines are concatenated.
pub fn parse_sequence_file(path: &Path) -> Result<Sequence, InputError> {
    let lines = read_lines(path)?;
    let mut raw = String::new();
    let mut seen_header = false;
    let mut in_record = false;

    for line in &lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }
        if line.starts_with('>') {
            if in_record {
                // only the first record is used
                tracing::warn!(
                    "{} holds more than one FASTA record; using the first",
                    path.display()
                );
                break;
            }
            seen_header = true;
            continue;
        }
        in_record = true;
        raw.push_str(line);
    }

    if raw.is_empty() {
        let what = if seen_header {
            "no sequence line in FASTA"
        } else {
            "empty sequence file"
        };
        return Err(InputError::InvalidInput(format!(
            "{what}: {}",
            path.display()
        )));
    }

    normalize_sequence(&raw)
}
