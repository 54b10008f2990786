use std::path::Path;

use crate::input::reader::read_lines;
use crate::input::{InputError, Sequence, normalize_sequence};
use crate::model::profile::Profile;
use crate::model::residue::AA_COUNT;

const HEADER_LINES: usize = 3;
const TRAILER_LINES: usize = 6;
const MIN_FIELDS: usize = 24;
const PERCENT_FIRST_FIELD: usize = 22;

/// Parses an ASCII PSI-BLAST PSSM into a per-position probability profile
/// built from the weighted observed percentage columns. Columns come out in
/// canonical `ARNDCQEGHILKMFPSTWYV` order.
pub fn parse_pssm(path: &Path) -> Result<Profile, InputError> {
    parse_pssm_record(path).map(|(profile, _)| profile)
}

/// Profile plus the query residues from the second column of each data line.
pub fn parse_pssm_record(path: &Path) -> Result<(Profile, Sequence), InputError> {
    let lines = read_lines(path)?;
    if lines.len() <= HEADER_LINES + TRAILER_LINES {
        return Ok((Profile::default(), Sequence::default()));
    }

    let body = &lines[HEADER_LINES..lines.len() - TRAILER_LINES];
    let mut rows = Vec::with_capacity(body.len());
    let mut residues = String::with_capacity(body.len());
    for (offset, line) in body.iter().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            continue;
        }
        let cols = &fields[PERCENT_FIRST_FIELD..fields.len() - 2];
        if cols.len() != AA_COUNT {
            return Err(InputError::Parse(format!(
                "{} line {}: expected {} percentage columns, found {}",
                path.display(),
                offset + HEADER_LINES + 1,
                AA_COUNT,
                cols.len()
            )));
        }
        if fields[1].len() != 1 {
            return Err(InputError::Parse(format!(
                "{} line {}: expected a single residue code, found {:?}",
                path.display(),
                offset + HEADER_LINES + 1,
                fields[1]
            )));
        }
        let mut row = Vec::with_capacity(AA_COUNT);
        for raw in cols {
            let value: f64 = raw.parse().map_err(|_| {
                InputError::Parse(format!(
                    "{} line {}: invalid percentage {raw:?}",
                    path.display(),
                    offset + HEADER_LINES + 1
                ))
            })?;
            row.push(value / 100.0);
        }
        rows.push(row);
        residues.push_str(fields[1]);
    }

    Ok((Profile::from_rows(rows)?, normalize_sequence(&residues)?))
}
