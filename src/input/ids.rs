use std::path::Path;

use crate::input::InputError;
use crate::input::reader::read_lines;

pub fn parse_ids(path: &Path) -> Result<Vec<String>, InputError> {
    let ids: Vec<String> = read_lines(path)?
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    if ids.is_empty() {
        return Err(InputError::Parse(format!(
            "id list {} is empty",
            path.display()
        )));
    }

    Ok(ids)
}
