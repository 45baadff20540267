use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Reads zero-based `row col` pairs, one per line.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn read_sites<R: BufRead>(reader: R) -> Result<Vec<(usize, usize)>> {
    let mut sites = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let invalid = || Error::InvalidSite {
            line: number + 1,
            content: line.clone(),
        };
        let mut fields = trimmed.split_whitespace().map(str::parse::<usize>);
        match (fields.next(), fields.next(), fields.next()) {
            (Some(Ok(row)), Some(Ok(col)), None) => sites.push((row, col)),
            _ => return Err(invalid()),
        }
    }

    Ok(sites)
}

pub fn read_sites_file<P: AsRef<Path>>(path: P) -> Result<Vec<(usize, usize)>> {
    let file = File::open(path)?;
    read_sites(BufReader::new(file))
}
