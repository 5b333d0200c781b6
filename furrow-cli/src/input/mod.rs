//! Input source handling

use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::Result;

use crate::error::CliError;

/// Open an input path as a sequential reader, with `-` meaning stdin
pub fn open_source(path: &Path) -> Result<Box<dyn Read + Send>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(io::stdin()));
    }
    let file = File::open(path)
        .map_err(|e| CliError::InputNotFound(format!("{}: {e}", path.display())))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Input size in bytes, when the input is a regular file
pub fn source_size(path: &Path) -> Option<u64> {
    if path.as_os_str() == "-" {
        return None;
    }
    fs::metadata(path).ok().map(|m| m.len())
}
