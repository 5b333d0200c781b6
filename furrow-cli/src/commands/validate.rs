//! Validate command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use furrow_core::{CursorConfig, RowCursor, DEFAULT_BUFFER_CAPACITY};

use crate::error::CliError;
use crate::input;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Input CSV file to validate, or "-" for stdin
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Scan buffer capacity in bytes (bounds the longest cell)
    #[arg(short, long, value_name = "BYTES")]
    pub buffer_size: Option<usize>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating CSV input: {}", self.input.display());

        let capacity = self.buffer_size.unwrap_or(DEFAULT_BUFFER_CAPACITY);
        let config = CursorConfig::builder().buffer_capacity(capacity).build()?;
        let reader = input::open_source(&self.input)?;
        let mut cursor = RowCursor::with_config(reader, config);

        let mut rows: u64 = 0;
        let mut cells: u64 = 0;
        let mut resumable = cursor.offset();
        while let Some(row) = cursor.next_row() {
            rows += 1;
            cells += row.len() as u64;
            resumable = cursor.offset();
        }

        match cursor.finish() {
            Ok(()) => {
                println!("✓ Input is valid CSV");
                println!("  Rows: {rows}");
                println!("  Cells: {cells}");
                Ok(())
            }
            Err(e) => {
                println!("✗ Input is not valid CSV");
                println!("  Error: {e}");
                println!("  Rows before the error: {rows}");
                println!("  Resumable offset: {resumable}");
                Err(CliError::ParseFailed(e.to_string()).into())
            }
        }
    }
}
