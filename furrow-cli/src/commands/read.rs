//! Read command implementation

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use furrow_core::{CursorConfig, RowCursor};

use crate::config::CliConfig;
use crate::input;
use crate::output::{JsonFormatter, MarkdownFormatter, RowFormatter, TextFormatter};

/// Arguments for the read command
#[derive(Debug, Args)]
pub struct ReadArgs {
    /// Input CSV file, or "-" for stdin
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Resume from a previously saved checkpoint offset
    #[arg(short, long, value_name = "OFFSET")]
    pub resume: Option<u64>,

    /// Print the final checkpoint offset to stderr after reading
    #[arg(short = 'k', long)]
    pub checkpoint: bool,

    /// Stop after this many rows
    #[arg(short = 'n', long, value_name = "N")]
    pub max_rows: Option<u64>,

    /// Scan buffer capacity in bytes (bounds the longest cell)
    #[arg(short, long, value_name = "BYTES")]
    pub buffer_size: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One row per line, cells joined by tabs
    Text,
    /// JSON array of rows with offsets
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    fn formatter(self, writer: Box<dyn Write>, pretty: bool) -> Box<dyn RowFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

impl ReadArgs {
    /// Execute the read command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let capacity = self.buffer_size.unwrap_or(file_config.read.buffer_capacity);
        let cursor_config = CursorConfig::builder().buffer_capacity(capacity).build()?;

        log::info!("reading {}", self.input.display());
        if let Some(size) = input::source_size(&self.input) {
            log::debug!("input size: {size} bytes");
        }

        let reader = input::open_source(&self.input)?;
        let mut cursor = RowCursor::with_config(reader, cursor_config);
        if let Some(offset) = self.resume {
            cursor
                .skip_to(offset)
                .with_context(|| format!("failed to resume at offset {offset}"))?;
        }

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout().lock()),
        };
        let mut formatter = self.format.formatter(writer, file_config.output.pretty_json);

        let mut index = 0u64;
        while self.max_rows.map_or(true, |max| index < max) {
            let offset = cursor.offset();
            let Some(row) = cursor.next_row() else { break };
            formatter.format_row(index, offset, &row)?;
            index += 1;
        }
        formatter.finish()?;
        cursor.finish().context("input is not valid CSV")?;

        if self.checkpoint {
            eprintln!("checkpoint: {}", cursor.offset());
        }
        log::info!("done: {index} rows");
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
