//! Output formatting for CLI display.
//!
//! Beers are rendered either as pretty JSON (colorized on a terminal) or as
//! CSV, and sent to stdout or to a file.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use colored_json::ColorMode;

use crate::error::{PunkError, Result};
use crate::models::Beer;

/// CSV header, one column per [`Beer`] field.
pub const CSV_HEADER: [&str; 6] = ["ProductID", "Name", "Tagline", "Description", "ABV", "IBU"];

/// Rendering format selected by `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl OutputFormat {
    /// Parse a `--format` value.
    ///
    /// Anything that is not `csv` renders as JSON; unknown formats are not
    /// an error.
    pub fn from_flag(value: &str) -> Self {
        if value.eq_ignore_ascii_case("csv") {
            OutputFormat::Csv
        } else {
            OutputFormat::Json
        }
    }
}

impl From<&str> for OutputFormat {
    fn from(value: &str) -> Self {
        Self::from_flag(value)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Where rendered output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
}

impl Sink {
    /// A non-empty path selects a file; anything else prints.
    pub fn from_output(path: Option<&Path>) -> Self {
        match path {
            Some(p) if !p.as_os_str().is_empty() => Sink::File(p.to_path_buf()),
            _ => Sink::Stdout,
        }
    }
}

/// Whether terminal JSON should be colorized.
pub fn stdout_supports_color() -> bool {
    io::stdout().is_terminal()
}

/// Render beers as a pretty-printed JSON array.
pub fn render_json(beers: &[Beer], colored: bool) -> Result<String> {
    if colored {
        Ok(colored_json::to_colored_json(&beers, ColorMode::On)?)
    } else {
        Ok(serde_json::to_string_pretty(beers)?)
    }
}

/// Render beers as CSV with a header row.
///
/// The header is written even when there are no beers.
pub fn render_csv(beers: &[Beer]) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(vec![]);

    wtr.write_record(CSV_HEADER)?;
    for beer in beers {
        wtr.serialize(beer)?;
    }

    let bytes = wtr.into_inner().map_err(|e| PunkError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| PunkError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Print beers to `out`.
pub fn print_beers<W: Write>(
    out: &mut W,
    beers: &[Beer],
    format: OutputFormat,
    colored: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", render_json(beers, colored)?)?,
        OutputFormat::Csv => write!(out, "{}", render_csv(beers)?)?,
    }
    out.flush()?;
    Ok(())
}

/// Write beers to `path`, replacing any existing file.
///
/// Files never contain color codes.
pub fn save_beers(beers: &[Beer], format: OutputFormat, path: &Path) -> Result<()> {
    let content = match format {
        OutputFormat::Json => render_json(beers, false)?,
        OutputFormat::Csv => render_csv(beers)?,
    };

    fs::write(path, content.as_bytes()).map_err(|source| PunkError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), count = beers.len(), %format, "saved beers");
    Ok(())
}

/// Send beers to the chosen sink.
pub fn emit<W: Write>(
    out: &mut W,
    beers: &[Beer],
    format: OutputFormat,
    sink: &Sink,
    colored: bool,
) -> Result<()> {
    match sink {
        Sink::Stdout => print_beers(out, beers, format, colored),
        Sink::File(path) => save_beers(beers, format, path),
    }
}
